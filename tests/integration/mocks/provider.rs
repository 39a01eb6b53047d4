use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use githubtransfer::provider::Provider;

/// In-memory provider that answers with a fixed login and rejects the
/// repositories it was told to.
pub struct ScriptedProvider {
    login: Result<String, String>,
    rejected: HashSet<String>,
    reject_all: bool,
    pub transfers: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedProvider {
    pub fn authenticated_as(login: &str) -> Self {
        ScriptedProvider {
            login: Ok(login.to_string()),
            rejected: HashSet::new(),
            reject_all: false,
            transfers: Mutex::new(Vec::new()),
        }
    }

    pub fn unauthorized(message: &str) -> Self {
        ScriptedProvider {
            login: Err(message.to_string()),
            ..ScriptedProvider::authenticated_as("")
        }
    }

    pub fn rejecting(mut self, repository: &str) -> Self {
        self.rejected.insert(repository.to_string());
        self
    }

    pub fn rejecting_all(mut self) -> Self {
        self.reject_all = true;
        self
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.lock().unwrap().len()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn authenticated_login(&self) -> anyhow::Result<String> {
        self.login.clone().map_err(|message| anyhow!(message))
    }

    async fn transfer_repository(
        &self,
        owner: &str,
        repository: &str,
        new_owner: &str,
    ) -> anyhow::Result<()> {
        self.transfers.lock().unwrap().push((
            owner.to_string(),
            repository.to_string(),
            new_owner.to_string(),
        ));

        if self.reject_all || self.rejected.contains(repository) {
            return Err(anyhow!("Repository {} is not available", repository));
        }

        Ok(())
    }
}
