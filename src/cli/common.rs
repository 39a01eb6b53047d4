use std::fmt;

/// Access token for one account. Debug output never shows the value.
#[derive(Clone, PartialEq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub user: String,
    pub secret: Secret,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: Account,
    pub destination: Account,
    pub base_url: Option<String>,
}
