use std::io::BufRead;

use crate::error::InputError;

/// Reads one repository name per line. Every line must be non-blank once
/// trimmed and at least one line must be present.
pub fn read_repositories<R: BufRead>(input: R) -> Result<Vec<String>, InputError> {
    let mut repositories = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(InputError::Read)?;
        let name = line.trim();
        if name.is_empty() {
            return Err(InputError::EmptyLine { line: index + 1 });
        }
        repositories.push(name.to_string());
    }

    if repositories.is_empty() {
        return Err(InputError::NoRepositories);
    }

    Ok(repositories)
}
