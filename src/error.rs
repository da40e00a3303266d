use std::path::PathBuf;
use thiserror::Error;

use crate::duck::Concern;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuckError {
    #[error("no {concern} behavior has been set for this duck")]
    UnconfiguredBehavior { concern: Concern },
}

impl DuckError {
    pub fn unconfigured(concern: Concern) -> Self {
        Self::UnconfiguredBehavior { concern }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read scenario file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_message_names_concern() {
        let err = DuckError::unconfigured(Concern::Fly);
        assert_eq!(err.to_string(), "no fly behavior has been set for this duck");

        let err = DuckError::unconfigured(Concern::Quack);
        assert!(err.to_string().contains("quack"));
    }
}
