use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Append log lines here instead of stderr.
    pub file: Option<String>,
    pub use_prefix: bool,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err("log.file must not be blank".to_string());
        }
        Ok(())
    }
}
