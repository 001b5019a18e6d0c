use serde::{Deserialize, Serialize};
use thiserror::Error;
use wordfreq_logging::wordfreq_debug;

pub const DEFAULT_BLACKLIST: &str = "the,and,to,of,a,in,for,on,is,it,that,with,as,this,by,your,you";
pub const DEFAULT_THRESHOLD: u32 = 3;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("stored settings are not valid json: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("threshold must be a non-negative integer, got {0:?}")]
    InvalidThreshold(String),
    #[error("settings store failure: {0}")]
    Store(String),
}

/// User-facing configuration consumed by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Comma-separated words hidden from the panel.
    #[serde(default = "default_blacklist")]
    pub blacklist: String,
    /// Minimum count a word needs to be shown.
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

fn default_blacklist() -> String {
    DEFAULT_BLACKLIST.to_string()
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
            threshold: default_threshold(),
        }
    }
}

impl Settings {
    /// Reads stored settings; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Appends `word` to the blacklist. Returns `false` if it was already listed.
    pub fn blacklist_word(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.blacklist.split(',').any(|entry| entry.trim() == word) {
            return false;
        }
        if self.blacklist.trim().is_empty() {
            self.blacklist = word.to_string();
        } else {
            self.blacklist.push(',');
            self.blacklist.push_str(word);
        }
        wordfreq_debug!("blacklisted word={}", word);
        true
    }

    pub fn parse_threshold(input: &str) -> Result<u32, SettingsError> {
        input
            .trim()
            .parse::<u32>()
            .map_err(|_| SettingsError::InvalidThreshold(input.to_string()))
    }
}
