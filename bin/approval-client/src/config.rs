use portico_primitives::alloy::primitives::{Address, U256};
use portico_primitives::{Item, ItemType};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    pub log_level: String,
    /// Defaults to the address of the configured private key.
    #[serde(default)]
    pub owner: Option<Address>,
    pub operator: Address,
    #[serde(default)]
    pub submit_transactions: bool,
    pub items: Vec<ItemConfig>,
}

/// An item together with the amount the operator needs to be able to move.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub item_type: ItemType,
    pub token: Address,
    #[serde(default)]
    pub identifier_or_criteria: U256,
    pub amount: U256,
}

impl ItemConfig {
    pub fn item(&self) -> Item {
        Item::new(self.item_type, self.token, self.identifier_or_criteria)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid rpc_url {url}: {source}")]
    InvalidRpcUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Invalid log_level {0}")]
    InvalidLogLevel(String),
    #[error("Owner {owner} is not the signing key {signer}, its approvals cannot be submitted")]
    OwnerMismatch { owner: Address, signer: Address },
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.rpc_url).map_err(|source| ConfigError::InvalidRpcUrl {
            url: self.rpc_url.clone(),
            source,
        })
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Account whose approvals are read, the signing key's own unless
    /// configured. Approvals are granted by whoever sends them, so another
    /// owner is only accepted while `submit_transactions` is off.
    pub fn owner(&self, signer: Address) -> Result<Address, ConfigError> {
        match self.owner {
            Some(owner) if owner != signer && self.submit_transactions => {
                Err(ConfigError::OwnerMismatch { owner, signer })
            }
            Some(owner) => Ok(owner),
            None => Ok(signer),
        }
    }
}
