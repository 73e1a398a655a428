//! Harness configuration.
//!
//! Loaded from TOML; every section and field is optional and falls back to
//! the development network defaults.

use primer_types::{parse_ether, U256};
use primer_vm::LedgerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Harness configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Chain parameters of the simulated ledger
    pub chain: ChainConfig,
    /// Pre-funded dev accounts
    pub accounts: AccountsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl HarnessConfig {
    /// Load configuration from file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        Self::from_toml_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: HarnessConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn to_file(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e))?;
        Ok(())
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.accounts.count == 0 {
            anyhow::bail!("At least one account is required");
        }
        if self.chain.gas_price == 0 {
            anyhow::bail!("Gas price cannot be 0");
        }
        if self.chain.block_gas_limit == 0 {
            anyhow::bail!("Block gas limit cannot be 0");
        }
        self.accounts.balance_wei()?;
        tracing_subscriber::EnvFilter::try_new(&self.logging.level)
            .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", self.logging.level, e))?;
        Ok(())
    }

    /// Ledger parameters for this configuration.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            chain_id: self.chain.chain_id,
            gas_price: U256::from_u64(self.chain.gas_price),
            gas_limit: self.chain.block_gas_limit,
            block_time: self.chain.block_time,
            genesis_timestamp: self.chain.genesis_timestamp,
            ..LedgerConfig::default()
        }
    }
}

/// Chain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Gas price in wei
    pub gas_price: u64,
    /// Gas limit per block and per transaction
    pub block_gas_limit: u64,
    /// Seconds between blocks
    pub block_time: u64,
    /// Timestamp of block 0
    pub genesis_timestamp: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: primer_vm::DEV_CHAIN_ID,
            gas_price: 1_000_000_000,
            block_gas_limit: primer_vm::DEFAULT_GAS_LIMIT,
            block_time: 1,
            genesis_timestamp: 1_700_000_000,
        }
    }
}

/// Dev account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Number of signers
    pub count: u32,
    /// Starting balance of each signer, in ether
    pub balance: String,
}

impl AccountsConfig {
    pub fn balance_wei(&self) -> anyhow::Result<U256> {
        parse_ether(&self.balance)
            .map_err(|e| anyhow::anyhow!("Invalid account balance '{}': {}", self.balance, e))
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            count: 20,
            balance: "10000".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level / filter directive
    pub level: String,
    /// JSON output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
