//! Test-environment configuration
//!
//! Loads the node endpoint settings shared by a test suite from a TOML file.
//! Every field has a default matching a stock local dev node, so suites that
//! only ever talk to `localhost:8545` need no file at all.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level testkit configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
	/// Node endpoint settings.
	#[serde(default)]
	pub node: NodeConfig,
}

/// Connection settings for the simulated chain node
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeConfig {
	/// HTTP JSON-RPC endpoint of the node.
	#[serde(default = "default_rpc_url")]
	pub rpc_url: String,
	/// Chain ID the suite expects the node to report.
	#[serde(default = "default_chain_id")]
	pub chain_id: u64,
}

impl Default for NodeConfig {
	fn default() -> Self {
		Self {
			rpc_url: default_rpc_url(),
			chain_id: default_chain_id(),
		}
	}
}

fn default_rpc_url() -> String {
	"http://localhost:8545".to_string()
}

fn default_chain_id() -> u64 {
	31337
}

impl Config {
	/// Load configuration from a TOML file
	///
	/// # Errors
	/// Returns Error if the file is missing or does not parse as TOML
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(Error::ConfigNotFound(path.to_path_buf()));
		}

		let contents = std::fs::read_to_string(path)?;
		Ok(toml::from_str(&contents)?)
	}
}
