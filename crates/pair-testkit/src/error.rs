//! Error types and result handling for the testkit
//!
//! Defines the error surface shared by every helper in this crate. There is
//! no local recovery anywhere: RPC failures, contract-call failures, and
//! parse failures are surfaced to the calling test unmodified so assertion
//! messages carry the underlying library error verbatim.

use std::path::PathBuf;

/// Convenience Result type alias using the local Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering every testkit operation
#[derive(thiserror::Error, Debug)]
pub enum Error {
	// RPC errors
	#[error("RPC connection failed: {0}")]
	RpcError(String),

	#[error("Node not ready after {attempts} attempts: {url}")]
	NodeNotReady { url: String, attempts: u32 },

	// Contract errors
	#[error("Contract call failed: {0}")]
	ContractCallFailed(String),

	// Amount errors
	#[error("Invalid amount: {0}")]
	InvalidAmount(String),

	// Config errors
	#[error("Configuration file not found: {0}")]
	ConfigNotFound(PathBuf),

	#[error("Invalid configuration format: {0}")]
	InvalidConfig(String),

	// IO errors
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	// JSON errors
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	// TOML errors
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	// Generic error for unexpected cases
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

// Convenience conversions
impl From<String> for Error {
	fn from(msg: String) -> Self {
		Error::Other(anyhow::anyhow!("{msg}"))
	}
}

impl From<&'static str> for Error {
	fn from(msg: &'static str) -> Self {
		Error::Other(anyhow::anyhow!("{msg}"))
	}
}
