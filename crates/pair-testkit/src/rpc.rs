//! Blockchain provider plumbing for the testkit
//!
//! Wraps an Alloy provider behind a small dyn-safe interface so test code can
//! inject recording or failing transports, and exposes the simulated-chain
//! clock control used by pair test suites. The provider handle is always
//! owned by the caller; helpers here only borrow it for the duration of a
//! single request.

use crate::error::{Error, Result};
use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use serde_json::json;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Interface to a development/test blockchain node.
///
/// Implemented by [`Provider`] for real nodes and by recording mocks in
/// tests. Callers sequence dependent operations themselves; this interface
/// gives no ordering guarantees across separate requests.
#[async_trait]
pub trait RpcInterface: Send + Sync {
	/// Sends a raw JSON-RPC request and returns the raw result value.
	///
	/// The error from an unreachable node or a rejected method is surfaced
	/// unmodified; there is no retry and no timeout.
	async fn raw_request(&self, method: &str, params: serde_json::Value)
		-> Result<serde_json::Value>;

	/// Executes an `eth_call` against a contract and returns the return data.
	async fn call_contract(&self, to: Address, data: Bytes) -> Result<Vec<u8>>;
}

/// Blockchain provider wrapper with connection validation
///
/// Provides the RPC capability consumed by the digest and clock helpers.
/// Construction validates connectivity by retrieving the chain ID from the
/// endpoint, so later failures are genuine request failures rather than
/// misconfiguration.
#[derive(Clone)]
pub struct Provider {
	inner: Arc<dyn AlloyProvider + Send + Sync>,
	chain_id: u64,
	url: String,
}

impl std::fmt::Debug for Provider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Provider")
			.field("chain_id", &self.chain_id)
			.field("url", &self.url)
			.field("inner", &"<dyn AlloyProvider>")
			.finish()
	}
}

impl Provider {
	/// Create a new provider for the node at `rpc_url`
	///
	/// # Errors
	/// Returns Error if the URL is invalid or the connection test fails
	pub async fn new(rpc_url: &str) -> Result<Self> {
		let url = rpc_url
			.parse()
			.map_err(|e| Error::RpcError(format!("Invalid RPC URL: {}", e)))?;

		let provider = ProviderBuilder::new().connect_http(url);

		// Test connection
		let chain_id = provider
			.get_chain_id()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to connect to {}: {}", rpc_url, e)))?;

		info!(chain_id = chain_id, url = rpc_url, "Connected to node");

		Ok(Self {
			inner: Arc::new(provider),
			chain_id,
			url: rpc_url.to_string(),
		})
	}

	/// Chain ID reported by the node at connection time
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	/// Access underlying Alloy provider for advanced operations
	pub fn inner(&self) -> &(dyn AlloyProvider + Send + Sync) {
		&*self.inner
	}

	/// Retrieve the current block number from the node
	pub async fn block_number(&self) -> Result<u64> {
		self.inner
			.get_block_number()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to get block number: {}", e)))
	}

	/// Poll the node until it answers, sleeping 500ms between attempts
	///
	/// # Errors
	/// Returns Error::NodeNotReady once all attempts are exhausted
	pub async fn wait_until_ready(&self, attempts: u32) -> Result<()> {
		for _ in 0..attempts {
			if self.inner.get_chain_id().await.is_ok() {
				info!(url = %self.url, "Node is ready and responding");
				return Ok(());
			}
			sleep(Duration::from_millis(500)).await;
		}

		Err(Error::NodeNotReady {
			url: self.url.clone(),
			attempts,
		})
	}
}

#[async_trait]
impl RpcInterface for Provider {
	async fn raw_request(
		&self,
		method: &str,
		params: serde_json::Value,
	) -> Result<serde_json::Value> {
		let raw_params = serde_json::value::RawValue::from_string(params.to_string())?;

		let response = self
			.inner
			.raw_request_dyn(Cow::Owned(method.to_string()), &raw_params)
			.await
			.map_err(|e| Error::RpcError(format!("{} failed: {}", method, e)))?;

		Ok(serde_json::from_str(response.get())?)
	}

	async fn call_contract(&self, to: Address, data: Bytes) -> Result<Vec<u8>> {
		debug!(to = %to, data = %hex::encode(&data), "eth_call");

		let tx = TransactionRequest::default().to(to).input(data.into());

		let result = self
			.inner
			.call(tx)
			.await
			.map_err(|e| Error::ContractCallFailed(e.to_string()))?;

		Ok(result.to_vec())
	}
}

/// Mine one block on the simulated chain at the given timestamp.
///
/// Issues a single `evm_mine` request with `timestamp - 1`; the node bumps
/// the timestamp by one when it commits the block, so the sealed block lands
/// on `timestamp` exactly. The provider error is propagated unmodified on
/// failure; cancellation and timeout policy belong to the caller.
pub async fn mine_block(provider: &dyn RpcInterface, timestamp: u64) -> Result<()> {
	debug!(timestamp = timestamp, "Mining block");
	provider.raw_request("evm_mine", json!([timestamp - 1])).await?;
	Ok(())
}
