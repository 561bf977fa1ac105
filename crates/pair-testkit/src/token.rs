//! ERC-20 contract handle
//!
//! The digest helpers need exactly one thing from the token under test: its
//! on-chain `name()` and its address. [`TokenHandle`] packages those behind
//! the injected RPC capability so the same handle works against a live dev
//! node or a mock transport.

use crate::error::{Error, Result};
use crate::rpc::RpcInterface;
use alloy_primitives::Address;
use alloy_sol_types::{sol, SolCall};
use std::sync::Arc;
use tracing::debug;

sol! {
	function name() external view returns (string);
}

/// Handle to a deployed ERC-20 token contract
#[derive(Clone)]
pub struct TokenHandle {
	address: Address,
	rpc: Arc<dyn RpcInterface>,
}

impl std::fmt::Debug for TokenHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TokenHandle")
			.field("address", &self.address)
			.finish()
	}
}

impl TokenHandle {
	/// Create a handle for the token deployed at `address`
	pub fn new(address: Address, rpc: Arc<dyn RpcInterface>) -> Self {
		Self { address, rpc }
	}

	/// On-chain address of the token contract
	pub fn address(&self) -> Address {
		self.address
	}

	/// Fetch the token's `name()` from the chain
	///
	/// # Errors
	/// Returns Error if the call fails or the return data does not decode as
	/// a string
	pub async fn name(&self) -> Result<String> {
		let data = nameCall {}.abi_encode();

		let raw = self.rpc.call_contract(self.address, data.into()).await?;

		let name = nameCall::abi_decode_returns(&raw)
			.map_err(|e| Error::ContractCallFailed(format!("Failed to decode name(): {}", e)))?;

		debug!(token = %self.address, name = %name, "Fetched token name");
		Ok(name)
	}
}
