//! Test-support helpers for constant-product pair contract suites.
//!
//! This crate bundles the off-chain computations a pair/ERC-20 test suite
//! needs: EIP-712 permit digests, simulated-chain clock control, UQ112x112
//! price encoding, and 18-decimal amount expansion. Helpers are stateless;
//! the only process-wide value is the permit typehash constant, computed once
//! on first use.

pub mod amount;
pub mod config;
pub mod eip712;
pub mod error;
pub mod logging;
pub mod price;
pub mod rpc;
pub mod token;

// Re-export main types
pub use amount::{expand_to_18_decimals, expand_to_decimals, parse_u256, MINIMUM_LIQUIDITY};
pub use config::Config;
pub use eip712::{approval_digest, domain_separator, permit_digest, Approval, PERMIT_TYPEHASH};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use price::encode_price;
pub use rpc::{mine_block, Provider, RpcInterface};
pub use token::TokenHandle;
