//! Token amount expansion and integer coercion
//!
//! Pair test suites express balances in human units and compare them against
//! 18-decimal on-chain integers. These helpers convert between the two and
//! coerce numeric strings into `U256` values.

use crate::error::{Error, Result};
use alloy_primitives::{
	utils::{format_ether, parse_ether, parse_units},
	U256,
};

/// Liquidity permanently locked by a pair on first mint (10^3)
pub const MINIMUM_LIQUIDITY: U256 = U256::from_limbs([1_000, 0, 0, 0]);

/// Scale a decimal string by 10^18 (the default token denomination)
///
/// Precision is bounded by the 18 fractional digits the parser accepts;
/// anything finer is rejected, not silently rounded.
pub fn expand_to_18_decimals(value: &str) -> Result<U256> {
	parse_ether(value).map_err(|e| Error::InvalidAmount(format!("'{}': {}", value, e)))
}

/// Scale a decimal string by 10^decimals
pub fn expand_to_decimals(value: &str, decimals: u8) -> Result<U256> {
	let parsed = parse_units(value, decimals)
		.map_err(|e| Error::InvalidAmount(format!("'{}': {}", value, e)))?;
	Ok(parsed.get_absolute())
}

/// Format an 18-decimal integer back into a decimal string
pub fn format_18_decimals(amount: U256) -> String {
	format_ether(amount)
}

/// Coerce a decimal or 0x-hex string into a U256
pub fn parse_u256(value: &str) -> Result<U256> {
	let trimmed = value.trim();
	let parsed = match trimmed.strip_prefix("0x") {
		Some(digits) => U256::from_str_radix(digits, 16),
		None => U256::from_str_radix(trimmed, 10),
	};
	parsed.map_err(|e| Error::InvalidAmount(format!("'{}': {}", value, e)))
}
