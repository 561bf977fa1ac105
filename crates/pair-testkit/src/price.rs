//! UQ112x112 fixed-point price encoding
//!
//! Pair contracts accumulate prices as UQ112x112 values: 112 integer bits
//! and 112 fractional bits. `encode_price` mirrors that on-chain encoding so
//! tests can predict cumulative-price updates exactly.

use alloy_primitives::U256;

/// Number of fractional bits in the UQ112x112 format
pub const RESOLUTION: usize = 112;

/// Encode a reserve pair as the two UQ112x112 price ratios
///
/// Returns `(reserve1 << 112 / reserve0, reserve0 << 112 / reserve1)` with
/// truncating division. A zero reserve is a caller error and faults with a
/// division-by-zero panic; no guard is performed here.
pub fn encode_price(reserve0: U256, reserve1: U256) -> (U256, U256) {
	let q112 = U256::ONE << RESOLUTION;
	(
		reserve1 * q112 / reserve0,
		reserve0 * q112 / reserve1,
	)
}
