//! Logging initialization for test harnesses

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for test runs
///
/// Logs are controlled via the RUST_LOG environment variable, defaulting to
/// info for this crate and warn for everything else. Safe to call from every
/// test; later calls are no-ops.
pub fn init_logging() {
	use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("pair_testkit=info,warn"));

	let _ = tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.with(env_filter)
		.try_init();
}
