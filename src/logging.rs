//! Diagnostic output for the library and the CLI.
//!
//! Everything is emitted through `tracing`; this module only installs the
//! subscriber. Logs go to stderr so that stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a `-v` count.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "warn,carefind=info",
		2 => "info,carefind=debug",
		_ => "trace",
	}
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_widens_the_filter() {
		assert_eq!(default_directive(0), "warn");
		assert!(default_directive(2).contains("carefind=debug"));
		assert_eq!(default_directive(9), "trace");
	}

	#[test]
	fn repeated_initialization_is_harmless() {
		initialize(0);
		initialize(3);
	}
}
