//! Exp interpreter driver.
//!
//! Glue between the phases: read a file, lex, parse, run, and render any
//! failure as a diagnostic. The `exp` binary is a thin dispatcher over
//! [`commands`].

pub mod commands;
mod options;

pub use options::{CliOptions, OptionError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the tracing filter, e.g. `EXP_LOG=exp_eval=trace`.
pub const LOG_ENV: &str = "EXP_LOG";

/// Install the tracing subscriber if `EXP_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
