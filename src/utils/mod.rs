pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "finwise=info";

/// Sends logs to stderr so shell output on stdout stays scriptable.
///
/// `RUST_LOG` directives are honoured; the finwise crates default to `info`.
/// Installing twice, or next to an embedding application's subscriber, is a no-op.
pub fn init_tracing() {
    let filter = match DEFAULT_DIRECTIVE.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
