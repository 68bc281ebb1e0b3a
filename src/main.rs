use anyhow::Result;
use sewalog::commands::Cli;
use sewalog::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // In debug mode the message macros route through tracing; give them a
    // subscriber honoring RUST_LOG.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu()
}
