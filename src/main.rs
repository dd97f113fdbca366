use std::error::Error;
use stempel::commands::Cli;
use stempel::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    // The message macros route through tracing only in debug mode; a
    // subscriber outside it would swallow nothing and show nothing.
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "stempel=debug".into()),
            ))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu()
}
