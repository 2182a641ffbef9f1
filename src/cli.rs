use clap::Parser;

use crate::config::Config;
use crate::session::{Session, SessionEnd};
use crate::storage::JsonStore;
use crate::utils::error::AppResult;
use crate::utils::{OutputStyle, TerminalPrompter, install_interrupt_handler};

/// Launching the binary opens the menu directly; there are no options
/// beyond `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(name = "manage-tools")]
#[command(version)]
#[command(about = "Interactive editor for the toolkit catalog data files")]
#[command(
    long_about = "Interactive editor for the toolkit catalog data files.\n\n\
    Run it from the repository root, next to the 'data' folder. Set RUST_LOG for \
    diagnostic logging and TOOLKIT_MANAGER_CONFIG to use a different config file."
)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> AppResult<SessionEnd> {
        Self::setup_logging();
        install_interrupt_handler()?;

        let config = Config::load()?;
        OutputStyle::configure(config.general.color);
        tracing::debug!(data_dir = %config.data.dir.display(), "starting session");

        let storage = JsonStore::new(&config);
        let mut session = Session::start(
            storage,
            TerminalPrompter::new(),
            config.data.default_banner.clone(),
        )?;
        session.run()
    }

    fn setup_logging() {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
