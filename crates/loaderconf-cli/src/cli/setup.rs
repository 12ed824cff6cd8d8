use clap::{Parser, Subcommand};
use loaderconf::{ConfigModel, SystemdBoot};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "loaderconf", version)]
#[command(about = "Inspect and edit systemd-boot's loader.conf without losing comments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the loader configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "LOADERCONF_FILE",
        default_value = SystemdBoot::DEFAULT_PATH
    )]
    pub file: PathBuf,

    /// Resolve the file below this root (e.g. the target of an installation)
    #[arg(long, global = true, env = "LOADERCONF_ROOT")]
    pub root: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show every attribute with its effective value
    #[command(alias = "ls")]
    Show {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective value of one attribute
    Get {
        /// Attribute name (menu_timeout, console_mode, default)
        attribute: String,
    },

    /// Set an attribute and save the file
    Set {
        attribute: String,
        value: String,
    },

    /// Remove an attribute's key and save the file
    #[command(alias = "rm")]
    Unset { attribute: String },

    /// Print the file as it would be written
    Cat,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed, e.g. by a test harness.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
