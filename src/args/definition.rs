//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;
use crate::logic::compute_visible_list;
use crate::state::ViewState;
use crate::theme::Settings;

use super::{list, view};

/// scoops - browse ice cream nutrition facts by manufacturer, calories and sugar
#[derive(Parser, Debug)]
#[command(name = "scoops")]
#[command(version)]
#[command(about = "Browse ice cream nutrition facts by manufacturer, calories and sugar", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration directory (default: ~/.config/scoops)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// JSON catalog to load instead of the bundled one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Initial title search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show only this manufacturer (repeatable; label or key, e.g. 롯데 or lotte)
    #[arg(short, long, value_delimiter = ',')]
    pub company: Vec<String>,

    /// Sort field: kcal or sugar
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Match the search term case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Print the matching products and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print the list as JSON (use with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Print the known manufacturers and exit
    #[arg(long)]
    pub companies: bool,
}

/// Result of command line processing.
#[derive(Debug)]
pub enum ArgsOutcome {
    /// A one-shot command ran; exit with this code.
    Exit(i32),
    /// Start the TUI with this catalog and initial view.
    RunTui {
        /// Loaded catalog.
        catalog: Catalog,
        /// Initial view state.
        view: ViewState,
    },
}

/// What: Process command-line arguments and handle one-shot commands.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Parsed settings used for defaults.
///
/// Output:
/// - `ArgsOutcome::Exit(code)` after `--companies`, `--list`, or an invalid value;
///   `ArgsOutcome::RunTui` otherwise.
///
/// Details:
/// - Invalid manufacturer/sort values and unreadable catalogs print to stderr
///   and exit with code 1.
pub fn process_args(args: &Args, settings: &Settings) -> ArgsOutcome {
    if args.companies {
        print!("{}", list::format_companies());
        return ArgsOutcome::Exit(0);
    }
    let catalog = match view::load_catalog(args, settings) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            eprintln!("scoops: {e}");
            return ArgsOutcome::Exit(1);
        }
    };
    let initial = match view::build_view(args, settings) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "invalid command line value");
            eprintln!("scoops: {e}");
            return ArgsOutcome::Exit(1);
        }
    };
    if args.list {
        let items = compute_visible_list(&catalog, &initial);
        tracing::info!(count = items.len(), json = args.json, "listing products");
        return ArgsOutcome::Exit(list::handle_list(&items, args.json));
    }
    ArgsOutcome::RunTui {
        catalog,
        view: initial,
    }
}
