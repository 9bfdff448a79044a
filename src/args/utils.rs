//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`; `RUST_LOG` still wins at subscriber setup.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: `-v` forces debug, otherwise `--log-level` is used
    ///
    /// - Input: `scoops -v --log-level warn`, `scoops --log-level warn`, `scoops`
    /// - Output: "debug", "warn", "info"
    fn log_level_selection() {
        let v = crate::args::Args::parse_from(["scoops", "-v", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&v), "debug");
        let w = crate::args::Args::parse_from(["scoops", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&w), "warn");
        let d = crate::args::Args::parse_from(["scoops"]);
        assert_eq!(determine_log_level(&d), "info");
    }
}
