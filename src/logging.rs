// SPDX-License-Identifier: PMPL-1.0-or-later

//! stderr logger for the command-line tool.

use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;

/// Level used for a given verbosity.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Error,
        (false, false) => LevelFilter::Warn,
    }
}

pub fn setup_logger(verbose: bool, quiet: bool) {
    let logger = Dispatch::new()
        .format(move |out, message, record| {
            let level = match record.level() {
                log::Level::Error => "error".red().bold(),
                log::Level::Warn => "warning".yellow().bold(),
                log::Level::Info => "info".normal(),
                log::Level::Debug | log::Level::Trace => "debug".dimmed(),
            };
            if verbose {
                out.finish(format_args!("{}: ({}) {}", level, record.target(), message))
            } else {
                out.finish(format_args!("{}: {}", level, message))
            }
        })
        .level(level_for(verbose, quiet))
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(false, false), LevelFilter::Warn);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(true, true), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Error);
    }
}
