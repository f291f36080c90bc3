//! Logging setup. Console output goes to stdout; diagnostics go to stderr
//! through `tracing`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Diagnostic verbosity picked with `-q` / `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Adds successful actions (`-v`).
    Verbose,
    /// Adds every request (`-vv`).
    Debug,
    /// Everything (`-vvv`).
    Trace,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("{}={}", env!("CARGO_CRATE_NAME"), verbosity.to_level());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false),
    );

    // A second call (tests) keeps the first subscriber.
    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_verbosity() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, 7), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.to_level(), Level::INFO);
        assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
    }

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging(Verbosity::Normal);
        init_logging(Verbosity::Debug);
    }
}
