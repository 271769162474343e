//! Tracing subscriber setup for the `crease` binary.
//!
//! The core and adapter crates emit events; this is the only place a
//! subscriber is installed. `-v` raises the level one step per flag from
//! `warn`, `--quiet` drops it to `error`, and `RUST_LOG` replaces the
//! whole filter. Log lines are written to stderr as JSON when the command
//! output is JSON.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown at the chosen level.
const LOG_TARGETS: &[&str] = &["crease", "crease_core", "crease_adapters"];

/// How the subscriber should be built for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    json: bool,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        let level = if args.quiet {
            "error"
        } else {
            ["warn", "info", "debug"]
                .get(usize::from(args.verbose))
                .copied()
                .unwrap_or("trace")
        };
        let json = args.output_format == OutputFormat::Json;
        Self {
            level,
            json,
            ansi: !json && !args.no_color && stderr_is_tty,
        }
    }

    /// e.g. `crease=info,crease_core=info,crease_adapters=info`
    fn directive(&self) -> String {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directive()));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if settings.json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer.with_ansi(settings.ansi)).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: false,
            config: None,
            data: None,
            output_format,
        }
    }

    #[test]
    fn verbosity_steps_up_to_trace() {
        let levels: Vec<_> = (0..=4)
            .map(|v| LogSettings::from_args(&args(v, false, OutputFormat::Auto), false).level)
            .collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let s = LogSettings::from_args(&args(3, true, OutputFormat::Auto), false);
        assert_eq!(s.level, "error");
    }

    #[test]
    fn directive_covers_every_crate() {
        let s = LogSettings::from_args(&args(1, false, OutputFormat::Auto), false);
        assert_eq!(
            s.directive(),
            "crease=info,crease_core=info,crease_adapters=info"
        );
    }

    #[test]
    fn json_output_means_json_logs_without_ansi() {
        let s = LogSettings::from_args(&args(0, false, OutputFormat::Json), true);
        assert!(s.json);
        assert!(!s.ansi);
    }

    #[test]
    fn ansi_only_on_a_terminal() {
        let human = args(0, false, OutputFormat::Human);
        assert!(LogSettings::from_args(&human, true).ansi);
        assert!(!LogSettings::from_args(&human, false).ansi);

        let mut no_color = human;
        no_color.no_color = true;
        assert!(!LogSettings::from_args(&no_color, true).ansi);
    }
}
