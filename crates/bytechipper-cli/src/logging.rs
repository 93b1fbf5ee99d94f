use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderrlog verbosity; each `-v` raises `default` by one level.
    fn log_level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        match default.saturating_add(self.verbose) {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        log: LogArgs,
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["bchipper"]);
        assert!(!cli.log.quiet);
        assert!(matches!(cli.log.log_level(2), stderrlog::LogLevelNum::Warn));

        let cli = Cli::parse_from(["bchipper", "-v"]);
        assert!(matches!(cli.log.log_level(2), stderrlog::LogLevelNum::Info));

        let cli = Cli::parse_from(["bchipper", "-vv"]);
        assert!(matches!(cli.log.log_level(2), stderrlog::LogLevelNum::Debug));
        assert!(matches!(cli.log.log_level(0), stderrlog::LogLevelNum::Warn));

        let cli = Cli::parse_from(["bchipper", "-vvv", "--ts"]);
        assert!(cli.log.ts);
        assert!(matches!(cli.log.log_level(2), stderrlog::LogLevelNum::Trace));
        assert!(matches!(cli.log.log_level(u8::MAX), stderrlog::LogLevelNum::Trace));
    }
}
