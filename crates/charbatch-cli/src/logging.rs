use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// Initialize the stderr logger; info is the baseline level.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let level = match self.verbose {
            0 => LogLevelNum::Info,
            1 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        };

        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level)
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
