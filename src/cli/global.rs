use clap::Args;
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Log debug output to stderr, even if RUST_LOG asks for less
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors, even if RUST_LOG asks for more
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Extra config file, applied after the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Log filter for the verbosity flags, also used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
