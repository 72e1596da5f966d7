//! Command line for the headless runner

use std::path::PathBuf;

use clap::Parser;

use crate::Settings;
use crate::settings::PilotMode;

#[derive(Debug, Parser)]
#[command(name = "bullet-hell", version, about = "Headless Bullet Hell simulation runner")]
pub struct Args {
    /// JSON settings file (defaults are used when omitted)
    pub settings: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Seed for the random pilot
    #[arg(long)]
    pub seed: Option<u64>,

    /// Drive characters with no input
    #[arg(long)]
    pub idle: bool,

    /// Pace ticks against wall-clock time
    #[arg(long)]
    pub realtime: bool,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    pub snapshot: bool,
}

impl Args {
    /// Layer command line overrides on top of loaded settings
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(ticks) = self.ticks {
            settings.ticks = ticks;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if self.idle {
            settings.pilot = PilotMode::Idle;
        }
        settings.realtime |= self.realtime;
        settings.print_snapshot |= self.snapshot;
        settings
    }
}
