use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal client for a Cassette player-state suspender backend - snapshot, restore and juggle streaming playback sessions as slots."
)]
pub struct ClientArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the Cassette backend (its API root)
    #[arg(long, short = 's', env = "CASSETTE_SERVER")]
    pub server: Option<String>,

    /// Path to a TOML/JSON config file (defaults to cassette.toml/cassette.json)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Path of the local consent store
    #[arg(long = "consent-path")]
    pub consent_path: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout")]
    pub timeout_secs: Option<u64>,

    /// Verbose (debug) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List the active playback devices the backend can see
    Devices,
    /// List slots, most recently suspended first
    List,
    /// Pause playback and store the current state in a new slot
    Suspend,
    /// Overwrite the state stored in a slot with the current playback
    Overwrite {
        /// Slot number as shown by `list` (stale after a delete; re-list first)
        slot: usize,
    },
    /// Remove a slot; higher slot numbers shift down by one
    Delete {
        /// Slot number as shown by `list` (stale after a delete; re-list first)
        slot: usize,
    },
    /// Resume playback from a slot, optionally on a specific device
    Resume {
        /// Slot number as shown by `list` (stale after a delete; re-list first)
        slot: usize,
        /// Device ID from `devices`
        #[arg(long)]
        device: Option<String>,
    },
    /// Download everything the backend holds about you as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<std::path::PathBuf>,
    },
    /// Erase all data the backend holds about you, then withdraw consent
    Erase {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Walk through a short interactive introduction
    Tour,
    /// Inspect or change the locally stored consent decision
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },
}

#[derive(Debug, Subcommand, Clone)]
pub enum ConsentAction {
    /// Record consent to data processing, with a ten-year retention window
    Grant,
    /// Withdraw consent; the backend will refuse data access afterwards
    Withdraw,
    /// Show the current consent decision
    Status,
}
