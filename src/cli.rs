use crate::domain::constants::DEFAULT_TOP;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holovote", version, about = "Galactic vote ledger CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "HOLOVOTE_LEDGER",
        help = "Vote ledger CSV file (overrides [ledger].path)"
    )]
    pub ledger: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "HOLOVOTE_CONFIG",
        help = "Config file (default: ~/.config/holovote/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct Credentials {
    #[arg(long, env = "HOLOVOTE_USER", help = "Account username")]
    pub user: Option<String>,
    #[arg(
        long,
        env = "HOLOVOTE_PASSWORD",
        hide_env_values = true,
        help = "Account password"
    )]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cast a vote for a character and a side
    Vote {
        #[arg(help = "Character slug or name, e.g. `luke-skywalker`")]
        entity: String,
        #[arg(help = "Side: `dark` or `light`")]
        category: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Totals, per-side counts and ranking
    Stats {
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
    /// Full character ranking
    Ranking,
    /// Best ranked characters
    Top {
        #[arg(default_value_t = DEFAULT_TOP)]
        n: usize,
    },
    /// Raw ledger rows in recorded order
    List,
    /// Characters and sides that can be voted for
    Characters {
        #[command(subcommand)]
        action: Option<CharacterCommands>,
    },
    /// Erase every vote (administrator only)
    Reset {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show who the supplied credentials resolve to
    Whoami {
        #[command(flatten)]
        credentials: Credentials,
    },
}

#[derive(Subcommand, Debug)]
pub enum CharacterCommands {
    /// Biography and portrait of one character
    Show {
        #[arg(help = "Character slug or name")]
        entity: String,
    },
    /// Portrait gallery of every character
    Album,
}
