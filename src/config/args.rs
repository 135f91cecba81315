use crate::domain::model::BirthInput;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "astro-profile", version)]
#[command(about = "Offline sun sign, numerology and daily guidance")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Directory for the API key and exports")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(about = "Generate a profile from birth data")]
    Profile {
        #[command(flatten)]
        birth: BirthArgs,

        #[arg(long, help = "Also write the profile as JSON into the data directory")]
        export: bool,
    },
    #[command(about = "Show the daily message for a name")]
    Daily {
        #[arg(long)]
        name: String,

        #[arg(long, help = "YYYY-MM-DD, defaults to today")]
        date: Option<String>,
    },
    #[command(about = "Ask a question about your profile")]
    Ask {
        #[command(flatten)]
        birth: BirthArgs,

        #[arg(long, help = "Skip the remote model and use rule-based answers")]
        offline: bool,

        question: String,
    },
    #[command(about = "Store the API key in the data directory")]
    SetKey { key: String },
    #[command(about = "Remove the stored API key")]
    ClearKey,
}

#[derive(Debug, Clone, Args)]
pub struct BirthArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, help = "YYYY-MM-DD")]
    pub date: String,

    #[arg(long, default_value = "12:00", help = "HH:MM, 24h")]
    pub time: String,

    #[arg(long, default_value = "")]
    pub place: String,

    #[arg(long = "tz", default_value = "+00:00", allow_hyphen_values = true, help = "±HH:MM")]
    pub tz_offset: String,
}

impl From<BirthArgs> for BirthInput {
    fn from(args: BirthArgs) -> Self {
        BirthInput {
            name: args.name,
            date: args.date,
            time: args.time,
            place: args.place,
            tz_offset: args.tz_offset,
        }
    }
}
