use boost_logger::config::{load_config, LoggerConfig};
use boost_logger::logger::{self, Level};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boost-logger")]
#[command(about = "Level-filtered console logging", long_about = None)]
struct Cli {
    /// Path to a JSON logger configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enabled levels, e.g. "error,debug", "all" or "none"
    #[arg(long)]
    levels: Option<String>,

    /// Do not append the originating file name
    #[arg(long)]
    hide_file_name: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one message through the global logger
    Log {
        /// Level of the message (httpResponse, error, debug)
        level: Level,
        /// Message text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// File path shown in brackets
        #[arg(short, long, default_value = file!())]
        file: String,
    },
    /// List the available levels
    Levels,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Without a config file every level is enabled, otherwise nothing would print.
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    let mode = cli.hide_file_name.then_some("hide");
    let config = config
        .with_env_overrides()?
        .with_overrides(cli.levels.as_deref(), mode)?;
    config.apply();

    match cli.command {
        Commands::Log {
            level,
            message,
            file,
        } => {
            logger::log(level, &message.join(" "), &file);
        }
        Commands::Levels => {
            for level in Level::ALL {
                println!("{:<14}{}", level.as_str(), level.description());
            }
        }
    }

    logger::flush();
    Ok(())
}
