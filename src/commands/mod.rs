mod admin;
mod prompts;
mod session;
mod trainee;
mod trainer;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::service::GymService;
use crate::storage::Storage;

#[derive(Parser)]
#[command(name = "gym-manager")]
#[command(about = "Terminal-based gym membership management application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "GYM_MANAGER_CONFIG")]
    config: Option<String>,

    /// Directory holding the record files (overrides the config file)
    #[arg(long, global = true, env = "GYM_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show the effective configuration
    Show,

    /// Set the record data directory
    SetDataDir { path: PathBuf },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if let Some(path) = &self.config {
            // Config::config_path honors this override.
            std::env::set_var("GYM_MANAGER_CONFIG", path);
        }

        match self.command {
            None => {
                let storage = match self.data_dir {
                    Some(dir) => Storage::init_with_path(dir)?,
                    None => Storage::init()?,
                };
                session::run(&GymService::new(storage))
            }
            Some(Commands::Config(cmd)) => match cmd {
                ConfigSubcommands::Show => {
                    let config = Config::load()?;
                    print!("{}", toml::to_string_pretty(&config)?);
                    Ok(())
                }
                ConfigSubcommands::SetDataDir { path } => {
                    let mut config = Config::load()?;
                    config.storage.data_dir = path;
                    config.save()?;
                    println!("Data directory set to {:?}", config.storage.data_dir);
                    Ok(())
                }
            },
            Some(Commands::Completions { shell }) => {
                let mut cmd = Cli::command();
                let name = cmd.get_name().to_string();
                clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
                Ok(())
            }
        }
    }
}
