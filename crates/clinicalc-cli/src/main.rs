use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clinicalc_cli::commands;
use clinicalc_cli::config::{self, CliConfig, LogFormat};
use clinicalc_core::models::feedback::FeedbackSubmission;
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clinicalc")]
#[command(about = "Clinical risk score calculators")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators
    List {
        /// Only calculators tagged with this specialty
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a calculator's fields and references
    Show { calculator_id: String },
    /// Run a calculator
    Calc {
        calculator_id: String,
        /// Inputs as field=value
        inputs: Vec<String>,
    },
    /// Calculate a medication dose
    Dose {
        medication_id: String,
        /// Patient parameters as field=value (weight, age, creatinine, female, child_pugh)
        inputs: Vec<String>,
    },
    /// Record or review calculator feedback
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },
    /// Manage favorite calculators
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
    /// Show or write the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum FeedbackCommand {
    /// Submit feedback for a calculator
    Submit {
        calculator_id: String,
        /// Overall rating, 1-5
        #[arg(long)]
        rating: u8,
        /// Ease of use, 1-5
        #[arg(long)]
        ease_of_use: u8,
        /// Was the calculator helpful
        #[arg(long)]
        helpful: Option<bool>,
        #[arg(long, default_value = "")]
        comment: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Average rating and helpful share for a calculator
    Stats { calculator_id: String },
    /// Print all feedback as JSON
    Export,
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// Add or remove a favorite
    Toggle { calculator_id: String },
    /// List favorites
    List,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write the effective config to disk
    Init,
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    init_tracing(&config);

    let output = match cli.command {
        Commands::List { category } => commands::list(category.as_deref()),
        Commands::Show { calculator_id } => commands::show(&calculator_id)?,
        Commands::Calc {
            calculator_id,
            inputs,
        } => commands::calc(&calculator_id, &commands::parse_assignments(&inputs)?)?,
        Commands::Dose {
            medication_id,
            inputs,
        } => commands::dose(&medication_id, &commands::parse_assignments(&inputs)?)?,
        Commands::Feedback { command } => {
            let data_dir = config.resolved_data_dir()?;
            match command {
                FeedbackCommand::Submit {
                    calculator_id,
                    rating,
                    ease_of_use,
                    helpful,
                    comment,
                    email,
                } => commands::submit_feedback(
                    &data_dir,
                    FeedbackSubmission {
                        calculator_id,
                        rating,
                        helpful,
                        ease_of_use,
                        comment,
                        user_email: email,
                    },
                )?,
                FeedbackCommand::Stats { calculator_id } => {
                    commands::feedback_stats(&data_dir, &calculator_id)?
                }
                FeedbackCommand::Export => commands::export_feedback(&data_dir)?,
            }
        }
        Commands::Favorites { command } => {
            let data_dir = config.resolved_data_dir()?;
            match command {
                FavoritesCommand::Toggle { calculator_id } => {
                    commands::toggle_favorite(&data_dir, &calculator_id)?
                }
                FavoritesCommand::List => commands::list_favorites(&data_dir)?,
            }
        }
        Commands::Config { command } => match command {
            ConfigCommand::Show => serde_json::to_string_pretty(&config)?,
            ConfigCommand::Init => {
                config::save_config(&config_path, &config)?;
                format!("Config written to {}", config_path.display())
            }
        },
    };

    println!("{output}");
    Ok(())
}
