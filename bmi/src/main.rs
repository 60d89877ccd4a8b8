use std::{io, process::ExitCode};

use bmi::{CliConfig, Session};
use bmi_sdk::Locale;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::error;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Language for prompts and results (en, pt-br). Overrides BMI_LOCALE
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI from weight and height given as arguments
    Calc {
        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Height in meters
        #[arg(long, allow_hyphen_values = true)]
        height: String,
    },

    /// Classify a known BMI value
    Classify {
        #[arg(allow_hyphen_values = true)]
        bmi: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenv().ok();
    env_logger::init();

    let config = CliConfig::from_env().with_overrides(cli.locale, cli.json);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), config);

    let result = match &cli.command {
        None => session.run_interactive(),
        Some(Commands::Calc { weight, height }) => session.run_calc(weight, height),
        Some(Commands::Classify { bmi }) => session.run_classify(bmi),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", config.locale.error_message(&e));
            ExitCode::FAILURE
        }
    }
}
