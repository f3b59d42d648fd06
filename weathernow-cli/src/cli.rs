use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weathernow_core::{
    Config, Event, OpenWeatherProvider, WeatherLookupController, provider_from_config, render,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Live weather for any city")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up one city and print the result.
    Show {
        /// City name; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the stored result as JSON instead of the card.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until cancelled (the default).
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Search) {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city.join(" "), json).await,
            Command::Search => search().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;
    println!("Saved API key to {}", path.display());
    Ok(())
}

fn load_provider() -> anyhow::Result<OpenWeatherProvider> {
    let config = Config::load()?;
    provider_from_config(&config)
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let provider = load_provider()?;

    let mut controller = WeatherLookupController::new();
    controller.apply(Event::CityTextChanged(city.to_string()));
    let state = controller.submit(&provider).await;

    if let Some(message) = state.error_message() {
        return Err(anyhow!(message));
    }

    if json {
        let result = state
            .result
            .as_ref()
            .ok_or_else(|| anyhow!("Lookup finished without a result"))?;
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        output::print_view(&render(state), state.updated_at);
    }
    Ok(())
}

async fn search() -> anyhow::Result<()> {
    let provider = load_provider()?;
    let mut controller = WeatherLookupController::new();

    output::print_header();
    output::print_view(&render(controller.state()), None);

    loop {
        let input = Text::new("City:")
            .with_placeholder("e.g. Delhi, London")
            .with_help_message("Enter to search, Esc to quit")
            .prompt();

        let text = match input {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        controller.apply(Event::CityTextChanged(text));
        if let Some(effect) = controller.apply(Event::Submitted) {
            output::print_view(&render(controller.state()), None);
            controller.perform(effect, &provider).await;
        }

        let state = controller.state();
        output::print_view(&render(state), state.updated_at);
    }

    Ok(())
}
