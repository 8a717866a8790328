use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_core::{
    Config, Presentation, SearchState, SearchStatus, WeatherError, WeatherProvider,
    provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// weatherapi.com API key; overrides the stored configuration.
    #[arg(long, env = "WEATHER_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Alternative API base URL, e.g. a local mock server.
    #[arg(long, env = "WEATHER_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Defaults to `search` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key in the config file.
    Configure,

    /// Prompt for cities until Esc or Ctrl-C.
    Search,

    /// Show current weather for one city and exit.
    Show {
        /// City or location name.
        city: String,

        /// Print the reading as JSON instead of messages.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Search) {
            Command::Configure => configure(),
            Command::Search => {
                let provider = load_provider(self.api_key, self.base_url)?;
                interactive(provider.as_ref()).await
            }
            Command::Show { city, json } => {
                let provider = load_provider(self.api_key, self.base_url)?;
                let found =
                    show(provider.as_ref(), city, json, &mut io::stdout(), &mut io::stderr())
                        .await?;
                Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
            }
        }
    }
}

/// Stored config with flag/env values layered on top.
fn load_provider(
    api_key: Option<String>,
    base_url: Option<String>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let config = Config::load()?.with_overrides(api_key, base_url);
    tracing::debug!(base_url = config.base_url(), "loaded configuration");
    Ok(provider_from_config(&config))
}

fn configure() -> anyhow::Result<ExitCode> {
    let key = Password::new("weatherapi.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    if key.is_empty() {
        bail!("API key must not be empty");
    }

    let mut config = Config::load()?;
    config.set_api_key(key.to_string());
    let path = config.save()?;
    tracing::debug!(path = %path.display(), "saved configuration");

    println!("Saved API key to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

async fn interactive(provider: &dyn WeatherProvider) -> anyhow::Result<ExitCode> {
    println!("{}", render::header());

    let help = render::prompt_help();
    let mut state = SearchState::new();
    loop {
        let input = match Text::new("City:")
            .with_placeholder(render::PLACEHOLDER)
            .with_help_message(&help)
            .prompt()
        {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                tracing::debug!("search prompt closed");
                break;
            }
            Err(err) => return Err(err).context("Failed to read location"),
        };

        state.set_input(input);
        if let Some(ticket) = state.begin() {
            println!("{}", render::submit_label(state.is_loading()));
            let outcome =
                provider.current_weather(ticket.location()).await.map_err(WeatherError::from);
            state.finish(ticket, outcome);
        }

        report(&state, &mut io::stdout(), &mut io::stderr())?;
    }

    Ok(ExitCode::SUCCESS)
}

/// One search; returns whether a reading was printed.
async fn show(
    provider: &dyn WeatherProvider,
    city: String,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut state = SearchState::new();
    state.set_input(city);

    let status = state.submit(provider).await;
    if status != SearchStatus::Success {
        report(&state, out, err)?;
        tracing::debug!(?status, "show finished without a reading");
        return Ok(false);
    }

    match state.reading() {
        Some(reading) if json => writeln!(out, "{}", serde_json::to_string_pretty(reading)?)?,
        _ => report(&state, out, err)?,
    }

    Ok(true)
}

/// Error banner goes to `err`, result rows to `out`.
fn report(state: &SearchState, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    let text = render::outcome(state, Presentation::of);
    let target: &mut dyn Write = if state.error().is_some() { err } else { out };

    target.write_all(text.as_bytes())?;
    target.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clap::CommandFactory;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use weather_core::{FetchFailure, WeatherReading};

    /// Knows only London; everything else fails to decode.
    #[derive(Debug, Default)]
    struct LondonOnly {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherProvider for LondonOnly {
        async fn current_weather(&self, location: &str) -> Result<WeatherReading, FetchFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if location == "london" {
                Ok(WeatherReading::celsius(15.0, "Partly Cloudy", "London"))
            } else {
                let err = serde_json::from_str::<WeatherReading>("{}").unwrap_err();
                Err(FetchFailure::Decode(err))
            }
        }
    }

    async fn run_show(
        provider: &LondonOnly,
        city: &str,
        json: bool,
    ) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let found = show(provider, city.to_string(), json, &mut out, &mut err).await.unwrap();

        (found, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn report_routes_banner_to_err_and_rows_to_out() {
        let mut state = SearchState::new();
        state.set_input("  ");
        assert!(state.begin().is_none());

        let (mut out, mut err) = (Vec::new(), Vec::new());
        report(&state, &mut out, &mut err).unwrap();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "error: please enter a valid location.\n");

        state.set_input("london");
        let ticket = state.begin().unwrap();
        state.finish(ticket, Ok(WeatherReading::celsius(25.0, "Sunny", "London")));

        let (mut out, mut err) = (Vec::new(), Vec::new());
        report(&state, &mut out, &mut err).unwrap();
        assert!(err.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("It's a beautiful sunny day!"));
    }

    #[tokio::test]
    async fn show_blank_city_fails_without_request() {
        let provider = LondonOnly::default();
        let (found, out, err) = run_show(&provider, "   ", false).await;

        assert!(!found);
        assert_eq!(out, "");
        assert_eq!(err, "error: please enter a valid location.\n");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn show_unknown_city_reports_on_stderr() {
        let provider = LondonOnly::default();
        let (found, out, err) = run_show(&provider, "atlantis", false).await;

        assert!(!found);
        assert_eq!(out, "");
        assert_eq!(err, "error: city not found. please try again.\n");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn show_known_city_prints_three_rows() {
        let provider = LondonOnly::default();
        let (found, out, err) = run_show(&provider, " london ", false).await;

        assert!(found);
        assert_eq!(err, "");
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("The temperature is 15°C! comfortable for a light jacket."));
        assert!(out.contains("Expect some clouds and sunshine"));
    }

    #[tokio::test]
    async fn show_json_prints_reading() {
        let provider = LondonOnly::default();
        let (found, out, err) = run_show(&provider, "london", true).await;

        assert!(found);
        assert_eq!(err, "");

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["location_name"], "London");
        assert_eq!(json["condition"], "Partly Cloudy");
        assert_eq!(json["temperature_c"], 15.0);
        assert_eq!(json["unit"], "C");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_search() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_parses_city_and_json_flag() {
        let cli = Cli::try_parse_from([
            "weather",
            "show",
            "New York",
            "--json",
            "--api-key",
            "KEY",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("KEY"));
        match cli.command {
            Some(Command::Show { city, json }) => {
                assert_eq!(city, "New York");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
