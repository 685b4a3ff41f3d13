use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use predictive_engine::{EditEvent, FieldSnapshot, PredictiveField, SuggestionProvider, WordListProvider, classify};
use predictive_tui::RunOptions;
use predictive_util::{Settings, default_word_list, load_word_list};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "predictive", version, about = "Text field with inline predictive completion")]
struct Cli {
    /// Settings file (defaults to $PREDICTIVE_SETTINGS_PATH or the config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Word list file, one suggestion per line
    #[arg(long, global = true)]
    words: Option<PathBuf>,
    /// Keep the typed casing instead of adopting the suggestion's
    #[arg(long, global = true)]
    no_format_case: bool,
    /// Theme name (dracula, nord, ansi256)
    #[arg(long)]
    theme: Option<String>,
    /// Stay in the field after Enter
    #[arg(long)]
    keep_editing_on_return: bool,
    /// Write logs here while the interactive field owns the terminal
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the suggestion for a prefix
    Suggest { prefix: String },
    /// Classify the change from one value to another as JSON
    Diff { previous: String, current: String },
    /// Type text into a field one char at a time and print each state as JSON
    Simulate {
        text: String,
        /// Backspaces to apply after typing
        #[arg(long, default_value_t = 0)]
        backspaces: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none(), cli.log_file.as_ref())?;

    let settings = load_settings(&cli)?;
    let provider = build_provider(&cli, &settings)?;

    match cli.command {
        None => {
            let submitted = predictive_tui::run(RunOptions {
                settings,
                provider: Box::new(provider),
            })
            .await?;
            for value in submitted {
                println!("{value}");
            }
        }
        Some(Command::Suggest { prefix }) => {
            let snapshot = FieldSnapshot {
                user_text: &prefix,
                display_text: &prefix,
                editing: true,
            };
            match provider.suggest(&snapshot, &prefix) {
                Some(suggestion) => println!("{suggestion}"),
                None => std::process::exit(1),
            }
        }
        Some(Command::Diff { previous, current }) => {
            let change = classify(&previous, &current);
            println!("{}", serde_json::to_string(&change)?);
        }
        Some(Command::Simulate { text, backspaces }) => {
            let mut field = PredictiveField::with_behavior(settings.behavior).with_provider(provider);
            field.begin_editing();
            for ch in text.chars() {
                let edit = EditEvent::insert(field.cursor(), ch.to_string());
                print_step(&field.apply_edit(&edit), field.user_text())?;
            }
            for _ in 0..backspaces {
                let Some(edit) = EditEvent::backspace(field.cursor()) else {
                    break;
                };
                print_step(&field.apply_edit(&edit), field.user_text())?;
            }
        }
    }
    Ok(())
}

fn print_step(outcome: &predictive_engine::EditOutcome, user_text: &str) -> Result<()> {
    let step = serde_json::json!({
        "user": user_text,
        "display": outcome.display.text(),
        "prediction": outcome.display.prediction_segment(),
        "cursor": outcome.cursor,
    });
    println!("{}", serde_json::to_string(&step)?);
    Ok(())
}

/// Logs go to stderr for one-shot commands. The interactive field owns the
/// terminal, so there they are written to `--log-file` or dropped.
fn init_tracing(interactive: bool, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match (interactive, log_file) {
        (_, Some(path)) => {
            let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        (false, None) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        (true, None) => {}
    }
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match cli.settings.as_ref() {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("load settings")?;
    if cli.no_format_case {
        settings.behavior.formats_case = false;
    }
    if cli.keep_editing_on_return {
        settings.behavior.end_editing_on_return = false;
    }
    if let Some(theme) = cli.theme.as_ref() {
        settings.theme = Some(theme.clone());
    }
    Ok(settings)
}

fn build_provider(cli: &Cli, settings: &Settings) -> Result<WordListProvider> {
    match cli.words.as_ref().or(settings.word_list.as_ref()) {
        Some(path) => Ok(load_word_list(path)?),
        None => Ok(default_word_list()),
    }
}
