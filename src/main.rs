use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mask_core::{EditOutcome, FieldState, format_state, parse_keys, parse_state};
use phone_format::{PhoneFormatter, PhoneFormatterConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "fieldmask", version, about = "As-you-type phone number masking")]
struct Cli {
    #[arg(long, global = true, help = "TOML file with formatter options")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format raw input the way the field would display it.
    Format {
        #[arg(required = true)]
        raw: Vec<String>,
    },
    /// Settle each number and report NANP validation failures.
    Validate {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Replay key presses against a field, printing the field after each one.
    Type {
        #[arg(long, default_value = "|", help = "Starting state in caret notation")]
        from: String,
        #[arg(required = true, help = "Keys such as 4, backspace, shift+left or paste:<text>")]
        keys: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let formatter = load_formatter(cli.config.as_deref())?;
    log::debug!("formatter: {formatter:?}");

    match cli.command {
        Commands::Format { raw } => {
            for raw in &raw {
                println!("{}", formatter.format(raw.as_str()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { text } => Ok(validate(&formatter, &text)),
        Commands::Type { from, keys } => {
            replay(&formatter, &from, &keys)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_formatter(path: Option<&Path>) -> Result<PhoneFormatter> {
    let Some(path) = path else {
        return Ok(PhoneFormatter::new());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: PhoneFormatterConfig = toml::from_str(&source)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(PhoneFormatter::with_config(&config)?)
}

fn validate(formatter: &PhoneFormatter, inputs: &[String]) -> ExitCode {
    let mut failed = false;
    for input in inputs {
        let text = formatter.format(input.as_str());
        let parsed = formatter.parse(&text);
        match parsed.failure {
            None => println!("{}\t{}\tvalid", parsed.value, text),
            Some(failure) => {
                failed = true;
                println!("{}\t{}\t{}: {failure}", parsed.value, text, failure.code());
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn replay(formatter: &PhoneFormatter, from: &str, keys: &[String]) -> Result<()> {
    let mut state: FieldState = match parse_state(from) {
        Ok(state) => state,
        Err(err) => bail!("invalid starting state {from:?}: {err}"),
    };
    if formatter.format(state.text.as_str()) != state.text {
        bail!("{:?} is not formatted text", state.text);
    }

    println!("{:>16}  {}", "", format_state(&state));
    for key in keys {
        for edit in parse_keys(key) {
            match formatter.translate_edit(&state.text, state.caret, &edit) {
                EditOutcome::Applied(next) => state = next,
                EditOutcome::Rejected => {
                    println!("{:>16}  (rejected {edit:?})", key);
                    continue;
                }
            }
            println!("{:>16}  {}", key, format_state(&state));
        }
    }
    Ok(())
}
