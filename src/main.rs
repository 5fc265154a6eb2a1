use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;
use pulsar_restriction::convert;
use pulsar_restriction::errors::RestrictionError;
use pulsar_restriction::restriction::registry::FIELDS;
use pulsar_restriction::settings::Settings;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "restriction",
    version,
    about = "Convert resource-name restrictions between nested and flat form"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "restriction.toml", global = true)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Nested restriction JSON to flat map JSON
    Flatten {
        /// Input file, stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Flat map JSON to nested restriction JSON
    Unflatten {
        /// Input file, stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List flat keys and where they live in the restriction
    Keys,
}

fn main() -> Result<()> {
    // logging, kept off stdout
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)?;
    tracing::debug!(?settings, "Loaded configuration");

    let conversion = match cli.command {
        Command::Flatten { input } => convert::flatten_document(&read_input(input)?, &settings)?,
        Command::Unflatten { input } => {
            convert::unflatten_document(&read_input(input)?, &settings)?
        }
        Command::Keys => {
            for field in FIELDS.iter() {
                println!("{:<26} {}", field.key, field.path());
            }
            return Ok(());
        }
    };

    if !conversion.has_any_value {
        tracing::info!("Restriction carries no value; attribute should be omitted");
    }
    println!("{}", conversion.render(settings.output.pretty)?);
    Ok(())
}

fn read_input(path: Option<PathBuf>) -> std::result::Result<String, RestrictionError> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(contents)
}
