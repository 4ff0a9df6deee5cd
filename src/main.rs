use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use array_ext::{
    config::LogFormat,
    operations::{search, sort_by, transform},
    ports::NaturalOrder,
    transformers::{BitEncoder, Language, NumeralBaseCodec, WordTranscriber},
    Config,
};

#[derive(Parser)]
#[command(name = "array-ext")]
#[command(about = "Generic array operations and value transformers", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the IEEE-754 bit pattern of each value
    Bits {
        #[arg(required = true)]
        values: Vec<f64>,
    },
    /// Convert numeral strings in a base (2-16) to decimal
    Decimal {
        /// Base of the input digits (default: ARRAY_EXT_DEFAULT_BASE)
        #[arg(short, long)]
        base: Option<u32>,
        #[arg(required = true)]
        digits: Vec<String>,
    },
    /// Spell out each value digit by digit
    Words {
        /// Vocabulary language, en or ru (default: ARRAY_EXT_LANGUAGE)
        #[arg(short, long)]
        lang: Option<Language>,
        #[arg(required = true)]
        values: Vec<f64>,
    },
    /// Sort the values, then binary search them for an item
    Search {
        item: i32,
        #[arg(required = true)]
        values: Vec<i32>,
    },
}

#[derive(Serialize)]
struct Conversion<I, O> {
    input: I,
    output: O,
}

#[derive(Serialize)]
struct SearchOutcome {
    item: i32,
    sorted: Vec<i32>,
    index: Option<usize>,
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;

    // stdout carries results, logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}

fn emit<I, O>(json: bool, inputs: &[I], outputs: Vec<O>) -> Result<()>
where
    I: Serialize + Clone,
    O: Serialize + std::fmt::Display,
{
    if json {
        let records: Vec<Conversion<I, O>> = inputs
            .iter()
            .cloned()
            .zip(outputs)
            .map(|(input, output)| Conversion { input, output })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for output in outputs {
            println!("{}", output);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    init_tracing(&config)?;
    debug!(?config, "Configuration loaded and validated");

    match cli.command {
        Commands::Bits { values } => {
            let bits: Vec<String> = transform(Some(values.as_slice()), Some(&BitEncoder))?;
            emit(cli.json, &values, bits)?;
        }
        Commands::Decimal { base, digits } => {
            let base = base.unwrap_or(config.default_base);
            let codec = NumeralBaseCodec::new(base)?;
            let numbers: Vec<i32> = transform(Some(digits.as_slice()), Some(&codec))
                .with_context(|| format!("Failed to convert digits in base {}", base))?;
            emit(cli.json, &digits, numbers)?;
        }
        Commands::Words { lang, values } => {
            let language = lang.unwrap_or(config.language);
            let transcriber = WordTranscriber::for_language(language);
            let words: Vec<String> = transform(Some(values.as_slice()), Some(&transcriber))?;
            emit(cli.json, &values, words)?;
        }
        Commands::Search { item, values } => {
            let sorted = sort_by(Some(values.as_slice()), Some(&NaturalOrder))?;
            let index = search(Some(sorted.as_slice()), &item)?;
            info!(item, found = index.is_some(), "Search finished");

            if cli.json {
                let outcome = SearchOutcome {
                    item,
                    sorted,
                    index,
                };
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                match index {
                    Some(index) => println!("{}", index),
                    None => println!("not found"),
                }
            }
        }
    }

    Ok(())
}
