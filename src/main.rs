use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locale_picker::{parse_accept_language, LocaleConfig, LocaleEntry, LocaleTable};

#[derive(Debug, Parser)]
#[command(name = "locale-picker")]
#[command(version = env!("LOCALE_PICKER_VERSION"))]
#[command(about = "Inspect the locales offered by the language picker.", long_about = None)]
struct Cli {
    /// The locale config file, such as `locale.toml`.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all locales in picker order.
    List {
        /// Print as a json array.
        #[arg(long)]
        json: bool,
    },
    /// Print the display name of a locale code.
    #[command(arg_required_else_help = true)]
    Lookup { code: String },
    /// Resolve a locale code, falling back to the default locale.
    #[command(arg_required_else_help = true)]
    Resolve { code: String },
    /// Pick a locale for an `Accept-Language` header value.
    #[command(arg_required_else_help = true)]
    Negotiate { accept_language: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.config.as_ref() {
        Some(path) => LocaleConfig::load(path)
            .with_context(|| format!("Failed to load config `{}`", path.display()))?,
        None => LocaleConfig::default(),
    };

    match cli.command {
        Commands::List { json } => {
            if json {
                let entries = LocaleTable::entries().collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                LocaleTable::entries().for_each(|entry| println!("{entry}"));
            }
        }
        Commands::Lookup { code } => {
            println!("{}", LocaleTable::lookup(&code)?);
        }
        Commands::Resolve { code } => print_entry(config.resolve(&code)),
        Commands::Negotiate { accept_language } => {
            let tags = parse_accept_language(&accept_language);
            print_entry(config.resolve_preferred(tags));
        }
    }

    Ok(())
}

fn print_entry(entry: &LocaleEntry) {
    log::debug!("Resolved `{}` ({})", entry.code, entry.english_name);
    println!("{entry}");
}
