use std::path::Path;

use clap::{Parser, Subcommand};

use radix_cli::commands::{config_ops, convert_ops, interactive};
use radix_core::settings::settings;
use radix_core::NumeralSystem;
use radix_session::ConverterSession;

#[derive(Parser)]
#[command(name = "radixtool", about = "Numeral-base converter")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value into every configured numeral system
    Convert {
        /// Input text (empty means 0)
        input: String,
        /// System the input is written in (binary, octal, decimal, hex, roman)
        #[arg(short, long)]
        from: NumeralSystem,
        /// Print only this system
        #[arg(short, long)]
        to: Option<NumeralSystem>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check input against a numeral system's alphabet
    Validate {
        /// Input text
        input: String,
        /// System the input is written in
        #[arg(short, long)]
        system: NumeralSystem,
        /// Reject non-canonical Roman numerals regardless of settings
        #[arg(long)]
        strict: bool,
    },
    /// Interactive converter reading commands from stdin
    Interactive,
    /// Print default settings TOML to stdout
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("radix_core=debug,radix_session=debug")
            }),
        )
        .init();
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(path) = &cli.settings {
        config_ops::install_settings(Path::new(path));
    }

    match cli.command {
        Command::Convert {
            input,
            from,
            to,
            json,
        } => convert_ops::convert_cmd(&input, from, to, json),
        Command::Validate {
            input,
            system,
            strict,
        } => convert_ops::validate_cmd(&input, system, strict),
        Command::Interactive => {
            interactive::interactive_cmd(ConverterSession::new(), settings().display.indicators)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
