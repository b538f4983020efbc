use std::fs;
use std::path::Path;
use std::process;

use radix_core::settings::{parse_settings_toml, Settings, SettingsError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Read and parse a settings file without installing it.
pub fn load_settings_file(path: &Path) -> Result<(String, Settings), ConfigFileError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let settings = parse_settings_toml(&content)?;
    Ok((content, settings))
}

/// Install `path` as the process-wide settings. Must run before first use.
pub fn install_settings(path: &Path) {
    let (content, _) = die!(load_settings_file(path), "{}");
    die!(radix_core::settings::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", radix_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let (_, s) = die!(load_settings_file(Path::new(file)), "{}");
    let systems: Vec<&str> = s.display.systems.iter().map(|sys| sys.id()).collect();
    println!(
        "OK: roman.strict_grammar={}, display.systems=[{}], display.indicators={}",
        s.roman.strict_grammar,
        systems.join(", "),
        s.display.indicators
    );
}
