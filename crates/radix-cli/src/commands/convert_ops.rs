use std::process;

use serde::Serialize;

use radix_core::settings::settings;
use radix_core::{parse_to_canonical, validate_with, NumeralSystem, RomanGrammar, ValidationError};
use radix_session::{ConverterSession, SessionConfig, SystemDisplay};

use crate::table::{format_table, format_value};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// JSON shape of a one-shot conversion.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub from: NumeralSystem,
    pub value: u32,
    pub displays: Vec<DisplayEntry>,
}

#[derive(Debug, Serialize)]
pub struct DisplayEntry {
    pub system: NumeralSystem,
    pub text: String,
    pub out_of_range: bool,
}

impl From<&SystemDisplay> for DisplayEntry {
    fn from(d: &SystemDisplay) -> Self {
        Self {
            system: d.system,
            text: d.text.clone(),
            out_of_range: d.out_of_range,
        }
    }
}

/// Convert `input` from `from` into `to`, or into every configured system.
pub fn build_report(
    config: SessionConfig,
    input: &str,
    from: NumeralSystem,
    to: Option<NumeralSystem>,
) -> Result<(ConversionReport, Vec<SystemDisplay>), ValidationError> {
    let config = match to {
        Some(system) => SessionConfig {
            systems: vec![system],
            ..config
        },
        None => config,
    };
    let mut session = ConverterSession::with_config(config);
    let resp = session.handle_edit(from, input);
    if let Some(e) = resp.error {
        return Err(e);
    }
    let report = ConversionReport {
        input: input.to_string(),
        from,
        value: resp.value,
        displays: resp.displays.iter().map(DisplayEntry::from).collect(),
    };
    Ok((report, resp.displays))
}

pub fn convert_cmd(input: &str, from: NumeralSystem, to: Option<NumeralSystem>, json: bool) {
    let (report, displays) = die!(
        build_report(SessionConfig::from_settings(), input, from, to),
        "Error: {}"
    );
    let indicators = settings().display.indicators;

    if json {
        let out = die!(serde_json::to_string_pretty(&report), "Error encoding JSON: {}");
        println!("{out}");
    } else if to.is_some() {
        // Single target: bare value only.
        for d in &displays {
            println!("{}", format_value(d, indicators));
        }
    } else {
        print!("{}", format_table(&displays, indicators));
    }
}

/// Check `input` against `system` and report the value it stands for.
pub fn validate_report(
    input: &str,
    system: NumeralSystem,
    grammar: RomanGrammar,
) -> Result<u32, ValidationError> {
    validate_with(input, system, grammar)?;
    Ok(parse_to_canonical(input, system))
}

pub fn validate_cmd(input: &str, system: NumeralSystem, strict: bool) {
    let grammar = if strict {
        RomanGrammar::Strict
    } else {
        settings().roman.grammar()
    };
    let value = die!(validate_report(input, system, grammar), "Error: {}");
    println!("OK: {value}");
}
