//! Plain-text display table shared by the one-shot and interactive commands.

use radix_session::SystemDisplay;
use unicode_width::UnicodeWidthStr;

/// Render one row per display: label, rendered value, optional subscript glyph.
///
/// Labels are padded by display width so the value column lines up.
pub fn format_table(displays: &[SystemDisplay], indicators: bool) -> String {
    let width = displays
        .iter()
        .map(|d| d.system.label().width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for d in displays {
        let label = d.system.label();
        out.push_str(label);
        out.push_str(&" ".repeat(width - label.width() + 2));
        out.push_str(&format_value(d, indicators));
        out.push('\n');
    }
    out
}

/// Value cell for one display.
pub fn format_value(d: &SystemDisplay, indicators: bool) -> String {
    if d.out_of_range {
        return format!("{} (out of range)", d.text);
    }
    if indicators {
        format!("{}{}", d.text, d.system.indicator())
    } else {
        d.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_core::NumeralSystem;

    fn display(system: NumeralSystem, text: &str, out_of_range: bool) -> SystemDisplay {
        SystemDisplay {
            system,
            text: text.to_string(),
            out_of_range,
            refresh_input: true,
        }
    }

    #[test]
    fn aligns_value_column() {
        let rows = vec![
            display(NumeralSystem::Hex, "FF", false),
            display(NumeralSystem::Roman, "CCLV", false),
        ];
        let table = format_table(&rows, true);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        let col = NumeralSystem::Roman.label().width() + 2;
        assert_eq!(&lines[0][col..], "FF₁₆");
        assert_eq!(&lines[1][col..], "CCLVℝ");
    }

    #[test]
    fn without_indicators() {
        let rows = vec![display(NumeralSystem::Binary, "101", false)];
        assert_eq!(format_table(&rows, false), "Binary system  101\n");
    }

    #[test]
    fn marks_out_of_range() {
        let d = display(NumeralSystem::Roman, "INVALID", true);
        assert_eq!(format_value(&d, true), "INVALID (out of range)");
    }

    #[test]
    fn empty_table() {
        assert_eq!(format_table(&[], true), "");
    }
}
