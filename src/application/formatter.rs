//! Output formatting for conversion results.
//!
//! Supports plain text, JSON, and a numbered item table.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use crate::domain::{Delimiter, Direction};

use super::converter;
use super::i18n::TextProvider;
use super::state::ConverterState;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The converted text only.
    #[default]
    Text,
    /// JSON object with items and output.
    Json,
    /// Numbered item table.
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown format: {s}. Use: text, json, table")),
        }
    }
}

/// A finished conversion, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub direction: Direction,
    pub delimiter: Delimiter,
    pub items: Vec<String>,
    pub output: String,
}

impl ConversionReport {
    /// Runs a conversion and captures its items.
    #[must_use]
    pub fn build(direction: Direction, raw: &str, delimiter: Delimiter) -> Self {
        Self {
            direction,
            delimiter,
            items: converter::items_of(direction, raw, delimiter),
            output: converter::convert(direction, raw, delimiter),
        }
    }
}

/// Formats a report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_report_json(report: &ConversionReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Formats the report's items as a numbered table.
pub fn format_report_table(report: &ConversionReport, text: &dyn TextProvider) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#".to_string(), text.text("fields.output")]);

    for (i, item) in report.items.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), item.clone()]);
    }

    table.to_string()
}

/// Renders the whole interactive screen: tab, delimiter, both fields, notice.
pub fn format_screen(state: &ConverterState, text: &dyn TextProvider) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  [{}]\n",
        text.text("title").bold(),
        state.language.label()
    ));
    out.push_str(&format!(
        "{} | {}: {}\n\n",
        text.text(state.direction.tab_key()).cyan(),
        text.text("select_delimiter"),
        text.text(state.delimiter.label_key())
    ));

    out.push_str(&format!("{}\n", text.text("paste_label").dimmed()));
    out.push_str(&field_or_placeholder(&state.input, &text.text("placeholder_input")));
    out.push_str("\n\n");

    out.push_str(&format!("{}\n", text.text("result_label").dimmed()));
    out.push_str(&field_or_placeholder(&state.output, &text.text("placeholder_output")));
    out.push('\n');

    if let Some(notice) = &state.notice {
        let field = text.text(notice.field.label_key());
        out.push_str(&format!(
            "\n{} {}\n",
            "✓".green().bold(),
            text.text_with("copied", &[("field", field.as_str())]).green()
        ));
    }

    out
}

fn field_or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.dimmed().italic().to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::i18n::Catalog;
    use crate::domain::{CopyField, Language};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_report_json_fields() {
        let report = ConversionReport::build(Direction::JoinedToList, "a| b", Delimiter::Pipe);
        let json: serde_json::Value =
            serde_json::from_str(&format_report_json(&report).unwrap()).unwrap();

        assert_eq!(json["direction"], "split");
        assert_eq!(json["delimiter"], "pipe");
        assert_eq!(json["items"], serde_json::json!(["a", "b"]));
        assert_eq!(json["output"], "a\nb");
    }

    #[test]
    fn test_report_table_lists_items() {
        let report = ConversionReport::build(Direction::ListToJoined, "x\ny", Delimiter::Comma);
        let table = format_report_table(&report, &Catalog::new(Language::En));
        assert!(table.contains('x'));
        assert!(table.contains('y'));
        assert!(table.contains("Output"));
    }

    #[test]
    fn test_screen_shows_notice_in_language() {
        colored::control::set_override(false);
        let (state, _) = ConverterState::default()
            .with_language(Language::Uk)
            .with_input("a")
            .convert()
            .copied(CopyField::Output);

        let screen = format_screen(&state, &Catalog::new(Language::Uk));
        assert!(screen.contains("Результат скопійовано!"));
        assert!(screen.contains("Кома (,)"));
    }
}
