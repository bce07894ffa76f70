//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::display::{EMPTY_MESSAGE, controls_line};
use crate::models::{ListView, PostDetailDisplay, ViewState};

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        print(self, format)
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

impl<D: Tabled + Serialize> Formattable for Vec<D> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

impl<D: Tabled + Serialize> Formattable for ListView<D> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        if let OutputFormat::Json = format {
            return Ok(json::format_json(self)?);
        }

        let body = match &self.state {
            ViewState::Items { items } => table::format_table(items),
            ViewState::Empty => EMPTY_MESSAGE.to_string(),
            ViewState::Error { message } => format!("{} {}", "✗".red(), message.red()),
        };

        let mut output = format!("{}\n{}", self.heading.bold(), body);
        if let Some(ref controls) = self.pagination {
            output.push('\n');
            output.push_str(&controls_line(controls).dimmed().to_string());
        }
        Ok(output)
    }
}

impl Formattable for PostDetailDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        if let OutputFormat::Json = format {
            return Ok(json::format_json(self)?);
        }

        let mut lines = vec![
            self.title.bold().to_string(),
            format!("{} {}", "Video:".bold(), self.video.primary),
            format!("{} {}", "Fallback:".bold(), self.video.fallback),
        ];
        if let Some(ref image) = self.image_url {
            lines.push(format!("{} {}", "Image:".bold(), image));
        }
        if let Some(ref playback) = self.playback {
            let status = if playback.playable {
                format!("{} {}", "✓".green(), playback.url)
            } else {
                format!("{} no playable source", "✗".red())
            };
            lines.push(format!("{} {}", "Playback:".bold(), status));
        }
        if !self.content.is_empty() {
            lines.push(String::new());
            lines.push(self.content.clone());
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Error};
    use crate::models::TagDisplay;

    #[test]
    fn test_error_view_table_output() {
        let err: Error = ApiError::HttpStatus(500).into();
        let view: ListView<TagDisplay> = ListView::error("Latest", &err);

        let output = view.format(OutputFormat::Table).unwrap();

        assert!(output.contains("Latest"));
        assert!(output.contains("HTTP status 500"));
        assert!(!output.contains("Page"));
    }

    #[test]
    fn test_empty_view_table_output() {
        let view: ListView<TagDisplay> = ListView {
            heading: "Search: zzz".to_string(),
            state: ViewState::Empty,
            pagination: None,
        };

        let output = view.format(OutputFormat::Table).unwrap();
        assert!(output.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_list_view_json_output() {
        let view = ListView {
            heading: "Tags".to_string(),
            state: ViewState::Items {
                items: vec![TagDisplay {
                    id: 1,
                    name: "drama".to_string(),
                    post_count: 3,
                }],
            },
            pagination: None,
        };

        let output = view.format(OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["data"]["status"], "items");
        assert_eq!(parsed["data"]["items"][0]["name"], "drama");
        assert!(parsed["meta"]["version"].is_string());
    }
}
