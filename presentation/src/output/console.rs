//! Human-readable console output

use colored::Colorize;
use miniperplx_domain::{SearchGroupId, ToolName, groups_allowing};

/// Formats catalog listings and config summaries for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Every tool with the search groups that may call it
    pub fn tool_catalog() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Tools:".cyan().bold()));

        let width = ToolName::ALL
            .iter()
            .map(|tool| tool.as_str().len())
            .max()
            .unwrap_or(0);

        for tool in ToolName::ALL {
            let groups = groups_allowing(tool);
            let groups = if groups.is_empty() {
                "(no group)".dimmed().to_string()
            } else {
                groups
                    .iter()
                    .map(SearchGroupId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                tool.as_str().yellow(),
                groups,
                width = width
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Groups:".cyan().bold(),
            SearchGroupId::ALL
                .iter()
                .map(SearchGroupId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output
    }

    /// Config source lines plus the effective configuration
    pub fn config_report(sources: &[String], effective: &str) -> String {
        let mut output = String::new();
        for line in sources {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&format!(
            "\n{}\n{}",
            "Effective configuration:".cyan().bold(),
            effective
        ));
        output
    }
}
