//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render a serializable value in the configured format.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Toml => toml::to_string_pretty(value)?,
        };
        Ok(rendered)
    }

    /// Print a serializable value in the configured format.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    /// Print a message if not in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        total: usize,
        query: String,
    }

    fn sample() -> Sample {
        Sample {
            total: 2,
            query: "apple".to_string(),
        }
    }

    #[test]
    fn test_render_json() {
        let output = Output::new(OutputFormat::Json, false);
        let rendered = output.render(&sample()).unwrap();
        assert!(rendered.contains("\"total\": 2"));
    }

    #[test]
    fn test_render_yaml() {
        let output = Output::new(OutputFormat::Yaml, false);
        let rendered = output.render(&sample()).unwrap();
        assert!(rendered.contains("query: apple"));
    }

    #[test]
    fn test_render_toml() {
        let output = Output::new(OutputFormat::Toml, true);
        let rendered = output.render(&sample()).unwrap();
        assert!(rendered.contains("total = 2"));
    }
}
