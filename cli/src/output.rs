use keyguard_validator::ValidationResult;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable one-line verdict
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

pub(crate) fn render(result: &ValidationResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text if result.is_valid() => format!("valid: {result}"),
        OutputFormat::Text => format!("invalid: {result}"),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yml::to_string(result)?.trim_end().to_string(),
    };
    Ok(rendered)
}
