use std::process::ExitCode;

use clap::Args;
use keyguard_validator::{DEFAULT_MAX_INPUT_LEN, KeyValidator, ValidatorConfig};
use tracing::debug;

use crate::error::Result;
use crate::output::{OutputFormat, render};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the PEM file. If not specified, reads from stdin
    pub(crate) file: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub(crate) output: OutputFormat,

    /// Largest accepted input in bytes, after trimming
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_INPUT_LEN)]
    pub(crate) max_input_bytes: usize,

    /// Accept input of any size
    #[arg(long, conflicts_with = "max_input_bytes")]
    pub(crate) no_size_limit: bool,

    /// Require the footer label to match the header label
    #[arg(long)]
    pub(crate) strict_pairing: bool,
}

impl Config {
    fn validator_config(&self) -> ValidatorConfig {
        let max_input_len = (!self.no_size_limit).then_some(self.max_input_bytes);
        ValidatorConfig::default()
            .with_max_input_len(max_input_len)
            .with_require_matching_footer(self.strict_pairing)
    }
}

/// Prints the verdict and maps it to the process exit code.
pub(crate) fn execute(config: Config) -> Result<ExitCode> {
    let input = read_input(config.file.as_deref())?;
    debug!(
        source = config.file.as_deref().unwrap_or("<stdin>"),
        bytes = input.len(),
        "read input"
    );

    let validator = KeyValidator::new(config.validator_config());
    let result = validator.validate(&input);
    println!("{}", render(&result, config.output)?);

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
