use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use linkstack_config::{LinkstackConfig, DEFAULT_CONFIG_PATH};
use linkstack_core::Stack;
use linkstack_telemetry::{EventLogger, StackMetrics};
use tracing::{debug, info};

use crate::error::CliError;
use crate::reverse::reverse_word;

#[derive(Parser, Debug)]
#[command(version, about = "Reverse every argument through a bounded linked stack")]
pub struct Cli {
    /// Configuration file (defaults to config/linkstack.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum characters kept per word; 0 leaves the stack unbounded
    #[arg(short, long)]
    pub max: Option<usize>,

    /// Print Prometheus counters after the run
    #[arg(long)]
    pub metrics: bool,

    /// Words to reverse
    pub words: Vec<String>,
}

pub fn run_command(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => LinkstackConfig::load_from_path(path)?,
        None => LinkstackConfig::load()?,
    };
    EventLogger::init(&config.telemetry.log_level);
    if cli.config.is_none() && !Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("{} not found, using default configuration", DEFAULT_CONFIG_PATH);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Builds the stack described by `config` and `cli`, then reverses every word into `out`.
pub fn execute<W: Write>(cli: &Cli, config: &LinkstackConfig, out: &mut W) -> Result<(), CliError> {
    let mut stack = Stack::new(config.stack.element_size)?;
    stack.set_max_elements(cli.max.unwrap_or(config.stack.max_elements))?;
    debug!(?stack, "stack ready");

    let metrics = StackMetrics::new()?;
    for word in &cli.words {
        let reversal = reverse_word(&mut stack, word, &metrics)?;
        writeln!(out, "{} <-> {}", word, reversal.reversed)?;
    }

    if cli.metrics || config.telemetry.metrics {
        write!(out, "{}", metrics.gather_metrics()?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str], config: &LinkstackConfig) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("linkstack").chain(args.iter().copied()))
            .expect("arguments parse");
        let mut out = Vec::new();
        execute(&cli, config, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn parses_flags_and_words() {
        let cli = Cli::try_parse_from(["linkstack", "--max", "3", "--metrics", "ab", "cd"]).unwrap();
        assert_eq!(cli.max, Some(3));
        assert!(cli.metrics);
        assert!(cli.config.is_none());
        assert_eq!(cli.words, ["ab", "cd"]);
    }

    #[test]
    fn reverses_each_word_with_default_capacity() {
        let output = run(&["hello", "abcdefghij"], &LinkstackConfig::default()).unwrap();
        assert_eq!(output, "hello <-> olleh\nabcdefghij <-> hgfedcba\n");
    }

    #[test]
    fn max_flag_overrides_config() {
        let output = run(&["--max", "0", "abcdefghij"], &LinkstackConfig::default()).unwrap();
        assert_eq!(output, "abcdefghij <-> jihgfedcba\n");

        let output = run(&["-m", "2", "xyz"], &LinkstackConfig::default()).unwrap();
        assert_eq!(output, "xyz <-> yx\n");
    }

    #[test]
    fn byte_sized_config_is_honoured() {
        let mut config = LinkstackConfig::default();
        config.stack.element_size = 1;
        config.stack.max_elements = 0;
        let output = run(&["rust"], &config).unwrap();
        assert_eq!(output, "rust <-> tsur\n");
    }

    #[test]
    fn no_words_prints_nothing() {
        let output = run(&[], &LinkstackConfig::default()).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn metrics_are_appended_on_request() {
        let output = run(&["--metrics", "abc"], &LinkstackConfig::default()).unwrap();
        assert!(output.starts_with("abc <-> cba\n"));
        assert!(output.contains("linkstack_pushes_total 3"));
        assert!(output.contains("linkstack_pops_total 3"));
    }

    #[test]
    fn unsupported_element_size_is_an_error() {
        let mut config = LinkstackConfig::default();
        config.stack.element_size = 3;
        let err = run(&["abc"], &config).unwrap_err();
        assert!(matches!(err, CliError::UnsupportedElementSize(3)));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::try_parse_from(["linkstack", "--config", "no/such/linkstack.yaml"]).unwrap();
        let err = run_command(cli).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
