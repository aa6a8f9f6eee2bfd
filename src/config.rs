use crate::complaints_core::error::ComplaintError;
use crate::complaints_core::filter::DateRange;
use crate::complaints_core::timestamp::parse_bound;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "borough_complaints")]
#[command(about = "Count complaints by type and borough within a creation-date range")]
pub struct Cli {
    #[arg(short, long, help = "Input CSV file")]
    pub input: PathBuf,

    #[arg(short = 's', long = "start_date", help = "Start date in YYYY-MM-DD format")]
    pub start_date: String,

    #[arg(short = 'e', long = "end_date", help = "End date in YYYY-MM-DD format")]
    pub end_date: String,

    #[arg(short, long, help = "Output file (optional, defaults to stdout)")]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv, help = "Output format")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Jsonl,
    Sqlite,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Sqlite => "sqlite",
        }
    }

    /// Whether the format can be streamed to stdout
    pub fn supports_stdout(&self) -> bool {
        !matches!(self, OutputFormat::Sqlite)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    MissingOutput(&'static str),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingOutput(format) => {
                write!(f, "Output format '{}' requires --output", format)
            }
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub range: DateRange,
    pub output: OutputTarget,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn from_args(cli: Cli) -> Result<Self, ComplaintError> {
        let start = parse_bound(&cli.start_date)?;
        let end = parse_bound(&cli.end_date)?;

        let output = match cli.output {
            Some(path) => {
                if path == cli.input {
                    return Err(ConfigError::InvalidValue(format!(
                        "output path {} would overwrite the input",
                        path.display()
                    ))
                    .into());
                }
                OutputTarget::File(path)
            }
            None if cli.format.supports_stdout() => OutputTarget::Stdout,
            None => return Err(ConfigError::MissingOutput(cli.format.as_str()).into()),
        };

        Ok(Self {
            input: cli.input,
            range: DateRange::new(start, end),
            output,
            format: cli.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["borough_complaints"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = parse(&["-i", "in.csv", "-s", "2020-01-01", "-e", "2020-01-31"]);
        let long = parse(&[
            "--input",
            "in.csv",
            "--start_date",
            "2020-01-01",
            "--end_date",
            "2020-01-31",
            "--output",
            "out.csv",
        ]);

        assert_eq!(short.input, PathBuf::from("in.csv"));
        assert_eq!(short.output, None);
        assert_eq!(short.format, OutputFormat::Csv);
        assert_eq!(long.start_date, "2020-01-01");
        assert_eq!(long.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_required_flags() {
        let result = Cli::try_parse_from(["borough_complaints", "-i", "in.csv", "-s", "2020-01-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_config_from_args() {
        let config = RunConfig::from_args(parse(&[
            "-i", "in.csv", "-s", "2020-01-01", "-e", "2020-01-31", "-f", "jsonl",
        ]))
        .unwrap();

        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(config.range.start, start);
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.format, OutputFormat::Jsonl);
    }

    #[test]
    fn test_sqlite_requires_output() {
        let result = RunConfig::from_args(parse(&[
            "-i", "in.csv", "-s", "2020-01-01", "-e", "2020-01-31", "-f", "sqlite",
        ]));
        assert!(matches!(
            result,
            Err(ComplaintError::Config(ConfigError::MissingOutput("sqlite")))
        ));
    }

    #[test]
    fn test_bad_bound_is_rejected() {
        let result = RunConfig::from_args(parse(&["-i", "in.csv", "-s", "soon", "-e", "2020-01-31"]));
        assert!(matches!(result, Err(ComplaintError::InvalidDate(_))));
    }

    #[test]
    fn test_output_must_differ_from_input() {
        let result = RunConfig::from_args(parse(&[
            "-i", "data.csv", "-s", "2020-01-01", "-e", "2020-01-31", "-o", "data.csv",
        ]));
        assert!(matches!(result, Err(ComplaintError::Config(ConfigError::InvalidValue(_)))));
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let config = RunConfig::from_args(parse(&["-i", "in.csv", "-s", "2020-02-01", "-e", "2020-01-01"]))
            .unwrap();
        assert!(config.range.is_inverted());
    }
}
