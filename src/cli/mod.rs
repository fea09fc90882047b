use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// A geotagged journal from the command line
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// The operations waymark can perform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new entry
    Add {
        /// Entry title (defaults to "Untitled")
        #[clap(short, long)]
        title: Option<String>,

        /// Notes body
        #[clap(short, long)]
        notes: Option<String>,

        /// Entry date (format: YYYY-MM-DD or YYYYMMDD; defaults to today)
        #[clap(short, long)]
        date: Option<String>,

        /// Latitude in decimal degrees
        #[clap(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees
        #[clap(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Image file to attach (rescaled for storage)
        #[clap(short, long)]
        photo: Option<PathBuf>,
    },

    /// List all entries, newest first
    List,

    /// Show a single entry in full
    Show {
        /// Id of the entry to show
        id: Uuid,
    },

    /// Edit fields of an existing entry
    Edit {
        /// Id of the entry to edit
        id: Uuid,

        /// New title
        #[clap(short, long)]
        title: Option<String>,

        /// New notes body
        #[clap(short, long)]
        notes: Option<String>,

        /// New date (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(short, long)]
        date: Option<String>,

        /// New latitude in decimal degrees
        #[clap(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// New longitude in decimal degrees
        #[clap(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Replacement image file
        #[clap(short, long)]
        photo: Option<PathBuf>,
    },

    /// Delete an entry
    Delete {
        /// Id of the entry to delete
        id: Uuid,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_add_with_full_arguments() {
        let args = CliArgs::parse_from(vec![
            "waymark", "add", "--title", "Pier", "--notes", "Windy.", "--date", "2020-03-01",
            "--lat", "-33.9", "--lon", "18.4",
        ]);
        match args.command {
            Command::Add {
                title,
                notes,
                date,
                lat,
                lon,
                photo,
            } => {
                assert_eq!(title.as_deref(), Some("Pier"));
                assert_eq!(notes.as_deref(), Some("Windy."));
                assert_eq!(date.as_deref(), Some("2020-03-01"));
                assert_eq!(lat, Some(-33.9));
                assert_eq!(lon, Some(18.4));
                assert!(photo.is_none());
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_add_latitude_requires_longitude() {
        let result =
            CliArgs::try_parse_from(vec!["waymark", "add", "--lat", "1.0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_subcommand() {
        let args = CliArgs::parse_from(vec!["waymark", "list"]);
        assert!(matches!(args.command, Command::List));
    }

    #[test]
    fn test_show_parses_id() {
        let args = CliArgs::parse_from(vec![
            "waymark",
            "show",
            "5d3f0af1-9d9c-4b11-a2f5-3b7a5ed7c921",
        ]);
        match args.command {
            Command::Show { id } => {
                assert_eq!(id.to_string(), "5d3f0af1-9d9c-4b11-a2f5-3b7a5ed7c921");
            }
            other => panic!("Expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_show_rejects_malformed_id() {
        let result = CliArgs::try_parse_from(vec!["waymark", "show", "not-a-uuid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let args = CliArgs::parse_from(vec!["waymark", "list", "--verbose"]);
        assert!(args.verbose);

        let args = CliArgs::parse_from(vec!["waymark", "-v", "list"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_date_iso_format() {
        let date = parse_date("2023-01-15").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_compact_format() {
        let date = parse_date("20230115").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        assert!(parse_date("invalid-date").is_err());
        assert!(parse_date("2023-13-40").is_err());
    }
}
