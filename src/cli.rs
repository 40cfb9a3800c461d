use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hmscalc::ConvertUnit;

/// hmscalc - hours:minutes:seconds calculator
#[derive(Parser, Debug)]
#[command(name = "hmscalc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Times are written [-]H:MM[:SS], e.g. 1:30, 12:05:09 or -0:45.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./hmscalc.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two times
    Add {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Subtract the second time from the first
    Sub {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Sum any number of times (reads one per line from stdin if none given)
    Sum {
        #[arg(allow_hyphen_values = true)]
        times: Vec<String>,

        /// Read a JSON array of time strings from stdin
        #[arg(long, conflicts_with = "times")]
        from_json: bool,
    },

    /// Convert a time to seconds, minutes, hours or components
    Convert {
        #[arg(allow_hyphen_values = true)]
        time: String,

        /// Unit to print (defaults to config `convert.unit`)
        #[arg(short, long, value_enum)]
        unit: Option<ConvertUnit>,
    },

    /// Compare two times, printing <, = or >
    Compare {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Explain the time format and commands
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_add() {
        let cli = Cli::try_parse_from(["hmscalc", "add", "1:30", "0:45"]).unwrap();
        if let Commands::Add { left, right } = cli.command {
            assert_eq!(left, "1:30");
            assert_eq!(right, "0:45");
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_accepts_negative_times() {
        let cli = Cli::try_parse_from(["hmscalc", "sub", "-1:00", "-0:30:15"]).unwrap();
        if let Commands::Sub { left, right } = cli.command {
            assert_eq!(left, "-1:00");
            assert_eq!(right, "-0:30:15");
        } else {
            panic!("Expected Sub command");
        }
    }

    #[test]
    fn test_cli_parse_sum_many() {
        let cli = Cli::try_parse_from(["hmscalc", "sum", "1:00", "-0:15", "2:00:01"]).unwrap();
        if let Commands::Sum { times, .. } = cli.command {
            assert_eq!(times, vec!["1:00", "-0:15", "2:00:01"]);
        } else {
            panic!("Expected Sum command");
        }
    }

    #[test]
    fn test_cli_parse_sum_empty() {
        let cli = Cli::try_parse_from(["hmscalc", "sum"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sum { times, from_json: false } if times.is_empty()
        ));
    }

    #[test]
    fn test_cli_parse_sum_from_json() {
        let cli = Cli::try_parse_from(["hmscalc", "sum", "--from-json"]).unwrap();
        assert!(matches!(cli.command, Commands::Sum { from_json: true, .. }));
        assert!(Cli::try_parse_from(["hmscalc", "sum", "--from-json", "1:00"]).is_err());
    }

    #[test]
    fn test_cli_parse_convert_unit() {
        let cli = Cli::try_parse_from(["hmscalc", "convert", "1:02:03", "--unit", "minutes"])
            .unwrap();
        if let Commands::Convert { time, unit } = cli.command {
            assert_eq!(time, "1:02:03");
            assert_eq!(unit, Some(ConvertUnit::Minutes));
        } else {
            panic!("Expected Convert command");
        }
    }

    #[test]
    fn test_cli_convert_unit_defaults_to_none() {
        let cli = Cli::try_parse_from(["hmscalc", "convert", "1:00"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert { unit: None, .. }));
    }

    #[test]
    fn test_cli_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["hmscalc", "convert", "1:00", "--unit", "days"]).is_err());
    }

    #[test]
    fn test_cli_json_flag_is_global() {
        let cli = Cli::try_parse_from(["hmscalc", "--json", "add", "1:00", "2:00"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["hmscalc", "-vv", "explain"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_config_flag() {
        let cli = Cli::try_parse_from(["hmscalc", "--config", "x.toml", "explain"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
