use crate::models::{KnownBody, LayoutKind};
use crate::utils::constants::LANDING_SITES_FILE;
use crate::utils::Axis;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landing-sites")]
#[command(about = "Landing-site coordinate parser and great-circle distance calculator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List landing sites and the great-circle distances between every pair
    Sites {
        #[arg(
            short,
            long,
            default_value = LANDING_SITES_FILE,
            help = "Delimited landing-site file"
        )]
        input: PathBuf,

        #[arg(short, long, value_enum, help = "Body to measure on [default: mars]")]
        body: Option<KnownBody>,

        #[arg(long, help = "Custom body radius in kilometres (overrides --body)")]
        radius_km: Option<f64>,

        #[arg(long, value_enum, help = "Record layout [default: landing-sites]")]
        layout: Option<LayoutKind>,

        #[arg(long, help = "Treat the first record as data rather than a header")]
        no_headers: bool,

        #[arg(
            long,
            default_value = ",",
            value_parser = parse_delimiter,
            help = "Field delimiter (a single ASCII character)"
        )]
        delimiter: u8,

        #[arg(long, help = "Print the catalogue as JSON")]
        json: bool,
    },

    /// Distance between two locations such as "(51°30'N, 0°08'W)"
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        from: String,

        #[arg(long, allow_hyphen_values = true)]
        to: String,

        #[arg(short, long, value_enum, help = "Body to measure on [default: earth]")]
        body: Option<KnownBody>,

        #[arg(long, help = "Custom body radius in kilometres (overrides --body)")]
        radius_km: Option<f64>,
    },

    /// Convert a coordinate between decimal and degrees/minutes/seconds notation
    Convert {
        #[arg(allow_hyphen_values = true)]
        coordinate: String,

        #[arg(short, long, value_enum, default_value_t = Axis::Latitude)]
        axis: Axis,
    },
}

/// Multi-byte characters would split UTF-8 sequences in the input
fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("expected a single ASCII character, got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_distance_command() {
        let cli = Cli::try_parse_from([
            "landing-sites",
            "distance",
            "--from",
            "(51°30'N, 0°08'W)",
            "--to",
            "(48°51'N, 2°21'E)",
            "--body",
            "earth",
        ])
        .unwrap();

        match cli.command {
            Commands::Distance { from, body, .. } => {
                assert_eq!(from, "(51°30'N, 0°08'W)");
                assert_eq!(body, Some(KnownBody::Earth));
            }
            _ => panic!("expected distance command"),
        }
    }

    #[test]
    fn test_parse_negative_coordinate() {
        let cli =
            Cli::try_parse_from(["landing-sites", "convert", "-33.8688", "--axis", "latitude"])
                .unwrap();

        match cli.command {
            Commands::Convert { coordinate, axis } => {
                assert_eq!(coordinate, "-33.8688");
                assert_eq!(axis, Axis::Latitude);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_sites_defaults() {
        let cli = Cli::try_parse_from(["landing-sites", "sites"]).unwrap();

        match cli.command {
            Commands::Sites {
                input,
                layout,
                delimiter,
                ..
            } => {
                assert_eq!(input, PathBuf::from(LANDING_SITES_FILE));
                assert_eq!(layout, None);
                assert_eq!(delimiter, b',');
            }
            _ => panic!("expected sites command"),
        }
    }

    #[test]
    fn test_delimiter_must_be_single_ascii_character() {
        let cli = Cli::try_parse_from(["landing-sites", "sites", "--delimiter", ";"]).unwrap();
        match cli.command {
            Commands::Sites { delimiter, .. } => assert_eq!(delimiter, b';'),
            _ => panic!("expected sites command"),
        }

        for bad in ["§", "é", ";;", ""] {
            assert!(
                Cli::try_parse_from(["landing-sites", "sites", "--delimiter", bad]).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }
}
