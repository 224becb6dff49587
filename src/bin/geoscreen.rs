//! Geographic conversion tool
//!
//! Converts vectors to latitude/longitude, switches coordinate pairs
//! between radians and degrees, and projects coordinates onto a screen.
//!
//! Usage:
//!   cargo run --bin geoscreen -- to-geo 0 1 0 --degrees
//!   cargo run --bin geoscreen -- project 0.5 -1.2 --width 800 --height 400
//!   cargo run --bin geoscreen -- --json project-vector 1 1 1 --width 640 --height 480 --border 0
//!
//! Set RUST_LOG=debug to see which projection branch is taken.

use clap::{ArgAction, Parser, Subcommand};
use geoscreen::constants::DEFAULT_BORDER;
use geoscreen::{
    degrees_to_radians, radians_to_degrees, vector_to_coordinates, Equirectangular,
    GeoCoordinate, ScreenPoint, ScreenSize,
};
use serde::Serialize;
use std::fmt;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Geographic coordinate and projection tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts between vectors, geographic coordinates, and screen positions",
    long_about = None
)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    /// Log projection details (overridden by RUST_LOG)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an (x, y, z) vector to latitude and longitude
    ToGeo {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,

        /// Report the result in degrees instead of radians
        #[arg(long, action = ArgAction::SetTrue)]
        degrees: bool,
    },

    /// Convert a latitude/longitude pair from degrees to radians
    ToRadians {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Convert a latitude/longitude pair from radians to degrees
    ToDegrees {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Project a latitude/longitude pair onto a screen
    Project {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        #[command(flatten)]
        screen: ScreenArgs,

        /// Input coordinates are in degrees instead of radians
        #[arg(long, action = ArgAction::SetTrue)]
        degrees: bool,
    },

    /// Project an (x, y, z) vector onto a screen
    ProjectVector {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,

        #[command(flatten)]
        screen: ScreenArgs,
    },
}

#[derive(clap::Args, Debug)]
struct ScreenArgs {
    /// Screen width in pixels
    #[arg(long)]
    width: f64,

    /// Screen height in pixels
    #[arg(long)]
    height: f64,

    /// Margin kept on every side of the screen
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    border: f64,
}

impl ScreenArgs {
    fn projector(&self) -> Equirectangular {
        Equirectangular::new().with_border(self.border)
    }

    fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }
}

/// Result of a single command
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
enum Output {
    Coordinate(GeoCoordinate),
    Point(ScreenPoint),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Coordinate(coord) => write!(f, "{}", coord),
            Output::Point(point) => write!(f, "{}", point),
        }
    }
}

/// Runs one command and returns its result
fn run(command: &Command) -> Result<Output> {
    let output = match command {
        Command::ToGeo { x, y, z, degrees } => {
            let coord = vector_to_coordinates((*x, *y, *z))?;
            Output::Coordinate(if *degrees { coord.to_degrees() } else { coord })
        }
        Command::ToRadians {
            latitude,
            longitude,
        } => Output::Coordinate(degrees_to_radians((*latitude, *longitude))),
        Command::ToDegrees {
            latitude,
            longitude,
        } => Output::Coordinate(radians_to_degrees((*latitude, *longitude))),
        Command::Project {
            latitude,
            longitude,
            screen,
            degrees,
        } => {
            let coord = GeoCoordinate::new(*latitude, *longitude);
            let coord = if *degrees { coord.to_radians() } else { coord };
            Output::Point(screen.projector().project(coord, screen.size()))
        }
        Command::ProjectVector { x, y, z, screen } => Output::Point(
            screen
                .projector()
                .project_vector((*x, *y, *z), screen.size())?,
        ),
    };
    Ok(output)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = run(&args.command).and_then(|output| {
        if args.json {
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("{}", output);
        }
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("geoscreen").chain(argv.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_to_geo_in_degrees() {
        let args = parse(&["to-geo", "0", "0", "2", "--degrees"]);
        let Output::Coordinate(coord) = run(&args.command).unwrap() else {
            panic!("expected a coordinate");
        };
        assert_abs_diff_eq!(coord.latitude, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_positionals() {
        let args = parse(&["to-radians", "-90", "-180"]);
        let output = run(&args.command).unwrap();
        assert_eq!(
            output,
            Output::Coordinate(GeoCoordinate::new(
                -std::f64::consts::FRAC_PI_2,
                -std::f64::consts::PI
            ))
        );
    }

    #[test]
    fn test_project_uses_default_border() {
        let args = parse(&["project", "0", "0", "--width", "120", "--height", "120"]);
        let output = run(&args.command).unwrap();
        assert_eq!(output, Output::Point(ScreenPoint::new(60.0, 60.0)));
    }

    #[test]
    fn test_project_degrees_json() {
        let args = parse(&[
            "--json", "project", "0", "0", "--width", "800", "--height", "400", "--border", "0",
            "--degrees",
        ]);
        assert!(args.json);
        let output = run(&args.command).unwrap();
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"x":400.0,"y":200.0}"#
        );
    }

    #[test]
    fn test_zero_vector_fails() {
        let args = parse(&["project-vector", "0", "0", "0", "--width", "10", "--height", "10"]);
        let err = run(&args.command).unwrap_err();
        assert!(err.to_string().starts_with("Domain error"));
    }
}
