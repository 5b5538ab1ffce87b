//! Lists emergency facilities nearest to a position and draws them.
//!
//! Usage:
//!   emergency-map --lat 40.7589 --lng -73.9851 --output map.png
//!   emergency-map --unavailable timeout --facilities facilities.json
//!
//! Without `--facilities` a small built-in set is used. The facilities
//! file is a JSON array of objects with `id`, `name`, `type` (one of
//! `hospital`, `ambulance`, `blood_bank`), `phone`, `address`, and
//! `coordinates` holding `latitude` and `longitude`.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use emergency_map::facility::{
    rank, sample_facilities, Facility, RankedFacility,
};
use emergency_map::location::{LocationFix, Unavailable};
use emergency_map::map::{format_distance, MapRenderer};
use emergency_map::render::Surface;
use emergency_map::style::MapStyle;
use emergency_map::world::Coordinate;

/// Find the nearest emergency facilities and render them on a map
#[derive(Parser, Debug)]
#[command(name = "emergency-map")]
struct Args {
    /// Latitude of the user in degrees
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of the user in degrees
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Why no position is available (permission_denied,
    /// position_unavailable, timeout, unsupported)
    #[arg(long, conflicts_with = "lat")]
    unavailable: Option<Unavailable>,

    /// JSON file with the facilities
    #[arg(long, short = 'f')]
    facilities: Option<PathBuf>,

    /// JSON file with map style overrides
    #[arg(long, short = 's')]
    style: Option<PathBuf>,

    /// Logical width of the map
    #[arg(long, default_value_t = 640.)]
    width: f64,

    /// Logical height of the map
    #[arg(long, default_value_t = 320.)]
    height: f64,

    /// Device pixel ratio
    #[arg(long, default_value_t = 1.)]
    ratio: f64,

    /// Where to write the PNG
    #[arg(long, short = 'o', default_value = "map.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default()
        ))
        .init();

    let args = Args::parse();
    let fix = location_fix(&args)?;

    let facilities = match args.facilities.as_deref() {
        Some(path) => load_json::<Vec<Facility>>(path)?,
        None => sample_facilities(),
    };
    check_facilities(&facilities)?;

    let style = match args.style.as_deref() {
        Some(path) => load_json::<MapStyle>(path)?,
        None => MapStyle::default(),
    };

    let ranked = write_listing(&mut io::stdout().lock(), fix, &facilities)?;

    let mut surface = Surface::new(args.width, args.height, args.ratio)?;
    MapRenderer::new(style).render(&mut surface, fix.coordinate(), &ranked);
    let mut file = File::create(&args.output).with_context(|| {
        format!("failed to create {}", args.output.display())
    })?;
    surface.write_png(&mut file)?;
    tracing::info!(output = %args.output.display(), "map written");
    Ok(())
}

/// Builds the log filter from `RUST_LOG` style directives.
///
/// Events at warn and above are shown if the directives don’t say
/// otherwise.
fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn location_fix(args: &Args) -> anyhow::Result<LocationFix> {
    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            Ok(LocationFix::Located(Coordinate::checked(lat, lng)?))
        }
        _ => Ok(LocationFix::Unavailable(
            args.unavailable.unwrap_or(Unavailable::PositionUnavailable)
        )),
    }
}

fn check_facilities(facilities: &[Facility]) -> anyhow::Result<()> {
    for facility in facilities {
        if !facility.coordinate.is_valid() {
            bail!(
                "facility '{}' has invalid coordinates {:?}",
                facility.id, facility.coordinate
            );
        }
    }
    Ok(())
}

/// Prints the facilities and returns those that go onto the map.
///
/// With a position the facilities are listed nearest first. Without one
/// they are listed in the order given and none are returned.
fn write_listing(
    out: &mut impl Write,
    fix: LocationFix,
    facilities: &[Facility],
) -> io::Result<Vec<RankedFacility>> {
    let ranked = match fix {
        LocationFix::Located(user) => {
            let ranked = rank(user, facilities);
            writeln!(
                out, "Emergency services nearest to {}, {}:",
                user.latitude, user.longitude
            )?;
            for item in &ranked {
                let facility = item.facility();
                writeln!(
                    out, "  {:<30} {:<10} {:>7}  ~{} min  {}  {}",
                    facility.name, facility.category,
                    format_distance(item.distance()), item.travel_minutes(),
                    facility.phone, item.directions_url(),
                )?;
            }
            ranked
        }
        LocationFix::Unavailable(reason) => {
            writeln!(out, "{}", reason.message())?;
            writeln!(out, "Emergency services:")?;
            for facility in facilities {
                writeln!(
                    out, "  {:<30} {:<10} {}  {}",
                    facility.name, facility.category, facility.phone,
                    facility.address,
                )?;
            }
            Vec::new()
        }
    };
    if facilities.is_empty() {
        writeln!(
            out,
            "No emergency facilities found. \
             Please try again or contact 911."
        )?;
    }
    Ok(ranked)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| {
        format!("failed to open {}", path.display())
    })?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| {
        format!("failed to parse {}", path.display())
    })
}


//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use emergency_map::facility::Category;

    fn listing(fix: LocationFix, facilities: &[Facility]) -> (String, usize) {
        let mut out = Vec::new();
        let ranked = write_listing(&mut out, fix, facilities).unwrap();
        (String::from_utf8(out).unwrap(), ranked.len())
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        use tracing_subscriber::{Layer, Registry};

        let hint = |directives| {
            Layer::<Registry>::max_level_hint(&env_filter(directives))
        };
        assert_eq!(hint(""), Some(LevelFilter::WARN));
        assert_eq!(hint("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(hint("trace"), Some(LevelFilter::TRACE));
    }

    #[test]
    fn position_and_reason_conflict() {
        assert!(Args::try_parse_from([
            "emergency-map", "--lat", "1", "--lng", "2",
            "--unavailable", "timeout",
        ]).is_err());
        assert!(Args::try_parse_from(["emergency-map", "--lat", "1"]).is_err());
    }

    #[test]
    fn location_from_args() {
        let args = Args::try_parse_from([
            "emergency-map", "--lat", "40.7589", "--lng", "-73.9851",
        ]).unwrap();
        assert_eq!(
            location_fix(&args).unwrap(),
            LocationFix::Located(Coordinate::new(40.7589, -73.9851))
        );

        let args = Args::try_parse_from([
            "emergency-map", "--unavailable", "permission_denied",
        ]).unwrap();
        assert_eq!(
            location_fix(&args).unwrap(),
            LocationFix::Unavailable(Unavailable::PermissionDenied)
        );

        let args = Args::try_parse_from(["emergency-map"]).unwrap();
        assert_eq!(
            location_fix(&args).unwrap(),
            LocationFix::Unavailable(Unavailable::PositionUnavailable)
        );

        let args = Args::try_parse_from([
            "emergency-map", "--lat", "91", "--lng", "0",
        ]).unwrap();
        assert!(location_fix(&args).is_err());
    }

    #[test]
    fn invalid_facility_rejected() {
        let mut facilities = sample_facilities();
        assert!(check_facilities(&facilities).is_ok());
        facilities.push(Facility::new(
            "bad", "Nowhere Clinic", Category::Hospital,
            Coordinate::new(0., 200.), "", "",
        ));
        let err = check_facilities(&facilities).unwrap_err();
        assert!(err.to_string().contains("'bad'"));
    }

    #[test]
    fn unranked_listing_without_position() {
        let facilities = sample_facilities();
        let (text, ranked) = listing(
            Unavailable::Timeout.into(), &facilities
        );
        assert_eq!(ranked, 0);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Location request timed out.");
        assert_eq!(lines.len(), 2 + facilities.len());
        for (line, facility) in lines[2..].iter().zip(&facilities) {
            assert!(line.contains(&facility.name));
            assert!(!line.contains("mi "));
        }
    }

    #[test]
    fn ranked_listing_with_position() {
        let (text, ranked) = listing(
            Coordinate::new(40.7589, -73.9851).into(), &sample_facilities()
        );
        assert_eq!(ranked, 4);
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[1].contains("City General Hospital"));
        assert!(lines[1].contains("0.0mi"));
        assert!(lines[2].contains("Metro Emergency Hospital"));
    }

    #[test]
    fn empty_listing_says_so() {
        let (text, ranked) = listing(
            Coordinate::new(0., 0.).into(), &[]
        );
        assert_eq!(ranked, 0);
        assert!(text.contains("No emergency facilities found."));
    }
}
