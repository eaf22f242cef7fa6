//! Command-line front end for the sky snapshot engine.
//!
//! Ships a small built-in bright-star table so the engine is usable
//! out of the box; full catalog ingestion (CSV etc.) belongs to
//! external loaders, not here.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vyoma_catalog::{CatalogStore, CelestialObject, ObjectKind};
use vyoma_engine::{
    Accuracy, FieldOfView, Observer, Projection, SnapshotConfig, SnapshotEngine, TimeScale,
};
use vyoma_ephemeris::{ChebyshevKernel, Provider, moon_phase};
use vyoma_time::UtcInstant;

/// Brightest stars, J2000 (name, RA°, Dec°, visual magnitude).
const BRIGHT_STARS: &[(&str, f64, f64, f64)] = &[
    ("Sirius", 101.287, -16.716, -1.46),
    ("Canopus", 95.988, -52.696, -0.74),
    ("Arcturus", 213.915, 19.182, -0.05),
    ("Vega", 279.235, 38.784, 0.03),
    ("Capella", 79.172, 45.998, 0.08),
    ("Rigel", 78.634, -8.202, 0.13),
    ("Procyon", 114.825, 5.225, 0.34),
    ("Achernar", 24.429, -57.237, 0.46),
    ("Betelgeuse", 88.793, 7.407, 0.50),
    ("Altair", 297.696, 8.868, 0.76),
    ("Aldebaran", 68.980, 16.509, 0.86),
    ("Spica", 201.298, -11.161, 0.97),
    ("Antares", 247.352, -26.432, 1.09),
    ("Pollux", 116.329, 28.026, 1.14),
    ("Fomalhaut", 344.413, -29.622, 1.16),
    ("Deneb", 310.358, 45.280, 1.25),
    ("Regulus", 152.093, 11.967, 1.40),
    ("Castor", 113.650, 31.888, 1.58),
    ("Bellatrix", 81.283, 6.350, 1.64),
    ("Alnilam", 84.053, -1.202, 1.69),
    ("Alioth", 193.507, 55.960, 1.77),
    ("Dubhe", 165.932, 61.751, 1.79),
    ("Alkaid", 206.885, 49.313, 1.86),
    ("Polaris", 37.955, 89.264, 1.98),
    ("Mizar", 200.981, 54.926, 2.23),
];

#[derive(Parser)]
#[command(name = "vyoma", about = "Vyoma offline planetarium CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Visible objects for an observer and instant
    Snapshot {
        /// Observer latitude in degrees (positive north)
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Observer longitude in degrees (positive east)
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// UTC instant, e.g. 2024-06-21T00:00:00Z
        utc: String,
        /// Limiting visual magnitude
        #[arg(long, default_value_t = 6.0)]
        limiting_mag: f64,
        /// Bortle light-pollution class (1-9)
        #[arg(long, default_value_t = 4)]
        bortle: u8,
        /// Disable atmospheric refraction
        #[arg(long)]
        no_refraction: bool,
        /// Projection: rect or dome
        #[arg(long, default_value = "rect")]
        projection: String,
        /// Ephemeris accuracy: low or high (high needs --kernel)
        #[arg(long, default_value = "low")]
        accuracy: String,
        /// Chebyshev kernel file for high accuracy
        #[arg(long)]
        kernel: Option<PathBuf>,
        /// Time scale: utc or tt
        #[arg(long, default_value = "utc")]
        time_scale: String,
        /// Field of view as center-alt,center-az,width (degrees)
        #[arg(long)]
        fov: Option<String>,
        /// Include rise/set and conjunction events
        #[arg(long)]
        events: bool,
    },
    /// Lunar phase for an instant
    Moon {
        /// UTC instant, e.g. 2024-06-21T00:00:00Z
        utc: String,
    },
    /// Rise/set and conjunction report
    Events {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        utc: String,
        #[arg(long)]
        kernel: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse().command {
        Commands::Snapshot {
            lat,
            lon,
            utc,
            limiting_mag,
            bortle,
            no_refraction,
            projection,
            accuracy,
            kernel,
            time_scale,
            fov,
            events,
        } => {
            let instant: UtcInstant = utc.parse()?;
            let observer = Observer::new(lat, lon);

            let config = SnapshotConfig {
                accuracy: parse_accuracy(&accuracy)?,
                limiting_magnitude: limiting_mag,
                bortle_class: bortle,
                apply_refraction: !no_refraction,
                projection: parse_projection(&projection)?,
                field_of_view: fov.as_deref().map(parse_fov).transpose()?,
                time_scale: parse_time_scale(&time_scale)?,
                include_events: events,
                ..SnapshotConfig::default()
            };

            let engine = build_engine(&accuracy, kernel.as_deref())?;
            let snapshot = engine.compute_snapshot(&observer, &instant, &config, &catalog())?;

            println!(
                "Sky at {instant} for lat {lat:.4}°, lon {lon:.4}° (sun altitude {:.1}°)",
                snapshot.sun_alt_deg
            );
            if snapshot.degraded {
                println!("warning: high-accuracy ephemeris unavailable, analytic fallback in use");
            }
            if snapshot.twilight_hidden {
                println!("sky hidden: sun above the twilight threshold");
            }
            if let Some(moon) = &snapshot.moon {
                println!(
                    "moon: {} ({:.0}% lit), altitude {:.1}°",
                    moon.phase.phase_name,
                    moon.phase.illuminated_fraction * 100.0,
                    moon.alt_deg
                );
            }

            println!("{:>5}  {:<12} {:<8} {:>7} {:>8} {:>6} {:>8} {:>8}",
                "id", "name", "kind", "alt", "az", "mag", "x", "y");
            for e in &snapshot.entries {
                println!(
                    "{:>5}  {:<12} {:<8} {:>7.2} {:>8.2} {:>6.2} {:>8.4} {:>8.4}",
                    e.id.0,
                    e.name,
                    format!("{:?}", e.kind),
                    e.alt_deg,
                    e.az_deg,
                    e.magnitude,
                    e.xy[0],
                    e.xy[1]
                );
            }
            println!("{} object(s) above the horizon", snapshot.entries.len());

            for event in &snapshot.events {
                println!("event: {event}");
            }
        }
        Commands::Moon { utc } => {
            let instant: UtcInstant = utc.parse()?;
            let phase = moon_phase(instant.julian_date_tt());
            println!(
                "{} at {instant}: {:.1}% illuminated, {}",
                phase.phase_name,
                phase.illuminated_fraction * 100.0,
                if phase.waxing { "waxing" } else { "waning" }
            );
        }
        Commands::Events { lat, lon, utc, kernel } => {
            let instant: UtcInstant = utc.parse()?;
            let observer = Observer::new(lat, lon);
            let accuracy = if kernel.is_some() { "high" } else { "low" };
            let engine = build_engine(accuracy, kernel.as_deref())?;
            let config = SnapshotConfig {
                accuracy: parse_accuracy(accuracy)?,
                include_events: true,
                ..SnapshotConfig::default()
            };
            let snapshot = engine.compute_snapshot(&observer, &instant, &config, &catalog())?;
            if snapshot.degraded {
                println!("warning: high-accuracy ephemeris unavailable, analytic fallback in use");
            }
            for event in &snapshot.events {
                println!("{event}");
            }
        }
    }
    Ok(())
}

fn catalog() -> CatalogStore {
    let mut store = CatalogStore::with_solar_system();
    let rejected = store.extend(BRIGHT_STARS.iter().enumerate().map(|(k, &(name, ra, dec, mag))| {
        CelestialObject::fixed(1000 + k as u32, name, ObjectKind::Star, ra, dec, mag)
    }));
    debug_assert!(rejected.is_empty());
    store
}

fn build_engine(accuracy: &str, kernel: Option<&std::path::Path>) -> Result<SnapshotEngine, Box<dyn Error>> {
    if accuracy.eq_ignore_ascii_case("high") {
        let path = kernel.ok_or("--accuracy high requires --kernel <path>")?;
        let kernel = ChebyshevKernel::load(path)?;
        Ok(SnapshotEngine::new(Provider::Kernel(kernel)))
    } else {
        Ok(SnapshotEngine::analytic())
    }
}

fn parse_accuracy(s: &str) -> Result<Accuracy, Box<dyn Error>> {
    match s.to_ascii_lowercase().as_str() {
        "low" => Ok(Accuracy::Low),
        "high" => Ok(Accuracy::High),
        other => Err(format!("unknown accuracy {other:?} (expected low|high)").into()),
    }
}

fn parse_projection(s: &str) -> Result<Projection, Box<dyn Error>> {
    match s.to_ascii_lowercase().as_str() {
        "rect" | "rectangular" => Ok(Projection::Rectangular),
        "dome" => Ok(Projection::Dome),
        other => Err(format!("unknown projection {other:?} (expected rect|dome)").into()),
    }
}

fn parse_time_scale(s: &str) -> Result<TimeScale, Box<dyn Error>> {
    match s.to_ascii_lowercase().as_str() {
        "utc" => Ok(TimeScale::Utc),
        "tt" => Ok(TimeScale::Tt),
        other => Err(format!("unknown time scale {other:?} (expected utc|tt)").into()),
    }
}

fn parse_fov(s: &str) -> Result<FieldOfView, Box<dyn Error>> {
    let parts: Vec<&str> = s.split(',').collect();
    let [alt, az, width] = parts.as_slice() else {
        return Err("expected --fov center-alt,center-az,width".into());
    };
    Ok(FieldOfView {
        center_alt_deg: alt.trim().parse()?,
        center_az_deg: az.trim().parse()?,
        width_deg: width.trim().parse()?,
    })
}
