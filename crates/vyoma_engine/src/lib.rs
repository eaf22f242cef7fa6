//! Sky snapshot orchestrator.
//!
//! The public entry point of the planetarium core: given an observer,
//! a UTC instant, a configuration and a catalog, [`SnapshotEngine`]
//! produces the ordered, filtered, projected set of objects above the
//! horizon.
//!
//! The engine is stateless across calls: derived times are recomputed
//! per snapshot, results are bit-reproducible for identical inputs,
//! and `SnapshotEngine` is `Send + Sync`, so one instance can be
//! shared across threads via `Arc` (the catalog is read-only after
//! load and no engine API mutates it).

pub mod error;
pub mod events;
pub mod visibility;

use std::cell::Cell;

use vyoma_catalog::{CatalogStore, CelestialObject, ObjectId, ObjectKind};
use vyoma_ephemeris::{
    BodyPosition, EphemerisBody, EphemerisError, MoonPhase, Provider, analytic, moon_phase,
};
use vyoma_frames::{
    HorizontalCoords, annual_aberration_delta, apply_refraction, equatorial_to_horizontal,
    mean_obliquity_deg, precess_from_j2000, project_dome, project_hemisphere, project_rectangular,
};
use vyoma_time::{UtcInstant, julian_centuries, local_sidereal_time_deg};

pub use error::EngineError;
pub use events::SkyEvent;

/// Observer's geodetic location. Supplied per snapshot request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Latitude in degrees, [-90, 90], positive north.
    pub latitude_deg: f64,
    /// Longitude in degrees, [-180, 180], positive east.
    pub longitude_deg: f64,
    /// Elevation above sea level in meters, where known. Unused by the
    /// current models; carried for collaborators.
    pub elevation_m: Option<f64>,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m: None,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EngineError::InvalidInput(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude_deg
            )));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EngineError::InvalidInput(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude_deg
            )));
        }
        if let Some(elev) = self.elevation_m
            && !elev.is_finite()
        {
            return Err(EngineError::InvalidInput("non-finite elevation".into()));
        }
        Ok(())
    }
}

/// Ephemeris accuracy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// Analytic mean-element model.
    Low,
    /// Chebyshev kernel, falling back per body to the analytic model
    /// (with the snapshot's `degraded` flag set) when coverage is
    /// missing.
    High,
}

/// 2D plot projection selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Rectangular,
    Dome,
}

/// Time scale for ephemeris evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScale {
    Utc,
    /// Terrestrial Time: ephemeris epochs shifted by ΔT.
    Tt,
}

/// A non-full-sky view bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    pub center_alt_deg: f64,
    pub center_az_deg: f64,
    /// Full width in degrees, (0, 360].
    pub width_deg: f64,
}

/// Snapshot configuration. Passed explicitly, never global.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotConfig {
    pub accuracy: Accuracy,
    pub limiting_magnitude: f64,
    /// Light-pollution class, 1 (pristine) to 9 (inner city).
    pub bortle_class: u8,
    pub apply_refraction: bool,
    pub apply_precession: bool,
    pub apply_aberration: bool,
    pub projection: Projection,
    /// `None` = full sky.
    pub field_of_view: Option<FieldOfView>,
    pub time_scale: TimeScale,
    /// Hide everything while the Sun is above this altitude; 90 disables.
    pub twilight_sun_alt_deg: f64,
    /// Compute rise/set and conjunction events alongside the snapshot.
    pub include_events: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::Low,
            limiting_magnitude: 6.0,
            bortle_class: 4,
            apply_refraction: true,
            apply_precession: true,
            apply_aberration: true,
            projection: Projection::Rectangular,
            field_of_view: None,
            time_scale: TimeScale::Utc,
            twilight_sun_alt_deg: 90.0,
            include_events: false,
        }
    }
}

impl SnapshotConfig {
    /// Fail fast on out-of-range options; nothing is clamped silently.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.limiting_magnitude.is_finite() {
            return Err(EngineError::InvalidConfig(
                "limiting_magnitude must be finite",
            ));
        }
        if !(1..=9).contains(&self.bortle_class) {
            return Err(EngineError::InvalidConfig("bortle_class must be in [1, 9]"));
        }
        if let Some(fov) = &self.field_of_view {
            if !fov.width_deg.is_finite() || !(fov.width_deg > 0.0 && fov.width_deg <= 360.0) {
                return Err(EngineError::InvalidConfig(
                    "field_of_view width must be in (0, 360]",
                ));
            }
            if !(-90.0..=90.0).contains(&fov.center_alt_deg) {
                return Err(EngineError::InvalidConfig(
                    "field_of_view center altitude must be in [-90, 90]",
                ));
            }
            if !fov.center_az_deg.is_finite() {
                return Err(EngineError::InvalidConfig(
                    "field_of_view center azimuth must be finite",
                ));
            }
        }
        if !self.twilight_sun_alt_deg.is_finite() || !(-90.0..=90.0).contains(&self.twilight_sun_alt_deg)
        {
            return Err(EngineError::InvalidConfig(
                "twilight_sun_alt_deg must be in [-90, 90]",
            ));
        }
        Ok(())
    }
}

/// One object above the horizon, fully derived. Created fresh per
/// snapshot; owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEntry {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    /// Right ascension used for the transform (after any precession/
    /// aberration correction), degrees.
    pub ra_deg: f64,
    pub dec_deg: f64,
    /// Apparent altitude (refraction-corrected when enabled), degrees.
    pub alt_deg: f64,
    pub az_deg: f64,
    /// Effective magnitude after the extinction term.
    pub magnitude: f64,
    /// Configured 2D projection of (alt, az).
    pub xy: [f64; 2],
    /// Unit-hemisphere coordinates; z ≥ 0 for every culled-in entry.
    pub xyz: [f64; 3],
}

/// The Moon's snapshot summary, present whenever the catalog carries
/// the Moon — even below the horizon (phase displays don't cull).
#[derive(Debug, Clone, PartialEq)]
pub struct MoonReport {
    pub phase: MoonPhase,
    pub alt_deg: f64,
    pub az_deg: f64,
}

/// Result of a snapshot computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SkySnapshot {
    /// Entries above the horizon, ordered by ascending catalog id.
    pub entries: Vec<SnapshotEntry>,
    /// True when a high-accuracy request fell back to the analytic
    /// model for at least one evaluation.
    pub degraded: bool,
    /// The Sun's (refraction-free) altitude, degrees.
    pub sun_alt_deg: f64,
    /// True when the twilight rule emptied the entry list.
    pub twilight_hidden: bool,
    pub moon: Option<MoonReport>,
    /// Rise/set and conjunction events, when requested.
    pub events: Vec<SkyEvent>,
}

/// Evaluation context threading the high→low fallback state through a
/// single snapshot. The flag is per-call; the engine itself stays
/// stateless.
pub(crate) struct EvalCtx<'a> {
    provider: &'a Provider,
    use_kernel: bool,
    degraded: Cell<bool>,
}

impl<'a> EvalCtx<'a> {
    pub(crate) fn new(provider: &'a Provider, accuracy: Accuracy) -> Self {
        Self {
            provider,
            use_kernel: accuracy == Accuracy::High && provider.is_kernel(),
            degraded: Cell::new(false),
        }
    }

    /// Evaluate a body, falling back to the analytic model when the
    /// kernel cannot serve the request. The fallback is recorded, never
    /// silent.
    pub(crate) fn position(&self, body: EphemerisBody, jd: f64) -> BodyPosition {
        if self.use_kernel {
            match self.provider.position(body, jd) {
                Ok(pos) => return pos,
                Err(EphemerisError::Unavailable { .. }) => self.degraded.set(true),
                // Parse/Io cannot occur after construction; degrade anyway.
                Err(_) => self.degraded.set(true),
            }
        }
        analytic::position(body, jd)
    }

    fn degraded(&self) -> bool {
        self.degraded.get()
    }
}

/// The snapshot engine.
///
/// Owns the ephemeris provider (loaded once, outside the per-frame
/// path). All other inputs arrive per call.
#[derive(Debug)]
pub struct SnapshotEngine {
    provider: Provider,
}

impl SnapshotEngine {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// Engine with the analytic provider only.
    pub fn analytic() -> Self {
        Self::new(Provider::Analytic)
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Compute a snapshot of the sky.
    ///
    /// Steps: resolve time frame → evaluate moving bodies (with
    /// reported fallback) → transform to horizontal coordinates →
    /// cull → project → order by catalog id.
    pub fn compute_snapshot(
        &self,
        observer: &Observer,
        instant: &UtcInstant,
        config: &SnapshotConfig,
        catalog: &CatalogStore,
    ) -> Result<SkySnapshot, EngineError> {
        config.validate()?;
        observer.validate()?;
        instant.validate()?;

        let jd_utc = instant.julian_date();
        let jd_eph = match config.time_scale {
            TimeScale::Utc => jd_utc,
            TimeScale::Tt => instant.julian_date_tt(),
        };
        let lst_deg = local_sidereal_time_deg(jd_utc, observer.longitude_deg);
        let lat = observer.latitude_deg;

        let ctx = EvalCtx::new(&self.provider, config.accuracy);

        // The Sun drives the twilight rule and the aberration correction,
        // so it is evaluated whether or not it is in the catalog.
        let sun = ctx.position(EphemerisBody::Sun, jd_eph);
        let sun_horiz = equatorial_to_horizontal(sun.ra_deg, sun.dec_deg, lat, lst_deg);
        let sun_lon_deg = analytic::sun_true_longitude_deg(jd_eph);
        let obliquity_deg = mean_obliquity_deg(julian_centuries(jd_eph));

        let penalty = visibility::bortle_penalty_mag(config.bortle_class);

        let mut entries = Vec::new();
        let mut moon_report = None;

        for object in catalog.fixed() {
            let (ra, dec) = self.corrected_fixed_coords(object, config, jd_eph, sun_lon_deg, obliquity_deg);
            self.push_if_visible(
                &mut entries,
                object,
                ra,
                dec,
                object.magnitude,
                lat,
                lst_deg,
                penalty,
                config,
            );
        }

        for object in catalog.moving() {
            let body = EphemerisBody::from_code(object.id.0).ok_or_else(|| {
                EngineError::InvalidInput(format!(
                    "moving object {} ({}) has no ephemeris body code",
                    object.id, object.name
                ))
            })?;
            let pos = ctx.position(body, jd_eph);

            if body == EphemerisBody::Moon {
                let horiz = equatorial_to_horizontal(pos.ra_deg, pos.dec_deg, lat, lst_deg);
                moon_report = Some(MoonReport {
                    phase: moon_phase(jd_eph),
                    alt_deg: self.apparent_altitude(horiz.alt_deg, config),
                    az_deg: horiz.az_deg,
                });
            }

            self.push_if_visible(
                &mut entries,
                object,
                pos.ra_deg,
                pos.dec_deg,
                pos.magnitude,
                lat,
                lst_deg,
                penalty,
                config,
            );
        }

        // Stable, reproducible output order: ascending catalog id.
        entries.sort_by_key(|e| e.id);

        // Twilight rule: while the Sun is above the configured altitude
        // the sky is empty (the threshold 90 disables the rule).
        let mut twilight_hidden = false;
        if config.twilight_sun_alt_deg < 90.0 && sun_horiz.alt_deg > config.twilight_sun_alt_deg {
            entries.clear();
            twilight_hidden = true;
        }

        let events = if config.include_events {
            events::snapshot_events(&ctx, observer, jd_utc, jd_eph, catalog)
        } else {
            Vec::new()
        };

        Ok(SkySnapshot {
            entries,
            degraded: ctx.degraded(),
            sun_alt_deg: sun_horiz.alt_deg,
            twilight_hidden,
            moon: moon_report,
            events,
        })
    }

    /// Precession/aberration-corrected coordinates for a fixed object.
    ///
    /// Moving bodies are not corrected here: the analytic planet model
    /// is J2000 and the lunar series is already of date, both inside
    /// the model error budget.
    fn corrected_fixed_coords(
        &self,
        object: &CelestialObject,
        config: &SnapshotConfig,
        jd_eph: f64,
        sun_lon_deg: f64,
        obliquity_deg: f64,
    ) -> (f64, f64) {
        let (mut ra, mut dec) = (object.ra_deg, object.dec_deg);
        if config.apply_precession {
            (ra, dec) = precess_from_j2000(ra, dec, jd_eph);
        }
        if config.apply_aberration {
            let (d_ra, d_dec) = annual_aberration_delta(ra, dec, sun_lon_deg, obliquity_deg);
            ra = (ra + d_ra).rem_euclid(360.0);
            dec = (dec + d_dec).clamp(-90.0, 90.0);
        }
        (ra, dec)
    }

    fn apparent_altitude(&self, alt_deg: f64, config: &SnapshotConfig) -> f64 {
        if config.apply_refraction {
            apply_refraction(alt_deg)
        } else {
            alt_deg
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn push_if_visible(
        &self,
        entries: &mut Vec<SnapshotEntry>,
        object: &CelestialObject,
        ra_deg: f64,
        dec_deg: f64,
        magnitude: f64,
        lat_deg: f64,
        lst_deg: f64,
        penalty_mag: f64,
        config: &SnapshotConfig,
    ) {
        let HorizontalCoords { alt_deg, az_deg } =
            equatorial_to_horizontal(ra_deg, dec_deg, lat_deg, lst_deg);
        let alt_deg = self.apparent_altitude(alt_deg, config);
        let effective_mag = visibility::effective_magnitude(magnitude, penalty_mag);

        if !visibility::passes(
            alt_deg,
            az_deg,
            effective_mag,
            config.limiting_magnitude,
            config.field_of_view.as_ref(),
        ) {
            return;
        }

        let xy = match config.projection {
            Projection::Rectangular => project_rectangular(alt_deg, az_deg),
            Projection::Dome => project_dome(alt_deg, az_deg),
        };
        let xyz = project_hemisphere(alt_deg, az_deg);

        entries.push(SnapshotEntry {
            id: object.id,
            name: object.name.clone(),
            kind: object.kind,
            ra_deg,
            dec_deg,
            alt_deg,
            az_deg,
            magnitude: effective_mag,
            xy,
            xyz,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_validate() {
        assert!(SnapshotConfig::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_bortle() {
        let mut config = SnapshotConfig::default();
        config.bortle_class = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
        config.bortle_class = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_bad_fov() {
        let mut config = SnapshotConfig::default();
        config.field_of_view = Some(FieldOfView {
            center_alt_deg: 45.0,
            center_az_deg: 0.0,
            width_deg: 0.0,
        });
        assert!(config.validate().is_err());
        config.field_of_view = Some(FieldOfView {
            center_alt_deg: 100.0,
            center_az_deg: 0.0,
            width_deg: 60.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_non_finite_limit() {
        let mut config = SnapshotConfig::default();
        config.limiting_magnitude = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn observer_validation() {
        assert!(Observer::new(51.5, -0.12).validate().is_ok());
        assert!(Observer::new(90.0, 180.0).validate().is_ok());
        assert!(Observer::new(90.1, 0.0).validate().is_err());
        assert!(Observer::new(0.0, -180.5).validate().is_err());
        assert!(Observer::new(f64::NAN, 0.0).validate().is_err());
    }

    // Compile-time assertion: the engine must be shareable across threads.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<SnapshotEngine>();
        }
    };
}
