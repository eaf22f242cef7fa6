//! Sky events: rise/set summaries and close approaches.
//!
//! Rise/set times come from a coarse altitude scan over ±12 h around
//! the snapshot instant (10-minute steps) with bisection refinement of
//! each horizon crossing. Conjunctions are pairwise great-circle
//! separations below a fixed threshold; Sun-Moon separations near 0°
//! or 180° flag possible eclipse windows. All of this is best-effort
//! display garnish: it degrades to fewer events, never to a failed
//! snapshot.

use std::fmt::{Display, Formatter};

use vyoma_catalog::CatalogStore;
use vyoma_ephemeris::EphemerisBody;
use vyoma_frames::{angular_separation_deg, equatorial_to_horizontal};
use vyoma_time::local_sidereal_time_deg;

use crate::{EvalCtx, Observer};

/// Bodies closer than this (degrees) are reported as a conjunction.
const CONJUNCTION_MAX_SEP_DEG: f64 = 5.0;

/// Sun-Moon separation window (degrees) for eclipse flags.
const ECLIPSE_WINDOW_DEG: f64 = 8.0;

/// Coarse scan step: 10 minutes.
const SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;

/// Half-width of the scan window in days.
const SCAN_HALF_SPAN_DAYS: f64 = 0.5;

/// Bisection iterations per crossing (~0.1 s resolution).
const BISECT_ITERATIONS: usize = 30;

/// A computed sky event.
#[derive(Debug, Clone, PartialEq)]
pub enum SkyEvent {
    /// Horizon crossings and the highest altitude reached in the ±12 h
    /// window. `None` crossings with a positive culmination mean the
    /// body never sets; with a negative one it never rises.
    RiseSet {
        body: EphemerisBody,
        rise_jd_utc: Option<f64>,
        set_jd_utc: Option<f64>,
        culmination_alt_deg: f64,
    },
    Conjunction {
        body_a: EphemerisBody,
        body_b: EphemerisBody,
        separation_deg: f64,
    },
    SolarEclipseWindow { separation_deg: f64 },
    LunarEclipseWindow { separation_deg: f64 },
}

impl Display for SkyEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RiseSet {
                body,
                rise_jd_utc,
                set_jd_utc,
                culmination_alt_deg,
            } => {
                write!(f, "{}: ", body.name())?;
                match (rise_jd_utc, set_jd_utc) {
                    (None, None) if *culmination_alt_deg > 0.0 => write!(f, "never sets")?,
                    (None, None) => write!(f, "never rises")?,
                    (rise, set) => {
                        match rise {
                            Some(jd) => write!(f, "rises JD {jd:.5}")?,
                            None => write!(f, "no rise in window")?,
                        }
                        match set {
                            Some(jd) => write!(f, ", sets JD {jd:.5}")?,
                            None => write!(f, ", no set in window")?,
                        }
                    }
                }
                write!(f, ", culminates at {culmination_alt_deg:.1}°")
            }
            Self::Conjunction {
                body_a,
                body_b,
                separation_deg,
            } => write!(
                f,
                "conjunction: {} & {} ({separation_deg:.2}° apart)",
                body_a.name(),
                body_b.name()
            ),
            Self::SolarEclipseWindow { separation_deg } => write!(
                f,
                "possible solar eclipse window (Sun-Moon {separation_deg:.2}°)"
            ),
            Self::LunarEclipseWindow { separation_deg } => write!(
                f,
                "possible lunar eclipse window ({separation_deg:.2}° from opposition)"
            ),
        }
    }
}

/// All events for one snapshot: a rise/set summary per moving body,
/// then conjunctions, then eclipse windows. Order is deterministic
/// (catalog order, then ascending pair indices).
pub(crate) fn snapshot_events(
    ctx: &EvalCtx<'_>,
    observer: &Observer,
    jd_utc: f64,
    jd_eph: f64,
    catalog: &CatalogStore,
) -> Vec<SkyEvent> {
    let eph_offset = jd_eph - jd_utc;
    let bodies: Vec<EphemerisBody> = catalog
        .moving()
        .filter_map(|o| EphemerisBody::from_code(o.id.0))
        .collect();

    let mut events = Vec::new();

    for &body in &bodies {
        events.push(rise_set_summary(ctx, observer, jd_utc, eph_offset, body));
    }

    let positions: Vec<(EphemerisBody, f64, f64)> = bodies
        .iter()
        .map(|&b| {
            let p = ctx.position(b, jd_eph);
            (b, p.ra_deg, p.dec_deg)
        })
        .collect();

    events.extend(detect_conjunctions(&positions));
    events.extend(detect_eclipse_windows(&positions));
    events
}

/// Altitude of a body at a UTC Julian Date (refraction-free).
fn altitude_at(
    ctx: &EvalCtx<'_>,
    observer: &Observer,
    jd_utc: f64,
    eph_offset: f64,
    body: EphemerisBody,
) -> f64 {
    let pos = ctx.position(body, jd_utc + eph_offset);
    let lst = local_sidereal_time_deg(jd_utc, observer.longitude_deg);
    equatorial_to_horizontal(pos.ra_deg, pos.dec_deg, observer.latitude_deg, lst).alt_deg
}

/// Coarse-scan + bisection rise/set summary for one body.
pub(crate) fn rise_set_summary(
    ctx: &EvalCtx<'_>,
    observer: &Observer,
    jd_utc: f64,
    eph_offset: f64,
    body: EphemerisBody,
) -> SkyEvent {
    let start = jd_utc - SCAN_HALF_SPAN_DAYS;
    let steps = (2.0 * SCAN_HALF_SPAN_DAYS / SCAN_STEP_DAYS).round() as usize;

    let mut rise = None;
    let mut set = None;
    let mut culmination = f64::NEG_INFINITY;

    let mut t_prev = start;
    let mut alt_prev = altitude_at(ctx, observer, t_prev, eph_offset, body);
    culmination = culmination.max(alt_prev);

    for k in 1..=steps {
        let t = start + k as f64 * SCAN_STEP_DAYS;
        let alt = altitude_at(ctx, observer, t, eph_offset, body);
        culmination = culmination.max(alt);

        if alt_prev <= 0.0 && alt > 0.0 && rise.is_none() {
            rise = Some(refine_crossing(ctx, observer, eph_offset, body, t_prev, t));
        }
        if alt_prev >= 0.0 && alt < 0.0 && set.is_none() {
            set = Some(refine_crossing(ctx, observer, eph_offset, body, t_prev, t));
        }

        t_prev = t;
        alt_prev = alt;
    }

    SkyEvent::RiseSet {
        body,
        rise_jd_utc: rise,
        set_jd_utc: set,
        culmination_alt_deg: culmination,
    }
}

/// Bisect a horizon crossing bracketed by [t_lo, t_hi].
fn refine_crossing(
    ctx: &EvalCtx<'_>,
    observer: &Observer,
    eph_offset: f64,
    body: EphemerisBody,
    mut t_lo: f64,
    mut t_hi: f64,
) -> f64 {
    let mut alt_lo = altitude_at(ctx, observer, t_lo, eph_offset, body);
    for _ in 0..BISECT_ITERATIONS {
        let t_mid = 0.5 * (t_lo + t_hi);
        let alt_mid = altitude_at(ctx, observer, t_mid, eph_offset, body);
        if (alt_lo <= 0.0) == (alt_mid <= 0.0) {
            t_lo = t_mid;
            alt_lo = alt_mid;
        } else {
            t_hi = t_mid;
        }
    }
    0.5 * (t_lo + t_hi)
}

/// Pairwise conjunction scan over equatorial positions.
pub(crate) fn detect_conjunctions(positions: &[(EphemerisBody, f64, f64)]) -> Vec<SkyEvent> {
    let mut events = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let (body_a, ra_a, dec_a) = positions[i];
            let (body_b, ra_b, dec_b) = positions[j];
            // The Sun pairs only into the eclipse checks.
            if body_a == EphemerisBody::Sun || body_b == EphemerisBody::Sun {
                continue;
            }
            let sep = angular_separation_deg(dec_a, ra_a, dec_b, ra_b);
            if sep < CONJUNCTION_MAX_SEP_DEG {
                events.push(SkyEvent::Conjunction {
                    body_a,
                    body_b,
                    separation_deg: sep,
                });
            }
        }
    }
    events
}

/// Sun-Moon eclipse windows from the same position list.
pub(crate) fn detect_eclipse_windows(positions: &[(EphemerisBody, f64, f64)]) -> Vec<SkyEvent> {
    let sun = positions.iter().find(|(b, _, _)| *b == EphemerisBody::Sun);
    let moon = positions.iter().find(|(b, _, _)| *b == EphemerisBody::Moon);
    let (Some(&(_, sun_ra, sun_dec)), Some(&(_, moon_ra, moon_dec))) = (sun, moon) else {
        return Vec::new();
    };

    let sep = angular_separation_deg(sun_dec, sun_ra, moon_dec, moon_ra);
    let mut events = Vec::new();
    if sep < ECLIPSE_WINDOW_DEG {
        events.push(SkyEvent::SolarEclipseWindow { separation_deg: sep });
    }
    if (sep - 180.0).abs() < ECLIPSE_WINDOW_DEG {
        events.push(SkyEvent::LunarEclipseWindow {
            separation_deg: (sep - 180.0).abs(),
        });
    }
    events
}
