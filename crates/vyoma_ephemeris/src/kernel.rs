//! Precomputed Chebyshev ephemeris kernel.
//!
//! The kernel file is an externally-produced binary dataset of
//! per-body Chebyshev segments over geocentric equatorial-J2000
//! positions in km. Fixed little-endian layout:
//!
//! ```text
//! magic      4 bytes  "VYMK"
//! version    u32      currently 1
//! n_segments u32
//! per segment:
//!   body_code      u32   NAIF-style code
//!   jd_start       f64   coverage start (TDB/TT Julian Date)
//!   jd_end         f64   coverage end
//!   n_intervals    u32   equal-length subdivision of [jd_start, jd_end]
//!   n_coeffs       u32   coefficients per Cartesian component
//!   coefficients   n_intervals × 3 × n_coeffs f64 (x set, y set, z set)
//! ```
//!
//! Loading happens once at construction; queries are pure lookups plus
//! Clenshaw evaluation and never touch I/O.

use std::path::Path;

use vyoma_frames::OBLIQUITY_J2000_DEG;
use vyoma_time::julian_centuries;

use crate::BodyPosition;
use crate::analytic::{
    AU_KM, earth_heliocentric, equatorial_to_ecliptic, ra_dec_of,
};
use crate::body::EphemerisBody;
use crate::chebyshev::clenshaw;
use crate::error::EphemerisError;
use crate::magnitude::{MAG_SUN, moon_magnitude, planet_magnitude};

const MAGIC: &[u8; 4] = b"VYMK";
const SUPPORTED_VERSION: u32 = 1;

/// One body's Chebyshev coverage.
#[derive(Debug, Clone)]
struct Segment {
    body_code: u32,
    jd_start: f64,
    jd_end: f64,
    n_intervals: usize,
    n_coeffs: usize,
    /// Interval-major: [interval][component][coeff].
    coeffs: Vec<f64>,
}

impl Segment {
    fn covers(&self, body: EphemerisBody, jd: f64) -> bool {
        self.body_code == body.code() && (self.jd_start..=self.jd_end).contains(&jd)
    }

    /// Evaluate the geocentric equatorial position in km.
    fn evaluate(&self, jd: f64) -> [f64; 3] {
        let span = (self.jd_end - self.jd_start) / self.n_intervals as f64;
        let idx = (((jd - self.jd_start) / span) as usize).min(self.n_intervals - 1);
        let t0 = self.jd_start + idx as f64 * span;
        let s = (2.0 * (jd - t0) / span - 1.0).clamp(-1.0, 1.0);

        let per_interval = 3 * self.n_coeffs;
        let base = idx * per_interval;
        let mut out = [0.0; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            let lo = base + c * self.n_coeffs;
            *slot = clenshaw(&self.coeffs[lo..lo + self.n_coeffs], s);
        }
        out
    }
}

/// Loaded Chebyshev kernel.
#[derive(Debug, Clone)]
pub struct ChebyshevKernel {
    segments: Vec<Segment>,
}

/// Little-endian cursor over the kernel bytes.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], EphemerisError> {
        let end = self.pos.checked_add(n).filter(|&e| e <= self.bytes.len());
        match end {
            Some(end) => {
                let slice = &self.bytes[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(EphemerisError::Parse(format!(
                "truncated kernel: needed {n} bytes at offset {}",
                self.pos
            ))),
        }
    }

    fn u32(&mut self) -> Result<u32, EphemerisError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn f64(&mut self) -> Result<f64, EphemerisError> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }
}

impl ChebyshevKernel {
    /// Load a kernel file from a path.
    pub fn load(path: &Path) -> Result<Self, EphemerisError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parse a kernel from its raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EphemerisError> {
        let mut r = Reader::new(bytes);

        if r.take(4)? != MAGIC {
            return Err(EphemerisError::Parse("bad magic, not a kernel file".into()));
        }
        let version = r.u32()?;
        if version != SUPPORTED_VERSION {
            return Err(EphemerisError::Parse(format!(
                "unsupported kernel version {version}"
            )));
        }

        let n_segments = r.u32()? as usize;
        let mut segments = Vec::with_capacity(n_segments);
        for i in 0..n_segments {
            let body_code = r.u32()?;
            let jd_start = r.f64()?;
            let jd_end = r.f64()?;
            let n_intervals = r.u32()? as usize;
            let n_coeffs = r.u32()? as usize;

            if !(jd_start.is_finite() && jd_end.is_finite() && jd_start < jd_end) {
                return Err(EphemerisError::Parse(format!(
                    "segment {i}: bad coverage [{jd_start}, {jd_end}]"
                )));
            }
            if n_intervals == 0 || n_coeffs == 0 {
                return Err(EphemerisError::Parse(format!(
                    "segment {i}: empty interval/coefficient counts"
                )));
            }

            let total = n_intervals * 3 * n_coeffs;
            let mut coeffs = Vec::with_capacity(total);
            for _ in 0..total {
                coeffs.push(r.f64()?);
            }

            segments.push(Segment {
                body_code,
                jd_start,
                jd_end,
                n_intervals,
                n_coeffs,
                coeffs,
            });
        }

        Ok(Self { segments })
    }

    /// Bodies with at least one segment.
    pub fn covered_bodies(&self) -> Vec<EphemerisBody> {
        let mut bodies: Vec<EphemerisBody> = self
            .segments
            .iter()
            .filter_map(|s| EphemerisBody::from_code(s.body_code))
            .collect();
        bodies.sort_by_key(|b| b.code());
        bodies.dedup();
        bodies
    }

    /// Raw geocentric equatorial-J2000 position in km.
    pub fn query(&self, body: EphemerisBody, jd_tt: f64) -> Result<[f64; 3], EphemerisError> {
        self.segments
            .iter()
            .find(|s| s.covers(body, jd_tt))
            .map(|s| s.evaluate(jd_tt))
            .ok_or(EphemerisError::Unavailable { body, jd_tt })
    }

    /// Full position with magnitude.
    ///
    /// The kernel stores positions only; brightness reuses the analytic
    /// phase/magnitude model with the kernel's geometry.
    pub fn position(&self, body: EphemerisBody, jd_tt: f64) -> Result<BodyPosition, EphemerisError> {
        let geo_km = self.query(body, jd_tt)?;
        let geo_au = [geo_km[0] / AU_KM, geo_km[1] / AU_KM, geo_km[2] / AU_KM];
        let (ra, dec, delta) = ra_dec_of(&geo_au);

        let magnitude = match body {
            EphemerisBody::Sun => MAG_SUN,
            EphemerisBody::Moon => {
                // Phase angle from the kernel Moon and analytic Sun.
                let t = julian_centuries(jd_tt);
                let earth = earth_heliocentric(t);
                let sun_geo = [-earth[0], -earth[1], -earth[2]];
                let moon_ecl = equatorial_to_ecliptic(&geo_au, OBLIQUITY_J2000_DEG);
                let elongation = separation_deg(&moon_ecl, &sun_geo);
                moon_magnitude(180.0 - elongation)
            }
            _ => {
                let t = julian_centuries(jd_tt);
                let earth = earth_heliocentric(t);
                let r_earth = vec_norm(&earth);
                let geo_ecl = equatorial_to_ecliptic(&geo_au, OBLIQUITY_J2000_DEG);
                let helio = [
                    geo_ecl[0] + earth[0],
                    geo_ecl[1] + earth[1],
                    geo_ecl[2] + earth[2],
                ];
                let r_helio = vec_norm(&helio);
                let cos_phase = (r_helio * r_helio + delta * delta - r_earth * r_earth)
                    / (2.0 * r_helio * delta);
                let phase = cos_phase.clamp(-1.0, 1.0).acos().to_degrees();
                planet_magnitude(body, r_helio, delta, phase)
            }
        };

        Ok(BodyPosition {
            ra_deg: ra,
            dec_deg: dec,
            distance_au: delta,
            magnitude,
        })
    }
}

fn vec_norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Angle between two direction vectors, degrees.
fn separation_deg(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    let cos = dot / (vec_norm(a) * vec_norm(b));
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}
