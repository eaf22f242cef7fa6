//! In-memory catalog of celestial objects.
//!
//! The store holds fixed-position objects (stars, deep-sky objects) and
//! identity records for moving objects (Sun, Moon, planets). It is
//! immutable after load: the engine never mutates records, and moving
//! object positions are never stored here — they are recomputed per
//! snapshot by the ephemeris provider.
//!
//! Loading/parsing (CSV or otherwise) is an external collaborator's
//! responsibility; this crate only validates and holds records.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable catalog identifier, unique across the whole catalog.
///
/// Solar-system bodies use NAIF-style codes (Sun 10, Moon 301,
/// Mercury 199, Venus 299, Mars 499, ... Neptune 899). Star and
/// deep-sky ids are assigned by the loader outside that code set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Object classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Star,
    DeepSky,
    Planet,
    Sun,
    Moon,
}

impl ObjectKind {
    /// Whether the object's position is fixed in the catalog (stars,
    /// deep-sky) as opposed to recomputed per snapshot.
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Star | Self::DeepSky)
    }
}

/// A validated catalog record.
///
/// For moving objects (`is_fixed() == false`) the `ra_deg`/`dec_deg`/
/// `magnitude` fields are placeholders; only id, name and kind carry
/// meaning, and positions come from the ephemeris provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    /// Right ascension in degrees, [0, 360). J2000 for fixed objects.
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90]. J2000 for fixed objects.
    pub dec_deg: f64,
    /// Apparent visual magnitude (smaller = brighter).
    pub magnitude: f64,
    /// Apparent angular size in arcminutes, where known (DSOs).
    pub angular_size_arcmin: Option<f64>,
    /// Free-form object subtype for deep-sky objects ("Galaxy", ...).
    pub dso_type: Option<String>,
}

impl CelestialObject {
    /// Convenience constructor for a fixed object with no DSO metadata.
    pub fn fixed(id: u32, name: &str, kind: ObjectKind, ra_deg: f64, dec_deg: f64, mag: f64) -> Self {
        Self {
            id: ObjectId(id),
            name: name.to_string(),
            kind,
            ra_deg,
            dec_deg,
            magnitude: mag,
            angular_size_arcmin: None,
            dso_type: None,
        }
    }

    /// Convenience constructor for a moving (ephemeris-driven) object.
    pub fn moving(id: u32, name: &str, kind: ObjectKind) -> Self {
        Self {
            id: ObjectId(id),
            name: name.to_string(),
            kind,
            ra_deg: 0.0,
            dec_deg: 0.0,
            magnitude: 0.0,
            angular_size_arcmin: None,
            dso_type: None,
        }
    }
}

/// Catalog errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    /// Unknown identifier.
    NotFound(ObjectId),
    /// Record failed range validation at load time.
    Validation(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "object {id} not found in catalog"),
            Self::Validation(msg) => write!(f, "catalog record rejected: {msg}"),
        }
    }
}

impl Error for CatalogError {}

/// A record skipped during load, reported to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Zero-based position of the record in the load sequence.
    pub index: usize,
    /// The offending id, when the record carried one.
    pub id: ObjectId,
    pub error: CatalogError,
}

/// Immutable catalog store.
///
/// Iteration order for [`CatalogStore::fixed`]/[`CatalogStore::moving`]
/// is load order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    objects: Vec<CelestialObject>,
    index: HashMap<ObjectId, usize>,
}

impl CatalogStore {
    /// Load records, validating each one.
    ///
    /// Invalid records (RA/Dec out of range, non-finite magnitude,
    /// duplicate id) are skipped and reported — never silently dropped,
    /// never fatal.
    pub fn load(records: impl IntoIterator<Item = CelestialObject>) -> (Self, Vec<RejectedRecord>) {
        let mut store = Self::default();
        let mut rejected = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            match store.insert(record) {
                Ok(()) => {}
                Err((id, error)) => rejected.push(RejectedRecord { index, id, error }),
            }
        }

        (store, rejected)
    }

    /// Standard solar-system records: Sun, Moon and the planets
    /// Mercury through Neptune, under their NAIF-style ids.
    pub fn with_solar_system() -> Self {
        let bodies: [(u32, &str, ObjectKind); 9] = [
            (10, "Sun", ObjectKind::Sun),
            (301, "Moon", ObjectKind::Moon),
            (199, "Mercury", ObjectKind::Planet),
            (299, "Venus", ObjectKind::Planet),
            (499, "Mars", ObjectKind::Planet),
            (599, "Jupiter", ObjectKind::Planet),
            (699, "Saturn", ObjectKind::Planet),
            (799, "Uranus", ObjectKind::Planet),
            (899, "Neptune", ObjectKind::Planet),
        ];
        let (store, rejected) = Self::load(
            bodies
                .into_iter()
                .map(|(id, name, kind)| CelestialObject::moving(id, name, kind)),
        );
        debug_assert!(rejected.is_empty());
        store
    }

    fn insert(&mut self, record: CelestialObject) -> Result<(), (ObjectId, CatalogError)> {
        let id = record.id;
        if self.index.contains_key(&id) {
            return Err((
                id,
                CatalogError::Validation(format!("duplicate id {id}")),
            ));
        }
        if record.kind.is_fixed() {
            if !(0.0..360.0).contains(&record.ra_deg) {
                return Err((
                    id,
                    CatalogError::Validation(format!(
                        "RA {} out of range [0, 360) for {id}",
                        record.ra_deg
                    )),
                ));
            }
            if !(-90.0..=90.0).contains(&record.dec_deg) {
                return Err((
                    id,
                    CatalogError::Validation(format!(
                        "Dec {} out of range [-90, 90] for {id}",
                        record.dec_deg
                    )),
                ));
            }
            if !record.magnitude.is_finite() {
                return Err((
                    id,
                    CatalogError::Validation(format!("non-finite magnitude for {id}")),
                ));
            }
        }
        self.index.insert(id, self.objects.len());
        self.objects.push(record);
        Ok(())
    }

    /// Look up an object by id.
    pub fn get(&self, id: ObjectId) -> Result<&CelestialObject, CatalogError> {
        self.index
            .get(&id)
            .map(|&i| &self.objects[i])
            .ok_or(CatalogError::NotFound(id))
    }

    /// Fixed-position objects (stars + deep-sky), in load order.
    pub fn fixed(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.iter().filter(|o| o.kind.is_fixed())
    }

    /// Moving objects (Sun/Moon/planets), in load order.
    pub fn moving(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.iter().filter(|o| !o.kind.is_fixed())
    }

    /// Merge another store's records into this one, reporting rejects
    /// (duplicates across the two stores are rejected like any other).
    pub fn extend(&mut self, records: impl IntoIterator<Item = CelestialObject>) -> Vec<RejectedRecord> {
        let mut rejected = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            if let Err((id, error)) = self.insert(record) {
                rejected.push(RejectedRecord { index, id, error });
            }
        }
        rejected
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
