//! Mean Keplerian elements for the major planets.
//!
//! Elements and centennial rates from E.M. Standish, "Keplerian
//! Elements for Approximate Positions of the Major Planets" (JPL,
//! 1992 memo; the 1800 AD - 2050 AD table). Referred to the mean
//! ecliptic and equinox of J2000. Quoted accuracy over that span is
//! a few arcminutes for the inner planets, ~10' for the outer ones.

/// One planet's elements: value at J2000.0 and rate per Julian century.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    /// Semi-major axis, au.
    pub a: (f64, f64),
    /// Eccentricity.
    pub e: (f64, f64),
    /// Inclination, degrees.
    pub i: (f64, f64),
    /// Mean longitude, degrees.
    pub l: (f64, f64),
    /// Longitude of perihelion ϖ = Ω + ω, degrees.
    pub lon_peri: (f64, f64),
    /// Longitude of the ascending node Ω, degrees.
    pub lon_node: (f64, f64),
}

impl OrbitalElements {
    /// Evaluate an element pair at `t` Julian centuries since J2000.0.
    #[inline]
    pub fn at(pair: (f64, f64), t: f64) -> f64 {
        pair.0 + pair.1 * t
    }
}

/// Planets with Standish element sets. Earth is represented by the
/// Earth-Moon barycenter ([`EM_BARY`]), accurate to ~5e-5 au for the
/// geocenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementSet {
    Mercury,
    Venus,
    EmBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    lon_peri: (77.457_796_28, 0.160_476_89),
    lon_node: (48.330_765_93, -0.125_340_81),
};

pub const VENUS: OrbitalElements = OrbitalElements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    lon_peri: (131.602_467_18, 0.002_683_29),
    lon_node: (76.679_842_55, -0.277_694_18),
};

pub const EM_BARY: OrbitalElements = OrbitalElements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    lon_peri: (102.937_681_93, 0.323_273_64),
    lon_node: (0.0, 0.0),
};

pub const MARS: OrbitalElements = OrbitalElements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    lon_peri: (-23.943_629_59, 0.444_410_88),
    lon_node: (49.559_538_91, -0.292_573_43),
};

pub const JUPITER: OrbitalElements = OrbitalElements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    lon_peri: (14.728_479_83, 0.212_526_68),
    lon_node: (100.473_909_09, 0.204_691_06),
};

pub const SATURN: OrbitalElements = OrbitalElements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    lon_peri: (92.598_878_31, -0.418_972_16),
    lon_node: (113.662_424_48, -0.288_677_94),
};

pub const URANUS: OrbitalElements = OrbitalElements {
    a: (19.189_164_64, -0.001_961_76),
    e: (0.047_257_44, -0.000_043_97),
    i: (0.772_637_83, -0.002_429_39),
    l: (313.238_104_51, 428.482_027_85),
    lon_peri: (170.954_276_30, 0.408_052_81),
    lon_node: (74.016_925_03, 0.042_405_89),
};

pub const NEPTUNE: OrbitalElements = OrbitalElements {
    a: (30.069_922_76, 0.000_262_91),
    e: (0.008_590_48, 0.000_051_05),
    i: (1.770_043_47, 0.000_353_72),
    l: (-55.120_029_69, 218.459_453_25),
    lon_peri: (44.964_762_27, -0.322_414_64),
    lon_node: (131.784_225_74, -0.005_086_64),
};

impl ElementSet {
    pub const fn elements(self) -> &'static OrbitalElements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::EmBary => &EM_BARY,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
            Self::Uranus => &URANUS,
            Self::Neptune => &NEPTUNE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semi_major_axes_ordered() {
        let axes = [
            MERCURY.a.0,
            VENUS.a.0,
            EM_BARY.a.0,
            MARS.a.0,
            JUPITER.a.0,
            SATURN.a.0,
            URANUS.a.0,
            NEPTUNE.a.0,
        ];
        for pair in axes.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn eccentricities_sane() {
        for set in [
            ElementSet::Mercury,
            ElementSet::Venus,
            ElementSet::EmBary,
            ElementSet::Mars,
            ElementSet::Jupiter,
            ElementSet::Saturn,
            ElementSet::Uranus,
            ElementSet::Neptune,
        ] {
            let e = set.elements().e.0;
            assert!((0.0..0.25).contains(&e), "{set:?}: e = {e}");
        }
    }

    #[test]
    fn evaluation_at_epoch_and_one_century() {
        let l0 = OrbitalElements::at(EM_BARY.l, 0.0);
        assert!((l0 - 100.464_571_66).abs() < 1e-12);
        // One century adds ~100 orbits' worth of mean longitude
        let l1 = OrbitalElements::at(EM_BARY.l, 1.0);
        assert!((l1 - l0 - 35_999.372_449_81).abs() < 1e-9);
    }
}
