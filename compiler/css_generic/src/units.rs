//! Closed unit sets from CSS Values and Units, CSS Grid and CSS Speech.

/// A named, closed set of units. Membership ignores ASCII case.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct UnitSet {
    name: &'static str,
    units: &'static [&'static str],
}

impl UnitSet {
    const fn new(name: &'static str, units: &'static [&'static str]) -> Self {
        UnitSet { name, units }
    }

    /// Name of the value type the set belongs to (`"length"`, …).
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Units in the set, lowercase.
    #[inline]
    pub const fn units(&self) -> &'static [&'static str] {
        self.units
    }

    /// Whether `unit` is in the set, ignoring ASCII case.
    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u.eq_ignore_ascii_case(unit))
    }
}

pub static PERCENTAGE: UnitSet = UnitSet::new("percentage", &["%"]);

pub static LENGTH: UnitSet = UnitSet::new(
    "length",
    &[
        // absolute
        "px", "mm", "cm", "in", "pt", "pc", "q",
        // font-relative
        "em", "ex", "ch", "rem",
        // viewport-percentage
        "vh", "vw", "vmin", "vmax", "vm",
    ],
);

pub static ANGLE: UnitSet = UnitSet::new("angle", &["deg", "grad", "rad", "turn"]);

pub static TIME: UnitSet = UnitSet::new("time", &["s", "ms"]);

pub static FREQUENCY: UnitSet = UnitSet::new("frequency", &["hz", "khz"]);

/// `x` is an alias of `dppx`.
pub static RESOLUTION: UnitSet = UnitSet::new("resolution", &["dpi", "dpcm", "dppx", "x"]);

pub static FLEX: UnitSet = UnitSet::new("flex", &["fr"]);

pub static DECIBEL: UnitSet = UnitSet::new("decibel", &["db"]);

pub static SEMITONES: UnitSet = UnitSet::new("semitones", &["st"]);

/// Every unit set, for iteration.
pub static ALL_UNIT_SETS: [&UnitSet; 9] = [
    &PERCENTAGE,
    &LENGTH,
    &ANGLE,
    &TIME,
    &FREQUENCY,
    &RESOLUTION,
    &FLEX,
    &DECIBEL,
    &SEMITONES,
];
