use crate::utils::error::{Result, WorldGenError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Starport class, declared best to worst so that `A < X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    X,
}

impl Starport {
    pub const ALL: [Starport; 6] = [
        Starport::A,
        Starport::B,
        Starport::C,
        Starport::D,
        Starport::E,
        Starport::X,
    ];

    /// Maps a 2d6 result onto the starport table.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            r if r < 5 => Starport::A,
            r if r < 7 => Starport::B,
            r if r < 9 => Starport::C,
            9 => Starport::D,
            r if r < 12 => Starport::E,
            _ => Starport::X,
        }
    }

    pub fn code(self) -> char {
        match self {
            Starport::A => 'A',
            Starport::B => 'B',
            Starport::C => 'C',
            Starport::D => 'D',
            Starport::E => 'E',
            Starport::X => 'X',
        }
    }

    pub fn allows_naval_base(self) -> bool {
        matches!(self, Starport::A | Starport::B)
    }

    pub fn allows_scout_base(self) -> bool {
        !matches!(self, Starport::E | Starport::X)
    }

    /// Adjustment applied to the scout base roll.
    pub fn scout_base_dm(self) -> i32 {
        match self {
            Starport::A => -3,
            Starport::B => -2,
            Starport::C => -1,
            _ => 0,
        }
    }
}

impl TryFrom<char> for Starport {
    type Error = WorldGenError;

    fn try_from(code: char) -> Result<Self> {
        Starport::ALL
            .into_iter()
            .find(|s| s.code() == code.to_ascii_uppercase())
            .ok_or_else(|| {
                WorldGenError::invalid_argument("starport", code, "expected one of A, B, C, D, E, X")
            })
    }
}

impl fmt::Display for Starport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Naval base, scout base and gas giant presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facilities {
    pub naval_base: bool,
    pub scout_base: bool,
    pub gas_giant: bool,
}

impl Facilities {
    pub fn bases(&self) -> Bases {
        match (self.naval_base, self.scout_base) {
            (true, true) => Bases::Both,
            (true, false) => Bases::Naval,
            (false, true) => Bases::Scout,
            (false, false) => Bases::None,
        }
    }

    pub fn gas_giant_marker(&self) -> char {
        if self.gas_giant {
            'G'
        } else {
            ' '
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bases {
    Both,
    Naval,
    Scout,
    None,
}

impl Bases {
    pub fn code(self) -> char {
        match self {
            Bases::Both => 'A',
            Bases::Naval => 'N',
            Bases::Scout => 'S',
            Bases::None => ' ',
        }
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The attributes rolled before tech level. Tech level is looked up from all
/// of these, so it lives beside them on `World` rather than in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristics {
    pub starport: Starport,
    pub size: i32,
    pub atmosphere: i32,
    pub hydrographics: i32,
    pub population: i32,
    pub government: i32,
    pub law_level: i32,
}

/// Rows of the tech level modifier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Starport,
    Size,
    Atmosphere,
    Hydrographics,
    Population,
    Government,
}

impl Attribute {
    /// Lookup order used when summing tech level modifiers.
    pub const TECH_ORDER: [Attribute; 6] = [
        Attribute::Starport,
        Attribute::Size,
        Attribute::Atmosphere,
        Attribute::Hydrographics,
        Attribute::Population,
        Attribute::Government,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Starport => "starport",
            Attribute::Size => "size",
            Attribute::Atmosphere => "atmosphere",
            Attribute::Hydrographics => "hydrographics",
            Attribute::Population => "population",
            Attribute::Government => "government",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Attribute::TECH_ORDER
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Column key for this attribute's value on the given world.
    pub fn key_for(self, characteristics: &Characteristics) -> String {
        match self {
            Attribute::Starport => characteristics.starport.code().to_string(),
            Attribute::Size => characteristics.size.to_string(),
            Attribute::Atmosphere => characteristics.atmosphere.to_string(),
            Attribute::Hydrographics => characteristics.hydrographics.to_string(),
            Attribute::Population => characteristics.population.to_string(),
            Attribute::Government => characteristics.government.to_string(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeClass {
    Agricultural,
    NonAgricultural,
    Industrial,
    NonIndustrial,
    Rich,
    Poor,
    WaterWorld,
    DesertWorld,
    VacuumWorld,
    AsteroidBelt,
    IceCapped,
}

impl TradeClass {
    pub fn label(self) -> &'static str {
        match self {
            TradeClass::Agricultural => "Agricultural.",
            TradeClass::NonAgricultural => "Non-Agricultural.",
            TradeClass::Industrial => "Industrial.",
            TradeClass::NonIndustrial => "Non-Industrial.",
            TradeClass::Rich => "Rich.",
            TradeClass::Poor => "Poor.",
            TradeClass::WaterWorld => "Water World.",
            TradeClass::DesertWorld => "Desert World.",
            TradeClass::VacuumWorld => "Vacuum World.",
            TradeClass::AsteroidBelt => "Asteroid Belt.",
            TradeClass::IceCapped => "Ice-capped.",
        }
    }
}

impl fmt::Display for TradeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered trade classifications; displays as space separated labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeClasses(pub Vec<TradeClass>);

impl TradeClasses {
    pub fn contains(&self, class: TradeClass) -> bool {
        self.0.contains(&class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TradeClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(" ");
        // pad() so that width specifiers like {:49} apply
        f.pad(&joined)
    }
}
