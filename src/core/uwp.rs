use crate::core::universal_code::{encode, UcValue, SEPARATOR};
use crate::utils::error::Result;
use serde::{Serialize, Serializer};
use std::fmt;

/// Universal World Profile, e.g. `A868796-B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uwp([char; 9]);

impl Uwp {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        starport: impl Into<UcValue>,
        size: impl Into<UcValue>,
        atmosphere: impl Into<UcValue>,
        hydrographics: impl Into<UcValue>,
        population: impl Into<UcValue>,
        government: impl Into<UcValue>,
        law_level: impl Into<UcValue>,
        tech_level: impl Into<UcValue>,
    ) -> Result<Self> {
        Ok(Self([
            encode(starport.into())?,
            encode(size.into())?,
            encode(atmosphere.into())?,
            encode(hydrographics.into())?,
            encode(population.into())?,
            encode(government.into())?,
            encode(law_level.into())?,
            SEPARATOR,
            encode(tech_level.into())?,
        ]))
    }
}

impl fmt::Display for Uwp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile: String = self.0.iter().collect();
        f.pad(&profile)
    }
}

impl Serialize for Uwp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
