use crate::core::trade;
use crate::core::uwp::Uwp;
use crate::domain::model::{Attribute, Bases, Characteristics, Facilities, Starport, TradeClasses};
use crate::domain::ports::{DiceRoller, ModifierTable, NamePicker};
use crate::utils::error::{Result, WorldGenError};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_NAMES: [&str; 2] = ["Erehwemos", "Lacipyt"];

/// Highest value accepted for an explicitly supplied characteristic.
pub const MAX_CHARACTERISTIC: i32 = 15;

/// Highest tech level the universal code can express.
pub const MAX_TECH_LEVEL: i32 = 33;

/// A generated or explicitly described world. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct World {
    name: String,
    #[serde(flatten)]
    characteristics: Characteristics,
    tech_level: i32,
    #[serde(flatten)]
    facilities: Facilities,
    uwp: Uwp,
    bases: Bases,
    trade_classes: TradeClasses,
}

impl World {
    /// Builds a world from known values, checking each against its range.
    pub fn from_attributes(
        name: impl Into<String>,
        characteristics: Characteristics,
        facilities: Facilities,
        tech_level: i32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WorldGenError::invalid_argument(
                "name",
                "\"\"",
                "world name cannot be blank",
            ));
        }

        let c = &characteristics;
        for (field, value) in [
            ("size", c.size),
            ("atmosphere", c.atmosphere),
            ("hydrographics", c.hydrographics),
            ("population", c.population),
            ("government", c.government),
            ("law_level", c.law_level),
        ] {
            if !(0..=MAX_CHARACTERISTIC).contains(&value) {
                return Err(WorldGenError::invalid_argument(
                    field,
                    value,
                    "must be between 0 and 15",
                ));
            }
        }
        if !(0..=MAX_TECH_LEVEL).contains(&tech_level) {
            return Err(WorldGenError::invalid_argument(
                "tech_level",
                tech_level,
                "must be between 0 and 33",
            ));
        }

        Self::assemble(name, characteristics, facilities, tech_level)
    }

    /// Rolls up a complete world. Each step only reads values produced by the
    /// steps before it.
    pub fn generate<D, T>(name: impl Into<String>, dice: &mut D, table: &T) -> Result<Self>
    where
        D: DiceRoller + ?Sized,
        T: ModifierTable + ?Sized,
    {
        let starport = roll_starport(dice)?;
        let facilities = roll_facilities(dice, starport)?;
        let size = roll_size(dice)?;
        let atmosphere = roll_atmosphere(dice, size)?;
        let hydrographics = roll_hydrographics(dice, size, atmosphere)?;
        let population = roll_population(dice)?;
        let government = roll_government(dice, population)?;
        let law_level = roll_law_level(dice, government)?;

        let characteristics = Characteristics {
            starport,
            size,
            atmosphere,
            hydrographics,
            population,
            government,
            law_level,
        };
        let tech_level = roll_tech_level(dice, table, &characteristics)?;

        let world = Self::assemble(name.into(), characteristics, facilities, tech_level)?;
        tracing::debug!("Generated {} {}", world.name, world.uwp);
        Ok(world)
    }

    fn assemble(
        name: String,
        characteristics: Characteristics,
        facilities: Facilities,
        tech_level: i32,
    ) -> Result<Self> {
        let c = &characteristics;
        let uwp = Uwp::new(
            c.starport,
            c.size,
            c.atmosphere,
            c.hydrographics,
            c.population,
            c.government,
            c.law_level,
            tech_level,
        )?;

        Ok(Self {
            name,
            uwp,
            bases: facilities.bases(),
            trade_classes: trade::classify(c),
            characteristics,
            tech_level,
            facilities,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    pub fn starport(&self) -> Starport {
        self.characteristics.starport
    }

    pub fn tech_level(&self) -> i32 {
        self.tech_level
    }

    pub fn facilities(&self) -> &Facilities {
        &self.facilities
    }

    pub fn uwp(&self) -> &Uwp {
        &self.uwp
    }

    pub fn bases(&self) -> Bases {
        self.bases
    }

    pub fn gas_giant_marker(&self) -> char {
        self.facilities.gas_giant_marker()
    }

    pub fn trade_classes(&self) -> &TradeClasses {
        &self.trade_classes
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:16} {} {} {:49} {}",
            self.name,
            self.uwp,
            self.bases,
            self.trade_classes,
            self.gas_giant_marker()
        )
    }
}

pub fn roll_starport<D: DiceRoller + ?Sized>(dice: &mut D) -> Result<Starport> {
    Ok(Starport::from_roll(dice.roll(2)?))
}

/// Naval base, scout base and gas giant, rolled in that order.
pub fn roll_facilities<D: DiceRoller + ?Sized>(dice: &mut D, starport: Starport) -> Result<Facilities> {
    let naval_base = if starport.allows_naval_base() {
        dice.roll(2)? > 7
    } else {
        false
    };
    let scout_base = if starport.allows_scout_base() {
        dice.roll(2)? + starport.scout_base_dm() > 6
    } else {
        false
    };
    let gas_giant = dice.roll(2)? < 10;

    Ok(Facilities {
        naval_base,
        scout_base,
        gas_giant,
    })
}

pub fn roll_size<D: DiceRoller + ?Sized>(dice: &mut D) -> Result<i32> {
    Ok(dice.roll(2)? - 2)
}

/// The roll is always consumed; a size 0 world then has no atmosphere.
pub fn roll_atmosphere<D: DiceRoller + ?Sized>(dice: &mut D, size: i32) -> Result<i32> {
    let rolled = dice.roll(2)? - 7 + size;
    if size == 0 {
        return Ok(0);
    }
    Ok(rolled.clamp(0, 12))
}

pub fn roll_hydrographics<D: DiceRoller + ?Sized>(dice: &mut D, size: i32, atmosphere: i32) -> Result<i32> {
    if size <= 1 {
        return Ok(0);
    }
    let mut hydrographics = dice.roll(2)? + size;
    if !(2..=9).contains(&atmosphere) {
        hydrographics -= 4;
    }
    Ok(hydrographics.clamp(0, 10))
}

pub fn roll_population<D: DiceRoller + ?Sized>(dice: &mut D) -> Result<i32> {
    Ok(dice.roll(2)? - 2)
}

pub fn roll_government<D: DiceRoller + ?Sized>(dice: &mut D, population: i32) -> Result<i32> {
    Ok((dice.roll(2)? - 7 + population).clamp(0, 14))
}

pub fn roll_law_level<D: DiceRoller + ?Sized>(dice: &mut D, government: i32) -> Result<i32> {
    Ok((dice.roll(2)? - 7 + government).clamp(0, 10))
}

/// 1d6 plus a modifier for each of starport, size, atmosphere,
/// hydrographics, population and government. Never below 0.
pub fn roll_tech_level<D, T>(dice: &mut D, table: &T, characteristics: &Characteristics) -> Result<i32>
where
    D: DiceRoller + ?Sized,
    T: ModifierTable + ?Sized,
{
    let mut tech_level = dice.roll(1)?;
    for attribute in Attribute::TECH_ORDER {
        tech_level += table.modifier(attribute, &attribute.key_for(characteristics))?;
    }

    // Classic Traveller floor; a negative sum would not encode
    if tech_level < 0 {
        tracing::debug!("Tech level {} raised to 0", tech_level);
        tech_level = 0;
    }
    Ok(tech_level)
}

/// Names worlds from a fixed pool and rolls them against one modifier table.
pub struct WorldGenerator<'a, T: ModifierTable + ?Sized> {
    table: &'a T,
    names: Vec<String>,
}

impl<'a, T: ModifierTable + ?Sized> WorldGenerator<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self {
            table,
            names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Blank entries are dropped; at least one usable name must remain.
    pub fn with_names(table: &'a T, names: Vec<String>) -> Result<Self> {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(WorldGenError::invalid_argument(
                "names",
                "[]",
                "at least one non-blank name is required",
            ));
        }
        Ok(Self { table, names })
    }

    pub fn generate<D: DiceRoller + NamePicker + ?Sized>(&self, dice: &mut D) -> Result<World> {
        let name = self.names[dice.pick_index(self.names.len())].clone();
        World::generate(name, dice, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::Dice;
    use crate::core::tech_table::TechLevelTable;
    use crate::domain::model::TradeClass;
    use std::collections::VecDeque;

    /// Returns preset totals in order, regardless of dice count.
    struct ScriptedDice {
        totals: VecDeque<i32>,
        counts: Vec<i32>,
    }

    impl ScriptedDice {
        fn new(totals: &[i32]) -> Self {
            Self {
                totals: totals.iter().copied().collect(),
                counts: Vec::new(),
            }
        }
    }

    impl DiceRoller for ScriptedDice {
        fn roll(&mut self, count: i32) -> Result<i32> {
            self.counts.push(count);
            Ok(self.totals.pop_front().expect("script exhausted"))
        }
    }

    impl NamePicker for ScriptedDice {
        fn pick_index(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    fn characteristics(starport: Starport, size: i32, atm: i32, hyd: i32, pop: i32, gov: i32, law: i32) -> Characteristics {
        Characteristics {
            starport,
            size,
            atmosphere: atm,
            hydrographics: hyd,
            population: pop,
            government: gov,
            law_level: law,
        }
    }

    #[test]
    fn test_explicit_world_profile() {
        let world = World::from_attributes(
            "Regina",
            characteristics(Starport::A, 8, 6, 8, 7, 9, 6),
            Facilities { naval_base: true, scout_base: true, gas_giant: true },
            11,
        )
        .unwrap();
        assert_eq!(world.uwp().to_string(), "A868796-B");
        assert_eq!(world.bases().code(), 'A');
        assert_eq!(world.gas_giant_marker(), 'G');
        assert_eq!(world.trade_classes().to_string(), "Agricultural. Rich.");
    }

    #[test]
    fn test_explicit_world_rejects_out_of_range() {
        let facilities = Facilities::default();
        assert!(matches!(
            World::from_attributes("X", characteristics(Starport::B, 16, 0, 0, 0, 0, 0), facilities, 5),
            Err(WorldGenError::InvalidArgument { .. })
        ));
        assert!(World::from_attributes("X", characteristics(Starport::B, 5, -1, 0, 0, 0, 0), facilities, 5).is_err());
        assert!(World::from_attributes("X", characteristics(Starport::B, 5, 5, 5, 5, 5, 5), facilities, 34).is_err());
        assert!(World::from_attributes("  ", characteristics(Starport::B, 5, 5, 5, 5, 5, 5), facilities, 3).is_err());
    }

    #[test]
    fn test_starport_a_facilities() {
        // naval 8 > 7, scout 9 - 3 = 6 is not > 6, gas giant 10 is not < 10
        let mut dice = ScriptedDice::new(&[8, 9, 10]);
        let facilities = roll_facilities(&mut dice, Starport::A).unwrap();
        assert_eq!(
            facilities,
            Facilities { naval_base: true, scout_base: false, gas_giant: false }
        );
    }

    #[test]
    fn test_starport_c_skips_naval_roll() {
        let mut dice = ScriptedDice::new(&[8, 9]);
        let facilities = roll_facilities(&mut dice, Starport::C).unwrap();
        assert!(!facilities.naval_base);
        assert!(facilities.scout_base);
        assert!(facilities.gas_giant);
        assert!(dice.totals.is_empty());
    }

    #[test]
    fn test_starport_b_scout_without_naval() {
        // naval 7 is not > 7, scout 9 - 2 = 7 > 6, gas giant 9 < 10
        let mut dice = ScriptedDice::new(&[7, 9, 9]);
        let facilities = roll_facilities(&mut dice, Starport::B).unwrap();
        assert_eq!(
            facilities,
            Facilities { naval_base: false, scout_base: true, gas_giant: true }
        );
        assert_eq!(facilities.bases(), Bases::Scout);
    }

    #[test]
    fn test_starport_b_naval_without_scout() {
        // scout 8 - 2 = 6 is not > 6
        let mut dice = ScriptedDice::new(&[8, 8, 9]);
        let facilities = roll_facilities(&mut dice, Starport::B).unwrap();
        assert_eq!(
            facilities,
            Facilities { naval_base: true, scout_base: false, gas_giant: true }
        );
        assert_eq!(facilities.bases(), Bases::Naval);
        assert_eq!(dice.counts, vec![2, 2, 2]);
    }

    #[test]
    fn test_starport_d_scout_roll_has_no_modifier() {
        let mut dice = ScriptedDice::new(&[7, 10]);
        let facilities = roll_facilities(&mut dice, Starport::D).unwrap();
        assert!(!facilities.naval_base);
        assert!(facilities.scout_base);
        assert!(!facilities.gas_giant);
        assert!(dice.totals.is_empty());
        assert_eq!(dice.counts, vec![2, 2]);
    }

    #[test]
    fn test_starport_e_only_rolls_gas_giant() {
        let mut dice = ScriptedDice::new(&[3]);
        let facilities = roll_facilities(&mut dice, Starport::E).unwrap();
        assert_eq!(facilities.bases(), Bases::None);
        assert!(facilities.gas_giant);
        assert_eq!(dice.counts, vec![2]);
    }

    #[test]
    fn test_starport_x_only_rolls_gas_giant() {
        let mut dice = ScriptedDice::new(&[3]);
        let facilities = roll_facilities(&mut dice, Starport::X).unwrap();
        assert_eq!(facilities.bases(), Bases::None);
        assert!(facilities.gas_giant);
        assert_eq!(dice.counts, vec![2]);
    }

    #[test]
    fn test_size_zero_forces_vacuum_and_dry() {
        let mut dice = ScriptedDice::new(&[12]);
        assert_eq!(roll_atmosphere(&mut dice, 0).unwrap(), 0);
        // the atmosphere roll is still consumed
        assert!(dice.totals.is_empty());

        let mut dice = ScriptedDice::new(&[]);
        assert_eq!(roll_hydrographics(&mut dice, 0, 0).unwrap(), 0);
        assert_eq!(roll_hydrographics(&mut dice, 1, 5).unwrap(), 0);
    }

    #[test]
    fn test_atmosphere_clamped() {
        let mut dice = ScriptedDice::new(&[12, 2]);
        assert_eq!(roll_atmosphere(&mut dice, 10).unwrap(), 12);
        assert_eq!(roll_atmosphere(&mut dice, 1).unwrap(), 0);
    }

    #[test]
    fn test_hydrographics_penalty_for_thin_or_exotic_air() {
        let mut dice = ScriptedDice::new(&[7, 7, 7]);
        assert_eq!(roll_hydrographics(&mut dice, 5, 1).unwrap(), 8);
        assert_eq!(roll_hydrographics(&mut dice, 5, 10).unwrap(), 8);
        assert_eq!(roll_hydrographics(&mut dice, 5, 6).unwrap(), 10);
    }

    #[test]
    fn test_government_and_law_clamped() {
        let mut dice = ScriptedDice::new(&[12, 2, 12, 2]);
        assert_eq!(roll_government(&mut dice, 10).unwrap(), 14);
        assert_eq!(roll_government(&mut dice, 0).unwrap(), 0);
        assert_eq!(roll_law_level(&mut dice, 14).unwrap(), 10);
        assert_eq!(roll_law_level(&mut dice, 1).unwrap(), 0);
    }

    #[test]
    fn test_tech_level_uses_one_die_and_table() {
        let table = TechLevelTable::builtin().unwrap();
        let mut dice = ScriptedDice::new(&[4]);
        let c = characteristics(Starport::A, 8, 6, 8, 7, 9, 6);
        // 4 + 6 (starport A) and nothing else
        assert_eq!(roll_tech_level(&mut dice, &table, &c).unwrap(), 10);
        assert_eq!(dice.counts, vec![1]);
    }

    #[test]
    fn test_tech_level_floor() {
        let table = TechLevelTable::builtin().unwrap();
        let mut dice = ScriptedDice::new(&[1]);
        let c = characteristics(Starport::X, 6, 6, 5, 6, 2, 0);
        assert_eq!(roll_tech_level(&mut dice, &table, &c).unwrap(), 0);
    }

    #[test]
    fn test_scripted_generation_end_to_end() {
        let table = TechLevelTable::builtin().unwrap();
        // starport 4 -> A; naval 9, scout 12, gas giant 5
        // size 10 -> 8; atmosphere 5 -> 6; hydrographics 8 -> 16 clamped 10
        // population 9 -> 7; government 9 -> 9; law 4 -> 6; tech 1d6 = 3
        let mut dice = ScriptedDice::new(&[4, 9, 12, 5, 10, 5, 8, 9, 9, 4, 3]);
        let world = World::generate("Lacipyt", &mut dice, &table).unwrap();

        assert_eq!(world.starport(), Starport::A);
        assert_eq!(world.bases(), Bases::Both);
        assert_eq!(world.gas_giant_marker(), 'G');
        // 3 + 6 (A) + 2 (hydrographics 10)
        assert_eq!(world.tech_level(), 11);
        assert_eq!(world.uwp().to_string(), "A86A796-B");
        assert!(world.trade_classes().contains(TradeClass::WaterWorld));
        assert!(dice.totals.is_empty());
    }

    #[test]
    fn test_missing_modifier_aborts_generation() {
        let csv = "\
attribute,A,B,C,D,E,X,0
starport,6,4,2,0,0,-4,
size,,,,,,,0
atmosphere,,,,,,,0
hydrographics,,,,,,,0
population,,,,,,,0
government,,,,,,,0
";
        let table = TechLevelTable::from_reader(csv.as_bytes()).unwrap();
        let mut dice = ScriptedDice::new(&[7, 7, 7, 8, 7, 7, 7, 7, 7, 3]);
        let err = World::generate("Erehwemos", &mut dice, &table).unwrap_err();
        assert!(matches!(err, WorldGenError::MissingModifier { .. }));
    }

    #[test]
    fn test_random_worlds_stay_in_range() {
        let table = TechLevelTable::builtin().unwrap();
        let generator = WorldGenerator::new(&table);
        let mut dice = Dice::seeded(2024);
        for _ in 0..2000 {
            let world = generator.generate(&mut dice).unwrap();
            let c = world.characteristics();
            assert!((0..=10).contains(&c.size));
            assert!((0..=12).contains(&c.atmosphere));
            assert!((0..=10).contains(&c.hydrographics));
            assert!((0..=10).contains(&c.population));
            assert!((0..=14).contains(&c.government));
            assert!((0..=10).contains(&c.law_level));
            assert!(world.tech_level() >= 0);
            if c.size == 0 {
                assert_eq!(c.atmosphere, 0);
                assert_eq!(c.hydrographics, 0);
            }
            let uwp = world.uwp().to_string();
            assert_eq!(uwp.chars().count(), 9);
            assert_eq!(uwp.chars().nth(7), Some('-'));
            assert!(DEFAULT_NAMES.contains(&world.name()));
        }
    }

    #[test]
    fn test_display_row_layout() {
        let world = World::from_attributes(
            "Regina",
            characteristics(Starport::A, 8, 6, 8, 7, 9, 6),
            Facilities { naval_base: true, scout_base: false, gas_giant: true },
            11,
        )
        .unwrap();
        let row = world.to_string();
        assert!(row.starts_with("Regina           A868796-B N Agricultural. Rich."));
        assert!(row.ends_with(" G"));
        assert_eq!(row.len(), 16 + 1 + 9 + 1 + 1 + 1 + 49 + 1 + 1);
    }

    #[test]
    fn test_generator_names_world_from_picked_index() {
        let table = TechLevelTable::builtin().unwrap();
        let names = vec!["Mora".to_string(), " ".to_string(), "Regina".to_string()];
        let generator = WorldGenerator::with_names(&table, names).unwrap();
        let mut dice = ScriptedDice::new(&[4, 9, 12, 5, 10, 5, 8, 9, 9, 4, 3]);
        let world = generator.generate(&mut dice).unwrap();
        // blank name dropped, so the last index is Regina
        assert_eq!(world.name(), "Regina");
        assert!(dice.totals.is_empty());
    }

    #[test]
    fn test_with_names_requires_a_name() {
        let table = TechLevelTable::builtin().unwrap();
        assert!(WorldGenerator::with_names(&table, vec![]).is_err());
        assert!(WorldGenerator::with_names(&table, vec![" ".to_string()]).is_err());
        assert!(WorldGenerator::with_names(&table, vec!["Mora".to_string()]).is_ok());
    }
}
