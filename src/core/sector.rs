use crate::core::world::{World, WorldGenerator};
use crate::domain::ports::{DiceRoller, ModifierTable, NamePicker};
use crate::utils::error::{Result, WorldGenError};
use std::collections::BTreeMap;
use std::fmt;

/// Column and row of a hex, both 1-based. Displays as `CCRR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexCoord {
    pub column: u8,
    pub row: u8,
}

impl HexCoord {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorLayout {
    pub columns: u8,
    pub rows: u8,
    /// A hex holds a world when 1d6 is at least this value.
    pub density: i32,
}

impl Default for SectorLayout {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 10,
            density: 4,
        }
    }
}

/// Worlds keyed by hex, iterated column by column.
#[derive(Debug, Clone, Default)]
pub struct Sector {
    worlds: BTreeMap<HexCoord, World>,
}

impl Sector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls every hex of the layout for world presence and generates the
    /// worlds that are found.
    pub fn generate<D, T>(
        generator: &WorldGenerator<'_, T>,
        dice: &mut D,
        layout: &SectorLayout,
    ) -> Result<Self>
    where
        D: DiceRoller + NamePicker + ?Sized,
        T: ModifierTable + ?Sized,
    {
        if layout.columns == 0 || layout.rows == 0 {
            return Err(WorldGenError::invalid_argument(
                "layout",
                format!("{}x{}", layout.columns, layout.rows),
                "a sector needs at least one column and one row",
            ));
        }

        let mut sector = Self::new();
        for column in 1..=layout.columns {
            for row in 1..=layout.rows {
                if dice.roll(1)? >= layout.density {
                    sector.insert(HexCoord::new(column, row), generator.generate(dice)?);
                }
            }
        }

        tracing::info!(
            "🪐 Sector filled: {} worlds in {} hexes",
            sector.len(),
            layout.columns as usize * layout.rows as usize
        );
        Ok(sector)
    }

    /// Places a world, returning whatever occupied the hex before.
    pub fn insert(&mut self, coord: HexCoord, world: World) -> Option<World> {
        self.worlds.insert(coord, world)
    }

    pub fn get(&self, coord: HexCoord) -> Option<&World> {
        self.worlds.get(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HexCoord, &World)> {
        self.worlds.iter()
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (coord, world) in &self.worlds {
            writeln!(
                f,
                "{:16} {} {} {} {:44} {}",
                world.name(),
                coord,
                world.uwp(),
                world.bases(),
                world.trade_classes(),
                world.gas_giant_marker()
            )?;
        }
        Ok(())
    }
}
