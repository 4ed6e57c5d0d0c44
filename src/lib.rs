pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use self::core::{
    dice::Dice,
    sector::{HexCoord, Sector, SectorLayout},
    tech_table::TechLevelTable,
    universal_code::{encode, UcValue},
    uwp::Uwp,
    world::{World, WorldGenerator},
};
pub use domain::model::{Bases, Characteristics, Facilities, Starport, TradeClass, TradeClasses};
pub use domain::ports::{DiceRoller, ModifierTable, NamePicker};
pub use utils::error::{Result, WorldGenError};
