pub mod dice;
pub mod sector;
pub mod tech_table;
pub mod trade;
pub mod universal_code;
pub mod uwp;
pub mod world;

pub use crate::domain::model::{
    Attribute, Bases, Characteristics, Facilities, Starport, TradeClass, TradeClasses,
};
pub use crate::domain::ports::{DiceRoller, ModifierTable, NamePicker};
pub use crate::utils::error::Result;
