use crate::domain::model::Attribute;
use crate::utils::error::Result;

/// Source of dice rolls for world generation.
pub trait DiceRoller {
    /// Sum of `count` six-sided dice. `count` must be at least 1.
    fn roll(&mut self, count: i32) -> Result<i32>;
}

/// Uniform choice among world names.
pub trait NamePicker {
    /// Index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Per-attribute tech level modifiers.
pub trait ModifierTable {
    fn modifier(&self, attribute: Attribute, key: &str) -> Result<i32>;
}
