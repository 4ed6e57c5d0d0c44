use crate::domain::model::Attribute;
use crate::domain::ports::ModifierTable;
use crate::utils::error::{Result, WorldGenError};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

const BUILTIN_TABLE: &str = include_str!("../../data/tech_level.csv");

const ATTRIBUTE_COLUMN: &str = "attribute";

/// Tech level modifiers keyed by attribute name, then by the attribute's value.
///
/// The CSV has an `attribute` column naming the row and one column per value
/// key (`A`..`X` for starports, decimal integers for everything else). Empty
/// cells are absent keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechLevelTable {
    rows: HashMap<Attribute, HashMap<String, i32>>,
}

impl TechLevelTable {
    /// Classic Traveller modifiers shipped with the crate.
    pub fn builtin() -> Result<Self> {
        tracing::info!("📁 Using built-in tech level table");
        Self::from_reader(BUILTIN_TABLE.as_bytes())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("📁 Loading tech level table from: {}", path.display());
        let file = std::fs::File::open(path).map_err(|e| WorldGenError::ConfigError {
            message: format!("cannot open tech level table '{}': {}", path.display(), e),
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut seen = HashSet::new();
        if let Some(duplicate) = headers.iter().find(|header| !seen.insert(*header)) {
            return Err(WorldGenError::ConfigError {
                message: format!("duplicate column '{}' in tech level table", duplicate),
            });
        }

        let mut rows = HashMap::new();
        for record in csv_reader.deserialize::<HashMap<String, String>>() {
            let mut record = record?;
            let name = record
                .remove(ATTRIBUTE_COLUMN)
                .ok_or_else(|| WorldGenError::MissingConfigError {
                    field: ATTRIBUTE_COLUMN.to_string(),
                })?;
            let attribute =
                Attribute::from_name(&name).ok_or_else(|| WorldGenError::ConfigError {
                    message: format!("unknown attribute row '{}' in tech level table", name),
                })?;

            let mut modifiers = HashMap::new();
            for (key, cell) in record {
                if cell.is_empty() {
                    continue;
                }
                let modifier = cell.parse::<i32>().map_err(|_| WorldGenError::ConfigError {
                    message: format!(
                        "modifier for {} '{}' is not an integer: '{}'",
                        attribute, key, cell
                    ),
                })?;
                modifiers.insert(key, modifier);
            }

            if rows.insert(attribute, modifiers).is_some() {
                return Err(WorldGenError::ConfigError {
                    message: format!("duplicate row for {} in tech level table", attribute),
                });
            }
        }

        if let Some(missing) = Attribute::TECH_ORDER
            .into_iter()
            .find(|a| !rows.contains_key(a))
        {
            return Err(WorldGenError::ConfigError {
                message: format!("tech level table has no row for {}", missing),
            });
        }

        Ok(Self { rows })
    }
}

impl ModifierTable for TechLevelTable {
    fn modifier(&self, attribute: Attribute, key: &str) -> Result<i32> {
        self.rows
            .get(&attribute)
            .and_then(|row| row.get(key))
            .copied()
            .ok_or_else(|| WorldGenError::MissingModifier {
                attribute: attribute.to_string(),
                key: key.to_string(),
            })
    }
}
