use crate::core::sector::SectorLayout;
use crate::core::tech_table::TechLevelTable;
use crate::core::world::DEFAULT_NAMES;
use crate::utils::error::{Result, WorldGenError};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of `worldgen.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub generator: GeneratorConfig,
    pub sector: SectorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// CSV of tech level modifiers; the built-in table is used when absent.
    pub tech_table: Option<String>,
    pub seed: Option<u64>,
    pub names: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tech_table: None,
            seed: None,
            names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorConfig {
    pub columns: u8,
    pub rows: u8,
    pub density: i32,
}

impl Default for SectorConfig {
    fn default() -> Self {
        let layout = SectorLayout::default();
        Self {
            columns: layout.columns,
            rows: layout.rows,
            density: layout.density,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WorldGenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WorldGenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WorldGenError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.generator.tech_table {
            validate_path("generator.tech_table", path)?;
            validate_file_extension("generator.tech_table", path, &["csv"])?;
        }

        if self.generator.names.is_empty() {
            return Err(WorldGenError::MissingConfigError {
                field: "generator.names".to_string(),
            });
        }
        for name in &self.generator.names {
            validate_non_empty_string("generator.names", name)?;
        }

        validate_range("sector.columns", self.sector.columns, 1, 99)?;
        validate_range("sector.rows", self.sector.rows, 1, 99)?;
        validate_range("sector.density", self.sector.density, 1, 6)?;

        Ok(())
    }

    /// Loads the configured table, falling back to the built-in one.
    pub fn load_tech_table(&self) -> Result<TechLevelTable> {
        match &self.generator.tech_table {
            Some(path) => TechLevelTable::from_file(path),
            None => TechLevelTable::builtin(),
        }
    }

    pub fn layout(&self) -> SectorLayout {
        SectorLayout {
            columns: self.sector.columns,
            rows: self.sector.rows,
            density: self.sector.density,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
