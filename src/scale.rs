use serde::{Deserialize, Serialize};

use crate::error::{NumeralError, NumeralResult};

/// Names of one power-of-1000 position, e.g. "thousand" / "thousands".
///
/// The units level (index 0) carries empty names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleLevel {
    pub singular: String,
    pub plural: String,
}

impl ScaleLevel {
    pub fn new(singular: &str, plural: &str) -> Self {
        ScaleLevel {
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }

    /// Scale word for a group of the given value: singular for exactly one.
    pub fn name_for(&self, group: u16) -> &str {
        if group == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Ordered scale levels, lowest first.
///
/// Each level covers three decimal digits, so a table of `n` levels can
/// translate numbers of up to `3 * n` digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleTable {
    pub levels: Vec<ScaleLevel>,
}

impl ScaleTable {
    pub fn new(levels: Vec<ScaleLevel>) -> NumeralResult<Self> {
        let table = ScaleTable { levels };
        table.validate()?;
        Ok(table)
    }

    /// The English table: units, thousand, million, billion, trillion.
    pub fn english() -> Self {
        ScaleTable {
            levels: vec![
                ScaleLevel::new("", ""),
                ScaleLevel::new("thousand", "thousands"),
                ScaleLevel::new("million", "millions"),
                ScaleLevel::new("billion", "billions"),
                ScaleLevel::new("trillion", "trillions"),
            ],
        }
    }

    /// Parse and validate a table from JSON. Unknown keys such as
    /// `@metadata` are ignored.
    ///
    /// # Errors
    /// Returns `InvalidJson` for malformed JSON and `InvalidConfig` for a
    /// table that fails [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> NumeralResult<Self> {
        let table: ScaleTable = serde_json::from_str(json).map_err(NumeralError::InvalidJson)?;
        table.validate()?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> Option<&ScaleLevel> {
        self.levels.get(index)
    }

    /// Largest digit count this table can translate.
    pub fn max_digits(&self) -> usize {
        self.levels.len() * 3
    }

    /// Check that the table can be used for translation.
    ///
    /// Every level above the units level needs both names, otherwise
    /// adjacent groups would read as a single one.
    pub fn validate(&self) -> NumeralResult<()> {
        if self.levels.is_empty() {
            return Err(NumeralError::InvalidConfig(
                "scale table has no levels".to_string(),
            ));
        }

        for (index, level) in self.levels.iter().enumerate().skip(1) {
            if level.singular.trim().is_empty() || level.plural.trim().is_empty() {
                return Err(NumeralError::InvalidConfig(format!(
                    "scale level {} needs both a singular and a plural name",
                    index
                )));
            }
        }

        Ok(())
    }

    /// Whether the units level carries names, which then follow every
    /// non-zero units group.
    pub fn has_named_units(&self) -> bool {
        self.levels
            .first()
            .is_some_and(|units| !units.singular.is_empty() || !units.plural.is_empty())
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        ScaleTable::english()
    }
}
