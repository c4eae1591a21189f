use crate::error::{NumeralError, NumeralResult};
use crate::scale::ScaleTable;
use std::fs;
use std::path::Path;

/// Load a scale table from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "levels": [
///         { "singular": "", "plural": "" },
///         { "singular": "thousand", "plural": "thousands" },
///         { "singular": "million", "plural": "millions" }
///     ]
/// }
/// ```
///
/// The first level is the units level and normally has empty names.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// A validated `ScaleTable`
///
/// # Errors
/// - File read errors
/// - Invalid JSON
/// - A table that fails validation (no levels, blank scale names)
pub fn load_scale_table_from_file(path: &Path) -> NumeralResult<ScaleTable> {
    let content = fs::read_to_string(path).map_err(|source| NumeralError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = ScaleTable::from_json_str(&content).map_err(|e| match e {
        NumeralError::InvalidJson(source) => NumeralError::Json {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    tracing::debug!(
        "Loaded {} scale levels from {}",
        table.len(),
        path.display()
    );

    Ok(table)
}
