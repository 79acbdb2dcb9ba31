//! Physical storage grid: shelves, levels and columns.
//!
//! Every shelf is divided into a fixed grid of cells addressed by a level
//! (1-4, bottom to top) and a column letter (A-D). Work tables are shelves
//! with a single cell at level 1, column A.

use crate::error::CoreError;

/// All valid shelf levels.
pub const VALID_LEVELS: &[i32] = &[1, 2, 3, 4];

/// All valid shelf column letters.
pub const VALID_COLUMNS: &[&str] = &["A", "B", "C", "D"];

/// Shelf codes reserved for work tables.
pub const WORK_TABLE_CODES: &[i32] = &[28, 29, 30];

/// The only cell a work table has.
pub const WORK_TABLE_CELL: (i32, &str) = (1, "A");

/// Validate that a level is one of [`VALID_LEVELS`].
pub fn validate_level(level: i32) -> Result<(), CoreError> {
    if VALID_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid level {level}. Must be between 1 and 4"
        )))
    }
}

/// Validate that a column is one of [`VALID_COLUMNS`].
pub fn validate_column(column: &str) -> Result<(), CoreError> {
    if VALID_COLUMNS.contains(&column) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid column '{column}'. Must be one of: {}",
            VALID_COLUMNS.join(", ")
        )))
    }
}

/// Validate a shelf code: strictly positive.
pub fn validate_shelf_code(code: i32) -> Result<(), CoreError> {
    if code > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid shelf code {code}. Must be a positive integer"
        )))
    }
}

/// Whether the shelf with this code is a work table.
pub fn is_work_table(code: i32) -> bool {
    WORK_TABLE_CODES.contains(&code)
}

/// Check that renumbering a shelf from `current` to `requested` keeps its
/// kind. Cells are provisioned once, so a regular shelf cannot become a work
/// table or the other way round.
pub fn validate_code_change(current: i32, requested: i32) -> Result<(), CoreError> {
    validate_shelf_code(requested)?;
    if is_work_table(current) == is_work_table(requested) {
        return Ok(());
    }
    let kind = |code| if is_work_table(code) { "work table" } else { "shelf" };
    Err(CoreError::Validation(format!(
        "Cannot renumber {} {current} to {requested}: it would become a {}",
        kind(current),
        kind(requested)
    )))
}

/// Enumerate the `(level, column)` cells a shelf with this code provides.
///
/// Regular shelves get the full 4 x 4 grid in level-major order; work
/// tables get [`WORK_TABLE_CELL`] only.
pub fn cells_for_shelf(code: i32) -> Vec<(i32, &'static str)> {
    if is_work_table(code) {
        return vec![WORK_TABLE_CELL];
    }
    VALID_LEVELS
        .iter()
        .flat_map(|&level| VALID_COLUMNS.iter().map(move |&column| (level, column)))
        .collect()
}
