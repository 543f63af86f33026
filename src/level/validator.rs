//! # Level Validator
//!
//! Structural and playability checks on a [`LevelRecord`], independent of how
//! the record was produced. Problems are collected and returned, never
//! thrown, so a loader or editor can report all of them at once.

use crate::level::record::dimension_mismatches;
use crate::level::LevelRecord;
use std::fmt;

/// One human-readable validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a level record. An empty result means the record is playable.
///
/// Checks are independent and all collected:
/// - the row count matches the declared height
/// - every row's length matches the declared width
/// - every symbol belongs to the alphabet `{. S P G E}`
/// - the grid contains exactly one player spawn `P`
/// - the grid contains exactly one goal `G`
///
/// Duplicate spawn/goal markers are rejected here rather than left to the
/// expander's last-wins tie-break: a file with two spawns is malformed input,
/// not an authoring state.
pub fn validate(record: &LevelRecord) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    for problem in dimension_mismatches(record) {
        errors.push(ValidationError::new(problem));
    }

    let mut spawns = 0usize;
    let mut goals = 0usize;
    for (y, row) in record.grid.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            match ch {
                'P' => spawns += 1,
                'G' => goals += 1,
                '.' | 'S' | 'E' => {}
                other => {
                    errors.push(ValidationError::new(format!(
                        "unknown symbol '{}' at ({}, {})",
                        other, x, y
                    )));
                }
            }
        }
    }

    if spawns == 0 {
        errors.push(ValidationError::new("missing player spawn 'P'"));
    } else if spawns > 1 {
        errors.push(ValidationError::new(format!(
            "{} player spawns found, expected exactly one",
            spawns
        )));
    }

    if goals == 0 {
        errors.push(ValidationError::new("missing goal 'G'"));
    } else if goals > 1 {
        errors.push(ValidationError::new(format!(
            "{} goals found, expected exactly one",
            goals
        )));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(width: u32, height: u32, grid: &[&str]) -> LevelRecord {
        LevelRecord {
            id: None,
            name: None,
            width,
            height,
            grid: grid.iter().map(|row| row.to_string()).collect(),
            spawn: None,
            goal: None,
            enemies: None,
            theme: None,
            palette: None,
            skybox: None,
            meta: None,
        }
    }

    #[test]
    fn test_valid_record_yields_no_errors() {
        let errors = validate(&record(4, 3, &["P..G", "SSSS", "..E."]));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_height_mismatch_reported_not_thrown() {
        let errors = validate(&record(2, 3, &["PG", ".."]));
        assert!(errors
            .iter()
            .any(|e| e.message.contains("declared height is 3")));
    }

    #[test]
    fn test_every_short_row_reported() {
        let errors = validate(&record(3, 2, &["PG", ".."]));
        let width_errors = errors
            .iter()
            .filter(|e| e.message.contains("declared width is 3"))
            .count();
        assert_eq!(width_errors, 2);
    }

    #[test]
    fn test_missing_goal_with_spawn_present() {
        let errors = validate(&record(3, 1, &["P.."]));
        assert!(errors.iter().any(|e| e.message.contains("missing goal")));
        assert!(!errors.iter().any(|e| e.message.contains("player spawn")));
    }

    #[test]
    fn test_missing_spawn_reported() {
        let errors = validate(&record(3, 1, &["..G"]));
        assert!(errors
            .iter()
            .any(|e| e.message.contains("missing player spawn")));
    }

    #[test]
    fn test_duplicate_spawn_rejected() {
        let errors = validate(&record(4, 2, &["P..G", "P..."]));
        assert!(errors.iter().any(|e| e.message.contains("2 player spawns")));
    }

    #[test]
    fn test_duplicate_goal_rejected() {
        let errors = validate(&record(4, 2, &["P..G", "...G"]));
        assert!(errors.iter().any(|e| e.message.contains("2 goals")));
    }

    #[test]
    fn test_unknown_symbol_reported_with_position() {
        let errors = validate(&record(3, 1, &["PxG"]));
        assert!(errors
            .iter()
            .any(|e| e.message.contains("unknown symbol 'x' at (1, 0)")));
    }

    #[test]
    fn test_all_problems_collected_together() {
        // wrong height, missing spawn, missing goal, one bad symbol
        let errors = validate(&record(2, 3, &["..", ".?"]));
        assert!(errors.len() >= 4);
    }
}
