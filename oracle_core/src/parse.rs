//! Raw module text to draw records.
//!
//! Validation is advisory: a malformed module contributes one message but is
//! still converted best-effort, so a single bad line never blocks a cycle.

use crate::data::sequence::{DataSet, Sequence, HEAD_ROW_LEN, ROWS_PER_SET, TAIL_ROW_LEN};

/// Best-effort parsed modules plus advisory validation messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub modules: Vec<DataSet>,
    pub errors: Vec<String>,
}

/// Parse raw module line groups into draw records.
///
/// Rows 0-5 must be four digit characters and row 6 three; empty lines fail
/// validation. Conversion still happens for failed modules, coercing any
/// non-digit character to 0 (input capture restricts entry to digits, so the
/// coercion is a backstop rather than an error path).
pub fn parse_modules(raw_modules: &[Vec<String>]) -> ParseOutcome {
    let mut modules = Vec::with_capacity(raw_modules.len());
    let mut errors = Vec::new();

    for (index, lines) in raw_modules.iter().enumerate() {
        if !module_shape_is_valid(lines) {
            errors.push(format!("module {} failed shape validation", index + 1));
        }
        let rows = lines.iter().map(|line| digits_of(line)).collect();
        modules.push(DataSet::from_rows(rows));
    }

    ParseOutcome { modules, errors }
}

fn module_shape_is_valid(lines: &[String]) -> bool {
    lines.iter().enumerate().all(|(index, line)| {
        if line.is_empty() {
            return false;
        }
        let all_digits = line.chars().all(|c| c.is_ascii_digit());
        match index {
            i if i < ROWS_PER_SET - 1 => line.len() == HEAD_ROW_LEN && all_digits,
            i if i == ROWS_PER_SET - 1 => line.len() == TAIL_ROW_LEN && all_digits,
            _ => true,
        }
    })
}

fn digits_of(line: &str) -> Sequence {
    line.chars()
        .map(|c| c.to_digit(10).map_or(0, |digit| digit as u8))
        .collect()
}
