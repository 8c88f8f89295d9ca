//! Reading and writing the `key=value` variables file.
//!
//! One assignment per line; blank lines are ignored. The writer is the
//! serialization mirror of the parser: parsing its output yields the same
//! map (float text is the shortest form that round-trips through f64).

use crate::error::VarsError;
use crate::literal::{parse_value, Value};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Map of variable name to parsed value, ordered by name.
pub type VarMap = BTreeMap<String, Value>;

/// Parse the full text of a variables file.
pub fn parse_vars(text: &str) -> Result<VarMap, VarsError> {
    let mut vars = VarMap::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let (name, value_text) = raw
            .split_once('=')
            .ok_or(VarsError::MissingAssign { line })?;
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(VarsError::BadName {
                line,
                name: name.to_string(),
            });
        }
        let value = parse_value(value_text).map_err(|reason| VarsError::BadValue { line, reason })?;
        vars.insert(name.to_string(), value);
    }
    Ok(vars)
}

/// Read and parse a variables file from disk.
pub fn read_vars_file(path: &Path) -> Result<VarMap, VarsError> {
    let text = fs::read_to_string(path).map_err(|source| VarsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vars(&text)
}

/// Serialize a variable map back to the file format.
pub fn write_vars(vars: &VarMap) -> String {
    let mut out = String::new();
    for (name, value) in vars {
        // BTreeMap iteration keeps the output deterministic.
        let _ = writeln!(out, "{name}={value}");
    }
    out
}

/// Serialize a variable map to a file on disk.
pub fn write_vars_file(path: &Path, vars: &VarMap) -> Result<(), VarsError> {
    fs::write(path, write_vars(vars)).map_err(|source| VarsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignment_per_line() {
        let vars = parse_vars("pipes=[1, 2, 3]\nlimit = 150\n").unwrap();
        assert_eq!(vars["pipes"], Value::List(vec![1.0, 2.0, 3.0]));
        assert_eq!(vars["limit"], Value::Scalar(150.0));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let vars = parse_vars("\na=1\n\nb=2\n").unwrap();
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn missing_assign_reports_line_number() {
        let err = parse_vars("a=1\nnonsense\n").unwrap_err();
        assert!(matches!(err, VarsError::MissingAssign { line: 2 }));
    }

    #[test]
    fn bad_value_reports_line_number() {
        let err = parse_vars("a=[1, 2\n").unwrap_err();
        assert!(matches!(err, VarsError::BadValue { line: 1, .. }));
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(matches!(
            parse_vars("3x=1\n").unwrap_err(),
            VarsError::BadName { .. }
        ));
    }

    #[test]
    fn write_then_parse_round_trips() {
        let mut vars = VarMap::new();
        vars.insert(
            "results_SMALL".to_string(),
            Value::List(vec![0.110787, 0.067214, 0.063037]),
        );
        vars.insert("limit".to_string(), Value::Scalar(350.0));
        let text = write_vars(&vars);
        assert_eq!(parse_vars(&text).unwrap(), vars);
    }
}
