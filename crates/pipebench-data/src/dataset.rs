//! The macro × pipe result matrix.

use crate::axes::{MacroSize, DEFAULT_PIPES};
use crate::error::DatasetError;
use crate::literal::Value;
use crate::vars::VarMap;

/// Immutable result matrix for one benchmark run.
///
/// Rows follow [`MacroSize::ALL`] order; columns follow the pipes axis.
/// Every row is validated to match the pipes length at construction, so
/// indexing downstream cannot go out of shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pipes: Vec<u32>,
    results: Vec<Vec<f64>>,
}

impl Dataset {
    /// Build a dataset from an explicit pipes axis and result rows.
    pub fn new(pipes: Vec<u32>, results: Vec<Vec<f64>>) -> Result<Self, DatasetError> {
        if pipes.is_empty() {
            return Err(DatasetError::EmptyPipes);
        }
        if results.len() != MacroSize::ALL.len() {
            return Err(DatasetError::WrongRowCount {
                got: results.len(),
                expected: MacroSize::ALL.len(),
            });
        }
        for (row, macro_size) in results.iter().zip(MacroSize::ALL) {
            if row.len() != pipes.len() {
                return Err(DatasetError::ShapeMismatch {
                    key: macro_size.result_key().to_string(),
                    got: row.len(),
                    expected: pipes.len(),
                });
            }
        }
        Ok(Self { pipes, results })
    }

    /// Build a dataset from a parsed variables file.
    ///
    /// The four `results_*` keys are required. An optional `pipes` key
    /// overrides the default axis.
    pub fn from_vars(vars: &VarMap) -> Result<Self, DatasetError> {
        let pipes = match vars.get("pipes") {
            Some(value) => {
                let raw = value.as_list().ok_or_else(|| DatasetError::NotAList {
                    key: "pipes".to_string(),
                })?;
                raw.iter()
                    .map(|&v| {
                        if v >= 1.0 && v.fract() == 0.0 {
                            Ok(v as u32)
                        } else {
                            Err(DatasetError::BadPipe(v))
                        }
                    })
                    .collect::<Result<Vec<u32>, _>>()?
            }
            None => DEFAULT_PIPES.to_vec(),
        };

        let mut results = Vec::with_capacity(MacroSize::ALL.len());
        for macro_size in MacroSize::ALL {
            let key = macro_size.result_key();
            let value = vars.get(key).ok_or(DatasetError::MissingKey(key))?;
            let row = value.as_list().ok_or_else(|| DatasetError::NotAList {
                key: key.to_string(),
            })?;
            results.push(row.to_vec());
        }

        Self::new(pipes, results)
    }

    pub fn pipes(&self) -> &[u32] {
        &self.pipes
    }

    /// Result rows in macro order.
    pub fn results(&self) -> &[Vec<f64>] {
        &self.results
    }

    /// Timings for one macro category across all pipe counts.
    pub fn row(&self, macro_size: MacroSize) -> &[f64] {
        let idx = MacroSize::ALL
            .iter()
            .position(|&m| m == macro_size)
            .unwrap_or(0);
        &self.results[idx]
    }

    /// Column-major view: one series per pipe across macro positions.
    ///
    /// `transposed()[i][j]` is the timing at pipe `i`, macro `j`.
    pub fn transposed(&self) -> Vec<Vec<f64>> {
        (0..self.pipes.len())
            .map(|i| self.results.iter().map(|row| row[i]).collect())
            .collect()
    }

    /// Serialize back to a variable map, the mirror of [`Dataset::from_vars`].
    ///
    /// The `pipes` key is emitted only when the axis differs from the
    /// default, keeping files produced from default-axis runs minimal.
    pub fn to_vars(&self) -> VarMap {
        let mut vars = VarMap::new();
        if self.pipes != DEFAULT_PIPES {
            vars.insert(
                "pipes".to_string(),
                Value::List(self.pipes.iter().map(|&p| f64::from(p)).collect()),
            );
        }
        for (macro_size, row) in MacroSize::ALL.into_iter().zip(&self.results) {
            vars.insert(
                macro_size.result_key().to_string(),
                Value::List(row.clone()),
            );
        }
        vars
    }
}
