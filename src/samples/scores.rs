/// Aesthetic score sheets
///
/// Each `sorted_{bucket}.xlsx` holds one row per sample image. The first
/// worksheet's first row is the header; `Filename` and `Aesthetic Score`
/// are located by exact header text.

use crate::error::ScoreLookupError;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::path::Path;

pub const FILENAME_COLUMN: &str = "Filename";
pub const SCORE_COLUMN: &str = "Aesthetic Score";

/// Filename → score index built once per loaded sheet
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    scores: HashMap<String, f64>,
}

impl ScoreSheet {
    /// Open a workbook and index its first worksheet
    pub fn open(path: &Path) -> Result<Self, ScoreLookupError> {
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| ScoreLookupError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ScoreLookupError::NoWorksheet(path.to_path_buf()))?
            .map_err(|source| ScoreLookupError::Sheet {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_range(&range, path)
    }

    /// Index an already-loaded worksheet range
    ///
    /// Rows whose filename is not text or whose score is not numeric are
    /// skipped. When a filename repeats, the first row wins.
    pub fn from_range(range: &Range<Data>, path: &Path) -> Result<Self, ScoreLookupError> {
        let mut rows = range.rows();
        let header = rows.next().unwrap_or(&[]);

        let filename_col = column_index(header, FILENAME_COLUMN, path)?;
        let score_col = column_index(header, SCORE_COLUMN, path)?;

        let mut scores = HashMap::new();
        for row in rows {
            let Some(Data::String(filename)) = row.get(filename_col) else {
                continue;
            };
            let Some(score) = row.get(score_col).and_then(cell_as_f64) else {
                continue;
            };
            scores.entry(filename.clone()).or_insert(score);
        }

        Ok(Self { scores })
    }

    pub fn score_for(&self, filename: &str) -> Option<f64> {
        self.scores.get(filename).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn column_index(header: &[Data], name: &'static str, path: &Path) -> Result<usize, ScoreLookupError> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == name))
        .ok_or_else(|| ScoreLookupError::MissingColumn {
            path: path.to_path_buf(),
            column: name,
        })
}

fn cell_as_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
