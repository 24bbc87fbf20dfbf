/// Selection gate
///
/// Checks the three user selections against the capability table
/// before any sample lookup happens.

use crate::error::{Field, GenerationError};
use std::collections::HashMap;

/// How a supported (model, artist) pair is served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Look up pre-rendered images and scores from the sample folders
    PreRenderedSamples,
}

/// The raw selections; `None` or an empty string counts as unset
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection<'a> {
    pub model: Option<&'a str>,
    pub prompt_id: Option<&'a str>,
    pub artist: Option<&'a str>,
}

/// A selection that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub model: String,
    pub prompt_id: String,
    pub artist: String,
    pub strategy: Strategy,
}

/// Supported (model id, artist) combinations
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    entries: HashMap<(String, String), Strategy>,
}

impl Default for CapabilityTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("sd", "Greg Rutkowski", Strategy::PreRenderedSamples);
        table
    }
}

impl CapabilityTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, model: &str, artist: &str, strategy: Strategy) {
        self.entries
            .insert((model.to_string(), artist.to_string()), strategy);
    }

    pub fn strategy_for(&self, model: &str, artist: &str) -> Option<Strategy> {
        self.entries
            .get(&(model.to_string(), artist.to_string()))
            .copied()
    }

    /// Validate a selection
    ///
    /// Missing fields are reported in prompt, model, artist order.
    pub fn check(&self, selection: &Selection<'_>) -> Result<ValidatedRequest, GenerationError> {
        let prompt_id = required(selection.prompt_id, Field::Prompt)?;
        let model = required(selection.model, Field::Model)?;
        let artist = required(selection.artist, Field::Artist)?;

        let strategy = self.strategy_for(model, artist).ok_or_else(|| {
            GenerationError::UnsupportedCombination {
                model: model.to_string(),
                artist: artist.to_string(),
            }
        })?;

        Ok(ValidatedRequest {
            model: model.to_string(),
            prompt_id: prompt_id.to_string(),
            artist: artist.to_string(),
            strategy,
        })
    }
}

fn required(value: Option<&str>, field: Field) -> Result<&str, GenerationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GenerationError::Validation(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection<'a>(model: &'a str, prompt_id: &'a str, artist: &'a str) -> Selection<'a> {
        Selection {
            model: Some(model),
            prompt_id: Some(prompt_id),
            artist: Some(artist),
        }
    }

    #[test]
    fn test_supported_pair_passes() {
        let table = CapabilityTable::default();
        let request = table.check(&selection("sd", "3", "Greg Rutkowski")).unwrap();
        assert_eq!(request.prompt_id, "3");
        assert_eq!(request.strategy, Strategy::PreRenderedSamples);
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let table = CapabilityTable::default();

        let no_model = Selection {
            model: None,
            ..selection("sd", "3", "Greg Rutkowski")
        };
        assert_eq!(
            table.check(&no_model),
            Err(GenerationError::Validation(Field::Model))
        );

        assert_eq!(
            table.check(&selection("sd", "", "Greg Rutkowski")),
            Err(GenerationError::Validation(Field::Prompt))
        );
        assert_eq!(
            table.check(&selection("sd", "3", "")),
            Err(GenerationError::Validation(Field::Artist))
        );
        assert!(matches!(
            table.check(&Selection::default()),
            Err(GenerationError::Validation(_))
        ));
    }

    #[test]
    fn test_unsupported_combinations() {
        let table = CapabilityTable::default();
        assert_eq!(
            table.check(&selection("dalle", "0", "Greg Rutkowski")),
            Err(GenerationError::UnsupportedCombination {
                model: "dalle".to_string(),
                artist: "Greg Rutkowski".to_string(),
            })
        );
        assert!(matches!(
            table.check(&selection("sd", "0", "Claude Monet")),
            Err(GenerationError::UnsupportedCombination { .. })
        ));
    }

    #[test]
    fn test_table_accepts_new_entries() {
        let mut table = CapabilityTable::empty();
        assert!(table.strategy_for("sd", "Greg Rutkowski").is_none());
        table.insert("midjourney", "Frida Kahlo", Strategy::PreRenderedSamples);
        assert!(table
            .check(&selection("midjourney", "1", "Frida Kahlo"))
            .is_ok());
    }
}
