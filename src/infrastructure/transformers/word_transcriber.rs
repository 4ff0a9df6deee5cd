use std::collections::HashMap;

use crate::application::ports::Transformer;
use crate::domain::errors::ArrayError;
use crate::domain::value_objects::FloatKey;
use crate::infrastructure::transformers::invariant_format::format_invariant;
use crate::infrastructure::transformers::vocabulary::Language;

/// Spells out an `f64` one character at a time using a word table.
///
/// Values found in the special table (matched through [`FloatKey`], so any
/// NaN hits a NaN entry) are replaced by their word as a whole. Everything
/// else is rendered in invariant canonical form and each character is mapped
/// to its word, words separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTranscriber {
    words: HashMap<char, String>,
    special: HashMap<FloatKey, String>,
}

impl WordTranscriber {
    pub fn new(words: HashMap<char, String>, special: HashMap<FloatKey, String>) -> Self {
        Self { words, special }
    }

    pub fn for_language(language: Language) -> Self {
        let vocabulary = language.vocabulary();
        Self::new(vocabulary.words.clone(), vocabulary.special.clone())
    }

    pub fn english() -> Self {
        Self::for_language(Language::English)
    }

    pub fn russian() -> Self {
        Self::for_language(Language::Russian)
    }

    pub fn transcribe(&self, value: f64) -> Result<String, ArrayError> {
        if let Some(word) = self.special.get(&FloatKey::new(value)) {
            return Ok(word.clone());
        }

        let rendered = format_invariant(value);
        let words = rendered
            .chars()
            .map(|symbol| {
                self.words
                    .get(&symbol)
                    .map(String::as_str)
                    .ok_or(ArrayError::MissingWord(symbol))
            })
            .collect::<Result<Vec<&str>, ArrayError>>()?;

        Ok(words.join(" "))
    }
}

impl Transformer<f64, String> for WordTranscriber {
    fn transform(&self, value: &f64) -> Result<String, ArrayError> {
        self.transcribe(*value)
    }
}
