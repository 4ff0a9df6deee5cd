//! Built-in word tables for [`WordTranscriber`](super::WordTranscriber).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FloatKey;

/// Language of a built-in vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Russian => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

/// Character words plus the overrides for special values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub words: HashMap<char, String>,
    pub special: HashMap<FloatKey, String>,
}

impl Vocabulary {
    fn build(
        words: [(char, &str); 14],
        nan: &str,
        positive_infinity: &str,
        negative_infinity: &str,
    ) -> Self {
        let words = words
            .iter()
            .map(|(symbol, word)| (*symbol, word.to_string()))
            .collect();

        let special = HashMap::from([
            (FloatKey::new(f64::NAN), nan.to_string()),
            (FloatKey::new(f64::INFINITY), positive_infinity.to_string()),
            (FloatKey::new(f64::NEG_INFINITY), negative_infinity.to_string()),
        ]);

        Self { words, special }
    }
}

static ENGLISH: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::build(
        [
            ('0', "zero"),
            ('1', "one"),
            ('2', "two"),
            ('3', "three"),
            ('4', "four"),
            ('5', "five"),
            ('6', "six"),
            ('7', "seven"),
            ('8', "eight"),
            ('9', "nine"),
            ('.', "point"),
            ('E', "exponenta"),
            ('-', "minus"),
            ('+', "plus"),
        ],
        "Not a number",
        "Positive Infinity",
        "Negative Infinity",
    )
});

static RUSSIAN: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::build(
        [
            ('0', "ноль"),
            ('1', "один"),
            ('2', "два"),
            ('3', "три"),
            ('4', "четыре"),
            ('5', "пять"),
            ('6', "шесть"),
            ('7', "семь"),
            ('8', "восемь"),
            ('9', "девять"),
            ('.', "точка"),
            ('E', "экспонента"),
            ('-', "минус"),
            ('+', "плюс"),
        ],
        "Не число",
        "Плюс бесконечность",
        "Минус бесконечность",
    )
});
