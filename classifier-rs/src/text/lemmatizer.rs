//! Base-form reduction of word tokens
//!
//! Irregular and uninflected forms ("ran", "children", "news") come from a
//! fixed table. Everything else goes through WordNet-style noun suffix
//! detachment ("chances" -> "chance", "stories" -> "story", "boxes" -> "box").
//! Output is always a whole word form, never a truncated stem, and reducing
//! an already reduced word leaves it unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Inflected or uninflected form -> base form
const EXCEPTIONS: &[(&str, &str)] = &[
    // verbs
    ("ran", "run"),
    ("running", "run"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("getting", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("made", "make"),
    ("said", "say"),
    ("sent", "send"),
    ("paid", "pay"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("thought", "think"),
    ("told", "tell"),
    ("knew", "know"),
    ("known", "know"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("left", "leave"),
    ("lost", "lose"),
    ("met", "meet"),
    ("sold", "sell"),
    ("won", "win"),
    ("began", "begin"),
    ("begun", "begin"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("flew", "fly"),
    ("flown", "fly"),
    // nouns
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("data", "datum"),
    ("criteria", "criterion"),
    // adjectives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    // already base forms that look plural
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("means", "means"),
    ("always", "always"),
    ("thanks", "thanks"),
    ("physics", "physics"),
    ("politics", "politics"),
    ("economics", "economics"),
];

/// Noun suffix rules, longest first: (suffix, replacement, minimum word length)
const SUFFIX_RULES: &[(&str, &str, usize)] = &[
    ("sses", "ss", 5),
    ("ches", "ch", 5),
    ("shes", "sh", 5),
    ("ies", "y", 5),
    ("xes", "x", 4),
    ("s", "", 4),
];

/// Endings that look plural but are not ("glass", "bonus", "analysis")
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is"];

static EXCEPTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EXCEPTIONS.iter().copied().collect());

/// Part-of-speech agnostic lemmatizer for English word tokens
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    /// Create a new lemmatizer
    pub fn new() -> Self {
        Lemmatizer
    }

    /// Reduce a lowercase word to its base form
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = EXCEPTION_MAP.get(word) {
            return base.to_string();
        }

        let detached = detach_suffix(word);
        EXCEPTION_MAP
            .get(detached.as_str())
            .map(|base| base.to_string())
            .unwrap_or(detached)
    }
}

fn detach_suffix(word: &str) -> String {
    if PROTECTED_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word.to_string();
    }

    SUFFIX_RULES
        .iter()
        .find(|(suffix, _, min_len)| word.len() >= *min_len && word.ends_with(suffix))
        .map(|(suffix, replacement, _)| {
            format!("{}{}", &word[..word.len() - suffix.len()], replacement)
        })
        .unwrap_or_else(|| word.to_string())
}
