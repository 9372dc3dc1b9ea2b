use crate::models::SymptomMap;
use std::collections::BTreeMap;

/// Word that joins two symptom phrases, treated like a comma
const CONNECTOR: &str = "and";

/// Split free-text symptoms into lower-cased phrases
///
/// Commas and the standalone word "and" separate phrases. Whitespace inside a
/// phrase collapses to single spaces and empty phrases are dropped, so
/// "Fever,  and skin   rash" yields `["fever", "skin rash"]`.
///
/// "and" only splits as a whole word, not as a substring: replacing every
/// "and" with a comma would break phrases such as "hand pain" or
/// "swollen glands" into fragments that match nothing.
pub fn tokenize_symptoms(symptoms: &str) -> Vec<String> {
    let lowered = symptoms.to_lowercase();
    let mut tokens = Vec::new();

    for segment in lowered.split(',') {
        let mut words: Vec<&str> = Vec::new();
        for word in segment.split_whitespace() {
            if word == CONNECTOR {
                push_phrase(&mut tokens, &mut words);
            } else {
                words.push(word);
            }
        }
        push_phrase(&mut tokens, &mut words);
    }

    tokens
}

fn push_phrase(tokens: &mut Vec<String>, words: &mut Vec<&str>) {
    if !words.is_empty() {
        tokens.push(words.join(" "));
        words.clear();
    }
}

/// Set of specializations resolved from a symptom description
///
/// Labels are deduplicated case-insensitively and kept sorted; the first
/// spelling seen for a label is the one displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specializations {
    labels: BTreeMap<String, String>,
}

impl Specializations {
    pub fn insert(&mut self, label: &str) {
        let label = label.trim();
        self.labels
            .entry(label.to_lowercase())
            .or_insert_with(|| label.to_string());
    }

    /// Case-insensitive membership test
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(&label.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Display labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.values().map(String::as_str)
    }

    /// Comma-separated display string
    pub fn display(&self) -> String {
        self.labels().collect::<Vec<_>>().join(", ")
    }
}

/// Resolve every specialization implied by the symptom text
///
/// A map key contributes when some token contains it. The result may be empty;
/// the caller decides how to report that.
pub fn resolve_specializations(symptom_map: &SymptomMap, symptoms: &str) -> Specializations {
    let mut resolved = Specializations::default();

    for token in tokenize_symptoms(symptoms) {
        for spec in symptom_map.matches(&token) {
            resolved.insert(spec);
        }
    }

    resolved
}
