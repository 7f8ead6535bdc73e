use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Wire shape of a test-taker's answers: subject → index key → chosen label.
pub type RawAnswers = HashMap<String, HashMap<String, String>>;

/// Parsed submission with canonical 1-based indices.
///
/// Index keys arrive either as bare digits (`"1"`) or `Q`-prefixed
/// (`"Q1"`); both resolve to the same canonical index. Keys that parse to
/// neither are dropped with a warning rather than failing the batch.
#[derive(Debug, Default)]
pub struct Submission {
    subjects: HashMap<String, BTreeMap<u32, String>>,
}

impl Submission {
    pub fn from_raw(raw: RawAnswers) -> Self {
        let mut subjects = HashMap::new();
        for (subject, answers) in raw {
            let mut indexed = BTreeMap::new();
            for (index_key, chosen) in answers {
                match parse_index_key(&index_key) {
                    Some(index) => {
                        indexed.insert(index, chosen);
                    }
                    None => {
                        warn!(%subject, %index_key, "dropping answer with unparseable index key");
                    }
                }
            }
            subjects.insert(subject, indexed);
        }
        Self { subjects }
    }

    pub fn subject(&self, name: &str) -> Option<&BTreeMap<u32, String>> {
        self.subjects.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.values().all(|answers| answers.is_empty())
    }
}

fn parse_index_key(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix('Q')
        .or_else(|| trimmed.strip_prefix('q'))
        .unwrap_or(trimmed);
    let index = digits.parse::<u32>().ok()?;
    if index == 0 {
        return None;
    }
    Some(index)
}
