use super::catalog::{OptionLabel, QuestionBank, QuestionOrder};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKeyEntry {
    pub correct: OptionLabel,
    pub question_text: &'static str,
}

/// Subject → 1-based canonical index → correct option and question text.
///
/// Built from the catalog's canonical order on every request; the index a
/// client submits against is only meaningful relative to that order, so the
/// key must never be derived from a shuffled presentation.
#[derive(Debug, Clone)]
pub struct AnswerKey {
    subjects: HashMap<&'static str, BTreeMap<u32, AnswerKeyEntry>>,
}

impl AnswerKey {
    pub fn build(bank: &QuestionBank) -> Self {
        let mut subjects = HashMap::new();
        for entry in bank.subjects() {
            let served = bank
                .questions(entry.name, QuestionOrder::Canonical)
                .expect("catalog subjects enumerate themselves");
            let indexed: BTreeMap<u32, AnswerKeyEntry> = served
                .into_iter()
                .map(|question| {
                    (
                        question.token,
                        AnswerKeyEntry {
                            correct: question.question.correct,
                            question_text: question.question.text,
                        },
                    )
                })
                .collect();
            subjects.insert(entry.name, indexed);
        }
        Self { subjects }
    }

    pub fn subject(&self, name: &str) -> Option<&BTreeMap<u32, AnswerKeyEntry>> {
        self.subjects.get(name)
    }

    pub fn entry(&self, subject: &str, index: u32) -> Option<&AnswerKeyEntry> {
        self.subjects.get(subject)?.get(&index)
    }
}
