use super::answer_key::{AnswerKey, AnswerKeyEntry};
use super::catalog::{OptionLabel, QuestionBank};
use super::submission::Submission;
use super::topics;
use std::collections::BTreeMap;

/// Overall percentage for one submitted subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectScore {
    pub subject: &'static str,
    pub percentage: f64,
}

/// Per-topic percentage within a core subject. Topics with no attributed
/// questions are never emitted, so a missing topic means "no data", not 0%.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub topic: &'static str,
    pub percentage: f64,
    pub correct: usize,
    pub total: usize,
}

pub(crate) fn answer_is_correct(chosen: &str, entry: &AnswerKeyEntry) -> bool {
    OptionLabel::parse(chosen) == Some(entry.correct)
}

/// Percentage correct for a single subject's answers. Pure: no side effects,
/// identical output for identical input. Zero answered questions score 0,
/// never NaN.
pub fn score_subject(
    answers: &BTreeMap<u32, String>,
    key: Option<&BTreeMap<u32, AnswerKeyEntry>>,
) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    let correct = answers
        .iter()
        .filter(|(index, chosen)| {
            key.and_then(|entries| entries.get(index))
                .is_some_and(|entry| answer_is_correct(chosen, entry))
        })
        .count();

    100.0 * correct as f64 / answers.len() as f64
}

/// Scores for every submitted subject, in catalog order. Subjects the client
/// did not answer are omitted; this feeds the performance-summary line of
/// the prompt and the assembled report.
pub fn subject_scores(
    submission: &Submission,
    key: &AnswerKey,
    bank: &QuestionBank,
) -> Vec<SubjectScore> {
    bank.subjects()
        .iter()
        .filter_map(|entry| {
            submission.subject(entry.name).map(|answers| SubjectScore {
                subject: entry.name,
                percentage: score_subject(answers, key.subject(entry.name)),
            })
        })
        .collect()
}

/// Topic breakdown for one core subject via keyword attribution.
///
/// Each answered question counts toward every topic whose keyword list has a
/// case-insensitive substring match against the question text. Questions
/// matching no topic are excluded from all denominators.
pub fn topic_scores(
    subject: &'static str,
    answers: &BTreeMap<u32, String>,
    key: Option<&BTreeMap<u32, AnswerKeyEntry>>,
) -> Vec<TopicScore> {
    let tables = topics::for_subject(subject);
    if tables.is_empty() {
        return Vec::new();
    }

    let mut correct_counts = vec![0usize; tables.len()];
    let mut total_counts = vec![0usize; tables.len()];

    for (index, chosen) in answers {
        let Some(entry) = key.and_then(|entries| entries.get(index)) else {
            continue;
        };
        let text = entry.question_text.to_lowercase();
        let is_correct = answer_is_correct(chosen, entry);

        for (slot, table) in tables.iter().enumerate() {
            if table.keywords.iter().any(|keyword| text.contains(keyword)) {
                total_counts[slot] += 1;
                if is_correct {
                    correct_counts[slot] += 1;
                }
            }
        }
    }

    tables
        .iter()
        .enumerate()
        .filter(|(slot, _)| total_counts[*slot] > 0)
        .map(|(slot, table)| TopicScore {
            topic: table.topic,
            percentage: 100.0 * correct_counts[slot] as f64 / total_counts[slot] as f64,
            correct: correct_counts[slot],
            total: total_counts[slot],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::standard_bank;
    use crate::assessment::submission::RawAnswers;
    use std::collections::HashMap;

    fn submission_of(subject: &str, entries: &[(&str, &str)]) -> Submission {
        let answers: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Submission::from_raw(RawAnswers::from([(subject.to_string(), answers)]))
    }

    #[test]
    fn single_correct_answer_scores_one_hundred() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_of("Physics", &[("1", "b")]);
        let scores = subject_scores(&submission, &key, bank);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].subject, "Physics");
        assert_eq!(scores[0].percentage, 100.0);
    }

    #[test]
    fn single_wrong_answer_scores_zero() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_of("Physics", &[("1", "a")]);
        let scores = subject_scores(&submission, &key, bank);
        assert_eq!(scores[0].percentage, 0.0);
    }

    #[test]
    fn empty_subject_scores_zero_not_nan() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let score = score_subject(&BTreeMap::new(), key.subject("Physics"));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn copying_the_answer_key_scores_full_marks_everywhere() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);

        let mut raw = RawAnswers::new();
        for entry in bank.subjects() {
            let answers: HashMap<String, String> = key
                .subject(entry.name)
                .expect("subject keyed")
                .iter()
                .map(|(index, entry)| (index.to_string(), entry.correct.label().to_string()))
                .collect();
            raw.insert(entry.name.to_string(), answers);
        }

        let submission = Submission::from_raw(raw);
        let scores = subject_scores(&submission, &key, bank);
        assert_eq!(scores.len(), bank.subjects().len());
        for score in scores {
            assert_eq!(score.percentage, 100.0, "{} not perfect", score.subject);
        }
    }

    #[test]
    fn answers_outside_the_key_count_as_incorrect() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        // Index 99 has no catalog question behind it.
        let submission = submission_of("Physics", &[("1", "b"), ("99", "b")]);
        let scores = subject_scores(&submission, &key, bank);
        assert_eq!(scores[0].percentage, 50.0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_of("Mathematics", &[("1", "a"), ("2", "b"), ("3", "a")]);
        let first = subject_scores(&submission, &key, bank);
        let second = subject_scores(&submission, &key, bank);
        assert_eq!(first, second);
    }

    #[test]
    fn topic_attribution_is_many_to_many() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        // Physics Q1 mentions acceleration (Mechanics); Q2 mentions electric
        // current and ampere (Electromagnetism).
        let submission = submission_of("Physics", &[("1", "b"), ("2", "c")]);
        let answers = submission.subject("Physics").expect("answers parsed");
        let scores = topic_scores("Physics", answers, key.subject("Physics"));

        let mechanics = scores
            .iter()
            .find(|score| score.topic == "Mechanics")
            .expect("mechanics attributed");
        assert_eq!(mechanics.percentage, 100.0);

        let em = scores
            .iter()
            .find(|score| score.topic == "Electromagnetism")
            .expect("electromagnetism attributed");
        assert_eq!(em.percentage, 100.0);
    }

    #[test]
    fn topics_without_attributed_questions_are_omitted() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_of("Physics", &[("1", "b")]);
        let answers = submission.subject("Physics").expect("answers parsed");
        let scores = topic_scores("Physics", answers, key.subject("Physics"));
        assert!(scores.iter().all(|score| score.total > 0));
        assert!(!scores.iter().any(|score| score.topic == "Modern Physics"));
    }

    #[test]
    fn supplementary_subjects_have_no_topic_scores() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_of("Time Management", &[("1", "d")]);
        let answers = submission.subject("Time Management").expect("answers parsed");
        let scores = topic_scores("Time Management", answers, key.subject("Time Management"));
        assert!(scores.is_empty());
    }
}
