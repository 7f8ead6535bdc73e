use super::answer_key::AnswerKey;
use super::catalog::QuestionBank;
use super::scoring::answer_is_correct;
use super::submission::Submission;
use std::fmt::Write;

/// Render the submitted answers as the textual transcript embedded in the
/// analysis prompt.
///
/// Core subjects are judged against the answer key; supplementary subjects
/// only surface the recommended choice as an "Ideal Habit". An index with no
/// answer-key entry degrades to an `Unknown` placeholder instead of aborting
/// the transcript.
pub fn render(submission: &Submission, key: &AnswerKey, bank: &QuestionBank) -> String {
    let mut transcript = String::from("Student Response Analysis:\n\n");

    transcript.push_str("--- ACADEMIC PERFORMANCE ---\n");
    for entry in bank.core_subjects() {
        let Some(answers) = submission.subject(entry.name) else {
            continue;
        };
        let _ = write!(transcript, "\nSubject: {}\n", entry.name);
        for (index, chosen) in answers {
            let keyed = key.entry(entry.name, *index);
            let question_text = keyed.map(|entry| entry.question_text).unwrap_or("");
            let correct_label = keyed
                .map(|entry| entry.correct.label())
                .unwrap_or("Unknown");
            let status = match keyed {
                Some(keyed) if answer_is_correct(chosen, keyed) => "Correct",
                _ => "Incorrect",
            };
            let _ = write!(
                transcript,
                "{index}. {question_text}\n   Your Answer: ({chosen}), Correct Answer: ({correct_label}) - {status}\n"
            );
        }
    }

    transcript.push_str("\n--- WELL-BEING & TIME MANAGEMENT ---\n");
    for entry in bank.supplementary_subjects() {
        let Some(answers) = submission.subject(entry.name) else {
            continue;
        };
        let _ = write!(transcript, "\nSection: {}\n", entry.name);
        for (index, chosen) in answers {
            let keyed = key.entry(entry.name, *index);
            let question_text = keyed.map(|entry| entry.question_text).unwrap_or("");
            let ideal_label = keyed
                .map(|entry| entry.correct.label())
                .unwrap_or("Unknown");
            let _ = write!(
                transcript,
                "{index}. {question_text}\n   Your Answer: ({chosen}), Ideal Habit: ({ideal_label})\n"
            );
        }
    }

    transcript
}
