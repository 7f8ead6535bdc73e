use crate::infra::ConfiguredModel;
use clap::Args;
use prep_insight::assessment::{standard_bank, AnalysisService, QuestionOrder, RawAnswers};
use prep_insight::error::AppError;
use std::collections::HashMap;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answer every question correctly instead of the mixed sample run
    #[arg(long)]
    pub(crate) perfect: bool,
    /// Print the served question list for each subject before the report
    #[arg(long)]
    pub(crate) list_questions: bool,
}

/// Offline end-to-end run: builds a sample submission against the real
/// catalog and prints the deterministic fallback report. No network calls.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let bank = standard_bank();

    if args.list_questions {
        for subject in bank.subject_names() {
            println!("== {subject} ==");
            let served = bank
                .questions(subject, QuestionOrder::Canonical)
                .expect("catalog subjects enumerate themselves");
            for question in &served {
                println!("{:>3}. {}", question.token, question.question.text);
            }
            println!();
        }
    }

    let submission = if args.perfect {
        perfect_submission()
    } else {
        sample_submission()
    };

    let service = AnalysisService::new(ConfiguredModel::Disabled);
    let report = service.analyze(submission).await;

    println!("Report source: {}\n", report.source.label());
    println!("{}", report.analysis);
    Ok(())
}

fn perfect_submission() -> RawAnswers {
    let bank = standard_bank();
    let mut raw = RawAnswers::new();
    for subject in bank.subject_names() {
        let served = bank
            .questions(subject, QuestionOrder::Canonical)
            .expect("catalog subjects enumerate themselves");
        let answers: HashMap<String, String> = served
            .iter()
            .map(|question| {
                (
                    question.token.to_string(),
                    question.question.correct.label().to_string(),
                )
            })
            .collect();
        raw.insert(subject.to_string(), answers);
    }
    raw
}

/// Mixed performance: every n-th question per subject is answered wrong.
fn sample_submission() -> RawAnswers {
    let bank = standard_bank();
    let mut raw = RawAnswers::new();
    for (subject, miss_every) in [("Physics", 3usize), ("Chemistry", 5), ("Mathematics", 2)] {
        let served = bank
            .questions(subject, QuestionOrder::Canonical)
            .expect("catalog subjects enumerate themselves");
        let answers: HashMap<String, String> = served
            .iter()
            .map(|question| {
                let chosen = if question.token as usize % miss_every == 0 {
                    wrong_answer(question.question.correct.label())
                } else {
                    question.question.correct.label().to_string()
                };
                (question.token.to_string(), chosen)
            })
            .collect();
        raw.insert(subject.to_string(), answers);
    }
    raw.insert(
        "Well-being Assessment".to_string(),
        HashMap::from([
            ("1".to_string(), "b".to_string()),
            ("2".to_string(), "c".to_string()),
        ]),
    );
    raw
}

fn wrong_answer(correct: &str) -> String {
    if correct == "a" { "b" } else { "a" }.to_string()
}
