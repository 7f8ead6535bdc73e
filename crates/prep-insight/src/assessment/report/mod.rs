//! SOCA report generation: prompt assembly, the language-model call, strict
//! section extraction, and the deterministic fallback.

pub mod fallback;
mod prompt;
pub mod sections;

pub use sections::{SectionParseError, SocaSections, SECTION_ORDER};

use super::answer_key::AnswerKey;
use super::catalog::QuestionBank;
use super::scoring;
use super::submission::Submission;
use super::transcript;
use crate::llm::LanguageModel;
use serde::Serialize;
use std::fmt::Write;
use tracing::warn;

/// Model output shorter than this is treated the same as a failed call.
pub const MIN_MODEL_RESPONSE_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    LanguageModel,
    Fallback,
}

impl ReportSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LanguageModel => "Language Model",
            Self::Fallback => "Fallback",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis: String,
    pub source: ReportSource,
}

/// Orchestrates prompt → model call → parse, degrading to the rule-based
/// generator on any failure. Generation itself is therefore infallible:
/// every submission yields a complete report.
pub struct ReportGenerator<M> {
    model: M,
}

impl<M: LanguageModel> ReportGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn generate(
        &self,
        submission: &Submission,
        key: &AnswerKey,
        bank: &QuestionBank,
    ) -> AnalysisReport {
        let scores = scoring::subject_scores(submission, key, bank);
        let performance = prompt::performance_line(&scores);
        let transcript = transcript::render(submission, key, bank);
        let prompt = prompt::build_prompt(&performance, &transcript);

        let generated = match self.model.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "language model call failed; using fallback report");
                return self.fallback(submission, key, bank);
            }
        };

        if generated.trim().len() < MIN_MODEL_RESPONSE_CHARS {
            warn!(
                chars = generated.trim().len(),
                "generated text too short; using fallback report"
            );
            return self.fallback(submission, key, bank);
        }

        let sections = match sections::extract(&generated) {
            Ok(sections) => sections,
            Err(err) => {
                warn!(error = %err, "malformed model output; using fallback report");
                return self.fallback(submission, key, bank);
            }
        };

        AnalysisReport {
            analysis: assemble(&scores, &sections),
            source: ReportSource::LanguageModel,
        }
    }

    fn fallback(
        &self,
        submission: &Submission,
        key: &AnswerKey,
        bank: &QuestionBank,
    ) -> AnalysisReport {
        AnalysisReport {
            analysis: fallback::generate(submission, key, bank),
            source: ReportSource::Fallback,
        }
    }
}

/// Reassemble the validated sections under a performance-summary header, in
/// fixed order, skipping any section whose extracted text is empty.
fn assemble(scores: &[scoring::SubjectScore], sections: &SocaSections) -> String {
    let mut output = String::from("**Performance Summary:**\n");
    for score in scores {
        let _ = writeln!(output, "- {}: {:.1}%", score.subject, score.percentage);
    }
    output.push('\n');

    for name in SECTION_ORDER {
        let body = sections.by_name(name);
        if !body.is_empty() {
            let _ = write!(output, "**{name}:**\n{body}\n\n");
        }
    }

    output
}
