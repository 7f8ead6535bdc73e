use super::answer_key::AnswerKey;
use super::catalog::{standard_bank, QuestionBank};
use super::report::{fallback, AnalysisReport, ReportGenerator, ReportSource};
use super::submission::{RawAnswers, Submission};
use crate::llm::LanguageModel;
use tracing::info;

/// Composition of catalog, answer-key reconciliation, and report
/// generation. The language-model client is injected once at construction;
/// the service holds no other state, so one instance serves any number of
/// concurrent requests.
pub struct AnalysisService<M> {
    bank: &'static QuestionBank,
    generator: ReportGenerator<M>,
}

impl<M: LanguageModel> AnalysisService<M> {
    pub fn new(model: M) -> Self {
        Self {
            bank: standard_bank(),
            generator: ReportGenerator::new(model),
        }
    }

    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    /// Score a submission and produce the SOCA report. Infallible: any
    /// model or parse failure degrades to the rule-based report, and a
    /// submission with no usable answers skips the model call entirely.
    ///
    /// The answer key is rebuilt from canonical order on every call rather
    /// than cached, so it can never drift from the numbering the client
    /// answered against.
    pub async fn analyze(&self, raw: RawAnswers) -> AnalysisReport {
        let submission = Submission::from_raw(raw);
        let key = AnswerKey::build(self.bank);

        if submission.is_empty() {
            info!("no usable answers in submission; skipping model call");
            return AnalysisReport {
                analysis: fallback::generate(&submission, &key, self.bank),
                source: ReportSource::Fallback,
            };
        }

        let report = self.generator.generate(&submission, &key, self.bank).await;
        info!(source = report.source.label(), "analysis report ready");
        report
    }
}
