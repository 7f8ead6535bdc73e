//! Mock-test assessment pipeline: question catalog, answer-key
//! reconciliation, scoring, and SOCA report generation.

pub mod answer_key;
pub mod catalog;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod submission;
pub mod topics;
pub mod transcript;

pub use answer_key::{AnswerKey, AnswerKeyEntry};
pub use catalog::{
    standard_bank, CatalogError, OptionLabel, Question, QuestionBank, QuestionOrder,
    ServedQuestion, SubjectCategory, SubjectEntry,
};
pub use report::{AnalysisReport, ReportGenerator, ReportSource};
pub use router::assessment_router;
pub use service::AnalysisService;
pub use submission::{RawAnswers, Submission};
