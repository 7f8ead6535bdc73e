//! Deterministic rule-based SOCA report.
//!
//! This path never fails and makes no external calls: whatever the
//! submission looks like, every section of the report comes back non-empty,
//! degrading to one generic sentence per list when nothing was detected.

use crate::assessment::answer_key::AnswerKey;
use crate::assessment::catalog::QuestionBank;
use crate::assessment::scoring::{score_subject, topic_scores, SubjectScore, TopicScore};
use crate::assessment::submission::Submission;
use std::fmt::Write;

const STRONG_THRESHOLD: f64 = 70.0;
const WEAK_THRESHOLD: f64 = 50.0;

pub fn generate(submission: &Submission, key: &AnswerKey, bank: &QuestionBank) -> String {
    let mut subject_performance: Vec<SubjectScore> = Vec::new();
    let mut topic_performance: Vec<(&'static str, Vec<TopicScore>)> = Vec::new();

    for entry in bank.core_subjects() {
        let Some(answers) = submission.subject(entry.name) else {
            continue;
        };
        if answers.is_empty() {
            continue;
        }
        let subject_key = key.subject(entry.name);
        subject_performance.push(SubjectScore {
            subject: entry.name,
            percentage: score_subject(answers, subject_key),
        });
        topic_performance.push((entry.name, topic_scores(entry.name, answers, subject_key)));
    }

    let mut strengths: Vec<String> = Vec::new();
    let mut opportunities: Vec<String> = Vec::new();
    let mut challenges: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    for score in &subject_performance {
        if score.percentage >= STRONG_THRESHOLD {
            strengths.push(format!(
                "Strong overall performance in {} ({:.1}%)",
                score.subject, score.percentage
            ));
        }
    }

    for (subject, topics) in &topic_performance {
        for topic in topics {
            if topic.percentage >= STRONG_THRESHOLD {
                strengths.push(format!(
                    "Excellent understanding of {} in {} ({:.1}%)",
                    topic.topic, subject, topic.percentage
                ));
                recommendations.push(format!("To maintain strength in {} ({subject}):", topic.topic));
                recommendations.push(format!("- Practice advanced problems in {}", topic.topic));
                recommendations.push(format!("- Help peers understand {} concepts", topic.topic));
                recommendations.push(format!(
                    "- Explore real-world applications of {}",
                    topic.topic
                ));
            }
        }
    }

    for (subject, topics) in &topic_performance {
        for topic in topics {
            if topic.percentage < WEAK_THRESHOLD {
                challenges.push(format!(
                    "Needs significant improvement in {} ({subject}) - {:.1}%",
                    topic.topic, topic.percentage
                ));
                opportunities.push(format!(
                    "Focus on strengthening {} in {subject}",
                    topic.topic
                ));
                recommendations.push(format!("To improve in {} ({subject}):", topic.topic));
                recommendations.push(format!("- Review fundamental concepts of {}", topic.topic));
                recommendations.push(format!(
                    "- Solve basic to medium level problems in {}",
                    topic.topic
                ));
                recommendations.push(format!("- Watch video lectures on {}", topic.topic));
                recommendations.push(format!("- Create concept maps for {}", topic.topic));
            } else if topic.percentage < STRONG_THRESHOLD {
                opportunities.push(format!(
                    "Potential to excel in {} ({subject}) - Current: {:.1}%",
                    topic.topic, topic.percentage
                ));
                recommendations.push(format!("To excel in {} ({subject}):", topic.topic));
                recommendations.push(format!(
                    "- Practice more complex problems in {}",
                    topic.topic
                ));
                recommendations.push(format!(
                    "- Focus on connecting {} with other topics",
                    topic.topic
                ));
                recommendations.push(format!("- Take timed tests focusing on {}", topic.topic));
            }
        }
    }

    // First minimum wins on ties, so fold instead of min_by (which keeps
    // the last minimal element).
    let weakest_subject = subject_performance
        .iter()
        .fold(None::<&SubjectScore>, |best, score| match best {
            Some(current) if current.percentage <= score.percentage => Some(current),
            _ => Some(score),
        })
        .map(|score| score.subject);

    let action_items: Vec<String> = match weakest_subject {
        Some(subject) => vec![
            format!("1. Create focused study plan for {subject} with emphasis on weak topics"),
            "2. Daily Practice Schedule:".to_string(),
            format!("   - Morning: Focus on {subject} concepts"),
            "   - Afternoon: Problem-solving practice".to_string(),
            "   - Evening: Review and revision".to_string(),
            "3. Weekly Assessment Plan:".to_string(),
            "   - Take topic-wise tests".to_string(),
            "   - Analyze mistakes and patterns".to_string(),
            "   - Update study strategy based on results".to_string(),
            "4. Resource Utilization:".to_string(),
            "   - Use video lectures for difficult concepts".to_string(),
            "   - Join study groups for collaborative learning".to_string(),
            "   - Consult reference books for detailed understanding".to_string(),
            "5. Progress Tracking:".to_string(),
            "   - Maintain a progress journal".to_string(),
            "   - Track improvement in weak areas".to_string(),
            "   - Set weekly and monthly goals".to_string(),
        ],
        None => vec![
            "1. Complete a full scored mock test to establish a performance baseline".to_string(),
        ],
    };

    let mut report = String::new();

    report.push_str("**Performance Summary:**\n");
    if subject_performance.is_empty() {
        report.push_str("- No scored responses submitted\n");
    } else {
        for score in &subject_performance {
            let _ = writeln!(report, "- {}: {:.1}%", score.subject, score.percentage);
        }
    }

    report.push_str("\n**Detailed Strengths Analysis:**\n");
    push_list(
        &mut report,
        &strengths,
        "- Keep working on improving your performance",
    );

    report.push_str("\n**Key Opportunities for Improvement:**\n");
    push_list(&mut report, &opportunities, "- Focus on fundamental concepts");

    report.push_str("\n**Critical Challenges to Address:**\n");
    push_list(&mut report, &challenges, "- Maintain consistent practice");

    report.push_str("\n**Detailed Recommendations:**\n");
    if recommendations.is_empty() {
        report.push_str("- Keep a balanced practice routine across all subjects\n");
    } else {
        for line in &recommendations {
            let _ = writeln!(report, "{line}");
        }
    }

    report.push_str("\n**Comprehensive Action Plan:**\n");
    for item in &action_items {
        let _ = writeln!(report, "{item}");
    }

    report.push_str(
        "\n**Additional Notes:**\n\
- Focus on understanding the underlying concepts rather than memorizing solutions\n\
- Practice time management during problem-solving\n\
- Regularly review and revise previously learned concepts\n\
- Maintain a healthy balance between study and rest\n\
- Track your progress and adjust your study plan accordingly\n",
    );

    report
}

fn push_list(report: &mut String, lines: &[String], fallback_line: &str) {
    if lines.is_empty() {
        let _ = writeln!(report, "{fallback_line}");
    } else {
        for line in lines {
            let _ = writeln!(report, "- {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::standard_bank;
    use crate::assessment::submission::RawAnswers;
    use std::collections::HashMap;

    const SECTION_HEADERS: [&str; 7] = [
        "**Performance Summary:**",
        "**Detailed Strengths Analysis:**",
        "**Key Opportunities for Improvement:**",
        "**Critical Challenges to Address:**",
        "**Detailed Recommendations:**",
        "**Comprehensive Action Plan:**",
        "**Additional Notes:**",
    ];

    fn submission_from(entries: &[(&str, &[(&str, &str)])]) -> Submission {
        let raw: RawAnswers = entries
            .iter()
            .map(|(subject, answers)| {
                (
                    subject.to_string(),
                    answers
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect::<HashMap<_, _>>(),
                )
            })
            .collect();
        Submission::from_raw(raw)
    }

    fn section_between<'a>(report: &'a str, header: &str, next: &str) -> &'a str {
        let start = report.find(header).expect("header present") + header.len();
        let end = report.find(next).expect("next header present");
        &report[start..end]
    }

    #[test]
    fn every_section_is_present_and_non_empty_for_an_empty_submission() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let report = generate(&Submission::default(), &key, bank);

        for window in SECTION_HEADERS.windows(2) {
            assert!(report.contains(window[0]), "missing {}", window[0]);
            let body = section_between(&report, window[0], window[1]);
            assert!(
                !body.trim().is_empty(),
                "section {} is empty",
                window[0]
            );
        }
        assert!(report.contains("**Additional Notes:**"));
        assert!(report.contains("- No scored responses submitted"));
        assert!(report.contains("establish a performance baseline"));
    }

    #[test]
    fn strong_subject_produces_strength_and_maintenance_bullets() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        // Physics 1 and 2 both correct: subject and matched topics at 100%.
        let submission = submission_from(&[("Physics", &[("1", "b"), ("2", "c")])]);
        let report = generate(&submission, &key, bank);

        assert!(report.contains("Strong overall performance in Physics (100.0%)"));
        assert!(report.contains("Excellent understanding of Mechanics in Physics"));
        assert!(report.contains("- Practice advanced problems in Mechanics"));
    }

    #[test]
    fn weak_topic_produces_challenge_opportunity_and_four_bullets() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        // Both Physics answers wrong: every matched topic is at 0%.
        let submission = submission_from(&[("Physics", &[("1", "a"), ("2", "a")])]);
        let report = generate(&submission, &key, bank);

        assert!(report.contains("Needs significant improvement in Mechanics (Physics) - 0.0%"));
        assert!(report.contains("Focus on strengthening Mechanics in Physics"));
        assert!(report.contains("- Review fundamental concepts of Mechanics"));
        assert!(report.contains("- Create concept maps for Mechanics"));
    }

    #[test]
    fn action_plan_targets_the_first_lowest_scoring_subject() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_from(&[
            ("Physics", &[("1", "b")]),
            ("Chemistry", &[("1", "a")]),
            ("Mathematics", &[("1", "b")]),
        ]);
        let report = generate(&submission, &key, bank);

        assert!(report.contains("Create focused study plan for Chemistry"));
        assert!(report.contains("- Morning: Focus on Chemistry concepts"));
    }

    #[test]
    fn tie_on_lowest_score_resolves_to_catalog_order() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        // Physics and Chemistry both at 0%; Physics comes first in the catalog.
        let submission = submission_from(&[
            ("Physics", &[("1", "a")]),
            ("Chemistry", &[("1", "a")]),
        ]);
        let report = generate(&submission, &key, bank);

        assert!(report.contains("Create focused study plan for Physics"));
    }

    #[test]
    fn supplementary_subjects_never_reach_the_fallback_scoring() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_from(&[("Well-being Assessment", &[("1", "a")])]);
        let report = generate(&submission, &key, bank);

        assert!(report.contains("- No scored responses submitted"));
        assert!(!report.contains("Well-being Assessment:"));
    }

    #[test]
    fn generation_is_deterministic() {
        let bank = standard_bank();
        let key = AnswerKey::build(bank);
        let submission = submission_from(&[("Mathematics", &[("1", "a"), ("2", "a"), ("3", "b")])]);
        assert_eq!(
            generate(&submission, &key, bank),
            generate(&submission, &key, bank)
        );
    }
}
