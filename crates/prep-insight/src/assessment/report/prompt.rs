use crate::assessment::scoring::SubjectScore;

/// Comma-joined `{subject}: {pct:.1f}%` line in catalog order.
pub(crate) fn performance_line(scores: &[SubjectScore]) -> String {
    scores
        .iter()
        .map(|score| format!("{}: {:.1}%", score.subject, score.percentage))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assemble the analysis prompt: performance summary, the full transcript,
/// and the required four-section output template. The template markers are
/// the same literals the section extractor looks for, which keeps the LLM
/// and fallback paths structurally interchangeable downstream.
pub(crate) fn build_prompt(performance: &str, transcript: &str) -> String {
    format!(
        "You are an expert JEE exam counselor. Analyze these student responses \
and provide a detailed SOCA (Strengths, Opportunities, Challenges, Action Plan) analysis.\n\
\n\
Performance Summary:\n\
{performance}\n\
\n\
Detailed Responses:\n\
{transcript}\n\
\n\
Based on the above performance, provide a detailed SOCA analysis with:\n\
1. Specific strengths in topics where the student performed well\n\
2. Clear opportunities for improvement in weaker areas\n\
3. Key challenges identified from incorrect answers\n\
4. A personalized action plan based on the performance pattern\n\
\n\
Format the response as:\n\
**Strengths:**\n\
- [List 3 specific strengths based on correct answers]\n\
\n\
**Opportunities:**\n\
- [List 2 specific opportunities based on incorrect answers]\n\
\n\
**Challenges:**\n\
- [List 2 specific challenges based on performance patterns]\n\
\n\
**Action Plan:**\n\
1. [Specific action based on weakest subject]\n\
2. [Specific action based on moderate performance areas]\n\
3. [General improvement strategy]\n\
\n\
Keep the tone encouraging but realistic. Focus on actionable advice for JEE preparation.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_line_is_comma_joined_with_one_decimal() {
        let scores = vec![
            SubjectScore {
                subject: "Physics",
                percentage: 100.0,
            },
            SubjectScore {
                subject: "Chemistry",
                percentage: 33.333_333,
            },
        ];
        assert_eq!(
            performance_line(&scores),
            "Physics: 100.0%, Chemistry: 33.3%"
        );
    }

    #[test]
    fn prompt_embeds_summary_transcript_and_markers() {
        let prompt = build_prompt("Physics: 50.0%", "Student Response Analysis:");
        assert!(prompt.contains("Physics: 50.0%"));
        assert!(prompt.contains("Student Response Analysis:"));
        for marker in [
            "**Strengths:**",
            "**Opportunities:**",
            "**Challenges:**",
            "**Action Plan:**",
        ] {
            assert!(prompt.contains(marker), "prompt missing {marker}");
        }
    }
}
