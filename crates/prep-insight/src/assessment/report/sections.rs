//! Extraction of the four SOCA sections from free-form model output.
//!
//! Each section is located independently by its literal `**Name:**` marker,
//! case-insensitively, and captures everything up to the next line that
//! begins a bold marker (or end of text). Extraction is all-or-nothing: one
//! missing section fails the whole parse and routes the pipeline to the
//! fallback generator, so a partially populated report is never emitted.

pub const SECTION_ORDER: [&str; 4] = ["Strengths", "Opportunities", "Challenges", "Action Plan"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocaSections {
    pub strengths: String,
    pub opportunities: String,
    pub challenges: String,
    pub action_plan: String,
}

impl SocaSections {
    pub fn by_name(&self, name: &str) -> &str {
        match name {
            "Strengths" => &self.strengths,
            "Opportunities" => &self.opportunities,
            "Challenges" => &self.challenges,
            "Action Plan" => &self.action_plan,
            _ => "",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SectionParseError {
    #[error("missing '{0}' section in generated output")]
    MissingSection(&'static str),
}

pub fn extract(text: &str) -> Result<SocaSections, SectionParseError> {
    Ok(SocaSections {
        strengths: extract_section(text, "Strengths")
            .ok_or(SectionParseError::MissingSection("Strengths"))?,
        opportunities: extract_section(text, "Opportunities")
            .ok_or(SectionParseError::MissingSection("Opportunities"))?,
        challenges: extract_section(text, "Challenges")
            .ok_or(SectionParseError::MissingSection("Challenges"))?,
        action_plan: extract_section(text, "Action Plan")
            .ok_or(SectionParseError::MissingSection("Action Plan"))?,
    })
}

fn extract_section(text: &str, name: &str) -> Option<String> {
    // ASCII lowercasing preserves byte offsets, so indices found in the
    // lowered copy address the original text directly.
    let lowered = text.to_ascii_lowercase();
    let marker = format!("**{}:**", name.to_ascii_lowercase());

    let marker_at = lowered.find(&marker)?;
    let content_start = marker_at + marker.len();
    let content_end = next_marker_line(&lowered, content_start);

    Some(text[content_start..content_end].trim().to_string())
}

/// Index of the next `**` that starts a line (ignoring leading whitespace)
/// at or after `from`, or the end of the text.
fn next_marker_line(lowered: &str, from: usize) -> usize {
    let mut search = from;
    while let Some(relative) = lowered[search..].find("**") {
        let candidate = search + relative;
        let line_start = lowered[..candidate]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        if line_start >= from && lowered[line_start..candidate].trim().is_empty() {
            return candidate;
        }
        search = candidate + 2;
    }
    lowered.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
**Strengths:**\n\
- Solid grasp of mechanics fundamentals\n\
\n\
**Opportunities:**\n\
- Revisit electrochemistry basics\n\
\n\
**Challenges:**\n\
- Time pressure on calculus problems\n\
\n\
**Action Plan:**\n\
1. Daily integration drills\n";

    #[test]
    fn extracts_all_four_sections() {
        let sections = extract(WELL_FORMED).expect("well-formed output parses");
        assert!(sections.strengths.contains("mechanics"));
        assert!(sections.opportunities.contains("electrochemistry"));
        assert!(sections.challenges.contains("Time pressure"));
        assert!(sections.action_plan.contains("integration drills"));
    }

    #[test]
    fn section_content_stops_at_the_next_marker() {
        let sections = extract(WELL_FORMED).expect("well-formed output parses");
        assert!(!sections.strengths.contains("Opportunities"));
        assert!(!sections.challenges.contains("Action Plan"));
    }

    #[test]
    fn markers_match_case_insensitively() {
        let shouting = WELL_FORMED
            .replace("**Strengths:**", "**STRENGTHS:**")
            .replace("**Action Plan:**", "**action plan:**");
        let sections = extract(&shouting).expect("case variations parse");
        assert!(sections.strengths.contains("mechanics"));
        assert!(sections.action_plan.contains("integration drills"));
    }

    #[test]
    fn one_missing_marker_fails_the_whole_parse() {
        let truncated = WELL_FORMED.replace("**Challenges:**", "Challenges:");
        let err = extract(&truncated).expect_err("missing marker is fatal");
        assert!(matches!(
            err,
            SectionParseError::MissingSection("Challenges")
        ));
    }

    #[test]
    fn inline_bold_text_does_not_terminate_a_section() {
        let inline = "\
**Strengths:**\n\
- Strong in **mechanics** overall\n\
**Opportunities:**\n\
- More practice\n\
**Challenges:**\n\
- Pacing\n\
**Action Plan:**\n\
1. Drills\n";
        let sections = extract(inline).expect("inline bold parses");
        assert!(sections.strengths.contains("**mechanics**"));
        assert!(!sections.strengths.contains("More practice"));
    }

    #[test]
    fn last_section_runs_to_end_of_text() {
        let sections = extract(WELL_FORMED).expect("well-formed output parses");
        assert_eq!(sections.action_plan, "1. Daily integration drills");
    }
}
