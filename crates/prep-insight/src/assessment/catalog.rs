use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Whether a subject is graded against ground truth or self-reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCategory {
    Core,
    Supplementary,
}

impl SubjectCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Supplementary => "Supplementary",
        }
    }
}

/// One of the four answer choices shown for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const fn ordered() -> [Self; 4] {
        [Self::A, Self::B, Self::C, Self::D]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub text: &'static str,
    /// Option texts in label order `a`..`d`.
    pub options: [&'static str; 4],
    pub correct: OptionLabel,
}

impl Question {
    pub fn option_text(&self, label: OptionLabel) -> &'static str {
        self.options[label.index()]
    }
}

#[derive(Debug)]
pub struct SubjectEntry {
    pub name: &'static str,
    pub category: SubjectCategory,
    questions: Vec<Question>,
}

impl SubjectEntry {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Presentation order for served questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOrder {
    Canonical,
    Shuffled,
}

/// A question paired with the token the display layer must echo back when
/// submitting the chosen answer. The token is the 1-based canonical index;
/// callers treat it as opaque, so shuffled presentation still reconciles
/// against the right answer-key entry.
#[derive(Debug, Clone)]
pub struct ServedQuestion<'a> {
    pub token: u32,
    pub question: &'a Question,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown subject '{0}'")]
    UnknownSubject(String),
}

/// The immutable bank of exam subjects and their questions.
///
/// Subject order is a constant and fixes cross-request question numbering:
/// the answer key and every transcript iterate subjects in exactly this
/// order.
#[derive(Debug)]
pub struct QuestionBank {
    subjects: Vec<SubjectEntry>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            subjects: standard_subjects(),
        }
    }

    pub fn subjects(&self) -> &[SubjectEntry] {
        &self.subjects
    }

    pub fn subject_names(&self) -> Vec<&'static str> {
        self.subjects.iter().map(|entry| entry.name).collect()
    }

    pub fn subject(&self, name: &str) -> Option<&SubjectEntry> {
        self.subjects.iter().find(|entry| entry.name == name)
    }

    pub fn core_subjects(&self) -> impl Iterator<Item = &SubjectEntry> {
        self.subjects
            .iter()
            .filter(|entry| entry.category == SubjectCategory::Core)
    }

    pub fn supplementary_subjects(&self) -> impl Iterator<Item = &SubjectEntry> {
        self.subjects
            .iter()
            .filter(|entry| entry.category == SubjectCategory::Supplementary)
    }

    /// Questions for a subject, each carrying its canonical-index token.
    ///
    /// `Canonical` order is deterministic on every call; the answer-key
    /// builder depends on that. `Shuffled` returns a fresh permutation with
    /// the tokens still pointing at the canonical positions.
    pub fn questions(
        &self,
        subject: &str,
        order: QuestionOrder,
    ) -> Result<Vec<ServedQuestion<'_>>, CatalogError> {
        let entry = self
            .subject(subject)
            .ok_or_else(|| CatalogError::UnknownSubject(subject.to_string()))?;

        let mut served: Vec<ServedQuestion<'_>> = entry
            .questions
            .iter()
            .enumerate()
            .map(|(position, question)| ServedQuestion {
                token: (position + 1) as u32,
                question,
            })
            .collect();

        if order == QuestionOrder::Shuffled {
            served.shuffle(&mut rand::thread_rng());
        }

        Ok(served)
    }
}

/// Process-wide catalog, built at most once on first use. Read-only after
/// construction, so it is safe to share across concurrent requests.
pub fn standard_bank() -> &'static QuestionBank {
    static BANK: OnceLock<QuestionBank> = OnceLock::new();
    BANK.get_or_init(QuestionBank::standard)
}

fn standard_subjects() -> Vec<SubjectEntry> {
    vec![
        SubjectEntry {
            name: "Physics",
            category: SubjectCategory::Core,
            questions: physics_questions(),
        },
        SubjectEntry {
            name: "Chemistry",
            category: SubjectCategory::Core,
            questions: chemistry_questions(),
        },
        SubjectEntry {
            name: "Mathematics",
            category: SubjectCategory::Core,
            questions: mathematics_questions(),
        },
        SubjectEntry {
            name: "Well-being Assessment",
            category: SubjectCategory::Supplementary,
            questions: well_being_questions(),
        },
        SubjectEntry {
            name: "Time Management",
            category: SubjectCategory::Supplementary,
            questions: time_management_questions(),
        },
    ]
}

fn physics_questions() -> Vec<Question> {
    vec![
        Question {
            text: "A particle moves in a circular path of radius r with uniform speed v. The magnitude of its acceleration is:",
            options: ["v/r", "v²/r", "v/r²", "v²/r²"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The SI unit of electric current is:",
            options: ["Volt", "Watt", "Ampere", "Ohm"],
            correct: OptionLabel::C,
        },
        Question {
            text: "A body of mass 2 kg is moving with a velocity of 3 m/s. Its kinetic energy is:",
            options: ["6 J", "9 J", "12 J", "18 J"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The refractive index of a medium is 1.5. The speed of light in this medium is:",
            options: ["2 × 10⁸ m/s", "1.5 × 10⁸ m/s", "1 × 10⁸ m/s", "0.5 × 10⁸ m/s"],
            correct: OptionLabel::A,
        },
        Question {
            text: "A spring of force constant k is cut into two equal parts. The force constant of each part is:",
            options: ["k/2", "k", "2k", "4k"],
            correct: OptionLabel::C,
        },
        Question {
            text: "The work done in moving a charge of 2C through a potential difference of 5V is:",
            options: ["2.5 J", "5 J", "10 J", "20 J"],
            correct: OptionLabel::C,
        },
        Question {
            text: "The time period of a simple pendulum depends on:",
            options: [
                "Mass of the bob",
                "Length of the string",
                "Amplitude of oscillation",
                "All of these",
            ],
            correct: OptionLabel::B,
        },
        Question {
            text: "A body is moving with uniform acceleration. Its velocity after 5 seconds is 25 m/s and after 8 seconds is 34 m/s. The acceleration is:",
            options: ["2 m/s²", "3 m/s²", "4 m/s²", "5 m/s²"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The ratio of specific heats (γ) for a monatomic gas is:",
            options: ["1.33", "1.40", "1.67", "1.80"],
            correct: OptionLabel::C,
        },
        Question {
            text: "A ray of light is incident at an angle of 45° on a glass slab. The refractive index of glass is 1.5. The angle of refraction is:",
            options: ["30°", "45°", "60°", "90°"],
            correct: OptionLabel::A,
        },
    ]
}

fn chemistry_questions() -> Vec<Question> {
    vec![
        Question {
            text: "Which of the following is a noble gas?",
            options: ["Nitrogen", "Helium", "Chlorine", "Oxygen"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The atomic number of Carbon is:",
            options: ["4", "6", "8", "10"],
            correct: OptionLabel::B,
        },
        Question {
            text: "Which of the following is a strong acid?",
            options: [
                "Acetic acid",
                "Hydrochloric acid",
                "Carbonic acid",
                "Citric acid",
            ],
            correct: OptionLabel::B,
        },
        Question {
            text: "The molecular formula of glucose is:",
            options: ["C₆H₁₂O₅", "C₆H₁₂O₆", "C₅H₁₀O₅", "C₅H₁₀O₆"],
            correct: OptionLabel::B,
        },
        Question {
            text: "Which of the following is an example of a redox reaction?",
            options: [
                "NaCl + AgNO₃ → AgCl + NaNO₃",
                "2H₂ + O₂ → 2H₂O",
                "HCl + NaOH → NaCl + H₂O",
                "CaCO₃ → CaO + CO₂",
            ],
            correct: OptionLabel::B,
        },
        Question {
            text: "The pH of a neutral solution at 25°C is:",
            options: ["0", "7", "14", "1"],
            correct: OptionLabel::B,
        },
        Question {
            text: "Which of the following is a greenhouse gas?",
            options: ["N₂", "O₂", "CO₂", "H₂"],
            correct: OptionLabel::C,
        },
        Question {
            text: "The process of conversion of solid directly to gas is called:",
            options: ["Sublimation", "Evaporation", "Condensation", "Melting"],
            correct: OptionLabel::A,
        },
        Question {
            text: "Which of the following is a strong base?",
            options: ["NH₃", "NaOH", "CH₃COOH", "H₂O"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The number of electrons in the outermost shell of an atom is called:",
            options: ["Atomic number", "Mass number", "Valency", "Atomic mass"],
            correct: OptionLabel::C,
        },
    ]
}

fn mathematics_questions() -> Vec<Question> {
    vec![
        Question {
            text: "If sin θ + cos θ = 1, then the value of sin θ cos θ is:",
            options: ["0", "1/2", "1", "2"],
            correct: OptionLabel::A,
        },
        Question {
            text: "The derivative of x² with respect to x is:",
            options: ["x", "2x", "x²", "2x²"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The value of ∫(2x + 3)dx from 0 to 2 is:",
            options: ["4", "6", "8", "10"],
            correct: OptionLabel::D,
        },
        Question {
            text: "If A is a 2×2 matrix with determinant 3, then det(2A) is:",
            options: ["3", "6", "9", "12"],
            correct: OptionLabel::D,
        },
        Question {
            text: "The number of terms in the expansion of (a + b)⁴ is:",
            options: ["3", "4", "5", "6"],
            correct: OptionLabel::C,
        },
        Question {
            text: "The equation of the circle with center (2,3) and radius 4 is:",
            options: [
                "(x-2)² + (y-3)² = 4",
                "(x-2)² + (y-3)² = 16",
                "(x+2)² + (y+3)² = 4",
                "(x+2)² + (y+3)² = 16",
            ],
            correct: OptionLabel::B,
        },
        Question {
            text: "The probability of getting a head when tossing a fair coin is:",
            options: ["0.25", "0.5", "0.75", "1"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The value of lim(x→0) sin(x)/x is:",
            options: ["0", "1", "∞", "Does not exist"],
            correct: OptionLabel::B,
        },
        Question {
            text: "The number of ways to arrange 5 different books on a shelf is:",
            options: ["5", "25", "120", "625"],
            correct: OptionLabel::C,
        },
        Question {
            text: "The solution of the equation 2x + 3 = 7 is:",
            options: ["x = 1", "x = 2", "x = 3", "x = 4"],
            correct: OptionLabel::B,
        },
    ]
}

fn well_being_questions() -> Vec<Question> {
    vec![
        Question {
            text: "How would you rate your current stress level?",
            options: ["Very High", "High", "Moderate", "Low"],
            correct: OptionLabel::D,
        },
        Question {
            text: "How many hours of sleep do you get on average?",
            options: [
                "Less than 4 hours",
                "4-6 hours",
                "6-8 hours",
                "More than 8 hours",
            ],
            correct: OptionLabel::C,
        },
        Question {
            text: "How often do you exercise?",
            options: [
                "Never",
                "1-2 times per week",
                "3-4 times per week",
                "Daily",
            ],
            correct: OptionLabel::D,
        },
        Question {
            text: "How do you typically handle academic pressure?",
            options: [
                "Avoid thinking about it",
                "Get anxious and stressed",
                "Talk to friends/family",
                "Use structured coping strategies",
            ],
            correct: OptionLabel::D,
        },
        Question {
            text: "How confident are you in your ability to achieve your JEE goals?",
            options: [
                "Not confident at all",
                "Slightly confident",
                "Moderately confident",
                "Very confident",
            ],
            correct: OptionLabel::D,
        },
    ]
}

fn time_management_questions() -> Vec<Question> {
    vec![
        Question {
            text: "How do you typically plan your study schedule?",
            options: [
                "No planning",
                "Basic daily list",
                "Weekly schedule",
                "Detailed monthly planner",
            ],
            correct: OptionLabel::D,
        },
        Question {
            text: "How do you handle study breaks?",
            options: [
                "No breaks",
                "Random breaks",
                "Fixed time breaks",
                "Pomodoro technique",
            ],
            correct: OptionLabel::D,
        },
        Question {
            text: "How do you prioritize your study topics?",
            options: [
                "No prioritization",
                "Based on difficulty",
                "Based on exam weightage",
                "Based on both difficulty and weightage",
            ],
            correct: OptionLabel::D,
        },
        Question {
            text: "How do you handle unexpected disruptions in your study schedule?",
            options: [
                "Get frustrated and give up",
                "Skip the disrupted topic",
                "Try to make up time later",
                "Have a flexible backup plan",
            ],
            correct: OptionLabel::D,
        },
        Question {
            text: "How do you review and adjust your study plan?",
            options: [
                "Never review",
                "Only when problems occur",
                "Weekly review",
                "Daily review and adjustment",
            ],
            correct: OptionLabel::D,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_order_is_fixed() {
        let bank = QuestionBank::standard();
        assert_eq!(
            bank.subject_names(),
            vec![
                "Physics",
                "Chemistry",
                "Mathematics",
                "Well-being Assessment",
                "Time Management",
            ]
        );
    }

    #[test]
    fn question_counts_match_the_bank() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.subject("Physics").unwrap().question_count(), 10);
        assert_eq!(bank.subject("Chemistry").unwrap().question_count(), 10);
        assert_eq!(bank.subject("Mathematics").unwrap().question_count(), 10);
        assert_eq!(
            bank.subject("Well-being Assessment").unwrap().question_count(),
            5
        );
        assert_eq!(bank.subject("Time Management").unwrap().question_count(), 5);
    }

    #[test]
    fn canonical_order_is_deterministic_across_calls() {
        let bank = QuestionBank::standard();
        let first = bank
            .questions("Physics", QuestionOrder::Canonical)
            .expect("known subject");
        for _ in 0..5 {
            let again = bank
                .questions("Physics", QuestionOrder::Canonical)
                .expect("known subject");
            let lhs: Vec<(u32, &str)> = first.iter().map(|q| (q.token, q.question.text)).collect();
            let rhs: Vec<(u32, &str)> = again.iter().map(|q| (q.token, q.question.text)).collect();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn shuffled_order_preserves_canonical_tokens() {
        let bank = QuestionBank::standard();
        let canonical = bank
            .questions("Chemistry", QuestionOrder::Canonical)
            .expect("known subject");
        let shuffled = bank
            .questions("Chemistry", QuestionOrder::Shuffled)
            .expect("known subject");

        assert_eq!(canonical.len(), shuffled.len());
        for served in &shuffled {
            let original = &canonical[(served.token - 1) as usize];
            assert_eq!(served.question.text, original.question.text);
        }
    }

    #[test]
    fn unknown_subject_is_an_error() {
        let bank = QuestionBank::standard();
        let err = bank
            .questions("Botany", QuestionOrder::Canonical)
            .expect_err("subject not in the bank");
        assert!(matches!(err, CatalogError::UnknownSubject(name) if name == "Botany"));
    }

    #[test]
    fn physics_question_one_keys_to_b() {
        let bank = QuestionBank::standard();
        let physics = bank
            .questions("Physics", QuestionOrder::Canonical)
            .expect("known subject");
        assert_eq!(physics[0].token, 1);
        assert_eq!(physics[0].question.correct, OptionLabel::B);
    }

    #[test]
    fn option_labels_round_trip() {
        for label in OptionLabel::ordered() {
            assert_eq!(OptionLabel::parse(label.label()), Some(label));
        }
        assert_eq!(OptionLabel::parse(" B "), Some(OptionLabel::B));
        assert_eq!(OptionLabel::parse("e"), None);
    }
}
