//! Subjects with dedicated study advice.

use serde::{Deserialize, Serialize};

/// A subject with its own tip list.
///
/// Class names are matched exactly; a class that is not one of these has no
/// subject-specific tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Science,
    History,
    English,
    Programming,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::English,
        Subject::Programming,
    ];

    pub fn from_class(class: &str) -> Option<Subject> {
        match class {
            "Math" => Some(Subject::Math),
            "Science" => Some(Subject::Science),
            "History" => Some(Subject::History),
            "English" => Some(Subject::English),
            "Programming" => Some(Subject::Programming),
            _ => None,
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Subject::Math => &[
                "Practice problems regularly. Understanding concepts is key, but practice builds speed and accuracy.",
                "Don't just memorize formulas; understand how they are derived and when to use them.",
                "Draw diagrams or visualize problems to help understand them better.",
                "Check your answers, and if you made a mistake, try to understand why.",
            ],
            Subject::Science => &[
                "Understand the scientific method and how it applies to different topics.",
                "Relate concepts to real-world examples.",
                "For lab work, understand the procedures and safety precautions thoroughly before starting.",
                "Use flashcards for terminology and diagrams for processes.",
            ],
            Subject::History => &[
                "Create timelines to understand the sequence of events.",
                "Focus on cause and effect relationships rather than just memorizing dates.",
                "Read primary sources when possible to get a deeper understanding.",
                "Try to explain historical events in your own words.",
            ],
            Subject::English => &[
                "Read widely, both assigned texts and for pleasure, to improve vocabulary and comprehension.",
                "When writing essays, create an outline first to organize your thoughts.",
                "Pay attention to grammar, punctuation, and style.",
                "Practice summarizing texts and identifying main arguments.",
            ],
            Subject::Programming => &[
                "Break down complex problems into smaller, solvable parts.",
                "Write pseudocode before writing actual code.",
                "Test your code frequently as you write it.",
                "Don't be afraid to look up documentation or ask for help on forums (but try to solve it yourself first).",
                "Version control (like Git) is your friend, even for small projects.",
            ],
        }
    }
}

/// Tips for a class name; unknown or missing classes get an empty slice.
pub fn subject_tips(class: Option<&str>) -> &'static [&'static str] {
    class
        .and_then(Subject::from_class)
        .map(Subject::tips)
        .unwrap_or(&[])
}
