use serde::Serialize;

/// Ordinal label summarizing how much uninterrupted time a day offers.
/// Variants are declared in ascending rank so the derived `Ord` matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayCategory {
    NoFocus,
    SomeFocusTime,
    Focused,
}

impl DayCategory {
    /// Label used in the composed message
    pub fn label(&self) -> &'static str {
        match self {
            DayCategory::Focused => "FOCUSED",
            DayCategory::SomeFocusTime => "SOME FOCUS TIME",
            DayCategory::NoFocus => "NO FOCUS, SIR",
        }
    }
}
