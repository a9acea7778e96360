// src/journal/insights.rs
// Aggregate summary text over the stored entries

use std::fmt;

use crate::pipeline::EmotionLabel;

pub const NO_ENTRIES_MESSAGE: &str = "No entries yet. Start tracking your emotions to see insights!";
pub const STRESS_ADVISORY: &str =
    "💡 Your stress levels seem elevated. Consider relaxation techniques.";
/// Average stress strictly above this triggers the advisory
pub const STRESS_ADVISORY_THRESHOLD: f64 = 3.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub entry_count: usize,
    pub most_common: EmotionLabel,
    pub average_mood: f64,
    pub average_stress: f64,
}

impl Insights {
    pub fn stress_elevated(&self) -> bool {
        self.average_stress > STRESS_ADVISORY_THRESHOLD
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You've logged {} emotion entries. | Your most common emotion is: **{}** | Average mood: **{:.1}/5** | Average stress: **{:.1}/5**",
            self.entry_count, self.most_common, self.average_mood, self.average_stress
        )?;
        if self.stress_elevated() {
            write!(f, " | {}", STRESS_ADVISORY)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insights(average_stress: f64) -> Insights {
        Insights {
            entry_count: 2,
            most_common: EmotionLabel::Stressed,
            average_mood: 2.5,
            average_stress,
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            insights(3.0).to_string(),
            "You've logged 2 emotion entries. | Your most common emotion is: **Stressed** | Average mood: **2.5/5** | Average stress: **3.0/5**"
        );
    }

    #[test]
    fn test_advisory_above_threshold() {
        let text = insights(4.0).to_string();
        assert!(text.ends_with(STRESS_ADVISORY));
    }

    #[test]
    fn test_no_advisory_at_threshold() {
        assert!(!insights(3.5).stress_elevated());
        assert!(!insights(3.5).to_string().contains("elevated"));
    }
}
