use serde::{Deserialize, Serialize};

/// Position in the wizard flow. Index is always in `0..=3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Ingredients,
    Certifications,
    Review,
}

/// How a step relates to the current one, for the stepper header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepProgress {
    Completed,
    Current,
    Upcoming,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Ingredients,
        WizardStep::Certifications,
        WizardStep::Review,
    ];

    pub const FIRST: WizardStep = WizardStep::BasicInfo;
    pub const LAST: WizardStep = WizardStep::Review;

    pub fn index(self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::Ingredients => 1,
            WizardStep::Certifications => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Saturates at [`WizardStep::LAST`].
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// Saturates at [`WizardStep::FIRST`].
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::FIRST)
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::Ingredients => "Ingredients",
            WizardStep::Certifications => "Certifications",
            WizardStep::Review => "Review",
        }
    }

    pub fn progress_relative_to(self, current: WizardStep) -> StepProgress {
        match self.cmp(&current) {
            core::cmp::Ordering::Less => StepProgress::Completed,
            core::cmp::Ordering::Equal => StepProgress::Current,
            core::cmp::Ordering::Greater => StepProgress::Upcoming,
        }
    }
}

impl core::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_saturates_at_both_ends() {
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::BasicInfo.previous(), WizardStep::BasicInfo);
        assert_eq!(WizardStep::BasicInfo.next(), WizardStep::Ingredients);
        assert_eq!(WizardStep::Review.previous(), WizardStep::Certifications);
    }

    #[test]
    fn indices_match_declaration_order() {
        for (i, step) in WizardStep::ALL.into_iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(step));
        }
        assert_eq!(WizardStep::from_index(4), None);
    }

    #[test]
    fn progress_marks_earlier_steps_completed() {
        let current = WizardStep::Certifications;
        let marks: Vec<_> = WizardStep::ALL
            .into_iter()
            .map(|s| s.progress_relative_to(current))
            .collect();
        assert_eq!(
            marks,
            vec![
                StepProgress::Completed,
                StepProgress::Completed,
                StepProgress::Current,
                StepProgress::Upcoming
            ]
        );
    }
}
