use std::slice::Iter;

use strum::{AsRefStr, EnumString};

use crate::Property;

/// Training experience, totally ordered from `Beginner` to `Expert`.
#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "camelCase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    /// Whether an exercise introduced at `floor` is suitable for this level (inclusive).
    #[must_use]
    pub fn allows(self, floor: ExperienceLevel) -> bool {
        floor <= self
    }
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static EXPERIENCE_LEVEL: [ExperienceLevel; 4] = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
            ExperienceLevel::Expert,
        ];
        EXPERIENCE_LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Expert => "Expert",
        }
    }
}
