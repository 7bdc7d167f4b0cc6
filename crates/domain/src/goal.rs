use std::slice::Iter;

use strum::{AsRefStr, EnumString};

use crate::{IntensityRange, Property};

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum Goal {
    Strength,
    Hypertrophy,
    FatLoss,
    Endurance,
    GeneralFitness,
}

impl Goal {
    /// Fraction of one-repetition maximum the plan progresses through by default.
    #[must_use]
    pub fn default_intensity(self) -> IntensityRange {
        let (lower, upper) = match self {
            Goal::Strength => (0.70, 0.90),
            Goal::Hypertrophy => (0.65, 0.80),
            Goal::FatLoss => (0.55, 0.70),
            Goal::Endurance => (0.50, 0.65),
            Goal::GeneralFitness => (0.60, 0.75),
        };
        IntensityRange { lower, upper }
    }
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 5] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::FatLoss,
            Goal::Endurance,
            Goal::GeneralFitness,
        ];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::FatLoss => "Fat Loss",
            Goal::Endurance => "Endurance",
            Goal::GeneralFitness => "General Fitness",
        }
    }
}
