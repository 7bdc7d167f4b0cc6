use std::{collections::BTreeSet, slice::Iter};

use strum::{AsRefStr, EnumString};

use crate::{ExperienceLevel, Goal, Muscle, Property};

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum SplitType {
    FullBody,
    UpperLower,
    PushPullLegs,
}

impl SplitType {
    /// Workout templates in rotation order.
    #[must_use]
    pub fn day_types(self) -> &'static [DayType] {
        match self {
            SplitType::FullBody => &[DayType::FullBody],
            SplitType::UpperLower => &[DayType::Upper, DayType::Lower],
            SplitType::PushPullLegs => &[DayType::Push, DayType::Pull, DayType::Legs],
        }
    }
}

impl Property for SplitType {
    fn iter() -> Iter<'static, SplitType> {
        static SPLIT_TYPE: [SplitType; 3] = [
            SplitType::FullBody,
            SplitType::UpperLower,
            SplitType::PushPullLegs,
        ];
        SPLIT_TYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SplitType::FullBody => "Full Body",
            SplitType::UpperLower => "Upper/Lower",
            SplitType::PushPullLegs => "Push/Pull/Legs",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum DayType {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

impl DayType {
    #[must_use]
    pub fn muscle_targets(self) -> BTreeSet<Muscle> {
        let muscles: &[Muscle] = match self {
            DayType::FullBody => &[
                Muscle::Pecs,
                Muscle::Lats,
                Muscle::FrontDelts,
                Muscle::SideDelts,
                Muscle::Biceps,
                Muscle::Triceps,
                Muscle::Abs,
                Muscle::Glutes,
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Calves,
            ],
            DayType::Upper => &[
                Muscle::Pecs,
                Muscle::Lats,
                Muscle::Traps,
                Muscle::FrontDelts,
                Muscle::SideDelts,
                Muscle::RearDelts,
                Muscle::Biceps,
                Muscle::Triceps,
                Muscle::Forearms,
            ],
            DayType::Lower => &[
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Glutes,
                Muscle::Adductors,
                Muscle::Abductors,
                Muscle::Calves,
                Muscle::ErectorSpinae,
                Muscle::Abs,
            ],
            DayType::Push => &[
                Muscle::Pecs,
                Muscle::FrontDelts,
                Muscle::SideDelts,
                Muscle::Triceps,
            ],
            DayType::Pull => &[
                Muscle::Lats,
                Muscle::Traps,
                Muscle::RearDelts,
                Muscle::Biceps,
                Muscle::Forearms,
            ],
            DayType::Legs => &[
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Glutes,
                Muscle::Adductors,
                Muscle::Abductors,
                Muscle::Calves,
            ],
        };
        muscles.iter().copied().collect()
    }
}

impl Property for DayType {
    fn iter() -> Iter<'static, DayType> {
        static DAY_TYPE: [DayType; 6] = [
            DayType::FullBody,
            DayType::Upper,
            DayType::Lower,
            DayType::Push,
            DayType::Pull,
            DayType::Legs,
        ];
        DAY_TYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayType::FullBody => "Full Body",
            DayType::Upper => "Upper",
            DayType::Lower => "Lower",
            DayType::Push => "Push",
            DayType::Pull => "Pull",
            DayType::Legs => "Legs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRecommendation {
    pub split_type: SplitType,
    pub rationale: String,
}

/// First matching rule wins.
#[must_use]
pub fn recommend_split(
    days_per_week: u8,
    experience_level: ExperienceLevel,
    goal: Goal,
) -> SplitRecommendation {
    let experienced = experience_level >= ExperienceLevel::Advanced;
    let (split_type, rationale) = match days_per_week {
        2 | 3 => (
            SplitType::FullBody,
            format!("With {days_per_week} sessions per week, training the whole body each session gives every muscle enough frequency"),
        ),
        4 if !experienced => (
            SplitType::UpperLower,
            "Four sessions per week fit an upper/lower split that hits each muscle twice a week".to_string(),
        ),
        4 if goal == Goal::Strength => (
            SplitType::FullBody,
            "Experienced lifters aiming for strength benefit from practicing the main lifts in every session".to_string(),
        ),
        4 | 5 => (
            SplitType::UpperLower,
            format!("{days_per_week} sessions per week allow enough volume per session with an upper/lower split"),
        ),
        6 => (
            SplitType::PushPullLegs,
            "Six sessions per week allow each muscle group to be trained twice with a push/pull/legs split".to_string(),
        ),
        _ => (
            SplitType::FullBody,
            format!("Full body training is the most robust choice for {days_per_week} sessions per week"),
        ),
    };
    SplitRecommendation {
        split_type,
        rationale,
    }
}
