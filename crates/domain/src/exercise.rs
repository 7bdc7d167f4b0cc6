use std::{collections::BTreeSet, slice::Iter};

use derive_more::{Deref, Display};
use strum::{AsRefStr, EnumString};

use crate::ExperienceLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub base_exercise: BaseExerciseID,
    pub equipment: Equipment,
    pub exercise_type: ExerciseType,
    pub muscles: BTreeSet<Muscle>,
    pub movement_pattern: Option<MovementPattern>,
    pub experience_level: ExperienceLevel,
}

impl Exercise {
    #[must_use]
    pub fn targets_any(&self, muscles: &BTreeSet<Muscle>) -> bool {
        !self.muscles.is_disjoint(muscles)
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.exercise_type == ExerciseType::Compound
    }

    #[must_use]
    pub fn is_isolation(&self) -> bool {
        self.exercise_type == ExerciseType::Isolation
    }
}

#[derive(Deref, Debug, Display, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Key shared by interchangeable variants of one movement (e.g. barbell and dumbbell bench
/// press). No two exercises of a single selection share it.
#[derive(Deref, Debug, Display, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseExerciseID(String);

impl From<&str> for BaseExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BaseExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "camelCase")]
pub enum Muscle {
    // Chest
    Pecs,
    // Back
    Traps,
    Lats,
    // Shoulders
    FrontDelts,
    SideDelts,
    RearDelts,
    // Upper arms
    Biceps,
    Triceps,
    // Forearms
    Forearms,
    // Waist
    Abs,
    ErectorSpinae,
    // Hips
    Glutes,
    Abductors,
    // Thighs
    Quads,
    Hamstrings,
    Adductors,
    // Calves
    Calves,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 17] = [
            Muscle::Pecs,
            Muscle::Traps,
            Muscle::Lats,
            Muscle::FrontDelts,
            Muscle::SideDelts,
            Muscle::RearDelts,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Abs,
            Muscle::ErectorSpinae,
            Muscle::Glutes,
            Muscle::Abductors,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Adductors,
            Muscle::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Pecs => "Pecs",
            Muscle::Traps => "Traps",
            Muscle::Lats => "Lats",
            Muscle::FrontDelts => "Front Delts",
            Muscle::SideDelts => "Side Delts",
            Muscle::RearDelts => "Rear Delts",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Abs => "Abs",
            Muscle::ErectorSpinae => "Erector Spinae",
            Muscle::Glutes => "Glutes",
            Muscle::Abductors => "Abductors",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Adductors => "Adductors",
            Muscle::Calves => "Calves",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "camelCase")]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Bench,
    Cable,
    Dumbbell,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    TrapBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

#[derive(
    AsRefStr, EnumString, strum::Display, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "camelCase")]
pub enum ExerciseType {
    Compound,
    Isolation,
    Cardio,
}

impl Property for ExerciseType {
    fn iter() -> Iter<'static, ExerciseType> {
        static EXERCISE_TYPE: [ExerciseType; 3] = [
            ExerciseType::Compound,
            ExerciseType::Isolation,
            ExerciseType::Cardio,
        ];
        EXERCISE_TYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseType::Compound => "Compound",
            ExerciseType::Isolation => "Isolation",
            ExerciseType::Cardio => "Cardio",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "camelCase")]
pub enum MovementPattern {
    Squat,
    Hinge,
    Lunge,
    HorizontalPush,
    VerticalPush,
    HorizontalPull,
    VerticalPull,
    Carry,
    Core,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static MOVEMENT_PATTERN: [MovementPattern; 9] = [
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::Lunge,
            MovementPattern::HorizontalPush,
            MovementPattern::VerticalPush,
            MovementPattern::HorizontalPull,
            MovementPattern::VerticalPull,
            MovementPattern::Carry,
            MovementPattern::Core,
        ];
        MOVEMENT_PATTERN.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hinge",
            MovementPattern::Lunge => "Lunge",
            MovementPattern::HorizontalPush => "Horizontal Push",
            MovementPattern::VerticalPush => "Vertical Push",
            MovementPattern::HorizontalPull => "Horizontal Pull",
            MovementPattern::VerticalPull => "Vertical Pull",
            MovementPattern::Carry => "Carry",
            MovementPattern::Core => "Core",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
