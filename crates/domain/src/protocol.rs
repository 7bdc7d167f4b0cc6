use crate::{ExerciseType, Focus, Goal};

/// Set and repetition scheme of an exercise within a workout.
#[derive(Debug, PartialEq)]
pub struct Protocol {
    pub id: &'static str,
    pub sets: u32,
    pub reps: u32,
    /// Fraction of one-repetition maximum.
    pub intensity: f32,
    pub rest_seconds: u32,
}

pub static STRENGTH_3X5_MODERATE: Protocol = Protocol {
    id: "strength_3x5_moderate",
    sets: 3,
    reps: 5,
    intensity: 0.75,
    rest_seconds: 180,
};

pub static STRENGTH_5X5_STRAIGHT: Protocol = Protocol {
    id: "strength_5x5_straight",
    sets: 5,
    reps: 5,
    intensity: 0.70,
    rest_seconds: 180,
};

pub static STRENGTH_3X8_MODERATE: Protocol = Protocol {
    id: "strength_3x8_moderate",
    sets: 3,
    reps: 8,
    intensity: 0.65,
    rest_seconds: 90,
};

pub static STRENGTH_3X10_MODERATE: Protocol = Protocol {
    id: "strength_3x10_moderate",
    sets: 3,
    reps: 10,
    intensity: 0.60,
    rest_seconds: 90,
};

pub static STRENGTH_3X12_LIGHT: Protocol = Protocol {
    id: "strength_3x12_light",
    sets: 3,
    reps: 12,
    intensity: 0.55,
    rest_seconds: 60,
};

pub static ENDURANCE_2X15_LIGHT: Protocol = Protocol {
    id: "endurance_2x15_light",
    sets: 2,
    reps: 15,
    intensity: 0.50,
    rest_seconds: 45,
};

pub static CARDIO_30MIN_STEADY: Protocol = Protocol {
    id: "cardio_30min_steady",
    sets: 1,
    reps: 1,
    intensity: 0.50,
    rest_seconds: 0,
};

pub static PROTOCOLS: [&Protocol; 7] = [
    &STRENGTH_3X5_MODERATE,
    &STRENGTH_5X5_STRAIGHT,
    &STRENGTH_3X8_MODERATE,
    &STRENGTH_3X10_MODERATE,
    &STRENGTH_3X12_LIGHT,
    &ENDURANCE_2X15_LIGHT,
    &CARDIO_30MIN_STEADY,
];

#[must_use]
pub fn get(id: &str) -> Option<&'static Protocol> {
    PROTOCOLS.iter().find(|p| p.id == id).copied()
}

/// Heavier, lower-repetition work as a plan moves from foundation to peak. Deloads drop to
/// light, high-repetition work.
#[must_use]
pub fn choose(goal: Goal, focus: Focus, exercise_type: ExerciseType) -> &'static Protocol {
    let conditioning = matches!(goal, Goal::FatLoss | Goal::Endurance);
    match (exercise_type, focus) {
        (ExerciseType::Cardio, _) => &CARDIO_30MIN_STEADY,
        (ExerciseType::Compound, Focus::Deload) => &STRENGTH_3X12_LIGHT,
        (ExerciseType::Isolation, Focus::Deload) => &ENDURANCE_2X15_LIGHT,
        (ExerciseType::Compound, Focus::Foundation) => match goal {
            Goal::Strength => &STRENGTH_3X10_MODERATE,
            _ if conditioning => &ENDURANCE_2X15_LIGHT,
            _ => &STRENGTH_3X12_LIGHT,
        },
        (ExerciseType::Compound, Focus::Development | Focus::Maintenance) => match goal {
            Goal::Strength => &STRENGTH_5X5_STRAIGHT,
            _ if conditioning => &STRENGTH_3X12_LIGHT,
            _ => &STRENGTH_3X10_MODERATE,
        },
        (ExerciseType::Compound, Focus::Peak) => match goal {
            Goal::Strength => &STRENGTH_3X5_MODERATE,
            _ if conditioning => &STRENGTH_3X10_MODERATE,
            _ => &STRENGTH_3X8_MODERATE,
        },
        (ExerciseType::Isolation, Focus::Foundation) if conditioning => &ENDURANCE_2X15_LIGHT,
        (ExerciseType::Isolation, Focus::Foundation) => &STRENGTH_3X12_LIGHT,
        (ExerciseType::Isolation, Focus::Development | Focus::Maintenance) if conditioning => {
            &STRENGTH_3X12_LIGHT
        }
        (ExerciseType::Isolation, Focus::Development | Focus::Maintenance) => {
            &STRENGTH_3X10_MODERATE
        }
        (ExerciseType::Isolation, Focus::Peak) if conditioning => &STRENGTH_3X12_LIGHT,
        (ExerciseType::Isolation, Focus::Peak) => &STRENGTH_3X8_MODERATE,
    }
}
