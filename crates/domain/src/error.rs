use crate::ExerciseType;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("insufficient {exercise_type} candidates: {available} available, {requested} requested")]
    InsufficientCandidates {
        exercise_type: ExerciseType,
        requested: usize,
        available: usize,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PeriodizationError {
    #[error("Total weeks must be in the range 1 to 520 ({0})")]
    InvalidTotalWeeks(u32),
    #[error("Intensity must be in the range 0 to 1 ({0})")]
    IntensityOutOfRange(f32),
    #[error("Intensity start must be lower than intensity end ({start} >= {end})")]
    InvalidIntensityRange { start: f32, end: f32 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Days per week must be in the range 1 to 7 ({0})")]
    InvalidDaysPerWeek(u8),
    #[error("{actual} preferred days given for {expected} days per week")]
    PreferredDaysMismatch { expected: u8, actual: usize },
    #[error("plan dates out of range")]
    DateOutOfRange,
    #[error(transparent)]
    Periodization(#[from] PeriodizationError),
    #[error("failed to fill workout \"{workout}\": {source}")]
    Selection {
        workout: String,
        #[source]
        source: SelectionError,
    },
}
