use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use derive_more::Deref;
use log::{debug, info};
use uuid::Uuid;

use crate::{
    Catalog, DayType, Equipment, ExerciseID, ExerciseType, ExperienceLevel, FillMode, Focus, Goal,
    IntensityRange, Muscle, PeriodizationRequest, PeriodizationStyle, Phase, PlanError,
    ProgressionType, Property, Protocol, SelectionRequest, Settings, SplitRecommendation,
    SplitType, calculate_phases, protocol, recommend_split, select_exercises,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub plan_id: PlanID,
    pub name: String,
    pub goal: Goal,
    pub days_per_week: u8,
    pub experience_level: ExperienceLevel,
    /// Bodyweight is always available in addition.
    pub available_equipment: BTreeSet<Equipment>,
    pub duration_weeks: u32,
    pub start_date: NaiveDate,
    /// Overrides the recommended split.
    pub split_type: Option<SplitType>,
    pub style: PeriodizationStyle,
    pub include_deloads: bool,
    pub deload_frequency: u32,
    pub custom_intensity_start: Option<f32>,
    pub custom_intensity_end: Option<f32>,
    pub emphasized_muscles: BTreeSet<Muscle>,
    pub excluded_exercise_ids: BTreeSet<ExerciseID>,
    pub library_exercise_ids: Vec<ExerciseID>,
    pub prefer_bodyweight_compounds: bool,
    pub session_minutes: u32,
    /// Training weekdays. If empty, the days are spread over the week.
    pub preferred_days: Vec<Weekday>,
    pub fill_mode: FillMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub plan: Plan,
    pub programs: Vec<Program>,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanID,
    pub name: String,
    pub goal: Goal,
    pub split_type: SplitType,
    pub split_rationale: String,
    pub days_per_week: u8,
    pub experience_level: ExperienceLevel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_weeks: u32,
    pub program_ids: Vec<ProgramID>,
}

/// One phase of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: ProgramID,
    pub plan_id: PlanID,
    pub name: String,
    pub focus: Focus,
    pub rationale: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks: u32,
    pub intensity_range: IntensityRange,
    pub progression_type: ProgressionType,
    pub workout_ids: Vec<WorkoutID>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub program_id: ProgramID,
    pub name: String,
    pub date: NaiveDate,
    /// Week of the plan, starting at 1.
    pub week: u32,
    pub day_type: DayType,
    pub exercise_ids: Vec<ExerciseID>,
    /// Protocol of the exercise at the same position.
    pub protocols: Vec<&'static Protocol>,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramID(Uuid);

impl ProgramID {
    /// Stable identifier of the `index`th program of a plan.
    #[must_use]
    pub fn derive(plan_id: PlanID, index: usize) -> Self {
        Self(Uuid::new_v5(&plan_id, format!("program/{index}").as_bytes()))
    }
}

impl From<Uuid> for ProgramID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    /// Stable identifier of the `index`th workout of a plan.
    #[must_use]
    pub fn derive(plan_id: PlanID, index: usize) -> Self {
        Self(Uuid::new_v5(&plan_id, format!("workout/{index}").as_bytes()))
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Builds a plan with one program per phase and fills every scheduled workout.
///
/// Generation is deterministic: the same request, catalog and settings always result in the
/// same plan.
#[allow(clippy::too_many_lines)]
pub fn generate_plan(
    request: &PlanRequest,
    catalog: &impl Catalog,
    settings: &Settings,
) -> Result<GeneratedPlan, PlanError> {
    if !(1..=7).contains(&request.days_per_week) {
        return Err(PlanError::InvalidDaysPerWeek(request.days_per_week));
    }

    let day_offsets = day_offsets(&training_days(request)?, request.start_date);

    let split = match request.split_type {
        Some(split_type) => SplitRecommendation {
            split_type,
            rationale: "Selected by user".to_string(),
        },
        None => recommend_split(request.days_per_week, request.experience_level, request.goal),
    };

    let end_date = add_days(
        request.start_date,
        (u64::from(request.duration_weeks) * 7).saturating_sub(1),
    )?;

    let phases = calculate_phases(
        &PeriodizationRequest {
            goal: request.goal,
            total_weeks: request.duration_weeks,
            style: request.style,
            include_deloads: request.include_deloads,
            deload_frequency: request.deload_frequency,
            custom_intensity_start: request.custom_intensity_start,
            custom_intensity_end: request.custom_intensity_end,
        },
        settings,
    )?;

    let mut available_equipment = request.available_equipment.clone();
    available_equipment.insert(Equipment::Bodyweight);
    let (compound_count, isolation_count) = settings.exercise_counts(request.session_minutes);

    let day_types = split.split_type.day_types();
    let mut programs = Vec::with_capacity(phases.len());
    let mut workouts = vec![];
    let mut phase_number = 0;
    let mut deload_number = 0;
    let mut week = 0;
    let mut program_start = request.start_date;

    for (index, phase) in phases.iter().enumerate() {
        let program_id = ProgramID::derive(request.plan_id, index);
        let program_end =
            add_days(program_start, u64::from(phase.weeks) * 7 - 1)?.min(end_date);
        let name = if phase.focus == Focus::Deload {
            deload_number += 1;
            format!("Deload Week {deload_number}")
        } else {
            phase_number += 1;
            format!("Phase {phase_number}: {}", phase.focus.name())
        };

        let mut workout_ids = vec![];

        for _ in 0..phase.weeks {
            week += 1;
            let week_start = add_days(request.start_date, u64::from(week - 1) * 7)?;

            for offset in &day_offsets {
                let day_type = day_types[workouts.len() % day_types.len()];
                let workout_name = format!("Week {week}: {}", day_type.name());
                let selection = select_exercises(
                    &SelectionRequest {
                        muscle_targets: day_type.muscle_targets(),
                        compound_count,
                        isolation_count,
                        emphasized_muscles: request.emphasized_muscles.clone(),
                        available_equipment: available_equipment.clone(),
                        excluded_exercise_ids: request.excluded_exercise_ids.clone(),
                        user_experience_level: request.experience_level,
                        library_exercise_ids: request.library_exercise_ids.clone(),
                        prefer_bodyweight_compounds: request.prefer_bodyweight_compounds,
                    },
                    catalog,
                    settings,
                    request.fill_mode,
                )
                .map_err(|source| PlanError::Selection {
                    workout: workout_name.clone(),
                    source,
                })?;

                let workout = Workout {
                    id: WorkoutID::derive(request.plan_id, workouts.len()),
                    program_id,
                    name: workout_name,
                    date: add_days(week_start, *offset)?,
                    week,
                    day_type,
                    protocols: protocols(&selection.exercise_ids, phase, request.goal, catalog),
                    exercise_ids: selection.exercise_ids,
                };
                debug!("{}: {:?}", workout.name, workout.exercise_ids);
                workout_ids.push(workout.id);
                workouts.push(workout);
            }
        }

        programs.push(Program {
            id: program_id,
            plan_id: request.plan_id,
            name,
            focus: phase.focus,
            rationale: phase.rationale.clone(),
            start_date: program_start,
            end_date: program_end,
            weeks: phase.weeks,
            intensity_range: phase.intensity_range,
            progression_type: phase.progression_type,
            workout_ids,
        });
        program_start = add_days(program_end, 1)?;
    }

    info!(
        "generated plan \"{}\" ({}, {} programs, {} workouts)",
        request.name,
        split.split_type.name(),
        programs.len(),
        workouts.len()
    );

    Ok(GeneratedPlan {
        plan: Plan {
            id: request.plan_id,
            name: request.name.clone(),
            goal: request.goal,
            split_type: split.split_type,
            split_rationale: split.rationale,
            days_per_week: request.days_per_week,
            experience_level: request.experience_level,
            start_date: request.start_date,
            end_date,
            duration_weeks: request.duration_weeks,
            program_ids: programs.iter().map(|p| p.id).collect(),
        },
        programs,
        workouts,
    })
}

/// Default weekdays for the given number of training days.
#[must_use]
pub fn default_training_days(days_per_week: u8) -> &'static [Weekday] {
    use Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};
    match days_per_week {
        1 => &[Mon],
        2 => &[Mon, Thu],
        3 => &[Mon, Wed, Fri],
        4 => &[Mon, Tue, Thu, Fri],
        5 => &[Mon, Tue, Wed, Thu, Fri],
        6 => &[Mon, Tue, Wed, Thu, Fri, Sat],
        7 => &[Mon, Tue, Wed, Thu, Fri, Sat, Sun],
        _ => &[],
    }
}

fn training_days(request: &PlanRequest) -> Result<Vec<Weekday>, PlanError> {
    if request.preferred_days.is_empty() {
        return Ok(default_training_days(request.days_per_week).to_vec());
    }

    let mut days = Vec::with_capacity(request.preferred_days.len());
    for day in &request.preferred_days {
        if !days.contains(day) {
            days.push(*day);
        }
    }

    if days.len() != usize::from(request.days_per_week) {
        return Err(PlanError::PreferredDaysMismatch {
            expected: request.days_per_week,
            actual: days.len(),
        });
    }

    Ok(days)
}

/// Days from the start of each week block, in ascending order.
fn day_offsets(days: &[Weekday], start_date: NaiveDate) -> Vec<u64> {
    let start = start_date.weekday().num_days_from_monday();
    let mut offsets = days
        .iter()
        .map(|d| u64::from((7 + d.num_days_from_monday() - start) % 7))
        .collect::<Vec<_>>();
    offsets.sort_unstable();
    offsets
}

fn protocols(
    exercise_ids: &[ExerciseID],
    phase: &Phase,
    goal: Goal,
    catalog: &impl Catalog,
) -> Vec<&'static Protocol> {
    exercise_ids
        .iter()
        .map(|id| {
            let exercise_type = catalog
                .get(id)
                .map_or(ExerciseType::Compound, |e| e.exercise_type);
            protocol::choose(goal, phase.focus, exercise_type)
        })
        .collect()
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, PlanError> {
    date.checked_add_days(Days::new(days))
        .ok_or(PlanError::DateOutOfRange)
}
