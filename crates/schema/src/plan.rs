use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coach_domain as domain;

use crate::{ValidationError, parse, parse_all};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Generated if missing.
    #[serde(default)]
    pub plan_id: Option<Uuid>,
    pub name: String,
    pub goal: String,
    pub days_per_week: u8,
    pub experience_level: String,
    #[serde(default)]
    pub available_equipment: Vec<String>,
    pub duration_weeks: u32,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub start_date: String,
    #[serde(default)]
    pub split_type: Option<String>,
    #[serde(default)]
    pub periodization_style: Option<String>,
    #[serde(default = "default_include_deloads")]
    pub include_deloads: bool,
    #[serde(default = "default_deload_frequency")]
    pub deload_frequency: u32,
    #[serde(default)]
    pub custom_intensity_start: Option<f32>,
    #[serde(default)]
    pub custom_intensity_end: Option<f32>,
    #[serde(default)]
    pub emphasized_muscles: Vec<String>,
    #[serde(default)]
    pub excluded_exercise_ids: Vec<String>,
    #[serde(default)]
    pub library_exercise_ids: Vec<String>,
    #[serde(default)]
    pub prefer_bodyweight_compounds: bool,
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    /// Weekday names (`monday`, `tue`, ...).
    #[serde(default)]
    pub preferred_days: Vec<String>,
    #[serde(default)]
    pub allow_partial: bool,
}

fn default_include_deloads() -> bool {
    true
}

fn default_deload_frequency() -> u32 {
    4
}

fn default_session_minutes() -> u32 {
    60
}

impl TryFrom<PlanRequest> for domain::PlanRequest {
    type Error = ValidationError;

    fn try_from(value: PlanRequest) -> Result<Self, Self::Error> {
        if !(1..=7).contains(&value.days_per_week) {
            return Err(ValidationError::OutOfRange {
                field: "daysPerWeek".to_string(),
                value: value.days_per_week.to_string(),
            });
        }
        if !(1..=domain::MAX_TOTAL_WEEKS).contains(&value.duration_weeks) {
            return Err(ValidationError::OutOfRange {
                field: "durationWeeks".to_string(),
                value: value.duration_weeks.to_string(),
            });
        }
        for (field, intensity) in [
            ("customIntensityStart", value.custom_intensity_start),
            ("customIntensityEnd", value.custom_intensity_end),
        ] {
            if let Some(intensity) = intensity.filter(|i| !(0.0..=1.0).contains(i)) {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value: intensity.to_string(),
                });
            }
        }

        Ok(Self {
            plan_id: value.plan_id.unwrap_or_else(Uuid::new_v4).into(),
            start_date: NaiveDate::parse_from_str(&value.start_date, "%Y-%m-%d").map_err(
                |_| ValidationError::InvalidDate {
                    field: "startDate".to_string(),
                    value: value.start_date.clone(),
                },
            )?,
            name: value.name,
            goal: parse("goal", &value.goal)?,
            days_per_week: value.days_per_week,
            experience_level: parse("experienceLevel", &value.experience_level)?,
            available_equipment: parse_all("availableEquipment", &value.available_equipment)?,
            duration_weeks: value.duration_weeks,
            split_type: value
                .split_type
                .map(|s| parse("splitType", &s))
                .transpose()?,
            style: value
                .periodization_style
                .map(|s| parse("periodizationStyle", &s))
                .transpose()?
                .unwrap_or_default(),
            include_deloads: value.include_deloads,
            deload_frequency: value.deload_frequency,
            custom_intensity_start: value.custom_intensity_start,
            custom_intensity_end: value.custom_intensity_end,
            emphasized_muscles: parse_all("emphasizedMuscles", &value.emphasized_muscles)?,
            excluded_exercise_ids: value
                .excluded_exercise_ids
                .into_iter()
                .map(domain::ExerciseID::from)
                .collect(),
            library_exercise_ids: value
                .library_exercise_ids
                .into_iter()
                .map(domain::ExerciseID::from)
                .collect(),
            prefer_bodyweight_compounds: value.prefer_bodyweight_compounds,
            session_minutes: value.session_minutes,
            preferred_days: parse_all("preferredDays", &value.preferred_days)?,
            fill_mode: if value.allow_partial {
                domain::FillMode::Partial
            } else {
                domain::FillMode::Strict
            },
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanResponse {
    pub plan: Plan,
    pub programs: Vec<Program>,
    pub workouts: Vec<Workout>,
}

impl From<domain::GeneratedPlan> for PlanResponse {
    fn from(value: domain::GeneratedPlan) -> Self {
        Self {
            plan: Plan::from(value.plan),
            programs: value.programs.into_iter().map(Program::from).collect(),
            workouts: value.workouts.into_iter().map(Workout::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub goal: String,
    pub split_type: String,
    pub split_rationale: String,
    pub days_per_week: u8,
    pub experience_level: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_weeks: u32,
    pub program_ids: Vec<Uuid>,
}

impl From<domain::Plan> for Plan {
    fn from(value: domain::Plan) -> Self {
        Self {
            id: *value.id,
            name: value.name,
            goal: value.goal.as_ref().to_string(),
            split_type: value.split_type.as_ref().to_string(),
            split_rationale: value.split_rationale,
            days_per_week: value.days_per_week,
            experience_level: value.experience_level.as_ref().to_string(),
            start_date: value.start_date,
            end_date: value.end_date,
            duration_weeks: value.duration_weeks,
            program_ids: value.program_ids.iter().map(|id| **id).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub name: String,
    pub focus: String,
    pub rationale: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks: u32,
    pub starting_intensity: f32,
    pub ending_intensity: f32,
    pub progression_type: String,
    pub workout_ids: Vec<Uuid>,
}

impl From<domain::Program> for Program {
    fn from(value: domain::Program) -> Self {
        Self {
            id: *value.id,
            plan_id: *value.plan_id,
            name: value.name,
            focus: value.focus.as_ref().to_string(),
            rationale: value.rationale,
            start_date: value.start_date,
            end_date: value.end_date,
            weeks: value.weeks,
            starting_intensity: value.intensity_range.lower,
            ending_intensity: value.intensity_range.upper,
            progression_type: value.progression_type.as_ref().to_string(),
            workout_ids: value.workout_ids.iter().map(|id| **id).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub program_id: Uuid,
    pub name: String,
    pub scheduled_date: NaiveDate,
    pub week: u32,
    pub day_type: String,
    pub exercise_ids: Vec<String>,
    /// Protocol id per exercise id.
    pub protocol_variant_ids: BTreeMap<String, String>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self {
            id: *value.id,
            program_id: *value.program_id,
            name: value.name,
            scheduled_date: value.date,
            week: value.week,
            day_type: value.day_type.as_ref().to_string(),
            protocol_variant_ids: value
                .exercise_ids
                .iter()
                .zip(&value.protocols)
                .map(|(id, protocol)| (id.to_string(), protocol.id.to_string()))
                .collect(),
            exercise_ids: value.exercise_ids.iter().map(ToString::to_string).collect(),
        }
    }
}
