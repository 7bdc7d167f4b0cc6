use serde::{Deserialize, Serialize};

use coach_domain as domain;

use crate::{ValidationError, parse, parse_all};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    #[serde(default)]
    pub muscle_targets: Vec<String>,
    pub compound_count: usize,
    pub isolation_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasized_muscles: Option<Vec<String>>,
    #[serde(default)]
    pub available_equipment: Vec<String>,
    #[serde(default)]
    pub excluded_exercise_ids: Vec<String>,
    pub user_experience_level: String,
    #[serde(default)]
    pub library_exercise_ids: Vec<String>,
    #[serde(default)]
    pub prefer_bodyweight_compounds: bool,
    /// Return fewer exercises instead of failing if the candidates are insufficient.
    #[serde(default)]
    pub allow_partial: bool,
}

impl SelectionRequest {
    #[must_use]
    pub fn fill_mode(&self) -> domain::FillMode {
        if self.allow_partial {
            domain::FillMode::Partial
        } else {
            domain::FillMode::Strict
        }
    }
}

impl From<&domain::SelectionRequest> for SelectionRequest {
    fn from(value: &domain::SelectionRequest) -> Self {
        Self {
            muscle_targets: names(&value.muscle_targets),
            compound_count: value.compound_count,
            isolation_count: value.isolation_count,
            emphasized_muscles: if value.emphasized_muscles.is_empty() {
                None
            } else {
                Some(names(&value.emphasized_muscles))
            },
            available_equipment: names(&value.available_equipment),
            excluded_exercise_ids: value
                .excluded_exercise_ids
                .iter()
                .map(ToString::to_string)
                .collect(),
            user_experience_level: value.user_experience_level.as_ref().to_string(),
            library_exercise_ids: value
                .library_exercise_ids
                .iter()
                .map(ToString::to_string)
                .collect(),
            prefer_bodyweight_compounds: value.prefer_bodyweight_compounds,
            allow_partial: false,
        }
    }
}

impl TryFrom<SelectionRequest> for domain::SelectionRequest {
    type Error = ValidationError;

    fn try_from(value: SelectionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            muscle_targets: parse_all("muscleTargets", &value.muscle_targets)?,
            compound_count: value.compound_count,
            isolation_count: value.isolation_count,
            emphasized_muscles: parse_all(
                "emphasizedMuscles",
                value.emphasized_muscles.as_deref().unwrap_or_default(),
            )?,
            available_equipment: parse_all("availableEquipment", &value.available_equipment)?,
            excluded_exercise_ids: value
                .excluded_exercise_ids
                .into_iter()
                .map(domain::ExerciseID::from)
                .collect(),
            user_experience_level: parse("userExperienceLevel", &value.user_experience_level)?,
            library_exercise_ids: value
                .library_exercise_ids
                .into_iter()
                .map(domain::ExerciseID::from)
                .collect(),
            prefer_bodyweight_compounds: value.prefer_bodyweight_compounds,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub exercise_ids: Vec<String>,
    pub from_library: Vec<String>,
    pub introduced: Vec<String>,
    pub used_fallback: bool,
}

impl From<domain::SelectionResult> for SelectionResult {
    fn from(value: domain::SelectionResult) -> Self {
        let ids = |ids: Vec<domain::ExerciseID>| -> Vec<String> {
            ids.iter().map(ToString::to_string).collect()
        };
        Self {
            exercise_ids: ids(value.exercise_ids),
            from_library: ids(value.from_library),
            introduced: ids(value.introduced),
            used_fallback: value.used_fallback,
        }
    }
}

pub(crate) fn names<'a, T: AsRef<str> + 'a>(
    values: impl IntoIterator<Item = &'a T>,
) -> Vec<String> {
    values.into_iter().map(|v| v.as_ref().to_string()).collect()
}
