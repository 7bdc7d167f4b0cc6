use serde::{Deserialize, Serialize};

use coach_domain as domain;

use crate::{ValidationError, parse, parse_all};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_exercise: Option<String>,
    pub equipment: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub muscle_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_pattern: Option<String>,
    pub experience_level: String,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            base_exercise: Some(value.base_exercise.to_string()),
            equipment: value.equipment.as_ref().to_string(),
            exercise_type: value.exercise_type.as_ref().to_string(),
            muscle_groups: value
                .muscles
                .iter()
                .map(|m| m.as_ref().to_string())
                .collect(),
            movement_pattern: value.movement_pattern.map(|p| p.as_ref().to_string()),
            experience_level: value.experience_level.as_ref().to_string(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ValidationError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        if value.id.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "id".to_string(),
                value: value.id,
            });
        }
        Ok(Self {
            base_exercise: value
                .base_exercise
                .unwrap_or_else(|| value.id.clone())
                .into(),
            id: value.id.into(),
            name: value.name,
            equipment: parse("equipment", &value.equipment)?,
            exercise_type: parse("type", &value.exercise_type)?,
            muscles: parse_all("muscleGroups", &value.muscle_groups)?,
            movement_pattern: value
                .movement_pattern
                .map(|p| parse("movementPattern", &p))
                .transpose()?,
            experience_level: parse("experienceLevel", &value.experience_level)?,
        })
    }
}
