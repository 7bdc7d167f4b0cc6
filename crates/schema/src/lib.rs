#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeMap;

use coach_domain as domain;

mod error;
mod exercise;
mod plan;
mod selection;

pub use error::*;
pub use exercise::*;
pub use plan::*;
pub use selection::*;

/// Parses a catalog from a JSON array of exercises.
pub fn catalog_from_json(
    json: &str,
) -> Result<BTreeMap<domain::ExerciseID, domain::Exercise>, Error> {
    let exercises: Vec<Exercise> = serde_json::from_str(json)?;
    let mut catalog = BTreeMap::new();

    for (i, exercise) in exercises.into_iter().enumerate() {
        let field = format!("exercises[{i}]");
        let exercise = domain::Exercise::try_from(exercise).map_err(|err| err.within(&field))?;
        if catalog.contains_key(&exercise.id) {
            return Err(ValidationError::InvalidValue {
                field: format!("{field}.id"),
                value: exercise.id.to_string(),
            }
            .into());
        }
        catalog.insert(exercise.id.clone(), exercise);
    }

    log::debug!("parsed catalog with {} exercises", catalog.len());

    Ok(catalog)
}

/// Parses settings. Missing fields keep their default value.
pub fn settings_from_json(json: &str) -> Result<domain::Settings, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Selects the exercises of a single workout.
pub fn select_exercises_json(
    request: &str,
    catalog: &impl domain::Catalog,
    settings: &domain::Settings,
) -> Result<String, Error> {
    let request: SelectionRequest = serde_json::from_str(request)?;
    let mode = request.fill_mode();
    let result = domain::select_exercises(
        &domain::SelectionRequest::try_from(request)?,
        catalog,
        settings,
        mode,
    )?;
    Ok(serde_json::to_string(&SelectionResult::from(result))?)
}

/// Generates a complete plan. A random plan id is assigned if the request contains none.
pub fn generate_plan_json(
    request: &str,
    catalog: &impl domain::Catalog,
    settings: &domain::Settings,
) -> Result<String, Error> {
    let request: PlanRequest = serde_json::from_str(request)?;
    let generated = domain::generate_plan(
        &domain::PlanRequest::try_from(request)?,
        catalog,
        settings,
    )?;
    Ok(serde_json::to_string(&PlanResponse::from(generated))?)
}
