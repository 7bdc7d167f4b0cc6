use std::collections::BTreeSet;

use log::debug;

use crate::{Catalog, CatalogQuery, Exercise, SelectionRequest};

/// Candidates a selection draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePool<'a> {
    pub candidates: Vec<&'a Exercise>,
    pub used_fallback: bool,
}

/// Prefers the user's library. If it cannot supply the requested number of compounds and
/// isolations, the pool widens to every catalog entry at or below the user's experience level.
///
/// The fallback pool is not filtered by equipment or muscles, so callers must filter it
/// afterwards.
#[must_use]
pub fn build_pool<'a>(request: &SelectionRequest, catalog: &'a impl Catalog) -> ExercisePool<'a> {
    let library = library_candidates(request, catalog);

    let compounds = library.iter().filter(|e| e.is_compound()).count();
    let isolations = library.iter().filter(|e| e.is_isolation()).count();

    if compounds >= request.compound_count && isolations >= request.isolation_count {
        return ExercisePool {
            candidates: library,
            used_fallback: false,
        };
    }

    debug!(
        "library insufficient ({compounds}/{} compounds, {isolations}/{} isolations), using catalog",
        request.compound_count, request.isolation_count
    );

    ExercisePool {
        candidates: catalog.query(
            &CatalogQuery::new()
                .max_experience(request.user_experience_level)
                .excluding(&request.excluded_exercise_ids),
        ),
        used_fallback: true,
    }
}

/// Library entries usable for the request, in library order.
fn library_candidates<'a>(request: &SelectionRequest, catalog: &'a impl Catalog) -> Vec<&'a Exercise> {
    let query = CatalogQuery::new()
        .equipment(&request.available_equipment)
        .muscles(&request.muscle_targets)
        .excluding(&request.excluded_exercise_ids);
    let mut seen = BTreeSet::new();

    request
        .library_exercise_ids
        .iter()
        .filter(|id| seen.insert(*id))
        .filter_map(|id| {
            let exercise = catalog.get(id);
            if exercise.is_none() {
                debug!("library exercise {id} not in catalog");
            }
            exercise
        })
        .filter(|e| query.matches(e))
        .collect()
}
