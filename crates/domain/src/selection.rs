use std::collections::BTreeSet;

use log::warn;

use crate::{
    BaseExerciseID, Catalog, CatalogQuery, Equipment, Exercise, ExerciseID, ExerciseType,
    ExperienceLevel, Muscle, SelectionError, Settings, build_pool,
};

/// Constraints for filling a single workout.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionRequest {
    pub muscle_targets: BTreeSet<Muscle>,
    pub compound_count: usize,
    pub isolation_count: usize,
    pub emphasized_muscles: BTreeSet<Muscle>,
    pub available_equipment: BTreeSet<Equipment>,
    pub excluded_exercise_ids: BTreeSet<ExerciseID>,
    pub user_experience_level: ExperienceLevel,
    /// Favorites of the user, most preferred first.
    pub library_exercise_ids: Vec<ExerciseID>,
    pub prefer_bodyweight_compounds: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionResult {
    /// Compounds followed by isolations, in selection order.
    pub exercise_ids: Vec<ExerciseID>,
    pub from_library: Vec<ExerciseID>,
    pub introduced: Vec<ExerciseID>,
    pub used_fallback: bool,
}

/// Behavior when fewer exercises than requested can be selected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    Strict,
    Partial,
}

/// Inputs to scoring that do not depend on the candidate.
#[derive(Debug, Clone, Copy)]
pub struct Preferences<'a> {
    pub emphasized_muscles: &'a BTreeSet<Muscle>,
    pub library: &'a BTreeSet<ExerciseID>,
    pub prefer_bodyweight: bool,
}

pub fn select_exercises(
    request: &SelectionRequest,
    catalog: &impl Catalog,
    settings: &Settings,
    mode: FillMode,
) -> Result<SelectionResult, SelectionError> {
    let pool = build_pool(request, catalog);

    let query = CatalogQuery::new()
        .equipment(&request.available_equipment)
        .muscles(&request.muscle_targets);
    let candidates = |exercise_type| {
        let query = query.clone().exercise_type(exercise_type);
        pool.candidates
            .iter()
            .copied()
            .filter(|e| query.matches(e))
            .collect::<Vec<&Exercise>>()
    };
    let compound_pool = candidates(ExerciseType::Compound);
    let isolation_pool = candidates(ExerciseType::Isolation);

    let library = request
        .library_exercise_ids
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>();
    let preferences = Preferences {
        emphasized_muscles: &request.emphasized_muscles,
        library: &library,
        prefer_bodyweight: request.prefer_bodyweight_compounds,
    };

    let compounds = select_compounds(
        &compound_pool,
        request.compound_count,
        &preferences,
        settings,
    );
    check_count(
        ExerciseType::Compound,
        request.compound_count,
        compounds.len(),
        mode,
    )?;

    let covered_muscles = compounds
        .iter()
        .flat_map(|e| e.muscles.iter().copied())
        .collect::<BTreeSet<_>>();
    let used_bases = compounds
        .iter()
        .map(|e| e.base_exercise.clone())
        .collect::<BTreeSet<_>>();
    let isolations = select_isolations(
        &isolation_pool,
        request.isolation_count,
        &preferences,
        &covered_muscles,
        &used_bases,
        settings,
    );
    check_count(
        ExerciseType::Isolation,
        request.isolation_count,
        isolations.len(),
        mode,
    )?;

    let exercise_ids = compounds
        .iter()
        .chain(&isolations)
        .map(|e| e.id.clone())
        .collect::<Vec<_>>();
    let (from_library, introduced) = exercise_ids
        .iter()
        .cloned()
        .partition(|id| library.contains(id));

    Ok(SelectionResult {
        exercise_ids,
        from_library,
        introduced,
        used_fallback: pool.used_fallback,
    })
}

fn check_count(
    exercise_type: ExerciseType,
    requested: usize,
    available: usize,
    mode: FillMode,
) -> Result<(), SelectionError> {
    if available >= requested {
        return Ok(());
    }
    match mode {
        FillMode::Strict => Err(SelectionError::InsufficientCandidates {
            exercise_type,
            requested,
            available,
        }),
        FillMode::Partial => {
            warn!("only {available} of {requested} {exercise_type} exercises selected");
            Ok(())
        }
    }
}

#[must_use]
pub fn compound_score(exercise: &Exercise, preferences: &Preferences, settings: &Settings) -> f64 {
    let mut score = common_score(exercise, preferences, settings);
    if preferences.prefer_bodyweight && exercise.equipment == Equipment::Bodyweight {
        score *= settings.bodyweight_boost;
    }
    score
}

/// `covered_muscles` are the muscles already trained by the workout's compounds.
#[must_use]
pub fn isolation_score(
    exercise: &Exercise,
    preferences: &Preferences,
    covered_muscles: &BTreeSet<Muscle>,
    settings: &Settings,
) -> f64 {
    let mut score = common_score(exercise, preferences, settings);
    if !exercise.muscles.is_subset(covered_muscles) {
        score *= settings.muscle_balance_boost;
    }
    score
}

fn common_score(exercise: &Exercise, preferences: &Preferences, settings: &Settings) -> f64 {
    let mut score = 1.0;
    if preferences.library.contains(&exercise.id) {
        score *= settings.library_boost;
    }
    if exercise.targets_any(preferences.emphasized_muscles) {
        score *= settings.emphasis_boost;
    }
    score
}

/// Picks up to `count` compounds with distinct base exercises.
///
/// Movement patterns are spread where possible. Only when the first pass comes up short are
/// candidates with an already used pattern admitted.
#[must_use]
pub fn select_compounds<'a>(
    pool: &[&'a Exercise],
    count: usize,
    preferences: &Preferences,
    settings: &Settings,
) -> Vec<&'a Exercise> {
    let ranked = rank(pool, |e| compound_score(e, preferences, settings));
    let mut selected = Vec::with_capacity(count.min(ranked.len()));
    let mut bases = BTreeSet::new();
    let mut patterns = BTreeSet::new();

    for exercise in &ranked {
        if selected.len() == count {
            break;
        }
        if bases.contains(&exercise.base_exercise)
            || exercise
                .movement_pattern
                .is_some_and(|p| patterns.contains(&p))
        {
            continue;
        }
        bases.insert(exercise.base_exercise.clone());
        patterns.extend(exercise.movement_pattern);
        selected.push(*exercise);
    }

    for exercise in &ranked {
        if selected.len() == count {
            break;
        }
        if bases.insert(exercise.base_exercise.clone()) {
            selected.push(*exercise);
        }
    }

    selected
}

/// Picks up to `count` isolations whose base exercises are neither in `used_bases` nor shared
/// with each other.
#[must_use]
pub fn select_isolations<'a>(
    pool: &[&'a Exercise],
    count: usize,
    preferences: &Preferences,
    covered_muscles: &BTreeSet<Muscle>,
    used_bases: &BTreeSet<BaseExerciseID>,
    settings: &Settings,
) -> Vec<&'a Exercise> {
    let mut bases = used_bases.clone();
    rank(pool, |e| isolation_score(e, preferences, covered_muscles, settings))
        .into_iter()
        .filter(|e| bases.insert(e.base_exercise.clone()))
        .take(count)
        .collect()
}

/// Orders by descending score. Equal scores keep their pool order.
fn rank<'a>(pool: &[&'a Exercise], score: impl Fn(&Exercise) -> f64) -> Vec<&'a Exercise> {
    let mut scored = pool.iter().map(|e| (score(e), *e)).collect::<Vec<_>>();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, e)| e).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        MovementPattern, Property,
        tests::data::{CATALOG, exercise, ids},
    };

    static NONE: std::sync::LazyLock<BTreeSet<ExerciseID>> =
        std::sync::LazyLock::new(BTreeSet::new);
    static NO_MUSCLES: std::sync::LazyLock<BTreeSet<Muscle>> =
        std::sync::LazyLock::new(BTreeSet::new);

    fn preferences() -> Preferences<'static> {
        Preferences {
            emphasized_muscles: &NO_MUSCLES,
            library: &NONE,
            prefer_bodyweight: false,
        }
    }

    fn request(library: &[&str], compounds: usize, isolations: usize) -> SelectionRequest {
        SelectionRequest {
            muscle_targets: Muscle::iter().copied().collect(),
            compound_count: compounds,
            isolation_count: isolations,
            available_equipment: BTreeSet::from([
                Equipment::Bodyweight,
                Equipment::Barbell,
                Equipment::Dumbbell,
                Equipment::Cable,
            ]),
            user_experience_level: ExperienceLevel::Intermediate,
            library_exercise_ids: library.iter().map(|id| ExerciseID::from(*id)).collect(),
            ..SelectionRequest::default()
        }
    }

    #[test]
    fn test_select_exercises_from_library() {
        let library = ["row_1", "press_1", "squat_1", "raise_1", "curl_1"];
        let result = select_exercises(
            &request(&library, 2, 2),
            &*CATALOG,
            &Settings::default(),
            FillMode::Strict,
        )
        .unwrap();

        assert!(!result.used_fallback);
        assert!(
            result
                .exercise_ids
                .iter()
                .all(|id| library.contains(&id.as_str()))
        );
        assert_eq!(result.exercise_ids, result.from_library);
        assert_eq!(result.introduced, Vec::<ExerciseID>::new());
        assert_eq!(
            result.exercise_ids,
            vec![
                ExerciseID::from("row_1"),
                ExerciseID::from("press_1"),
                ExerciseID::from("raise_1"),
                ExerciseID::from("curl_1"),
            ]
        );
    }

    #[test]
    fn test_select_exercises_fallback() {
        let result = select_exercises(
            &request(&["push_1"], 3, 2),
            &*CATALOG,
            &Settings::default(),
            FillMode::Strict,
        )
        .unwrap();

        assert!(result.used_fallback);
        assert_eq!(
            result.exercise_ids,
            vec![
                ExerciseID::from("push_1"),
                ExerciseID::from("hinge_1"),
                ExerciseID::from("row_1"),
                ExerciseID::from("raise_1"),
                ExerciseID::from("curl_1"),
            ]
        );
        assert_eq!(result.from_library, vec![ExerciseID::from("push_1")]);
        assert_eq!(
            result.introduced,
            vec![
                ExerciseID::from("hinge_1"),
                ExerciseID::from("row_1"),
                ExerciseID::from("raise_1"),
                ExerciseID::from("curl_1"),
            ]
        );
    }

    #[test]
    fn test_select_exercises_unique_base_exercises() {
        let result = select_exercises(
            &request(&[], 5, 3),
            &*CATALOG,
            &Settings::default(),
            FillMode::Partial,
        )
        .unwrap();

        let bases = result
            .exercise_ids
            .iter()
            .map(|id| &CATALOG[id].base_exercise)
            .collect::<BTreeSet<_>>();
        assert_eq!(bases.len(), result.exercise_ids.len());
    }

    #[test]
    fn test_select_exercises_strict_insufficient() {
        let mut request = request(&[], 2, 1);
        request.muscle_targets = BTreeSet::from([Muscle::Calves]);
        assert_eq!(
            select_exercises(&request, &*CATALOG, &Settings::default(), FillMode::Strict),
            Err(SelectionError::InsufficientCandidates {
                exercise_type: ExerciseType::Compound,
                requested: 2,
                available: 0,
            })
        );
    }

    #[test]
    fn test_select_exercises_strict_insufficient_isolations() {
        let mut request = request(&[], 1, 3);
        request.muscle_targets = BTreeSet::from([Muscle::Biceps, Muscle::Quads]);
        assert_eq!(
            select_exercises(&request, &*CATALOG, &Settings::default(), FillMode::Strict),
            Err(SelectionError::InsufficientCandidates {
                exercise_type: ExerciseType::Isolation,
                requested: 3,
                available: 1,
            })
        );
    }

    #[test]
    fn test_select_exercises_partial() {
        let mut request = request(&[], 1, 3);
        request.muscle_targets = BTreeSet::from([Muscle::Biceps, Muscle::Quads]);
        let result =
            select_exercises(&request, &*CATALOG, &Settings::default(), FillMode::Partial)
                .unwrap();
        assert_eq!(
            result.exercise_ids,
            vec![ExerciseID::from("row_1"), ExerciseID::from("curl_1")]
        );
    }

    #[test]
    fn test_select_exercises_filters_fallback_by_equipment() {
        let mut request = request(&[], 2, 0);
        request.available_equipment = BTreeSet::from([Equipment::Bodyweight, Equipment::Cable]);
        let result =
            select_exercises(&request, &*CATALOG, &Settings::default(), FillMode::Strict)
                .unwrap();
        assert_eq!(
            result.exercise_ids,
            vec![ExerciseID::from("push_1"), ExerciseID::from("row_1")]
        );
    }

    #[test]
    fn test_select_exercises_skips_cardio() {
        let mut request = request(&[], 0, 1);
        request.muscle_targets = BTreeSet::from([Muscle::Quads]);
        request.available_equipment = BTreeSet::from([Equipment::Machine]);
        assert_eq!(
            select_exercises(&request, &*CATALOG, &Settings::default(), FillMode::Partial)
                .unwrap()
                .exercise_ids,
            Vec::<ExerciseID>::new()
        );
    }

    #[test]
    fn test_select_compounds_movement_pattern_diversity() {
        let catalog = BTreeMap::from([
            exercise("squat_a", "a", Equipment::Barbell, ExerciseType::Compound)
                .pattern(MovementPattern::Squat)
                .into_entry(),
            exercise("squat_b", "b", Equipment::Barbell, ExerciseType::Compound)
                .pattern(MovementPattern::Squat)
                .into_entry(),
            exercise("z_hinge", "c", Equipment::Barbell, ExerciseType::Compound)
                .pattern(MovementPattern::Hinge)
                .into_entry(),
        ]);
        let pool = catalog.values().collect::<Vec<_>>();

        assert_eq!(
            ids(&select_compounds(
                &pool,
                2,
                &preferences(),
                &Settings::default()
            )),
            vec!["squat_a", "z_hinge"]
        );
    }

    #[test]
    fn test_select_compounds_second_pass_ignores_movement_pattern() {
        let catalog = BTreeMap::from([
            exercise("squat_a", "a", Equipment::Barbell, ExerciseType::Compound)
                .pattern(MovementPattern::Squat)
                .into_entry(),
            exercise("squat_b", "b", Equipment::Barbell, ExerciseType::Compound)
                .pattern(MovementPattern::Squat)
                .into_entry(),
            exercise("squat_c", "a", Equipment::Dumbbell, ExerciseType::Compound)
                .pattern(MovementPattern::Squat)
                .into_entry(),
        ]);
        let pool = catalog.values().collect::<Vec<_>>();

        assert_eq!(
            ids(&select_compounds(
                &pool,
                3,
                &preferences(),
                &Settings::default()
            )),
            vec!["squat_a", "squat_b"]
        );
    }

    #[test]
    fn test_select_exercises_ignores_cardio() {
        let catalog = BTreeMap::from([
            exercise("a_run", "run", Equipment::Bodyweight, ExerciseType::Cardio)
                .muscles(&[Muscle::Quads])
                .into_entry(),
            exercise("b_squat", "squat", Equipment::Barbell, ExerciseType::Compound)
                .muscles(&[Muscle::Quads])
                .into_entry(),
            exercise("c_curl", "curl", Equipment::Dumbbell, ExerciseType::Isolation)
                .muscles(&[Muscle::Biceps])
                .into_entry(),
        ]);

        let result = select_exercises(
            &request(&[], 3, 3),
            &catalog,
            &Settings::default(),
            FillMode::Partial,
        )
        .unwrap();

        assert_eq!(
            result.exercise_ids,
            vec![ExerciseID::from("b_squat"), ExerciseID::from("c_curl")]
        );
    }

    #[test]
    fn test_select_compounds_count_exceeding_pool() {
        let catalog = BTreeMap::from([
            exercise("squat_a", "a", Equipment::Barbell, ExerciseType::Compound).into_entry(),
            exercise("squat_b", "b", Equipment::Barbell, ExerciseType::Compound).into_entry(),
        ]);
        let pool = catalog.values().collect::<Vec<_>>();

        assert_eq!(
            ids(&select_compounds(
                &pool,
                usize::MAX,
                &preferences(),
                &Settings::default()
            )),
            vec!["squat_a", "squat_b"]
        );
    }

    #[test]
    fn test_select_compounds_prefers_bodyweight() {
        let catalog = BTreeMap::from([
            exercise("a_barbell", "a", Equipment::Barbell, ExerciseType::Compound)
                .into_entry(),
            exercise("b_bodyweight", "b", Equipment::Bodyweight, ExerciseType::Compound)
                .into_entry(),
        ]);
        let pool = catalog.values().collect::<Vec<_>>();
        let preferences = Preferences {
            prefer_bodyweight: true,
            ..preferences()
        };

        assert_eq!(
            ids(&select_compounds(
                &pool,
                2,
                &preferences,
                &Settings::default()
            )),
            vec!["b_bodyweight", "a_barbell"]
        );
    }

    #[test]
    fn test_select_compounds_keeps_pool_order_on_ties() {
        let catalog = BTreeMap::from([
            exercise("a", "a", Equipment::Barbell, ExerciseType::Compound).into_entry(),
            exercise("b", "b", Equipment::Bodyweight, ExerciseType::Compound).into_entry(),
            exercise("c", "c", Equipment::Dumbbell, ExerciseType::Compound).into_entry(),
        ]);
        let pool = catalog.values().rev().collect::<Vec<_>>();

        assert_eq!(
            ids(&select_compounds(
                &pool,
                3,
                &preferences(),
                &Settings::default()
            )),
            vec!["c", "b", "a"]
        );
    }

    #[rstest]
    #[case::none(false, false, false, 1.0)]
    #[case::bodyweight(true, false, false, 2.0)]
    #[case::library(false, true, false, 1.2)]
    #[case::emphasis(false, false, true, 1.5)]
    #[case::all(true, true, true, 3.6)]
    fn test_compound_score(
        #[case] prefer_bodyweight: bool,
        #[case] in_library: bool,
        #[case] emphasized: bool,
        #[case] expected: f64,
    ) {
        let exercise = exercise("a", "a", Equipment::Bodyweight, ExerciseType::Compound)
            .muscles(&[Muscle::Quads])
            .build();
        let library = if in_library {
            BTreeSet::from([exercise.id.clone()])
        } else {
            BTreeSet::new()
        };
        let emphasized_muscles = if emphasized {
            BTreeSet::from([Muscle::Quads, Muscle::Calves])
        } else {
            BTreeSet::from([Muscle::Calves])
        };
        let preferences = Preferences {
            emphasized_muscles: &emphasized_muscles,
            library: &library,
            prefer_bodyweight,
        };

        assert_approx_eq!(
            compound_score(&exercise, &preferences, &Settings::default()),
            expected
        );
    }

    #[rstest]
    #[case::uncovered(&[], 1.3)]
    #[case::partly_covered(&[Muscle::Biceps], 1.3)]
    #[case::covered(&[Muscle::Biceps, Muscle::Forearms], 1.0)]
    fn test_isolation_score(#[case] covered: &[Muscle], #[case] expected: f64) {
        let exercise = exercise("a", "a", Equipment::Bodyweight, ExerciseType::Isolation)
            .muscles(&[Muscle::Biceps, Muscle::Forearms])
            .build();
        let preferences = Preferences {
            prefer_bodyweight: true,
            ..preferences()
        };

        assert_approx_eq!(
            isolation_score(
                &exercise,
                &preferences,
                &covered.iter().copied().collect(),
                &Settings::default()
            ),
            expected
        );
    }

    #[test]
    fn test_select_isolations_prefers_uncovered_muscles() {
        let pool = [
            &CATALOG[&ExerciseID::from("curl_1")],
            &CATALOG[&ExerciseID::from("raise_1")],
        ];

        assert_eq!(
            ids(&select_isolations(
                &pool,
                2,
                &preferences(),
                &BTreeSet::from([Muscle::Biceps]),
                &BTreeSet::new(),
                &Settings::default()
            )),
            vec!["raise_1", "curl_1"]
        );
    }

    #[test]
    fn test_select_isolations_skips_used_bases() {
        let pool = [
            &CATALOG[&ExerciseID::from("curl_1")],
            &CATALOG[&ExerciseID::from("curl_2")],
            &CATALOG[&ExerciseID::from("raise_1")],
        ];

        assert_eq!(
            ids(&select_isolations(
                &pool,
                3,
                &preferences(),
                &BTreeSet::new(),
                &BTreeSet::new(),
                &Settings::default()
            )),
            vec!["curl_1", "raise_1"]
        );
        assert_eq!(
            ids(&select_isolations(
                &pool,
                3,
                &preferences(),
                &BTreeSet::new(),
                &BTreeSet::from(["curl".into()]),
                &Settings::default()
            )),
            vec!["raise_1"]
        );
    }
}
