use std::collections::{BTreeMap, BTreeSet};

use crate::{
    Equipment, Exercise, ExerciseID, ExerciseType, ExperienceLevel, Muscle, MovementPattern,
};

/// Read-only exercise reference data.
pub trait Catalog {
    fn get(&self, id: &ExerciseID) -> Option<&Exercise>;

    /// All exercises in a stable order.
    fn exercises(&self) -> impl Iterator<Item = &Exercise>;

    fn query(&self, query: &CatalogQuery) -> Vec<&Exercise> {
        self.exercises().filter(|e| query.matches(e)).collect()
    }
}

impl Catalog for BTreeMap<ExerciseID, Exercise> {
    fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        BTreeMap::get(self, id)
    }

    fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.values()
    }
}

/// Immutable description of a catalog lookup. Every refinement returns a new query.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogQuery {
    max_experience: Option<ExperienceLevel>,
    exercise_type: Option<ExerciseType>,
    equipment: Option<BTreeSet<Equipment>>,
    muscles: Option<BTreeSet<Muscle>>,
    excluded: BTreeSet<ExerciseID>,
}

impl CatalogQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_experience(self, level: ExperienceLevel) -> Self {
        Self {
            max_experience: Some(level),
            ..self
        }
    }

    #[must_use]
    pub fn exercise_type(self, exercise_type: ExerciseType) -> Self {
        Self {
            exercise_type: Some(exercise_type),
            ..self
        }
    }

    #[must_use]
    pub fn equipment(self, equipment: &BTreeSet<Equipment>) -> Self {
        Self {
            equipment: Some(equipment.clone()),
            ..self
        }
    }

    #[must_use]
    pub fn muscles(self, muscles: &BTreeSet<Muscle>) -> Self {
        Self {
            muscles: Some(muscles.clone()),
            ..self
        }
    }

    #[must_use]
    pub fn excluding<'a>(self, ids: impl IntoIterator<Item = &'a ExerciseID>) -> Self {
        let mut excluded = self.excluded.clone();
        excluded.extend(ids.into_iter().cloned());
        Self { excluded, ..self }
    }

    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.max_experience
            .is_none_or(|level| level.allows(exercise.experience_level))
            && self
                .exercise_type
                .is_none_or(|t| t == exercise.exercise_type)
            && self
                .equipment
                .as_ref()
                .is_none_or(|equipment| equipment.contains(&exercise.equipment))
            && self
                .muscles
                .as_ref()
                .is_none_or(|muscles| exercise.targets_any(muscles))
            && !self.excluded.contains(&exercise.id)
    }
}

/// Built-in reference catalog, keyed and ordered by exercise id.
#[must_use]
pub fn builtin() -> &'static BTreeMap<ExerciseID, Exercise> {
    &BUILTIN
}

static BUILTIN: std::sync::LazyLock<BTreeMap<ExerciseID, Exercise>> =
    std::sync::LazyLock::new(|| {
        BASE_EXERCISES
            .iter()
            .flat_map(|e| {
                std::iter::once(Exercise {
                    id: e.id.into(),
                    name: e.name.to_string(),
                    base_exercise: e.id.into(),
                    equipment: e.equipment,
                    exercise_type: e.exercise_type,
                    muscles: e.muscles.iter().copied().collect(),
                    movement_pattern: e.movement_pattern,
                    experience_level: e.experience_level,
                })
                .chain(e.variants.iter().map(|v| Exercise {
                    id: v.id.into(),
                    name: v.name.to_string(),
                    base_exercise: e.id.into(),
                    equipment: v.equipment.unwrap_or(e.equipment),
                    exercise_type: e.exercise_type,
                    muscles: v.muscles.unwrap_or(e.muscles).iter().copied().collect(),
                    movement_pattern: e.movement_pattern,
                    experience_level: v.experience_level.unwrap_or(e.experience_level),
                }))
            })
            .map(|e| (e.id.clone(), e))
            .collect()
    });

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    exercise_type: ExerciseType,
    movement_pattern: Option<MovementPattern>,
    equipment: Equipment,
    muscles: &'static [Muscle],
    experience_level: ExperienceLevel,
    variants: &'static [ExerciseVariant],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ExerciseVariant {
    id: &'static str,
    name: &'static str,
    equipment: Option<Equipment>,
    muscles: Option<&'static [Muscle]>,
    experience_level: Option<ExperienceLevel>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            equipment: None,
            muscles: None,
            experience_level: None,
        }
    }
}

const BASE_EXERCISES: [BaseExercise; 32] = [
    BaseExercise {
        id: "back_extension",
        name: "Back Extension",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::ErectorSpinae, Muscle::Glutes, Muscle::Hamstrings],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "barbell_back_squat",
        name: "Barbell Back Squat",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Squat),
        equipment: Equipment::Barbell,
        muscles: &[
            Muscle::Quads,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::Adductors,
        ],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "barbell_front_squat",
                name: "Barbell Front Squat",
                muscles: Some(&[Muscle::Quads, Muscle::Glutes, Muscle::Abs]),
                experience_level: Some(ExperienceLevel::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "goblet_squat",
                name: "Goblet Squat",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "smith_machine_squat",
                name: "Smith Machine Squat",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_bench_press",
        name: "Barbell Bench Press",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::HorizontalPush),
        equipment: Equipment::Barbell,
        muscles: &[Muscle::Pecs, Muscle::FrontDelts, Muscle::Triceps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "barbell_incline_bench_press",
                name: "Barbell Incline Bench Press",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_bench_press",
                name: "Dumbbell Bench Press",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_chest_press",
                name: "Machine Chest Press",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_curl",
        name: "Barbell Curl",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Barbell,
        muscles: &[Muscle::Biceps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "cable_curl",
                name: "Cable Curl",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_curl",
                name: "Dumbbell Curl",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "hammer_curl",
                name: "Hammer Curl",
                equipment: Some(Equipment::Dumbbell),
                muscles: Some(&[Muscle::Biceps, Muscle::Forearms]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_row",
        name: "Barbell Row",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::HorizontalPull),
        equipment: Equipment::Barbell,
        muscles: &[Muscle::Lats, Muscle::Traps, Muscle::RearDelts, Muscle::Biceps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "dumbbell_row",
                name: "Dumbbell Row",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "pendlay_row",
                name: "Pendlay Row",
                experience_level: Some(ExperienceLevel::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "seated_cable_row",
                name: "Seated Cable Row",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "bulgarian_split_squat",
        name: "Bulgarian Split Squat",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Lunge),
        equipment: Equipment::Dumbbell,
        muscles: &[Muscle::Quads, Muscle::Glutes],
        experience_level: ExperienceLevel::Intermediate,
        variants: &[],
    },
    BaseExercise {
        id: "cable_fly",
        name: "Cable Fly",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Cable,
        muscles: &[Muscle::Pecs],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "dumbbell_fly",
                name: "Dumbbell Fly",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "pec_deck",
                name: "Pec Deck",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "calf_raise",
        name: "Calf Raise",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::Calves],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "bodyweight_calf_raise",
            name: "Bodyweight Calf Raise",
            equipment: Some(Equipment::Bodyweight),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "conventional_deadlift",
        name: "Conventional Deadlift",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Hinge),
        equipment: Equipment::Barbell,
        muscles: &[
            Muscle::Hamstrings,
            Muscle::Glutes,
            Muscle::ErectorSpinae,
            Muscle::Traps,
        ],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "romanian_deadlift",
                name: "Romanian Deadlift",
                muscles: Some(&[Muscle::Hamstrings, Muscle::Glutes, Muscle::ErectorSpinae]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "sumo_deadlift",
                name: "Sumo Deadlift",
                muscles: Some(&[
                    Muscle::Hamstrings,
                    Muscle::Glutes,
                    Muscle::Adductors,
                    Muscle::ErectorSpinae,
                ]),
                experience_level: Some(ExperienceLevel::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "trap_bar_deadlift",
                name: "Trap Bar Deadlift",
                equipment: Some(Equipment::TrapBar),
                muscles: Some(&[
                    Muscle::Quads,
                    Muscle::Glutes,
                    Muscle::Hamstrings,
                    Muscle::ErectorSpinae,
                ]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "dip",
        name: "Dip",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::VerticalPush),
        equipment: Equipment::ParallelBars,
        muscles: &[Muscle::Pecs, Muscle::Triceps, Muscle::FrontDelts],
        experience_level: ExperienceLevel::Intermediate,
        variants: &[ExerciseVariant {
            id: "bench_dip",
            name: "Bench Dip",
            equipment: Some(Equipment::Bench),
            muscles: Some(&[Muscle::Triceps, Muscle::FrontDelts]),
            experience_level: Some(ExperienceLevel::Beginner),
        }],
    },
    BaseExercise {
        id: "face_pull",
        name: "Face Pull",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Cable,
        muscles: &[Muscle::RearDelts, Muscle::Traps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "band_pull_apart",
            name: "Band Pull Apart",
            equipment: Some(Equipment::ResistanceBand),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "farmers_carry",
        name: "Farmer's Carry",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Carry),
        equipment: Equipment::Dumbbell,
        muscles: &[Muscle::Forearms, Muscle::Traps, Muscle::Abs],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "hanging_leg_raise",
        name: "Hanging Leg Raise",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::PullUpBar,
        muscles: &[Muscle::Abs],
        experience_level: ExperienceLevel::Intermediate,
        variants: &[],
    },
    BaseExercise {
        id: "hip_abduction",
        name: "Hip Abduction",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::Abductors],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "banded_lateral_walk",
            name: "Banded Lateral Walk",
            equipment: Some(Equipment::ResistanceBand),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "hip_adduction",
        name: "Hip Adduction",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::Adductors],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "hip_thrust",
        name: "Hip Thrust",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Hinge),
        equipment: Equipment::Barbell,
        muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "glute_bridge",
            name: "Glute Bridge",
            equipment: Some(Equipment::Bodyweight),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "kettlebell_swing",
        name: "Kettlebell Swing",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Hinge),
        equipment: Equipment::Kettlebell,
        muscles: &[Muscle::Glutes, Muscle::Hamstrings, Muscle::ErectorSpinae],
        experience_level: ExperienceLevel::Intermediate,
        variants: &[],
    },
    BaseExercise {
        id: "lat_pulldown",
        name: "Lat Pulldown",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::VerticalPull),
        equipment: Equipment::Cable,
        muscles: &[Muscle::Lats, Muscle::Biceps, Muscle::RearDelts],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "lateral_raise",
        name: "Lateral Raise",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Dumbbell,
        muscles: &[Muscle::SideDelts],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "cable_lateral_raise",
            name: "Cable Lateral Raise",
            equipment: Some(Equipment::Cable),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "leg_curl",
        name: "Leg Curl",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::Hamstrings],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "nordic_curl",
            name: "Nordic Curl",
            equipment: Some(Equipment::Bodyweight),
            experience_level: Some(ExperienceLevel::Advanced),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "leg_extension",
        name: "Leg Extension",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::Quads],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "leg_press",
        name: "Leg Press",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Squat),
        equipment: Equipment::Machine,
        muscles: &[Muscle::Quads, Muscle::Glutes],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "overhead_press",
        name: "Overhead Press",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::VerticalPush),
        equipment: Equipment::Barbell,
        muscles: &[Muscle::FrontDelts, Muscle::SideDelts, Muscle::Triceps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "dumbbell_shoulder_press",
                name: "Dumbbell Shoulder Press",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_shoulder_press",
                name: "Machine Shoulder Press",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "pike_push_up",
                name: "Pike Push Up",
                equipment: Some(Equipment::Bodyweight),
                experience_level: Some(ExperienceLevel::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "plank",
        name: "Plank",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Bodyweight,
        muscles: &[Muscle::Abs],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "pull_up",
        name: "Pull Up",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::VerticalPull),
        equipment: Equipment::PullUpBar,
        muscles: &[Muscle::Lats, Muscle::Biceps, Muscle::RearDelts],
        experience_level: ExperienceLevel::Intermediate,
        variants: &[
            ExerciseVariant {
                id: "assisted_pull_up",
                name: "Assisted Pull Up",
                equipment: Some(Equipment::Machine),
                experience_level: Some(ExperienceLevel::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "chin_up",
                name: "Chin Up",
                muscles: Some(&[Muscle::Lats, Muscle::Biceps]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "push_up",
        name: "Push Up",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::HorizontalPush),
        equipment: Equipment::Bodyweight,
        muscles: &[Muscle::Pecs, Muscle::FrontDelts, Muscle::Triceps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "archer_push_up",
                name: "Archer Push Up",
                experience_level: Some(ExperienceLevel::Advanced),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "diamond_push_up",
                name: "Diamond Push Up",
                muscles: Some(&[Muscle::Triceps, Muscle::Pecs]),
                experience_level: Some(ExperienceLevel::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "reverse_fly",
        name: "Reverse Fly",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Dumbbell,
        muscles: &[Muscle::RearDelts],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "reverse_pec_deck",
            name: "Reverse Pec Deck",
            equipment: Some(Equipment::Machine),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "shrug",
        name: "Shrug",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Barbell,
        muscles: &[Muscle::Traps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[ExerciseVariant {
            id: "dumbbell_shrug",
            name: "Dumbbell Shrug",
            equipment: Some(Equipment::Dumbbell),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "treadmill_run",
        name: "Treadmill Run",
        exercise_type: ExerciseType::Cardio,
        movement_pattern: None,
        equipment: Equipment::Machine,
        muscles: &[Muscle::Quads, Muscle::Hamstrings, Muscle::Calves],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
    BaseExercise {
        id: "triceps_pushdown",
        name: "Triceps Pushdown",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Cable,
        muscles: &[Muscle::Triceps],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "overhead_triceps_extension",
                name: "Overhead Triceps Extension",
                equipment: Some(Equipment::Dumbbell),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "skull_crusher",
                name: "Skull Crusher",
                equipment: Some(Equipment::Barbell),
                experience_level: Some(ExperienceLevel::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "walking_lunge",
        name: "Walking Lunge",
        exercise_type: ExerciseType::Compound,
        movement_pattern: Some(MovementPattern::Lunge),
        equipment: Equipment::Dumbbell,
        muscles: &[Muscle::Quads, Muscle::Glutes, Muscle::Hamstrings],
        experience_level: ExperienceLevel::Beginner,
        variants: &[
            ExerciseVariant {
                id: "bodyweight_lunge",
                name: "Bodyweight Lunge",
                equipment: Some(Equipment::Bodyweight),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "step_up",
                name: "Step Up",
                equipment: Some(Equipment::Bench),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "wrist_curl",
        name: "Wrist Curl",
        exercise_type: ExerciseType::Isolation,
        movement_pattern: None,
        equipment: Equipment::Dumbbell,
        muscles: &[Muscle::Forearms],
        experience_level: ExperienceLevel::Beginner,
        variants: &[],
    },
];
