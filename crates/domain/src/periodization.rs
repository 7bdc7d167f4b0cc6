use std::slice::Iter;

use log::debug;
use strum::{AsRefStr, EnumString};

use crate::{Goal, PeriodizationError, Property, Settings};

/// Longest plan that can be periodized, ten years.
pub const MAX_TOTAL_WEEKS: u32 = 520;

/// Fractions of one-repetition maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    pub lower: f32,
    pub upper: f32,
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum Focus {
    Foundation,
    Development,
    Peak,
    Maintenance,
    Deload,
}

impl Property for Focus {
    fn iter() -> Iter<'static, Focus> {
        static FOCUS: [Focus; 5] = [
            Focus::Foundation,
            Focus::Development,
            Focus::Peak,
            Focus::Maintenance,
            Focus::Deload,
        ];
        FOCUS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Focus::Foundation => "Foundation",
            Focus::Development => "Development",
            Focus::Peak => "Peak",
            Focus::Maintenance => "Maintenance",
            Focus::Deload => "Deload",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum ProgressionType {
    Linear,
    Undulating,
    Block,
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum PeriodizationStyle {
    #[default]
    Linear,
    Undulating,
    Block,
}

impl PeriodizationStyle {
    #[must_use]
    pub fn progression_type(self) -> ProgressionType {
        match self {
            PeriodizationStyle::Linear => ProgressionType::Linear,
            PeriodizationStyle::Undulating => ProgressionType::Undulating,
            PeriodizationStyle::Block => ProgressionType::Block,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodizationRequest {
    pub goal: Goal,
    pub total_weeks: u32,
    pub style: PeriodizationStyle,
    pub include_deloads: bool,
    /// Zero disables deloads.
    pub deload_frequency: u32,
    pub custom_intensity_start: Option<f32>,
    pub custom_intensity_end: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub weeks: u32,
    pub focus: Focus,
    pub rationale: String,
    pub intensity_range: IntensityRange,
    pub progression_type: ProgressionType,
}

/// Divides the plan duration into consecutive phases whose weeks add up to `total_weeks`.
///
/// Training weeks progress from foundation over development to peak, with intensity rising
/// linearly from the start to the end intensity. Deload weeks replace training weeks at every
/// multiple of the deload frequency and split the phase they fall into.
pub fn calculate_phases(
    request: &PeriodizationRequest,
    settings: &Settings,
) -> Result<Vec<Phase>, PeriodizationError> {
    let total = request.total_weeks;
    if !(1..=MAX_TOTAL_WEEKS).contains(&total) {
        return Err(PeriodizationError::InvalidTotalWeeks(total));
    }

    for intensity in [request.custom_intensity_start, request.custom_intensity_end]
        .into_iter()
        .flatten()
    {
        if !(0.0..=1.0).contains(&intensity) {
            return Err(PeriodizationError::IntensityOutOfRange(intensity));
        }
    }

    let default = request.goal.default_intensity();
    let start = request.custom_intensity_start.unwrap_or(default.lower);
    let end = request.custom_intensity_end.unwrap_or(default.upper);
    if start >= end {
        return Err(PeriodizationError::InvalidIntensityRange { start, end });
    }

    let progression_type = request.style.progression_type();

    if total < settings.min_periodized_weeks.max(3) {
        return Ok(vec![Phase {
            weeks: total,
            focus: Focus::Development,
            rationale: "Too short for periodization, progress steadily throughout".to_string(),
            intensity_range: IntensityRange {
                lower: start,
                upper: end,
            },
            progression_type,
        }]);
    }

    let deloads = Deloads::new(request);
    let training_weeks = total - deloads.count;
    let (foundation, development, _) =
        split_training_weeks(training_weeks, request.style, settings);

    #[allow(clippy::cast_precision_loss)]
    let intensity_at =
        |week: u32| start + (end - start) * (week as f32 / training_weeks as f32);

    let mut phases: Vec<Phase> = vec![];
    let mut training_week = 0;
    let mut training_lower = start;

    for week in 1..=total {
        if deloads.contains(week) {
            phases.push(Phase {
                weeks: 1,
                focus: Focus::Deload,
                rationale: rationale(Focus::Deload, request.goal),
                intensity_range: IntensityRange {
                    lower: training_lower * settings.deload_lower_factor,
                    upper: training_lower * settings.deload_upper_factor,
                },
                progression_type,
            });
            continue;
        }

        let focus = if training_week < foundation {
            Focus::Foundation
        } else if training_week < foundation + development {
            Focus::Development
        } else {
            Focus::Peak
        };
        let upper = intensity_at(training_week + 1);

        match phases.last_mut() {
            Some(last) if last.focus == focus => {
                last.weeks += 1;
                last.intensity_range.upper = upper;
            }
            _ => {
                training_lower = intensity_at(training_week);
                phases.push(Phase {
                    weeks: 1,
                    focus,
                    rationale: rationale(focus, request.goal),
                    intensity_range: IntensityRange {
                        lower: training_lower,
                        upper,
                    },
                    progression_type,
                });
            }
        }

        training_week += 1;
    }

    debug!(
        "{total} weeks divided into {}",
        phases
            .iter()
            .map(|p| format!("{} ({})", p.focus.name(), p.weeks))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(phases)
}

/// Weeks replaced by a deload: every multiple of the deload frequency after the first week,
/// as long as at least three training weeks remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deloads {
    frequency: u32,
    count: u32,
    last: u32,
}

impl Deloads {
    fn new(request: &PeriodizationRequest) -> Self {
        let frequency = request.deload_frequency;
        if !request.include_deloads || frequency == 0 {
            return Self {
                frequency,
                count: 0,
                last: 0,
            };
        }
        let candidates =
            (request.total_weeks / frequency).saturating_sub(u32::from(frequency == 1));
        let count = candidates.min(request.total_weeks.saturating_sub(3));
        let last = match count {
            0 => 0,
            _ if frequency == 1 => count + 1,
            _ => count * frequency,
        };
        Self {
            frequency,
            count,
            last,
        }
    }

    fn contains(self, week: u32) -> bool {
        week > 1 && week <= self.last && week % self.frequency == 0
    }
}

/// Weeks of foundation, development and peak. Requires at least three training weeks.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn split_training_weeks(
    weeks: u32,
    style: PeriodizationStyle,
    settings: &Settings,
) -> (u32, u32, u32) {
    let (foundation, peak) = match style {
        PeriodizationStyle::Block => (weeks / 3, weeks / 3),
        PeriodizationStyle::Linear | PeriodizationStyle::Undulating => {
            let share = |s: f32| ((weeks as f32 * s).floor() as u32).max(1);
            let foundation = share(settings.foundation_share);
            let peak = share(settings.peak_share);
            if foundation + peak >= weeks {
                (1, 1)
            } else {
                (foundation, peak)
            }
        }
    };
    (foundation, weeks - foundation - peak, peak)
}

fn rationale(focus: Focus, goal: Goal) -> String {
    match focus {
        Focus::Foundation => {
            "Build work capacity and technique at moderate loads".to_string()
        }
        Focus::Development => format!(
            "Increase volume and load to drive {} adaptations",
            goal.name().to_lowercase()
        ),
        Focus::Peak => format!(
            "Realize {} gains at the highest intensities of the plan",
            goal.name().to_lowercase()
        ),
        Focus::Maintenance => "Hold current performance with reduced volume".to_string(),
        Focus::Deload => "Reduce load to recover from accumulated fatigue".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn request(total_weeks: u32) -> PeriodizationRequest {
        PeriodizationRequest {
            goal: Goal::Hypertrophy,
            total_weeks,
            style: PeriodizationStyle::Linear,
            include_deloads: true,
            deload_frequency: 4,
            custom_intensity_start: None,
            custom_intensity_end: None,
        }
    }

    fn layout(phases: &[Phase]) -> Vec<(Focus, u32)> {
        phases.iter().map(|p| (p.focus, p.weeks)).collect()
    }

    #[test]
    fn test_calculate_phases_with_deloads() {
        let phases = calculate_phases(
            &PeriodizationRequest {
                total_weeks: 12,
                deload_frequency: 5,
                ..request(12)
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(
            layout(&phases),
            vec![
                (Focus::Foundation, 2),
                (Focus::Development, 2),
                (Focus::Deload, 1),
                (Focus::Development, 4),
                (Focus::Deload, 1),
                (Focus::Peak, 2),
            ]
        );
        assert_eq!(phases.iter().filter(|p| p.focus == Focus::Deload).count(), 2);
        assert_eq!(phases.iter().map(|p| p.weeks).sum::<u32>(), 12);
    }

    #[rstest]
    #[case(1, vec![(Focus::Development, 1)])]
    #[case(4, vec![(Focus::Development, 4)])]
    #[case(5, vec![(Focus::Foundation, 1), (Focus::Development, 2), (Focus::Deload, 1), (Focus::Peak, 1)])]
    #[case(8, vec![(Focus::Foundation, 1), (Focus::Development, 2), (Focus::Deload, 1), (Focus::Development, 2), (Focus::Peak, 1), (Focus::Deload, 1)])]
    fn test_calculate_phases_layout(#[case] total_weeks: u32, #[case] expected: Vec<(Focus, u32)>) {
        assert_eq!(
            layout(&calculate_phases(&request(total_weeks), &Settings::default()).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case::linear(PeriodizationStyle::Linear, vec![(Focus::Foundation, 3), (Focus::Development, 6), (Focus::Peak, 3)], ProgressionType::Linear)]
    #[case::undulating(PeriodizationStyle::Undulating, vec![(Focus::Foundation, 3), (Focus::Development, 6), (Focus::Peak, 3)], ProgressionType::Undulating)]
    #[case::block(PeriodizationStyle::Block, vec![(Focus::Foundation, 4), (Focus::Development, 4), (Focus::Peak, 4)], ProgressionType::Block)]
    fn test_calculate_phases_style(
        #[case] style: PeriodizationStyle,
        #[case] expected: Vec<(Focus, u32)>,
        #[case] progression_type: ProgressionType,
    ) {
        let phases = calculate_phases(
            &PeriodizationRequest {
                style,
                include_deloads: false,
                ..request(12)
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(layout(&phases), expected);
        assert!(phases.iter().all(|p| p.progression_type == progression_type));
    }

    #[rstest]
    #[case::disabled(false, 4)]
    #[case::zero_frequency(true, 0)]
    fn test_calculate_phases_without_deloads(#[case] include_deloads: bool, #[case] deload_frequency: u32) {
        let phases = calculate_phases(
            &PeriodizationRequest {
                include_deloads,
                deload_frequency,
                ..request(16)
            },
            &Settings::default(),
        )
        .unwrap();

        assert!(phases.iter().all(|p| p.focus != Focus::Deload));
        assert_eq!(phases.iter().map(|p| p.weeks).sum::<u32>(), 16);
    }

    #[test]
    fn test_calculate_phases_deloads_leave_training_weeks() {
        let phases = calculate_phases(
            &PeriodizationRequest {
                deload_frequency: 1,
                ..request(6)
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(
            layout(&phases),
            vec![
                (Focus::Foundation, 1),
                (Focus::Deload, 1),
                (Focus::Deload, 1),
                (Focus::Deload, 1),
                (Focus::Development, 1),
                (Focus::Peak, 1),
            ]
        );
        assert_approx_eq!(phases[1].intensity_range.lower, phases[0].intensity_range.lower * 0.8);
        assert_approx_eq!(phases[3].intensity_range.lower, phases[0].intensity_range.lower * 0.8);
    }

    #[rstest]
    #[case::weekly(6, 1, 3, vec![2, 3, 4])]
    #[case::every_fourth(12, 4, 3, vec![4, 8, 12])]
    #[case::every_other(5, 2, 2, vec![2, 4])]
    #[case::capped(5, 1, 2, vec![2, 3])]
    #[case::too_short(3, 1, 0, vec![])]
    fn test_deloads(
        #[case] total_weeks: u32,
        #[case] deload_frequency: u32,
        #[case] count: u32,
        #[case] weeks: Vec<u32>,
    ) {
        let deloads = Deloads::new(&PeriodizationRequest {
            deload_frequency,
            ..request(total_weeks)
        });
        assert_eq!(deloads.count, count);
        assert_eq!(
            (1..=total_weeks).filter(|w| deloads.contains(*w)).collect::<Vec<_>>(),
            weeks
        );
    }

    #[test]
    fn test_deloads_many_weeks() {
        let deloads = Deloads::new(&request(u32::MAX));
        assert_eq!(deloads.count, u32::MAX / 4);
        assert!(deloads.contains(u32::MAX - 3));
    }

    #[test]
    fn test_calculate_phases_intensity() {
        let phases = calculate_phases(
            &PeriodizationRequest {
                goal: Goal::Strength,
                include_deloads: false,
                custom_intensity_start: Some(0.6),
                ..request(8)
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(
            layout(&phases),
            vec![
                (Focus::Foundation, 2),
                (Focus::Development, 4),
                (Focus::Peak, 2)
            ]
        );
        assert_approx_eq!(phases[0].intensity_range.lower, 0.6);
        assert_approx_eq!(phases[0].intensity_range.upper, 0.675);
        assert_approx_eq!(phases[1].intensity_range.lower, 0.675);
        assert_approx_eq!(phases[1].intensity_range.upper, 0.825);
        assert_approx_eq!(phases[2].intensity_range.lower, 0.825);
        assert_approx_eq!(phases[2].intensity_range.upper, 0.9);
    }

    #[test]
    fn test_calculate_phases_intensity_increases() {
        let phases = calculate_phases(
            &PeriodizationRequest {
                deload_frequency: 3,
                ..request(20)
            },
            &Settings::default(),
        )
        .unwrap();
        let training = phases
            .iter()
            .filter(|p| p.focus != Focus::Deload)
            .collect::<Vec<_>>();

        for pair in training.windows(2) {
            assert!(pair[0].intensity_range.lower < pair[1].intensity_range.lower);
        }
        for phase in &training {
            assert!(phase.intensity_range.lower < phase.intensity_range.upper);
        }
        assert_approx_eq!(training[0].intensity_range.lower, 0.65);
        assert_approx_eq!(training[training.len() - 1].intensity_range.upper, 0.8);
    }

    #[test]
    fn test_calculate_phases_deload_intensity() {
        let phases = calculate_phases(
            &PeriodizationRequest {
                goal: Goal::Strength,
                deload_frequency: 5,
                ..request(12)
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(phases[2].focus, Focus::Deload);
        assert_approx_eq!(phases[2].intensity_range.lower, phases[1].intensity_range.lower * 0.8);
        assert_approx_eq!(phases[2].intensity_range.upper, phases[1].intensity_range.lower * 0.9);
    }

    #[test]
    fn test_calculate_phases_short_plan_uses_custom_intensity() {
        let phases = calculate_phases(
            &PeriodizationRequest {
                custom_intensity_start: Some(0.5),
                custom_intensity_end: Some(0.6),
                ..request(3)
            },
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].weeks, 3);
        assert_eq!(phases[0].focus, Focus::Development);
        assert_eq!(
            phases[0].intensity_range,
            IntensityRange {
                lower: 0.5,
                upper: 0.6
            }
        );
    }

    #[rstest]
    #[case(0, 2, 1)]
    #[case(1, 2, 1)]
    #[case(3, 2, 1)]
    #[case(3, 3, 3)]
    fn test_calculate_phases_min_periodized_weeks_at_least_three(
        #[case] min_periodized_weeks: u32,
        #[case] total_weeks: u32,
        #[case] phases: usize,
    ) {
        assert_eq!(
            calculate_phases(
                &PeriodizationRequest {
                    include_deloads: false,
                    ..request(total_weeks)
                },
                &Settings {
                    min_periodized_weeks,
                    ..Settings::default()
                },
            )
            .unwrap()
            .len(),
            phases
        );
    }

    #[rstest]
    #[case::zero_weeks(request(0), PeriodizationError::InvalidTotalWeeks(0))]
    #[case::too_many_weeks(
        request(MAX_TOTAL_WEEKS + 1),
        PeriodizationError::InvalidTotalWeeks(MAX_TOTAL_WEEKS + 1)
    )]
    #[case::start_too_high(
        PeriodizationRequest { custom_intensity_start: Some(1.2), ..request(8) },
        PeriodizationError::IntensityOutOfRange(1.2)
    )]
    #[case::end_negative(
        PeriodizationRequest { custom_intensity_end: Some(-0.1), ..request(8) },
        PeriodizationError::IntensityOutOfRange(-0.1)
    )]
    #[case::start_above_default_end(
        PeriodizationRequest { custom_intensity_start: Some(0.85), ..request(8) },
        PeriodizationError::InvalidIntensityRange { start: 0.85, end: 0.8 }
    )]
    #[case::equal(
        PeriodizationRequest {
            custom_intensity_start: Some(0.7),
            custom_intensity_end: Some(0.7),
            ..request(8)
        },
        PeriodizationError::InvalidIntensityRange { start: 0.7, end: 0.7 }
    )]
    fn test_calculate_phases_invalid(
        #[case] invalid: PeriodizationRequest,
        #[case] expected: PeriodizationError,
    ) {
        assert_eq!(calculate_phases(&invalid, &Settings::default()), Err(expected));
    }

    #[test]
    fn test_calculate_phases_nan_intensity() {
        assert!(matches!(
            calculate_phases(
                &PeriodizationRequest {
                    custom_intensity_end: Some(f32::NAN),
                    ..request(8)
                },
                &Settings::default(),
            ),
            Err(PeriodizationError::IntensityOutOfRange(_))
        ));
    }

    #[rstest]
    #[case(3, PeriodizationStyle::Linear, (1, 1, 1))]
    #[case(4, PeriodizationStyle::Linear, (1, 2, 1))]
    #[case(10, PeriodizationStyle::Linear, (2, 6, 2))]
    #[case(13, PeriodizationStyle::Undulating, (3, 7, 3))]
    #[case(10, PeriodizationStyle::Block, (3, 4, 3))]
    fn test_split_training_weeks(
        #[case] weeks: u32,
        #[case] style: PeriodizationStyle,
        #[case] expected: (u32, u32, u32),
    ) {
        assert_eq!(
            split_training_weeks(weeks, style, &Settings::default()),
            expected
        );
    }
}
