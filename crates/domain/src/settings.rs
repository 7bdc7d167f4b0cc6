use serde::{Deserialize, Serialize};

/// Tunable constants of the generation pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub bodyweight_boost: f64,
    pub library_boost: f64,
    pub emphasis_boost: f64,
    pub muscle_balance_boost: f64,
    /// Plans shorter than this get a single development phase. Values below 3 act as 3, as
    /// foundation, development and peak need a week each.
    pub min_periodized_weeks: u32,
    pub foundation_share: f32,
    pub peak_share: f32,
    pub deload_lower_factor: f32,
    pub deload_upper_factor: f32,
    /// Ascending by `max_minutes`. Longer sessions use the last entry.
    pub session_lengths: Vec<SessionLength>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bodyweight_boost: 2.0,
            library_boost: 1.2,
            emphasis_boost: 1.5,
            muscle_balance_boost: 1.3,
            min_periodized_weeks: 5,
            foundation_share: 0.25,
            peak_share: 0.25,
            deload_lower_factor: 0.8,
            deload_upper_factor: 0.9,
            session_lengths: vec![
                SessionLength::new(30, 2, 1),
                SessionLength::new(45, 2, 2),
                SessionLength::new(60, 3, 2),
                SessionLength::new(75, 3, 3),
                SessionLength::new(u32::MAX, 4, 3),
            ],
        }
    }
}

impl Settings {
    /// Number of compound and isolation exercises fitting into a session.
    #[must_use]
    pub fn exercise_counts(&self, session_minutes: u32) -> (usize, usize) {
        self.session_lengths
            .iter()
            .find(|l| session_minutes <= l.max_minutes)
            .or(self.session_lengths.last())
            .map_or((0, 0), |l| (l.compounds, l.isolations))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionLength {
    pub max_minutes: u32,
    pub compounds: usize,
    pub isolations: usize,
}

impl SessionLength {
    #[must_use]
    pub const fn new(max_minutes: u32, compounds: usize, isolations: usize) -> Self {
        Self {
            max_minutes,
            compounds,
            isolations,
        }
    }
}
