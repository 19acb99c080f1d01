use crate::upload::ProgressSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressState {
    /// Always within 0..=100.
    pub percent: f32,
    pub status: String,
}

impl ProgressState {
    pub fn reset(&mut self) {
        *self = ProgressState::default();
    }

    pub fn apply(&mut self, snapshot: ProgressSnapshot) {
        self.percent = if snapshot.progress.is_finite() {
            snapshot.progress.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.status = snapshot.status;
    }

    pub fn complete(&mut self, status: &str) {
        self.percent = 100.0;
        self.status = status.to_string();
    }

    /// Fraction for `egui::ProgressBar`.
    pub fn fraction(&self) -> f32 {
        self.percent / 100.0
    }

    pub fn get_status_text(&self) -> String {
        if self.status.is_empty() {
            format!("{:.0}%", self.percent)
        } else {
            format!("{:.0}% | {}", self.percent, self.status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_clamps() {
        let mut progress = ProgressState::default();
        progress.apply(ProgressSnapshot {
            progress: 140.0,
            status: "Zipping".to_string(),
        });
        assert_eq!(progress.percent, 100.0);

        progress.apply(ProgressSnapshot {
            progress: -3.0,
            status: String::new(),
        });
        assert_eq!(progress.percent, 0.0);

        progress.apply(ProgressSnapshot {
            progress: f32::NAN,
            status: String::new(),
        });
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_status_text() {
        let mut progress = ProgressState::default();
        assert_eq!(progress.get_status_text(), "0%");

        progress.apply(ProgressSnapshot {
            progress: 37.4,
            status: "Translating Tamil".to_string(),
        });
        assert_eq!(progress.get_status_text(), "37% | Translating Tamil");
        assert!((progress.fraction() - 0.374).abs() < 1e-6);
    }
}
