/// Timer configuration.
///
/// `label` names the measured region in the report header.
#[derive(Debug, Clone)]
pub struct TimerConfig {
    pub label: String,
}

impl TimerConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            label: "benchfiler".to_owned(),
        }
    }
}
