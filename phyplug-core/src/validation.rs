pub struct Validator;

impl Validator {
    /// Auto-save intervals at or below this many minutes are rejected.
    pub const MIN_INTERVAL_MINUTES: f64 = 0.1;

    pub fn is_valid_interval(minutes: f64) -> bool {
        minutes.is_finite() && minutes > Self::MIN_INTERVAL_MINUTES
    }

    pub fn normalize_modifier(modifier: &str) -> String {
        modifier.trim().to_lowercase()
    }

    pub fn normalize_debug_interval(seconds: &mut u64, default: u64) {
        if *seconds == 0 {
            *seconds = default;
        }
    }
}
