//! Core data types for Pomidorka.
//!
//! This module defines:
//! - The kind of a running activity (work, short break, long break)
//! - Timer settings with boundary validation

use serde::{Deserialize, Serialize};

// ============================================================================
// ActivityKind
// ============================================================================

/// Identifies what kind of period a countdown represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A work period
    Work,
    /// A short rest period
    ShortBreak,
    /// A long rest period
    LongBreak,
}

impl ActivityKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Work => "work",
            ActivityKind::ShortBreak => "short_break",
            ActivityKind::LongBreak => "long_break",
        }
    }

    /// Returns true for both short and long breaks.
    pub fn is_break(&self) -> bool {
        matches!(self, ActivityKind::ShortBreak | ActivityKind::LongBreak)
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Timer settings for one application session.
///
/// Durations are in seconds. The end-of-activity action is an opaque shell
/// command template; the `{base}` placeholder expands to the application
/// base directory when the action is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Work period duration in seconds
    pub work_period: u32,
    /// Short rest period duration in seconds
    pub short_rest_period: u32,
    /// Long rest period duration in seconds
    pub long_rest_period: u32,
    /// Command executed when an activity ends
    pub end_activity_action: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_period: 1500,
            short_rest_period: 300,
            long_rest_period: 1500,
            end_activity_action: "mplayer {base}/assets/alarm.mp3".to_string(),
        }
    }
}

impl Settings {
    /// Creates settings with the specified work period.
    pub fn with_work_period(mut self, seconds: u32) -> Self {
        self.work_period = seconds;
        self
    }

    /// Creates settings with the specified short rest period.
    pub fn with_short_rest_period(mut self, seconds: u32) -> Self {
        self.short_rest_period = seconds;
        self
    }

    /// Creates settings with the specified long rest period.
    pub fn with_long_rest_period(mut self, seconds: u32) -> Self {
        self.long_rest_period = seconds;
        self
    }

    /// Creates settings with the specified end-of-activity action.
    pub fn with_end_activity_action(mut self, action: impl Into<String>) -> Self {
        self.end_activity_action = action.into();
        self
    }

    /// Returns the configured duration for an activity kind, in seconds.
    pub fn period_for(&self, kind: ActivityKind) -> u32 {
        match kind {
            ActivityKind::Work => self.work_period,
            ActivityKind::ShortBreak => self.short_rest_period,
            ActivityKind::LongBreak => self.long_rest_period,
        }
    }

    /// Validates the settings at the configuration boundary.
    ///
    /// The countdown core treats positive durations as a caller precondition;
    /// this check runs once, before the coordinator is constructed.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_period < 1 || self.work_period > 86_400 {
            return Err("work period must be between 1 and 86400 seconds".to_string());
        }
        if self.short_rest_period < 1 || self.short_rest_period > 86_400 {
            return Err("short rest period must be between 1 and 86400 seconds".to_string());
        }
        if self.long_rest_period < 1 || self.long_rest_period > 86_400 {
            return Err("long rest period must be between 1 and 86400 seconds".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // ActivityKind Tests
    // ------------------------------------------------------------------------

    mod activity_kind_tests {
        use super::*;

        #[test]
        fn test_as_str() {
            assert_eq!(ActivityKind::Work.as_str(), "work");
            assert_eq!(ActivityKind::ShortBreak.as_str(), "short_break");
            assert_eq!(ActivityKind::LongBreak.as_str(), "long_break");
        }

        #[test]
        fn test_is_break() {
            assert!(!ActivityKind::Work.is_break());
            assert!(ActivityKind::ShortBreak.is_break());
            assert!(ActivityKind::LongBreak.is_break());
        }

        #[test]
        fn test_serialize_deserialize() {
            let kind = ActivityKind::ShortBreak;
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, "\"short_break\"");

            let deserialized: ActivityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, ActivityKind::ShortBreak);
        }
    }

    // ------------------------------------------------------------------------
    // Settings Tests
    // ------------------------------------------------------------------------

    mod settings_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let settings = Settings::default();
            assert_eq!(settings.work_period, 1500);
            assert_eq!(settings.short_rest_period, 300);
            assert_eq!(settings.long_rest_period, 1500);
            assert_eq!(
                settings.end_activity_action,
                "mplayer {base}/assets/alarm.mp3"
            );
        }

        #[test]
        fn test_builder_pattern() {
            let settings = Settings::default()
                .with_work_period(600)
                .with_short_rest_period(120)
                .with_long_rest_period(900)
                .with_end_activity_action("afplay {base}/ding.wav");

            assert_eq!(settings.work_period, 600);
            assert_eq!(settings.short_rest_period, 120);
            assert_eq!(settings.long_rest_period, 900);
            assert_eq!(settings.end_activity_action, "afplay {base}/ding.wav");
        }

        #[test]
        fn test_period_for() {
            let settings = Settings::default();
            assert_eq!(settings.period_for(ActivityKind::Work), 1500);
            assert_eq!(settings.period_for(ActivityKind::ShortBreak), 300);
            assert_eq!(settings.period_for(ActivityKind::LongBreak), 1500);
        }

        #[test]
        fn test_validate_success() {
            assert!(Settings::default().validate().is_ok());
        }

        #[test]
        fn test_validate_boundary_values() {
            let settings = Settings::default()
                .with_work_period(1)
                .with_short_rest_period(1)
                .with_long_rest_period(1);
            assert!(settings.validate().is_ok());

            let settings = Settings::default()
                .with_work_period(86_400)
                .with_short_rest_period(86_400)
                .with_long_rest_period(86_400);
            assert!(settings.validate().is_ok());
        }

        #[test]
        fn test_validate_work_period_out_of_range() {
            assert!(Settings::default().with_work_period(0).validate().is_err());
            assert!(Settings::default()
                .with_work_period(86_401)
                .validate()
                .is_err());
        }

        #[test]
        fn test_validate_short_rest_period_out_of_range() {
            assert!(Settings::default()
                .with_short_rest_period(0)
                .validate()
                .is_err());
        }

        #[test]
        fn test_validate_long_rest_period_out_of_range() {
            assert!(Settings::default()
                .with_long_rest_period(0)
                .validate()
                .is_err());
        }

        #[test]
        fn test_serialize_deserialize() {
            let settings = Settings::default().with_work_period(900);
            let json = serde_json::to_string(&settings).unwrap();
            let deserialized: Settings = serde_json::from_str(&json).unwrap();
            assert_eq!(settings, deserialized);
        }
    }
}
