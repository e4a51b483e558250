use serde::{Deserialize, Serialize};

use crate::config::{
    RAINFALL_ALERT, RAINFALL_STEP_SPAN, RAINFALL_WARNING, RIVER_LEVEL_ALERT,
    RIVER_LEVEL_STEP_SPAN, RIVER_LEVEL_WARNING, WIND_SPEED_ALERT, WIND_SPEED_STEP_SPAN,
    WIND_SPEED_WARNING,
};

// =============================================================================
// Status
// =============================================================================

/// Derived health of a metric. Ordered by severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStatus {
    #[default]
    Normal,
    Warning,
    Alert,
}

impl MetricStatus {
    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Normal => "normal",
            MetricStatus::Warning => "warning",
            MetricStatus::Alert => "alert",
        }
    }
}

// =============================================================================
// Metric / MetricCategory
// =============================================================================

/// One labeled observation. `value` keeps its unit in the string, the way a
/// dashboard card displays it (`"45mm/hr"`, `"8.2m"`, `"Stable"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub status: MetricStatus,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, status: MetricStatus) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            status,
        }
    }

    /// The leading number of `value`, if it starts with one.
    pub fn numeric_value(&self) -> Option<f64> {
        leading_number(&self.value)
    }

    /// The random-walk rule for this metric, if its label has one.
    pub fn kind(&self) -> Option<MetricKind> {
        MetricKind::from_label(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCategory {
    pub category: String,
    pub metrics: Vec<Metric>,
}

impl MetricCategory {
    pub fn new(category: impl Into<String>, metrics: Vec<Metric>) -> Self {
        Self {
            category: category.into(),
            metrics,
        }
    }

    pub fn metric(&self, label: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.label == label)
    }
}

// =============================================================================
// MetricKind: per-label random walk and thresholds
// =============================================================================

/// Metrics the feed simulates. Every other label is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Rainfall,
    WindSpeed,
    RiverLevel,
}

impl MetricKind {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Rainfall" => Some(MetricKind::Rainfall),
            "Wind Speed" => Some(MetricKind::WindSpeed),
            "River Level" => Some(MetricKind::RiverLevel),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Rainfall => "Rainfall",
            MetricKind::WindSpeed => "Wind Speed",
            MetricKind::RiverLevel => "River Level",
        }
    }

    /// Full width of one random-walk step; a step lies in `[-span/2, span/2)`.
    pub fn step_span(self) -> f64 {
        match self {
            MetricKind::Rainfall => RAINFALL_STEP_SPAN,
            MetricKind::WindSpeed => WIND_SPEED_STEP_SPAN,
            MetricKind::RiverLevel => RIVER_LEVEL_STEP_SPAN,
        }
    }

    /// `(warning, alert)` thresholds. Both are exclusive lower bounds.
    pub fn thresholds(self) -> (f64, f64) {
        match self {
            MetricKind::Rainfall => (RAINFALL_WARNING, RAINFALL_ALERT),
            MetricKind::WindSpeed => (WIND_SPEED_WARNING, WIND_SPEED_ALERT),
            MetricKind::RiverLevel => (RIVER_LEVEL_WARNING, RIVER_LEVEL_ALERT),
        }
    }

    pub fn status_for(self, value: f64) -> MetricStatus {
        let (warning, alert) = self.thresholds();
        if value > alert {
            MetricStatus::Alert
        } else if value > warning {
            MetricStatus::Warning
        } else {
            MetricStatus::Normal
        }
    }

    /// Apply one step of the walk. `unit` is a uniform sample in `[0, 1)`.
    /// The result never goes below zero.
    pub fn perturb(self, current: f64, unit: f64) -> f64 {
        (current + (unit - 0.5) * self.step_span()).max(0.0)
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            MetricKind::Rainfall => format!("{value:.0}mm/hr"),
            MetricKind::WindSpeed => format!("{value:.0} km/h"),
            MetricKind::RiverLevel => format!("{value:.1}m"),
        }
    }
}

/// Parse the decimal number a display string starts with, ignoring leading
/// whitespace and any trailing unit (`"65 km/h"` → 65.0). Returns `None` when
/// the string does not start with a digit, sign or decimal point followed by
/// digits.
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}
