use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

use super::seed::seed_categories;
use super::types::{Metric, MetricCategory, MetricStatus};

/// The result of one feed tick that actually moved a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricUpdate {
    pub category: String,
    pub label: String,
    pub previous_value: String,
    pub value: String,
    pub previous_status: MetricStatus,
    pub status: MetricStatus,
}

impl MetricUpdate {
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.status
    }

    /// True when the status moved to a more severe level.
    pub fn escalated(&self) -> bool {
        self.status > self.previous_status
    }
}

/// Simulated real-time monitoring feed.
///
/// Each [`tick`](Self::tick) picks one category and one metric uniformly at
/// random and moves the metric's value along a bounded random walk. Only
/// labels with a [`MetricKind`](super::MetricKind) move; the rest are static
/// readings that can still be picked.
#[derive(Resource, Debug, Clone)]
pub struct MonitoringSimulator {
    categories: Vec<MetricCategory>,
    ticks: u64,
}

impl Default for MonitoringSimulator {
    fn default() -> Self {
        Self::new(seed_categories())
    }
}

impl MonitoringSimulator {
    pub fn new(categories: Vec<MetricCategory>) -> Self {
        Self {
            categories,
            ticks: 0,
        }
    }

    pub fn categories(&self) -> &[MetricCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&MetricCategory> {
        self.categories.iter().find(|c| c.category == name)
    }

    pub fn metric(&self, category: &str, label: &str) -> Option<&Metric> {
        self.category(category).and_then(|c| c.metric(label))
    }

    /// Number of ticks run so far, including ones that changed nothing.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn count_with_status(&self, status: MetricStatus) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.metrics)
            .filter(|m| m.status == status)
            .count()
    }

    /// Advance the feed by one step.
    ///
    /// Returns the update when the chosen metric has a random-walk rule and a
    /// parseable value; `None` otherwise (empty feed, static label, or a
    /// value without a leading number).
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MetricUpdate> {
        self.ticks += 1;

        if self.categories.is_empty() {
            return None;
        }
        let category_idx = rng.gen_range(0..self.categories.len());
        let category = &mut self.categories[category_idx];
        if category.metrics.is_empty() {
            return None;
        }
        let metric_idx = rng.gen_range(0..category.metrics.len());
        let metric = &mut category.metrics[metric_idx];

        let kind = metric.kind()?;
        let Some(current) = metric.numeric_value() else {
            warn!(
                "Monitoring: {} / {} has no numeric value ({:?}), leaving unchanged",
                category.category, metric.label, metric.value
            );
            return None;
        };

        let next = kind.perturb(current, rng.gen::<f64>());
        let previous_value = std::mem::replace(&mut metric.value, kind.format_value(next));
        let previous_status = std::mem::replace(&mut metric.status, kind.status_for(next));
        Some(MetricUpdate {
            category: category.category.clone(),
            label: metric.label.clone(),
            previous_value,
            value: metric.value.clone(),
            previous_status,
            status: metric.status,
        })
    }
}
