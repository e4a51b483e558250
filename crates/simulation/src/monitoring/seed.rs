use super::types::{Metric, MetricCategory, MetricStatus};

/// Startup readings for every monitored category.
pub fn seed_categories() -> Vec<MetricCategory> {
    use MetricStatus::{Alert, Normal, Warning};

    vec![
        MetricCategory::new(
            "Weather Data",
            vec![
                Metric::new("Rainfall", "45mm/hr", Warning),
                Metric::new("Wind Speed", "65 km/h", Normal),
                Metric::new("Temperature", "28°C", Normal),
            ],
        ),
        MetricCategory::new(
            "Geological",
            vec![
                Metric::new("Seismic Activity", "2.1 magnitude", Normal),
                Metric::new("Volcanic Activity", "Low", Normal),
                Metric::new("Ground Movement", "Stable", Normal),
            ],
        ),
        MetricCategory::new(
            "Hydrological",
            vec![
                Metric::new("River Level", "8.2m", Warning),
                Metric::new("Dam Capacity", "78%", Normal),
                Metric::new("Groundwater", "Normal", Normal),
            ],
        ),
        MetricCategory::new(
            "Satellite Data",
            vec![
                Metric::new("Fire Hotspots", "3 detected", Alert),
                Metric::new("Storm Tracking", "2 systems", Warning),
                Metric::new("Cloud Cover", "65%", Normal),
            ],
        ),
    ]
}
