/// Seconds between monitoring feed updates.
pub const MONITORING_INTERVAL_SECS: f32 = 5.0;
/// Seconds between rescue team position updates.
pub const TEAM_INTERVAL_SECS: f32 = 10.0;

/// Seed used when neither the config file nor the environment provides one.
pub const DEFAULT_SEED: u64 = 42;

/// Fixed simulation timestep (10 Hz). Scheduler timers advance by this much
/// per `FixedUpdate` run.
pub const FIXED_TIMESTEP_SECS: f64 = 0.1;

// Random-walk spans. A tick moves a value by `(u - 0.5) * span`, so the
// largest single step is half the span.
pub const RAINFALL_STEP_SPAN: f64 = 10.0;
pub const WIND_SPEED_STEP_SPAN: f64 = 15.0;
pub const RIVER_LEVEL_STEP_SPAN: f64 = 0.5;

/// Rainfall thresholds in mm/hr.
pub const RAINFALL_WARNING: f64 = 30.0;
pub const RAINFALL_ALERT: f64 = 50.0;

/// Wind speed thresholds in km/h.
pub const WIND_SPEED_WARNING: f64 = 60.0;
pub const WIND_SPEED_ALERT: f64 = 80.0;

/// River level thresholds in metres.
pub const RIVER_LEVEL_WARNING: f64 = 7.5;
pub const RIVER_LEVEL_ALERT: f64 = 9.0;
