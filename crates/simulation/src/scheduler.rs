//! Repeating-timer scheduler that drives the simulators.
//!
//! Jobs are registered with [`Scheduler::every`], which returns a
//! [`CancelToken`]; [`Scheduler::cancel`] removes the job again. A job's
//! callback is a registered one-shot system (`World::register_system`), so
//! simulators stay plain resources and never know which timer drives them.
//!
//! [`run_due_jobs`] advances every timer by the fixed-step delta and queues
//! each due callback once per elapsed period via `Commands::run_system`.

use std::time::Duration;

use bevy::ecs::system::SystemId;
use bevy::prelude::*;

/// Shortest period a job may have. A zero-length repeating timer would
/// report an unbounded number of completions per step.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle returned by [`Scheduler::every`]; pass to [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelToken(u64);

struct ScheduledJob {
    token: CancelToken,
    timer: Timer,
    callback: SystemId,
}

#[derive(Resource, Default)]
pub struct Scheduler {
    jobs: Vec<ScheduledJob>,
    next_token: u64,
}

impl Scheduler {
    /// Run `callback` once every `interval`, starting one full interval from now.
    pub fn every(&mut self, interval: Duration, callback: SystemId) -> CancelToken {
        let token = CancelToken(self.next_token);
        self.next_token += 1;
        self.jobs.push(ScheduledJob {
            token,
            timer: Timer::new(interval.max(MIN_INTERVAL), TimerMode::Repeating),
            callback,
        });
        token
    }

    /// Stop a job. Returns `false` if the token is unknown or already cancelled.
    pub fn cancel(&mut self, token: CancelToken) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.token != token);
        self.jobs.len() != before
    }

    pub fn is_scheduled(&self, token: CancelToken) -> bool {
        self.jobs.iter().any(|job| job.token == token)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Advance all timers by `delta` and return the callbacks that came due,
    /// in registration order. A job whose period elapsed several times within
    /// `delta` appears that many times.
    pub fn advance(&mut self, delta: Duration) -> Vec<SystemId> {
        let mut due = Vec::new();
        for job in &mut self.jobs {
            job.timer.tick(delta);
            for _ in 0..job.timer.times_finished_this_tick() {
                due.push(job.callback);
            }
        }
        due
    }
}

/// Advances the scheduler by the fixed-step delta and queues due callbacks.
pub fn run_due_jobs(time: Res<Time>, mut scheduler: ResMut<Scheduler>, mut commands: Commands) {
    for callback in scheduler.advance(time.delta()) {
        commands.run_system(callback);
    }
}
