//! View lifecycle: which simulators are running.
//!
//! A simulator only ticks while the dashboard view that shows it is mounted.
//! Feature plugins attach their tick system to a view with
//! [`AppViewFeedExt::register_view_feed`]; hosts send [`ViewLifecycle`]
//! events when views appear and disappear. Mounting schedules the feed's
//! repeating job, unmounting cancels it.

use std::collections::HashMap;
use std::time::Duration;

use bevy::ecs::system::SystemId;
use bevy::prelude::*;

use crate::scheduler::{CancelToken, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardView {
    /// The real-time monitoring cards (driven by the monitoring feed).
    Monitoring,
    /// The incident map with rescue team markers (driven by team movement).
    IncidentBoard,
}

impl DashboardView {
    pub fn name(self) -> &'static str {
        match self {
            DashboardView::Monitoring => "Monitoring",
            DashboardView::IncidentBoard => "Incident Board",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Mounted,
    Unmounted,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLifecycle {
    pub view: DashboardView,
    pub phase: ViewPhase,
}

impl ViewLifecycle {
    pub fn mounted(view: DashboardView) -> Self {
        Self {
            view,
            phase: ViewPhase::Mounted,
        }
    }

    pub fn unmounted(view: DashboardView) -> Self {
        Self {
            view,
            phase: ViewPhase::Unmounted,
        }
    }
}

struct ViewFeed {
    callback: SystemId,
    interval: Duration,
    token: Option<CancelToken>,
}

/// Registered feeds and the job token of every mounted view.
#[derive(Resource, Default)]
pub struct ViewFeeds {
    feeds: HashMap<DashboardView, ViewFeed>,
}

impl ViewFeeds {
    pub fn register(&mut self, view: DashboardView, interval: Duration, callback: SystemId) {
        if self.feeds.contains_key(&view) {
            warn!("ViewFeeds: {} already has a feed, ignoring", view.name());
            return;
        }
        self.feeds.insert(
            view,
            ViewFeed {
                callback,
                interval,
                token: None,
            },
        );
    }

    pub fn is_mounted(&self, view: DashboardView) -> bool {
        self.feeds
            .get(&view)
            .is_some_and(|feed| feed.token.is_some())
    }

    pub fn interval(&self, view: DashboardView) -> Option<Duration> {
        self.feeds.get(&view).map(|feed| feed.interval)
    }

    /// Start the view's feed. Returns `false` if the view has no feed or is
    /// already mounted.
    pub fn mount(&mut self, view: DashboardView, scheduler: &mut Scheduler) -> bool {
        let Some(feed) = self.feeds.get_mut(&view) else {
            warn!("ViewFeeds: no feed registered for {}", view.name());
            return false;
        };
        if feed.token.is_some() {
            return false;
        }
        feed.token = Some(scheduler.every(feed.interval, feed.callback));
        true
    }

    /// Stop the view's feed. Returns `false` if it was not running.
    pub fn unmount(&mut self, view: DashboardView, scheduler: &mut Scheduler) -> bool {
        let Some(token) = self.feeds.get_mut(&view).and_then(|feed| feed.token.take()) else {
            return false;
        };
        scheduler.cancel(token)
    }
}

/// Applies mount/unmount requests to the scheduler.
pub fn handle_view_lifecycle(
    mut events: EventReader<ViewLifecycle>,
    mut feeds: ResMut<ViewFeeds>,
    mut scheduler: ResMut<Scheduler>,
) {
    for event in events.read() {
        match event.phase {
            ViewPhase::Mounted => {
                if feeds.mount(event.view, &mut scheduler) {
                    info!("{} feed started", event.view.name());
                }
            }
            ViewPhase::Unmounted => {
                if feeds.unmount(event.view, &mut scheduler) {
                    info!("{} feed stopped", event.view.name());
                }
            }
        }
    }
}

/// Lets feature plugins attach a tick system to a dashboard view.
pub trait AppViewFeedExt {
    fn register_view_feed<M>(
        &mut self,
        view: DashboardView,
        interval: Duration,
        system: impl IntoSystem<(), (), M> + 'static,
    ) -> &mut Self;
}

impl AppViewFeedExt for App {
    fn register_view_feed<M>(
        &mut self,
        view: DashboardView,
        interval: Duration,
        system: impl IntoSystem<(), (), M> + 'static,
    ) -> &mut Self {
        let callback = self.world_mut().register_system(system);
        self.init_resource::<ViewFeeds>();
        self.world_mut()
            .resource_mut::<ViewFeeds>()
            .register(view, interval, callback);
        self
    }
}
