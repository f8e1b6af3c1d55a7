//! Due-post notification poller.

use crate::{Alert, AlertSink, NotifiedSet, PollSchedule, Schedule};
use chrono::{Duration, Utc};
use herald_core::{ScheduledPost, UserId};
use herald_error::HeraldResult;
use herald_store::PostStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Default seconds between poll ticks.
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 60;

/// Minutes ahead of now a post counts as due soon.
const LOOKAHEAD_MINUTES: i64 = 5;

/// Seconds past due during which an overdue alert is still raised.
///
/// The window is only one poll interval wide: a post whose due moment
/// is missed by more than one tick never gets an overdue alert.
const OVERDUE_WINDOW_SECONDS: i64 = 60;

/// Polls the post store for one identity and raises local alerts.
///
/// Each post triggers at most one alert per session, tracked in the
/// poller's [`NotifiedSet`].
pub struct NotificationPoller {
    identity: UserId,
    store: Arc<dyn PostStore>,
    sink: Arc<dyn AlertSink>,
    notified: NotifiedSet,
}

impl NotificationPoller {
    /// Create a poller for the given signed-in identity.
    pub fn new(identity: UserId, store: Arc<dyn PostStore>, sink: Arc<dyn AlertSink>) -> Self {
        Self {
            identity,
            store,
            sink,
            notified: NotifiedSet::new(),
        }
    }

    /// The identity this poller watches.
    pub fn identity(&self) -> &UserId {
        &self.identity
    }

    /// Posts already alerted this session.
    pub fn notified(&self) -> &NotifiedSet {
        &self.notified
    }

    /// Scheduled posts for the identity due within the lookahead window.
    pub async fn check_due_posts(&self) -> HeraldResult<Vec<ScheduledPost>> {
        let now = Utc::now();
        self.store
            .due_posts(&self.identity, now, now + Duration::minutes(LOOKAHEAD_MINUTES))
            .await
    }

    /// Run one poll tick.
    ///
    /// A store failure is logged and the tick abandoned; the poller
    /// neither retries nor backs off, it waits for the next tick.
    #[instrument(skip(self), fields(identity = %self.identity))]
    pub async fn tick(&mut self) {
        let posts = match self.check_due_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                error!(error = %e, "Error checking scheduled posts");
                return;
            }
        };

        debug!(candidates = posts.len(), "Checked due posts");
        for post in &posts {
            self.consider(post);
        }
    }

    /// Decide whether a candidate warrants an alert right now.
    ///
    /// The due comparison happens at processing time, so a post fetched
    /// just inside the window can already be overdue here. Posts can be
    /// marked published concurrently by the pipeline; status is not
    /// re-checked before alerting.
    fn consider(&mut self, post: &ScheduledPost) {
        if self.notified.contains(post.id()) {
            return;
        }

        let time_until_due = *post.scheduled_at() - Utc::now();
        if time_until_due > Duration::zero()
            && time_until_due <= Duration::minutes(LOOKAHEAD_MINUTES)
        {
            self.raise(Alert::reminder(post, minutes_remaining(time_until_due)));
        } else if time_until_due <= Duration::zero()
            && time_until_due > -Duration::seconds(OVERDUE_WINDOW_SECONDS)
        {
            self.raise(Alert::overdue(post));
        }
    }

    fn raise(&mut self, alert: Alert) {
        debug!(post_id = %alert.post_id(), "Raising alert");
        if let Err(e) = self.sink.deliver(&alert) {
            warn!(error = %e, "Alert delivery failed");
        }
        self.notified.insert(alert.post_id().clone());
    }
}

/// Whole minutes remaining, rounded up.
fn minutes_remaining(time_until_due: Duration) -> i64 {
    (time_until_due.num_milliseconds() + 59_999) / 60_000
}

/// Handle on a running poll loop.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Cancel the poll loop. In-flight query results are discarded.
    pub fn stop(self) {
        self.task.abort();
    }

    /// Whether the loop has exited on its own.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Owns the lifecycle of the notification poller.
///
/// `start` spawns a repeating poll task for a signed-in identity with
/// an immediate first tick; starting again (for a new identity or
/// after sign-out) replaces the task and its NotifiedSet, so a post
/// alerted under one identity can alert again under the next.
pub struct NotificationService {
    store: Arc<dyn PostStore>,
    sink: Arc<dyn AlertSink>,
    schedule: PollSchedule,
    handle: Option<PollerHandle>,
}

impl NotificationService {
    /// Create a service polling on the default interval.
    pub fn new(store: Arc<dyn PostStore>, sink: Arc<dyn AlertSink>) -> Self {
        Self {
            store,
            sink,
            schedule: PollSchedule::default(),
            handle: None,
        }
    }

    /// Replace the poll schedule.
    pub fn with_schedule(mut self, schedule: PollSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Begin polling for the given identity. No-op when the identity is
    /// absent, beyond stopping any running poller.
    #[instrument(skip(self))]
    pub fn start(&mut self, identity: Option<UserId>) {
        self.stop();

        let Some(identity) = identity else {
            debug!("No signed-in identity; poller not started");
            return;
        };

        info!(identity = %identity, interval_seconds = self.schedule.seconds(), "Starting notification poller");
        let mut poller =
            NotificationPoller::new(identity, Arc::clone(&self.store), Arc::clone(&self.sink));
        let schedule = self.schedule;
        let task = tokio::spawn(async move {
            let mut last_run = None;
            loop {
                let check = schedule.check(last_run);
                if check.should_run {
                    poller.tick().await;
                    last_run = Some(Utc::now());
                }
                match check.next_run {
                    Some(next) => {
                        let wait = (next - Utc::now()).to_std().unwrap_or_default();
                        tokio::time::sleep(wait).await;
                    }
                    None => break,
                }
            }
        });
        self.handle = Some(PollerHandle { task });
    }

    /// Cancel polling, if running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            info!("Stopping notification poller");
            handle.stop();
        }
    }

    /// Whether a poll task is currently running.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for NotificationService {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_round_up() {
        assert_eq!(minutes_remaining(Duration::milliseconds(500)), 1);
        assert_eq!(minutes_remaining(Duration::seconds(60)), 1);
        assert_eq!(minutes_remaining(Duration::seconds(61)), 2);
        assert_eq!(minutes_remaining(Duration::seconds(270)), 5);
    }
}
