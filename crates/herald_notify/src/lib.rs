//! Due-post notification poller for Herald.
//!
//! Periodically queries upcoming scheduled posts for the signed-in
//! identity and raises local alerts at most once per post per session,
//! without requiring a server-push channel.

#![warn(missing_docs)]

mod alert;
mod notified;
mod poller;
mod schedule;
mod sink;

pub use alert::{Alert, AlertKind};
pub use notified::NotifiedSet;
pub use poller::{
    DEFAULT_POLL_INTERVAL_SECONDS, NotificationPoller, NotificationService, PollerHandle,
};
pub use schedule::{PollSchedule, Schedule, ScheduleCheck};
pub use sink::{AlertSink, BellSink, CompositeAlertSink, DesktopNotificationSink, ToastSink};
