//! Alert delivery sinks.
//!
//! Delivery is a plain side effect, not suspend-capable: sinks either
//! hand the alert to an already-running facility (terminal, OS
//! notification daemon, in-app channel) or fail. The composite sink
//! encodes the cascade contract: the audio cue and OS notification are
//! best-effort, the in-app message is the guaranteed-visible fallback.

use crate::Alert;
use herald_error::{AlertError, HeraldResult};
use std::collections::HashSet;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A destination for local alerts.
pub trait AlertSink: Send + Sync {
    /// Deliver one alert.
    fn deliver(&self, alert: &Alert) -> HeraldResult<()>;

    /// Short sink name for log lines.
    fn name(&self) -> &'static str;
}

/// Fan-out sink implementing the delivery cascade.
///
/// Every child sink is attempted; failures are logged and swallowed,
/// never propagated. This is the documented contract for the audio
/// cue, and the in-app channel is expected not to fail in practice.
#[derive(Default)]
pub struct CompositeAlertSink {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl CompositeAlertSink {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child sink.
    pub fn with(mut self, sink: Box<dyn AlertSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl AlertSink for CompositeAlertSink {
    fn deliver(&self, alert: &Alert) -> HeraldResult<()> {
        for sink in &self.sinks {
            if let Err(e) = sink.deliver(alert) {
                warn!(sink = sink.name(), error = %e, "Alert delivery failed");
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "composite"
    }
}

/// Audio cue sink: rings the terminal bell twice.
///
/// Fire-and-forget by contract; callers never see its failures once it
/// sits behind [`CompositeAlertSink`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BellSink;

impl BellSink {
    /// Create a bell sink.
    pub fn new() -> Self {
        Self
    }
}

impl AlertSink for BellSink {
    fn deliver(&self, _alert: &Alert) -> HeraldResult<()> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| AlertError::new(format!("Could not play notification sound: {}", e)))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bell"
    }
}

/// OS-level notification sink.
///
/// Delivers only when permission was granted up front, and suppresses
/// duplicate notifications for the same post tag the way the OS
/// facility would. Delivery shells out to the host notification
/// command and does not wait for it.
pub struct DesktopNotificationSink {
    permission_granted: bool,
    delivered_tags: Mutex<HashSet<String>>,
}

impl DesktopNotificationSink {
    /// Create a sink with the given permission state.
    pub fn new(permission_granted: bool) -> Self {
        Self {
            permission_granted,
            delivered_tags: Mutex::new(HashSet::new()),
        }
    }

    /// Whether OS notifications are permitted.
    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }
}

impl AlertSink for DesktopNotificationSink {
    fn deliver(&self, alert: &Alert) -> HeraldResult<()> {
        if !self.permission_granted {
            debug!("Notification permission not granted; skipping OS notification");
            return Ok(());
        }

        let mut tags = self
            .delivered_tags
            .lock()
            .map_err(|_| AlertError::new("Delivered-tag state poisoned"))?;
        if !tags.insert(alert.tag()) {
            debug!(tag = %alert.tag(), "Duplicate OS notification suppressed");
            return Ok(());
        }
        drop(tags);

        Command::new("notify-send")
            .arg(alert.title())
            .arg(alert.body())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AlertError::new(format!("Could not raise OS notification: {}", e)))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}

/// In-app transient message sink.
///
/// Pushes alerts onto an unbounded channel for whatever surface is
/// listening. This is the guaranteed-visible fallback, independent of
/// OS permission state.
#[derive(Debug, Clone)]
pub struct ToastSink {
    sender: mpsc::UnboundedSender<Alert>,
}

impl ToastSink {
    /// Create a toast sink and the receiver its alerts arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl AlertSink for ToastSink {
    fn deliver(&self, alert: &Alert) -> HeraldResult<()> {
        self.sender
            .send(alert.clone())
            .map_err(|_| AlertError::new("In-app message channel closed").into())
    }

    fn name(&self) -> &'static str {
        "toast"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use herald_core::{PostStatus, ScheduledPostBuilder};

    fn alert() -> Alert {
        let post = ScheduledPostBuilder::default()
            .id("p1")
            .content("body")
            .platform_name("Twitter")
            .scheduled_at(Utc::now())
            .status(PostStatus::Scheduled)
            .build()
            .unwrap();
        Alert::overdue(&post)
    }

    struct FailingSink;

    impl AlertSink for FailingSink {
        fn deliver(&self, _alert: &Alert) -> HeraldResult<()> {
            Err(AlertError::new("boom").into())
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn composite_swallows_child_failures() {
        let (toast, mut received) = ToastSink::channel();
        let sink = CompositeAlertSink::new()
            .with(Box::new(FailingSink))
            .with(Box::new(toast));
        assert!(sink.deliver(&alert()).is_ok());
        assert_eq!(received.try_recv().unwrap(), alert());
    }

    #[test]
    fn desktop_sink_skips_without_permission() {
        let sink = DesktopNotificationSink::new(false);
        assert!(sink.deliver(&alert()).is_ok());
        assert!(sink.delivered_tags.lock().unwrap().is_empty());
    }

    #[test]
    fn desktop_sink_records_tags_once() {
        let sink = DesktopNotificationSink::new(true);
        // First delivery records the tag even if the host command is
        // unavailable in the test environment.
        let _ = sink.deliver(&alert());
        let _ = sink.deliver(&alert());
        assert_eq!(sink.delivered_tags.lock().unwrap().len(), 1);
    }

    #[test]
    fn toast_sink_errors_once_receiver_is_gone() {
        let (toast, received) = ToastSink::channel();
        drop(received);
        assert!(toast.deliver(&alert()).is_err());
    }
}
