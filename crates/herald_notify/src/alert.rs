//! Local alert types.

use derive_getters::Getters;
use herald_core::{PostId, ScheduledPost};

/// Kind of local alert raised for a due post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The post is due within the lookahead window.
    Reminder {
        /// Whole minutes remaining, rounded up.
        minutes_left: i64,
    },
    /// The post's scheduled instant has just passed.
    Overdue,
}

/// A local alert for a scheduled post.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Alert {
    /// Reminder or overdue.
    kind: AlertKind,
    /// Post the alert refers to.
    post_id: PostId,
    /// Short headline.
    title: String,
    /// Human-facing message body.
    body: String,
}

impl Alert {
    /// Build a reminder alert for a post due in `minutes_left` minutes.
    pub fn reminder(post: &ScheduledPost, minutes_left: i64) -> Self {
        let plural = if minutes_left == 1 { "" } else { "s" };
        Self {
            kind: AlertKind::Reminder { minutes_left },
            post_id: post.id().clone(),
            title: "Post reminder".to_string(),
            body: format!(
                "\"{}\" is scheduled for {} in {} minute{}!",
                display_title(post),
                post.platform_name(),
                minutes_left,
                plural
            ),
        }
    }

    /// Build an overdue alert for a post whose due moment has passed.
    pub fn overdue(post: &ScheduledPost) -> Self {
        Self {
            kind: AlertKind::Overdue,
            post_id: post.id().clone(),
            title: "Post overdue".to_string(),
            body: format!(
                "\"{}\" was scheduled for {} and is now overdue!",
                display_title(post),
                post.platform_name()
            ),
        }
    }

    /// Stable tag for OS-level duplicate suppression.
    pub fn tag(&self) -> String {
        format!("post-{}", self.post_id)
    }
}

fn display_title(post: &ScheduledPost) -> &str {
    post.title().as_deref().unwrap_or("Your post")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use herald_core::{PostStatus, ScheduledPostBuilder};

    fn post(title: Option<&str>) -> ScheduledPost {
        let mut builder = ScheduledPostBuilder::default();
        builder
            .id("p1")
            .content("body")
            .platform_name("Twitter")
            .scheduled_at(Utc::now())
            .status(PostStatus::Scheduled);
        if let Some(title) = title {
            builder.title(Some(title.to_string()));
        }
        builder.build().unwrap()
    }

    #[test]
    fn reminder_message_names_title_platform_and_minutes() {
        let alert = Alert::reminder(&post(Some("Launch")), 3);
        assert_eq!(
            alert.body(),
            "\"Launch\" is scheduled for Twitter in 3 minutes!"
        );
    }

    #[test]
    fn reminder_message_singular_minute() {
        let alert = Alert::reminder(&post(Some("Launch")), 1);
        assert!(alert.body().ends_with("in 1 minute!"));
    }

    #[test]
    fn untitled_posts_fall_back_to_a_generic_title() {
        let alert = Alert::overdue(&post(None));
        assert_eq!(
            alert.body(),
            "\"Your post\" was scheduled for Twitter and is now overdue!"
        );
    }

    #[test]
    fn tag_embeds_the_post_id() {
        let alert = Alert::overdue(&post(None));
        assert_eq!(alert.tag(), "post-p1");
    }
}
