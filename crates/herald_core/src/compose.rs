//! Final post text composition.

/// Compose the final text for a publish attempt.
///
/// The body is followed by a blank line and the hashtags rendered as a
/// space-joined `#tag` list, when any are present. Hashtag order is
/// preserved.
pub fn compose_text(content: &str, hashtags: &[String]) -> String {
    if hashtags.is_empty() {
        return content.to_string();
    }
    let tags = hashtags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{content}\n\n{tags}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_hashtags_after_a_blank_line() {
        let text = compose_text(
            "Launch day",
            &["rust".to_string(), "opensource".to_string()],
        );
        assert_eq!(text, "Launch day\n\n#rust #opensource");
    }

    #[test]
    fn leaves_content_untouched_without_hashtags() {
        assert_eq!(compose_text("Launch day", &[]), "Launch day");
    }

    #[test]
    fn preserves_hashtag_order() {
        let text = compose_text("x", &["b".to_string(), "a".to_string()]);
        assert!(text.ends_with("#b #a"));
    }
}
