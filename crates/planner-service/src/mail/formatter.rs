//! Mail message formatting.

use planner_core::traits::MailMessage;
use planner_entity::share::ContentKind;

/// Formats outbound messages for common events.
pub struct MailFormatter;

impl MailFormatter {
    /// Formats the message telling `to` that content was shared with them.
    pub fn share_invitation(kind: ContentKind, share_url: &str, to: &str) -> MailMessage {
        let headline = format!("Someone shared a {} with you", kind.display_name());
        let url = escape_html(share_url);
        let html = format!(
            "<h2>{headline}</h2>\n\
             <p>Click the link below to view:</p>\n\
             <a href=\"{url}\">{url}</a>\n\
             <p>This link may expire. Please check it soon.</p>"
        );

        MailMessage {
            to: to.to_string(),
            subject: headline,
            html,
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_uses_display_name() {
        let msg = MailFormatter::share_invitation(
            ContentKind::Event,
            "http://localhost:3000/share/abc",
            "a@x.com",
        );
        assert_eq!(msg.subject, "Someone shared a Calendar Event with you");
        assert_eq!(msg.to, "a@x.com");
        assert!(msg.html.contains("href=\"http://localhost:3000/share/abc\""));
    }

    #[test]
    fn test_url_is_escaped() {
        let msg = MailFormatter::share_invitation(ContentKind::Note, "http://x/?a=1&b=\"2\"", "a@x.com");
        assert!(msg.html.contains("a=1&amp;b=&quot;2&quot;"));
    }
}
