//! HTML for the info box

use crate::resume::{Contact, ResumeEntry};
use crate::sim::OverlayContent;

/// Escape text for insertion into HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn render_entry(entry: &ResumeEntry) -> String {
    let mut html = format!(
        "<h2>{} @ {}</h2><p><strong>{}</strong></p>",
        escape_html(&entry.title),
        escape_html(&entry.company),
        escape_html(&entry.duration)
    );
    for line in &entry.achievements {
        html.push_str("<p>");
        html.push_str(&escape_html(line));
        html.push_str("</p>");
    }
    html
}

fn render_summary(summary: &str, contact: &Contact) -> String {
    format!(
        "<h2>Thank you for playing!</h2><p>{}</p><p>Contact: {} | {}</p>",
        escape_html(summary),
        escape_html(&contact.email),
        escape_html(&contact.phone)
    )
}

/// Markup for overlay content (empty for `None`)
pub fn render_overlay(content: &OverlayContent) -> String {
    match content {
        OverlayContent::None => String::new(),
        OverlayContent::EntryDetail(entry) => render_entry(entry),
        OverlayContent::Summary { summary, contact } => render_summary(summary, contact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("R&D <team>"), "R&amp;D &lt;team&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_entry_markup() {
        let entry = ResumeEntry {
            title: "Engineer".into(),
            company: "Acme".into(),
            duration: "2019 - 2023".into(),
            achievements: vec!["Shipped X".into(), "Cut costs <50%".into()],
        };
        let html = render_overlay(&OverlayContent::EntryDetail(entry));
        assert_eq!(
            html,
            "<h2>Engineer @ Acme</h2><p><strong>2019 - 2023</strong></p>\
             <p>Shipped X</p><p>Cut costs &lt;50%</p>"
        );
    }

    #[test]
    fn test_summary_markup() {
        let content = OverlayContent::Summary {
            summary: "Builder.".into(),
            contact: Contact {
                email: "me@example.com".into(),
                phone: "555-0100".into(),
            },
        };
        let html = render_overlay(&content);
        assert!(html.starts_with("<h2>Thank you for playing!</h2>"));
        assert!(html.ends_with("<p>Contact: me@example.com | 555-0100</p>"));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(render_overlay(&OverlayContent::None).is_empty());
    }
}
