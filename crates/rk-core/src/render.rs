//! Display helpers at the presentation boundary.

use std::sync::LazyLock;

use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::ClassifiedPost;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// Label shown when a post has no known activity.
pub const NOT_APPLICABLE: &str = "(n/a)";

/// Activity label for a table row.
pub fn activity_label(post: &ClassifiedPost) -> &'static str {
    let c = &post.classification;
    if c.is_completed() && c.activity_type.is_known() {
        c.activity_type.as_str()
    } else {
        NOT_APPLICABLE
    }
}

/// Post text as HTML with every URL turned into a link.
pub fn linkify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for url in URL_RE.find_iter(text) {
        out.push_str(&encode_text(&text[last..url.start()]));
        out.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            encode_double_quoted_attribute(url.as_str()),
            encode_text(url.as_str())
        ));
        last = url.end();
    }
    out.push_str(&encode_text(&text[last..]));
    out
}

/// Renders one search result as an HTML table row.
pub fn render_row(post: &ClassifiedPost, ordinal: usize) -> String {
    format!(
        "<tr><td>{ordinal}</td><td>{}</td><td>{}</td></tr>",
        activity_label(post),
        linkify(&post.post.text)
    )
}

/// Formats `numerator / denominator` as a percentage with two decimals.
///
/// A zero denominator yields "0.00%".
#[allow(clippy::cast_precision_loss)]
pub fn format_percent(numerator: usize, denominator: usize) -> String {
    if denominator == 0 {
        return "0.00%".to_string();
    }
    let pct = 100.0 * numerator as f64 / denominator as f64;
    format!("{pct:.2}%")
}

/// Formats a date as "Monday, January 18, 2021".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Post;
    use insta::assert_snapshot;

    fn classified(text: &str) -> ClassifiedPost {
        ClassifiedPost::new(Post::new(text, "2021-01-18T12:00:00Z"))
    }

    #[test]
    fn row_for_completed_event() {
        let post = classified(
            "Just completed a 10.00 km bike ride - Beautiful morning by the lake! http://example.com/2",
        );
        assert_snapshot!(
            render_row(&post, 1),
            @r#"<tr><td>1</td><td>cycling</td><td>Just completed a 10.00 km bike ride - Beautiful morning by the lake! <a href="http://example.com/2" target="_blank" rel="noopener noreferrer">http://example.com/2</a></td></tr>"#
        );
    }

    #[test]
    fn row_for_other_category_is_not_applicable() {
        let post = classified("Watch my run right now http://t.co/x #RKLive");
        let row = render_row(&post, 7);
        assert!(row.starts_with("<tr><td>7</td><td>(n/a)</td>"));
    }

    #[test]
    fn row_for_unknown_activity_is_not_applicable() {
        let post = classified("Just completed a 3.00 mi session");
        assert_eq!(activity_label(&post), NOT_APPLICABLE);
    }

    #[test]
    fn linkify_handles_multiple_urls() {
        assert_snapshot!(
            linkify("a http://x.io/1 b https://y.io/2"),
            @r#"a <a href="http://x.io/1" target="_blank" rel="noopener noreferrer">http://x.io/1</a> b <a href="https://y.io/2" target="_blank" rel="noopener noreferrer">https://y.io/2</a>"#
        );
    }

    #[test]
    fn linkify_escapes_text() {
        assert_eq!(linkify("5 < 6 & done"), "5 &lt; 6 &amp; done");
        assert_eq!(
            linkify(r#"see http://x.io/"q""#),
            r#"see <a href="http://x.io/&quot;q&quot;" target="_blank" rel="noopener noreferrer">http://x.io/"q"</a>"#
        );
    }

    #[test]
    fn linkify_without_urls() {
        assert_eq!(linkify("Loving this new app feature!"), "Loving this new app feature!");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(1, 3), "33.33%");
        assert_eq!(format_percent(2, 2), "100.00%");
        assert_eq!(format_percent(0, 5), "0.00%");
        assert_eq!(format_percent(3, 0), "0.00%");
    }

    #[test]
    fn long_date() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 18).unwrap();
        assert_eq!(format_long_date(date), "Monday, January 18, 2021");
    }
}
