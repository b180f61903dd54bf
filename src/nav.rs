//! Renders the month-navigation list: one `<li>` per month with at least
//! one post, each linking to that month's archive page, newest month
//! first. The items are emitted bare; the caller supplies the wrapping
//! list element. This runs at template-render time, independently of the
//! build-time generator, and regroups the posts on every invocation.

use crate::archive::group_by_month;
use crate::config::ArchiveConfig;
use crate::post::Post;

/// The invocation name under which hosts register the navigation tag with
/// their template engine.
pub const TAG_NAME: &str = "tag_monthly_archive";

/// Options accepted in the navigation tag's invocation markup.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NavOptions {
    /// Append a per-month post count after each link label.
    pub counter: bool,
}

impl NavOptions {
    /// Parses invocation markup of the form `counter:true` into options.
    /// The markup is scanned as whitespace-separated `key:value` tokens;
    /// the first token whose key is `counter` (compared
    /// case-insensitively) decides the option, and it is enabled only by
    /// the exact value `true`. Everything else in the markup is ignored,
    /// so a malformed or absent directive leaves the default in place
    /// rather than raising an error.
    pub fn parse(markup: &str) -> NavOptions {
        for token in markup.split_whitespace() {
            if let Some((key, value)) = token.split_once(':') {
                if key.eq_ignore_ascii_case("counter") {
                    return NavOptions {
                        counter: value == "true",
                    };
                }
            }
        }
        NavOptions::default()
    }
}

/// Renders the navigation list for `posts` as concatenated `<li>` items,
/// e.g. `<li><a href='/blog/2023/04/'>2023-04</a></li>`, with a
/// parenthesized post count inside the anchor when
/// [`NavOptions::counter`] is enabled. An empty `posts` slice renders as
/// the empty string.
pub fn render(posts: &[Post], config: &ArchiveConfig, options: NavOptions) -> String {
    let base = config.base_path.trim_matches('/');
    let mut html = String::new();
    for (month, group) in group_by_month(posts).iter().rev() {
        html.push_str(&format!(
            "<li><a href='/{}/{}/{:02}/'>{}",
            base, month.year, month.month, month
        ));
        if options.counter {
            html.push_str(&format!("  ({})", group.len()));
        }
        html.push_str("</a></li>");
    }
    html
}
