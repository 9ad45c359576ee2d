//! Plain Markdown preview using comrak
//!
//! This is the auxiliary "raw" preview path: the document is rendered as
//! ordinary GitHub-flavoured Markdown. Its output never feeds back into a
//! [`Record`](crate::Record).

use comrak::{markdown_to_html as comrak_to_html, Options};

fn preview_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Render Markdown to an HTML fragment; raw HTML in the input is not passed through
pub fn markdown_to_html(markdown: &str) -> String {
    comrak_to_html(markdown, &preview_options())
}
