//! Askama template definitions.

use askama::Template;
use notesite_core::ParsedNote;
use thiserror::Error;

/// Stylesheet linked from every page, relative to the page
pub const STYLESHEET_HREF: &str = "data/css/article.css";

/// Favicon linked from every page
pub const ICON_HREF: &str = "data/assets/icon.png";

/// Close button shown in the title bar
pub const EXIT_ICON_SRC: &str = "data/assets/exit.png";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

/// Article page template
#[derive(Template)]
#[template(path = "page.html", escape = "none")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub stylesheet: &'a str,
    pub icon: &'a str,
    pub exit_icon: &'a str,
}

impl<'a> PageTemplate<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            stylesheet: STYLESHEET_HREF,
            icon: ICON_HREF,
            exit_icon: EXIT_ICON_SRC,
        }
    }
}

/// Render a converted note into a complete HTML document
pub fn render_page(note: &ParsedNote) -> Result<String, RenderError> {
    let content = note.content();
    let page = PageTemplate::new(note.title_or_empty(), &content);
    Ok(page.render()?)
}
