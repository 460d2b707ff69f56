//! # notesite-render
//!
//! Page rendering for notesite.
//!
//! Every article uses the same fixed page shell, compiled in with Askama.
//! Auto-escaping is off: titles and fragments come from trusted notes and are
//! inserted verbatim.

pub mod templates;

pub use templates::{render_page, PageTemplate, RenderError};
