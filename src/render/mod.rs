//! Page materialization and host-facing render helpers

mod error;
mod html;

pub use error::RenderError;
pub use html::{flow_block_html, prepare_paste, render_pages, PLACEHOLDER_HTML};
