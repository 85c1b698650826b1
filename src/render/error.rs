//! Render-side failure modes

use thiserror::Error;

/// The engine fails soft everywhere except here: asking for a render
/// pass with no mount target attached indicates a structural integration
/// bug in the host, so it is surfaced instead of swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("no mount target attached to the document host")]
    MountDetached,
}
