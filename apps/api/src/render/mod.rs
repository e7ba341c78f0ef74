//! Rendering — maps a structured block sequence to a `.docx` file on
//! disk, and serves previously rendered files for download.

pub mod docx;
pub mod handlers;

/// MIME type for rendered resumes.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
