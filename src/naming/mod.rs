//! Game name resolution.
//!
//! Provides:
//! - Folder name sanitization
//! - Name extraction for capture tool and platform filenames
//! - The user name mapping overlay

pub mod capture;
pub mod mapping;
pub mod platform;
pub mod sanitize;

pub use capture::{extract_capture_name, CaptureName};
pub use mapping::NameMapping;
pub use platform::{extract_platform_id, resolve_platform_name};
pub use sanitize::{sanitize_name, trim_trailing_dots_spaces};
