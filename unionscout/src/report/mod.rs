//! Report rendering. Each renderer consumes a completed [`ResultSet`] and
//! writes one self-contained file to a destination path.
//!
//! [`ResultSet`]: crate::results::ResultSet

pub mod html;
pub mod json;
