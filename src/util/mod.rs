//! Small shared helpers.

pub mod dates;
