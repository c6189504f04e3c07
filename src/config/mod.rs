//! Configuration helpers.

pub mod window;
