//! Typed design configuration.

pub(crate) mod builder;
pub(crate) mod config;
pub(crate) mod style;
