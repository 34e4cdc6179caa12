//! Outline shape catalogue and shape selection.

pub(crate) mod builtin;
pub(crate) mod registry;
