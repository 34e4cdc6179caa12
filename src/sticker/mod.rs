//! Sticker containers: layout geometry and frame markup for wrapping a rendered QR document.

pub(crate) mod config;
pub(crate) mod frame;
pub(crate) mod geometry;
