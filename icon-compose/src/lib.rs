//! Renders the per-platform application icon sets from the master SVG, marking
//! unstable builds with a status badge.

pub mod argb;
pub mod badge;
pub mod compose;
pub mod platform;
pub mod raster;
mod status;

pub use badge::{BadgeDescriptor, BadgeDimensions, IconSources, StatusBadges};
pub use status::{BuildStatus, UnknownBuildStatus};
