//! zonefix Infrastructure Layer
pub mod filesystem;
