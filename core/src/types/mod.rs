//! Core type definitions for the ingestion pipeline
//!
//! This module provides the fundamental types used throughout the dicurate
//! library:
//! - [`SliceMetadata`]: flat per-file metadata record
//! - [`PixelSpacing`]: two-element physical pixel spacing
//! - [`UNKNOWN`]: sentinel for header fields absent from a file

mod pixel_spacing;
mod record;

pub use pixel_spacing::PixelSpacing;
pub use record::{SliceMetadata, UNKNOWN};
