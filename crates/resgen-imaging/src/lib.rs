//! resgen Imaging
//!
//! [`ImageCrateProcessor`] implements the pipeline's image-processing
//! capability with the `image` crate:
//!
//! | Operation | Implementation |
//! |---|---|
//! | **resize** | `DynamicImage::resize` (aspect preserved, fits the box) |
//! | **crop** | `DynamicImage::resize_to_fill` (cover, then center crop) |
//! | **encode** | `ImageFormat::from_extension` on the requested format |
//!
//! Decoding and resampling are CPU-bound and run on tokio's blocking pool.

#![warn(unreachable_pub)]

pub mod processor;

pub use processor::ImageCrateProcessor;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
