//! `image`-backed processor

use async_trait::async_trait;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use resgen_core::{ImageOp, ImageProcessor, OutputFormat, ProcessError, TransformKind};

/// Image processor built on the `image` crate
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateProcessor {
    filter: FilterType,
}

impl ImageCrateProcessor {
    /// Create processor with Lanczos3 resampling
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With resampling filter
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    async fn run(&self, op: &ImageOp, kind: TransformKind) -> Result<(), ProcessError> {
        let op = op.clone();
        let filter = self.filter;
        tokio::task::spawn_blocking(move || transform(&op, kind, filter))
            .await
            .map_err(|e| ProcessError::Worker(e.to_string()))?
    }
}

impl Default for ImageCrateProcessor {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

#[async_trait]
impl ImageProcessor for ImageCrateProcessor {
    async fn resize(&self, op: &ImageOp) -> Result<(), ProcessError> {
        self.run(op, TransformKind::Resize).await
    }

    async fn crop(&self, op: &ImageOp) -> Result<(), ProcessError> {
        self.run(op, TransformKind::Crop).await
    }
}

fn transform(op: &ImageOp, kind: TransformKind, filter: FilterType) -> Result<(), ProcessError> {
    let format = image_format(&op.format)?;
    let source = decode(op)?;

    let output = match kind {
        TransformKind::Resize => source.resize(op.width, op.height, filter),
        TransformKind::Crop => source.resize_to_fill(op.width, op.height, filter),
    };
    // JPEG carries no alpha channel
    let output = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(output.to_rgb8()),
        _ => output,
    };

    output
        .save_with_format(&op.destination, format)
        .map_err(|e| ProcessError::Write {
            path: op.destination.clone(),
            source: Box::new(e),
        })?;

    tracing::trace!(
        destination = %op.destination.display(),
        width = output.width(),
        height = output.height(),
        "image written"
    );
    Ok(())
}

fn image_format(format: &OutputFormat) -> Result<ImageFormat, ProcessError> {
    ImageFormat::from_extension(format.as_str())
        .ok_or_else(|| ProcessError::UnsupportedFormat(format.to_string()))
}

fn decode(op: &ImageOp) -> Result<DynamicImage, ProcessError> {
    if !op.source.is_file() {
        return Err(ProcessError::MissingSource(op.source.clone()));
    }
    let decode_error = |e: Box<dyn std::error::Error + Send + Sync>| ProcessError::Decode {
        path: op.source.clone(),
        source: e,
    };

    ImageReader::open(&op.source)
        .map_err(|e| decode_error(Box::new(e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(Box::new(e)))?
        .decode()
        .map_err(|e| decode_error(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resgen_test_utils::write_master_png;
    use std::path::Path;

    fn dims(path: &Path) -> (u32, u32) {
        image::image_dimensions(path).unwrap()
    }

    #[tokio::test]
    async fn resize_square_master_to_icon() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        write_master_png(&master, 256, 256);

        let out = dir.path().join("drawable-hdpi-icon.png");
        ImageCrateProcessor::new()
            .resize(&ImageOp::new(&master, &out, 72, 72))
            .await
            .unwrap();

        assert_eq!(dims(&out), (72, 72));
    }

    #[tokio::test]
    async fn resize_keeps_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("wide.png");
        write_master_png(&master, 400, 200);

        let out = dir.path().join("out.png");
        ImageCrateProcessor::new()
            .resize(&ImageOp::new(&master, &out, 100, 100))
            .await
            .unwrap();

        assert_eq!(dims(&out), (100, 50));
    }

    #[tokio::test]
    async fn crop_produces_exact_box() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("splash.png");
        write_master_png(&master, 300, 200);

        let out = dir.path().join("Default-568h@2x~iphone.png");
        ImageCrateProcessor::new()
            .crop(&ImageOp::new(&master, &out, 640, 1136))
            .await
            .unwrap();

        assert_eq!(dims(&out), (640, 1136));
    }

    #[tokio::test]
    async fn jpeg_output_from_rgba_master() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        write_master_png(&master, 128, 128);

        let out = dir.path().join("icon-1024.jpg");
        ImageCrateProcessor::new()
            .resize(&ImageOp::new(&master, &out, 64, 64))
            .await
            .unwrap();

        assert_eq!(image::ImageFormat::from_path(&out).unwrap(), ImageFormat::Jpeg);
        assert_eq!(dims(&out), (64, 64));
    }

    #[tokio::test]
    async fn nearest_filter_keeps_hard_edges() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        let checker = image::RgbaImage::from_fn(4, 4, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        });
        checker.save(&master).unwrap();

        let out = dir.path().join("icon-8.png");
        ImageCrateProcessor::new()
            .with_filter(FilterType::Nearest)
            .resize(&ImageOp::new(&master, &out, 8, 8))
            .await
            .unwrap();

        let resized = image::open(&out).unwrap().to_rgba8();
        assert_eq!(resized.dimensions(), (8, 8));
        assert!(resized
            .pixels()
            .all(|p| p.0 == [0, 0, 0, 255] || p.0 == [255, 255, 255, 255]));
    }

    #[tokio::test]
    async fn missing_source_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageCrateProcessor::new()
            .resize(&ImageOp::new(
                dir.path().join("absent.png"),
                dir.path().join("out.png"),
                10,
                10,
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessError::MissingSource(_)));
    }

    #[tokio::test]
    async fn corrupt_source_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        std::fs::write(&master, b"definitely not a png").unwrap();

        let err = ImageCrateProcessor::new()
            .resize(&ImageOp::new(&master, dir.path().join("out.png"), 10, 10))
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessError::Decode { .. }));
    }

    #[tokio::test]
    async fn unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        write_master_png(&master, 16, 16);

        let err = ImageCrateProcessor::new()
            .resize(&ImageOp::new(&master, dir.path().join("icon.xyz"), 8, 8))
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessError::UnsupportedFormat(ref f) if f == "xyz"));
    }
}
