use crate::domain::image::Image as DomainImage;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::resize_job::{JpegSettings, ResizeJob};
use super::error::InfrastructureError;
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat, RgbImage};
use jpeg_encoder::{ColorType as JpegColorType, Encoder as JpegEncoder};
use std::io::Cursor;
use tracing::debug;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }

    fn encode_jpeg(rgb: &RgbImage, settings: JpegSettings) -> Result<Vec<u8>, InfrastructureError> {
        // jpeg-encoder は寸法を u16 で受け取る
        let to_u16 = |v: u32| {
            u16::try_from(v).map_err(|_| {
                InfrastructureError::ImageProcessingError(format!(
                    "{}x{} exceeds the JPEG size limit",
                    rgb.width(),
                    rgb.height()
                ))
            })
        };
        let (width, height) = (to_u16(rgb.width())?, to_u16(rgb.height())?);

        let mut buffer = Vec::new();
        let mut encoder = JpegEncoder::new(&mut buffer, settings.quality);
        encoder.set_optimized_huffman_tables(settings.optimize);
        encoder.encode(rgb.as_raw(), width, height, JpegColorType::Rgb)?;
        Ok(buffer)
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    // フォーマットは中身から推測する (拡張子は見ない)
    fn decode(&self, image_bytes: &[u8]) -> Result<DynamicImage, InfrastructureError> {
        let reader = ImageReader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        debug!(format = ?reader.format(), "Decoding source image");
        Ok(reader.decode()?)
    }

    fn resize_to_jpeg(
        &self,
        source: &DynamicImage,
        job: &ResizeJob,
    ) -> Result<DomainImage, InfrastructureError> {
        let (orig_w, orig_h) = (source.width(), source.height());

        let new_width = job.width.get();
        let new_height = job.width.proportional_height(orig_w, orig_h)?;

        debug!(
            orig_w,
            orig_h,
            new_width,
            new_height,
            quality = job.jpeg.quality,
            optimize = job.jpeg.optimize,
            "Resizing image to target width"
        );

        // JPEG はアルファを持てないので RGB に落とす
        let resized = source.resize_exact(new_width, new_height, FilterType::Lanczos3).to_rgb8();

        let data = Self::encode_jpeg(&resized, job.jpeg)?;
        Ok(DomainImage::new(data, new_width, new_height, ImageFormat::Jpeg))
    }
}
