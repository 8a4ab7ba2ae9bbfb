use crate::domain::image::Image as DomainImage;
use crate::domain::resize_job::ResizeJob;
use crate::infrastructure::error::InfrastructureError;
use image::DynamicImage;

#[cfg(test)]
use mockall::automock;

// 画像ライブラリへの依存はこのトレイトの実装側に閉じ込める
#[cfg_attr(test, automock)]
pub trait ImageProcessor {
    /// Decodes the source once; every job resizes from this raster.
    fn decode(&self, image_bytes: &[u8]) -> Result<DynamicImage, InfrastructureError>;

    fn resize_to_jpeg(
        &self,
        source: &DynamicImage,
        job: &ResizeJob,
    ) -> Result<DomainImage, InfrastructureError>;
}
