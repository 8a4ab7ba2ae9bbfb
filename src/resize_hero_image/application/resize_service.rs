use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::error::ApplicationError;
use crate::domain::image::Image as DomainImage;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::resize_job::ResizeJob;
use crate::infrastructure::file_storage::LocalFileStorage;

/// Produces resized JPEG derivatives of one source image.
pub struct ResizeService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    file_storage: LocalFileStorage,
}

impl ResizeService {
    pub fn new(image_processor: Arc<dyn ImageProcessor + Send + Sync>, file_storage: LocalFileStorage) -> Self {
        Self {
            image_processor,
            file_storage,
        }
    }

    /// Reads and decodes `input_path` once and writes one file per job, in order.
    /// The first failure aborts the run; files already written are left as is.
    pub async fn resize_hero_image(
        &self,
        input_path: &Path,
        jobs: &[ResizeJob],
    ) -> Result<Vec<DomainImage>, ApplicationError> {
        let bytes = self.file_storage.read_image_impl(input_path).await?;
        let source = self.image_processor.decode(&bytes)?;
        info!(
            path = %input_path.display(),
            width = source.width(),
            height = source.height(),
            "Loaded source image"
        );

        let mut outputs = Vec::with_capacity(jobs.len());
        for job in jobs {
            let resized = self
                .image_processor
                .resize_to_jpeg(&source, job)
                .map_err(|source| ApplicationError::ResizeFailed {
                    output: job.output_path.display().to_string(),
                    source,
                })?;

            self.file_storage.save_image_impl(&job.output_path, &resized.data).await?;
            let (width, height) = resized.dimensions();
            info!(
                path = %job.output_path.display(),
                width,
                height,
                format = ?resized.format,
                bytes = resized.data.len(),
                "Saved resized image"
            );
            outputs.push(resized);
        }

        Ok(outputs)
    }
}
