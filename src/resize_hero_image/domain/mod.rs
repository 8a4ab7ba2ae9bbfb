pub mod error;
pub mod image;
pub mod image_processor_trait;
pub mod resize_job;
pub mod target_width;
