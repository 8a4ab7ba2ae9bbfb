use std::path::{Path, PathBuf};

use super::error::DomainError;
use super::target_width::TargetWidth;

pub const INPUT_PATH: &str = "app/public/images/hero-bg.jpg";
pub const OUTPUT_DIR: &str = "app/public/images";
pub const OUTPUT_STEM: &str = "hero-bg";
pub const TARGET_WIDTHS: [u32; 2] = [640, 1024];
pub const JPEG_QUALITY: u8 = 85;

// 両方の書き出しが終わった後に stdout へ出す
pub const COMPLETION_MESSAGE: &str = "Images resized successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegSettings {
    pub quality: u8,
    /// Build per-image Huffman tables instead of the standard ones.
    pub optimize: bool,
}

impl Default for JpegSettings {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY,
            optimize: true,
        }
    }
}

/// One derivative to produce from the source image.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeJob {
    pub width: TargetWidth,
    pub output_path: PathBuf,
    pub jpeg: JpegSettings,
}

impl ResizeJob {
    pub fn new(width: TargetWidth, output_path: PathBuf, jpeg: JpegSettings) -> Self {
        Self {
            width,
            output_path,
            jpeg,
        }
    }

    /// `hero-bg-640.jpg`, `hero-bg-1024.jpg`, ... inside `output_dir`.
    pub fn output_path_for(output_dir: &Path, width: TargetWidth) -> PathBuf {
        output_dir.join(format!("{}-{}.jpg", OUTPUT_STEM, width.get()))
    }

    pub fn hero_jobs(output_dir: &Path) -> Result<Vec<ResizeJob>, DomainError> {
        TARGET_WIDTHS
            .iter()
            .map(|&w| {
                let width = TargetWidth::new(w)?;
                Ok(ResizeJob::new(
                    width,
                    Self::output_path_for(output_dir, width),
                    JpegSettings::default(),
                ))
            })
            .collect()
    }
}
