use super::error::DomainError;

/// A non-zero output width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWidth(u32);

impl TargetWidth {
    pub fn new(width: u32) -> Result<Self, DomainError> {
        if width == 0 {
            return Err(DomainError::InvalidInput(
                "target width must be greater than zero".to_string(),
            ));
        }
        Ok(Self(width))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Height that keeps the source aspect ratio at this width,
    /// rounded to the nearest pixel.
    pub fn proportional_height(self, source_width: u32, source_height: u32) -> Result<u32, DomainError> {
        if source_width == 0 || source_height == 0 {
            return Err(DomainError::ZeroDimension {
                width: source_width,
                height: source_height,
            });
        }

        let ratio = f64::from(self.0) / f64::from(source_width);
        let height = (f64::from(source_height) * ratio).round();

        // 極端に横長な画像では 0 に丸められる
        if height < 1.0 {
            return Err(DomainError::ZeroDimension {
                width: self.0,
                height: 0,
            });
        }
        Ok(height as u32)
    }
}
