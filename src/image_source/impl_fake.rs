use crate::classification::error::ClassifyError;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::Arc;

/// Hands out a solid color frame regardless of location.
#[allow(dead_code)]
pub struct ImageSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    width: u32,
    height: u32,
}

#[allow(dead_code)]
impl ImageSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, width: u32, height: u32) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("fake"),
            width,
            height,
        }
    }
}

impl ImageSource for ImageSourceFake {
    fn load(&self, location: &str) -> Result<DynamicImage, ClassifyError> {
        let _ = self.logger.info(&format!(
            "Producing {}x{} frame for {}",
            self.width, self.height, location
        ));

        let frame = ImageBuffer::from_pixel(self.width, self.height, Rgb([200u8, 80, 40]));

        Ok(DynamicImage::ImageRgb8(frame))
    }
}
