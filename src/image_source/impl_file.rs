use crate::classification::error::ClassifyError;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

pub struct ImageSourceFile {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageSourceFile {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("file"),
        }
    }
}

impl ImageSource for ImageSourceFile {
    fn load(&self, location: &str) -> Result<DynamicImage, ClassifyError> {
        let _ = self.logger.info(&format!("Loading {}", location));

        let image = image::open(location)
            .map_err(|e| ClassifyError::InvalidImage(format!("{}: {}", location, e)))?;

        let _ = self.logger.info(&format!(
            "Loaded {} ({}x{})",
            location,
            image.width(),
            image.height()
        ));

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;
    use image::{ImageBuffer, Rgb};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hotdog_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_png() {
        let path = temp_path("source.png");
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(12, 8, Rgb([200, 40, 10]));
        img.save(&path).unwrap();

        let source = ImageSourceFile::new(Arc::new(LoggerFake::new()));
        let loaded = source.load(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);

        let loaded = loaded.unwrap();
        assert_eq!((loaded.width(), loaded.height()), (12, 8));
        assert_eq!(loaded.to_rgb8().get_pixel(3, 3), &Rgb([200, 40, 10]));
    }

    #[test]
    fn test_missing_file_is_invalid_image() {
        let source = ImageSourceFile::new(Arc::new(LoggerFake::new()));

        let result = source.load("./no/such/hotdog.jpg");

        assert!(matches!(result, Err(ClassifyError::InvalidImage(_))));
    }

    #[test]
    fn test_garbage_is_invalid_image() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let source = ImageSourceFile::new(Arc::new(LoggerFake::new()));
        let result = source.load(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ClassifyError::InvalidImage(_))));
    }
}
