use crate::classification::error::ClassifyError;
use image::DynamicImage;

/// Where images to classify come from: files, a gallery, a camera.
pub trait ImageSource {
    /// Decodes the image at `location`. Anything undecodable is `InvalidImage`.
    fn load(&self, location: &str) -> Result<DynamicImage, ClassifyError>;
}
