use crate::classification::error::ClassifyError;
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Scales the image so it covers `width` x `height` and crops the overflow
/// evenly from both sides.
pub fn center_crop(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<DynamicImage, ClassifyError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifyError::InvalidImage(format!(
            "image is {}x{}",
            image.width(),
            image.height()
        )));
    }
    if width == 0 || height == 0 {
        return Err(ClassifyError::InvalidImage(format!(
            "model input is {}x{}",
            width, height
        )));
    }

    Ok(image.resize_to_fill(width, height, imageops::FilterType::Triangle))
}

/// NCHW float tensor normalized with the ImageNet channel mean and deviation.
fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - IMAGENET_MEAN[c]) / IMAGENET_STD[c]
    })
    .into_tensor()
}

pub fn center_crop_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<Tensor, ClassifyError> {
    let cropped = center_crop(image, width, height)?;

    Ok(image_to_tensor(&cropped))
}
