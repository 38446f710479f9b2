pub mod image;
pub mod labels;
