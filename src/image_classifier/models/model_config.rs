use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// One label per line, in the model's output order.
    pub labels_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("./models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("./models/imagenet_labels.txt"),
            input_shape: (224, 224),
        }
    }
}
