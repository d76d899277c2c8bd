pub mod image_models;
pub mod image_service;

pub use image_models::{GeneratedImage, ImageError};
pub use image_service::{ImageProvider, ImageService};
