pub mod canvas;
pub mod input;
pub mod pr_model;
pub mod scene;
pub mod status;

pub type V2 = nalgebra::Vector2<f32>;
