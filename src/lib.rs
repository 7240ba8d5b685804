pub mod camera;
pub mod driver;
pub mod mesh;
pub mod primitives;
pub mod renderer;
pub mod scene;

#[cfg(feature = "winit")]
pub mod winit_integration;
