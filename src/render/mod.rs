// src/render/mod.rs
mod scene;
mod surface;

pub use scene::SceneRenderer;
pub use surface::DrawSurface;
