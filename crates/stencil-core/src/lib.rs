// Core modules
pub mod error;
pub mod json;
pub mod render;

// Re-export commonly used types
pub use error::{Result, StencilError};
pub use render::{render, render_str, RenderOptions, Renderer};
