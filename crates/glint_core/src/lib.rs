//! Glint Core - scene model and color plumbing for the path tracer.
//!
//! This crate provides:
//!
//! - **Color pipeline**: sRGB <-> linear conversion and BGRA8 pixel packing
//! - **Scene model**: `Sphere`, `Scene` (read-only during rendering)
//! - **Texture assets**: decoded linear-RGB images with a path-keyed cache
//! - **Configuration**: serde scene description that builds a `Scene`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::config::SceneConfig;
//! use glint_core::texture::TextureCache;
//!
//! let config: SceneConfig = serde_json::from_str(&json)?;
//! let mut cache = TextureCache::new();
//! let scene = config.build(&mut cache)?;
//! ```

pub mod color;
pub mod config;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use config::{ConfigError, RenderParams, SceneConfig};
pub use scene::{Scene, Sphere};
pub use texture::{Texture, TextureCache, TextureError};
