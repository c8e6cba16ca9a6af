//! outline_plugin - Framework/engine independent targeted-block outline
//!
//! This crate builds the thick wireframe cage drawn around the block the
//! player is currently aiming at. A selected axis-aligned box plus the
//! camera position are turned into a fixed-size list of colored triangle
//! vertices, and a small frame submitter pushes that list to a dynamic
//! GPU buffer through an abstract graphics backend.
//!
//! # Features
//!
//! - **Fixed topology**: a compile-time selector table expands one box
//!   into 576 vertices, every frame, no allocation
//! - **Distance-adaptive thickness**: line band width and inset shrink as
//!   the camera approaches, keeping the outline visually constant
//! - **Backend-agnostic submission**: alpha-blended, depth-write-off draw
//!   through the [`GraphicsBackend`] trait, with context loss handling
//!
//! # Example
//!
//! ```ignore
//! use outline_plugin::{OutlineRenderer, SelectedBox};
//!
//! let mut renderer = OutlineRenderer::new();
//! renderer.init(&mut backend);
//!
//! // per pick
//! let selected = SelectedBox::new([4.0, 10.0, 7.0], [5.0, 11.0, 8.0]);
//! renderer.update(&selected, camera_pos);
//!
//! // per frame
//! renderer.render(&mut backend, delta);
//! ```

pub mod geometry;
pub mod renderer;
pub mod topology;
pub mod types;

// Re-export commonly used items
pub use geometry::{OutlineGeometry, OUTLINE_COLOR};
pub use renderer::{GraphicsBackend, OutlineRenderer};
pub use topology::{FACE_TOPOLOGY, FACE_COUNT, QUAD_COUNT, VERTEX_COUNT};
pub use types::{OutlineVertex, PackedColor, SelectedBox, VertexFormat};
