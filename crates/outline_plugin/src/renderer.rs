//! Frame submitter and device lifecycle for the outline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ Per frame                                                       │
//! │                                                                 │
//! │   update(selected, camera)  → rewrites the 576-vertex array     │
//! │   render(backend, delta)    → blend on, depth write off,        │
//! │                               upload + draw, state restored     │
//! │                                                                 │
//! │ Device lifecycle (driven by the host's device manager)          │
//! │                                                                 │
//! │   on_context_lost       → dynamic buffer handle released        │
//! │   on_context_recreated  → fresh buffer at fixed capacity        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The renderer is an owned instance handed into the game loop, not a
//! module-level global, so hosts and tests can run several in isolation.

use crate::geometry::OutlineGeometry;
use crate::topology::VERTEX_COUNT;
use crate::types::{OutlineVertex, SelectedBox, VertexFormat};

/// Graphics device operations the frame submitter needs.
///
/// A real host implements this over its rendering API; tests use a
/// recording stub. `Buffer` is the backend's dynamic-buffer handle type.
pub trait GraphicsBackend {
  type Buffer;

  /// Allocate a dynamic (rewritable every frame) vertex buffer.
  fn create_dynamic_buffer(&mut self, format: VertexFormat, capacity: usize) -> Self::Buffer;

  /// Release a buffer handle.
  fn delete_buffer(&mut self, buffer: Self::Buffer);

  /// Upload `vertices` into the dynamic buffer and issue an
  /// indexed-triangle draw covering all of them.
  fn update_dynamic_buffer_and_draw(&mut self, buffer: &mut Self::Buffer, vertices: &[OutlineVertex]);

  fn set_alpha_blending(&mut self, enabled: bool);

  fn set_depth_write(&mut self, enabled: bool);

  fn set_vertex_format(&mut self, format: VertexFormat);

  /// True while the graphics context is lost; rendering must be skipped.
  fn context_lost(&self) -> bool;
}

/// Renders the targeted-block outline through a [`GraphicsBackend`].
///
/// Owns the vertex array (written by `update`, read by `render`) and the
/// dynamic buffer handle. Both operations run on the render thread; there
/// is exactly one writer and one reader, never concurrently.
pub struct OutlineRenderer<B: GraphicsBackend> {
  geometry: OutlineGeometry,
  buffer: Option<B::Buffer>,
}

impl<B: GraphicsBackend> OutlineRenderer<B> {
  pub fn new() -> Self {
    Self {
      geometry: OutlineGeometry::new(),
      buffer: None,
    }
  }

  /// Game-component startup: allocate the dynamic buffer. Same path as
  /// context recreation.
  pub fn init(&mut self, backend: &mut B) {
    self.on_context_recreated(backend);
  }

  /// Game-component shutdown: release the buffer.
  pub fn free(&mut self, backend: &mut B) {
    self.on_context_lost(backend);
  }

  /// Context loss notification: drop the GPU handle, keep the vertex
  /// data. `render` becomes a no-op until recreation.
  pub fn on_context_lost(&mut self, backend: &mut B) {
    if let Some(buffer) = self.buffer.take() {
      backend.delete_buffer(buffer);
      #[cfg(feature = "tracing")]
      tracing::trace!("outline dynamic buffer released");
    }
  }

  /// Context recreation notification: allocate a fresh dynamic buffer at
  /// the fixed vertex capacity. Must run before the next `render`.
  pub fn on_context_recreated(&mut self, backend: &mut B) {
    if let Some(buffer) = self.buffer.take() {
      backend.delete_buffer(buffer);
    }
    self.buffer = Some(backend.create_dynamic_buffer(VertexFormat::PositionColor, VERTEX_COUNT));
    #[cfg(feature = "tracing")]
    tracing::trace!(capacity = VERTEX_COUNT, "outline dynamic buffer allocated");
  }

  /// Rebuild the outline geometry. Called whenever the selection or the
  /// camera moves; `render` keeps reusing the last result otherwise.
  pub fn update(&mut self, selected: &SelectedBox, camera_pos: [f32; 3]) {
    self.geometry.update(selected, camera_pos);
  }

  /// Submit the current vertex array and draw.
  ///
  /// Silently skips when the context is lost or no buffer exists; a lost
  /// context is an expected transient, not an error. Render state is left
  /// exactly as found since other draws follow in the same frame.
  pub fn render(&mut self, backend: &mut B, _delta: f64) {
    if backend.context_lost() {
      return;
    }
    let Some(buffer) = self.buffer.as_mut() else {
      return;
    };

    backend.set_alpha_blending(true);
    backend.set_depth_write(false);
    backend.set_vertex_format(VertexFormat::PositionColor);

    backend.update_dynamic_buffer_and_draw(buffer, self.geometry.vertices());

    backend.set_depth_write(true);
    backend.set_alpha_blending(false);
  }

  /// Read access to the current vertex data.
  pub fn vertices(&self) -> &[OutlineVertex] {
    self.geometry.vertices()
  }
}

impl<B: GraphicsBackend> Default for OutlineRenderer<B> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;
