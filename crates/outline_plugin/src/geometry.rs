//! Outline geometry builder.
//!
//! Expands a selected box into the fixed 576-vertex cage via the
//! [`FACE_TOPOLOGY`](crate::topology::FACE_TOPOLOGY) selector table. The
//! only per-update inputs are the box bounds and the camera position; the
//! camera distance picks the line thickness and outward inset so the
//! outline keeps a roughly constant screen-space weight as the camera
//! approaches.

use glam::Vec3;

use crate::topology::{FACE_TOPOLOGY, VERTEX_COUNT};
use crate::types::{OutlineVertex, PackedColor, SelectedBox};

/// Fixed outline color: translucent black (alpha 102/255).
pub const OUTLINE_COLOR: PackedColor = PackedColor::rgba(0, 0, 0, 102);

/// Outward inset of the outer boundary for a given squared camera
/// distance. Thresholds are squared comparisons against 4 and 2 blocks.
#[inline]
pub(crate) fn line_inset(dist_sq: f32) -> f32 {
  if dist_sq < 4.0 {
    0.005
  } else if dist_sq < 16.0 {
    0.00625
  } else {
    0.01
  }
}

/// Thickness of the line band for a given squared camera distance.
/// Piecewise-constant, shrinking as the camera gets closer.
#[inline]
pub(crate) fn line_size(dist_sq: f32) -> f32 {
  if dist_sq < 4.0 {
    1.0 / 192.0
  } else if dist_sq < 16.0 {
    1.0 / 128.0
  } else if dist_sq < 64.0 {
    1.0 / 96.0
  } else if dist_sq < 256.0 {
    1.0 / 64.0
  } else if dist_sq < 1024.0 {
    1.0 / 32.0
  } else {
    1.0 / 16.0
  }
}

/// The 4 selector targets for one axis: outer-min, inner-min, inner-max,
/// outer-max.
#[inline]
fn axis_coords(min: f32, max: f32, offset: f32, size: f32) -> [f32; 4] {
  let outer_min = min - offset;
  let outer_max = max + offset;
  [outer_min, outer_min + size, outer_max - size, outer_max]
}

/// Owns the reused vertex array the frame submitter reads every frame.
///
/// `update` overwrites the array in place; there is no per-frame
/// allocation and the vertex count never changes.
pub struct OutlineGeometry {
  vertices: Box<[OutlineVertex; VERTEX_COUNT]>,
}

impl OutlineGeometry {
  pub fn new() -> Self {
    Self {
      vertices: Box::new([OutlineVertex::default(); VERTEX_COUNT]),
    }
  }

  /// Rebuild the cage around `selected` as seen from `camera_pos`.
  ///
  /// Pure data transform: identical inputs yield identical vertex data.
  pub fn update(&mut self, selected: &SelectedBox, camera_pos: [f32; 3]) {
    // Squared distance to the min corner, a cheap proxy for camera-to-box
    // distance. Not nearest-point-on-box; thickness tiers only need a
    // rough range.
    let dist_sq = Vec3::from(camera_pos).distance_squared(Vec3::from(selected.min));

    let offset = line_inset(dist_sq);
    let size = line_size(dist_sq);

    let xs = axis_coords(selected.min[0], selected.max[0], offset, size);
    let ys = axis_coords(selected.min[1], selected.max[1], offset, size);
    let zs = axis_coords(selected.min[2], selected.max[2], offset, size);

    for (vertex, sel) in self.vertices.iter_mut().zip(FACE_TOPOLOGY.iter()) {
      vertex.position = [xs[sel[0] as usize], ys[sel[1] as usize], zs[sel[2] as usize]];
      vertex.color = OUTLINE_COLOR;
    }
  }

  /// The current vertex data, always exactly [`VERTEX_COUNT`] entries.
  pub fn vertices(&self) -> &[OutlineVertex] {
    &self.vertices[..]
  }
}

impl Default for OutlineGeometry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
