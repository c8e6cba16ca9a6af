//! Core data types for the targeted-block outline.

/// Color packed as a single u32 combining four 8-bit channels (R,G,B,A).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedColor(pub u32);

impl PackedColor {
  /// Pack four 8-bit channels, R in the low byte.
  #[inline(always)]
  pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self((r as u32) | (g as u32) << 8 | (b as u32) << 16 | (a as u32) << 24)
  }

  #[inline(always)]
  pub const fn r(self) -> u8 {
    self.0 as u8
  }

  #[inline(always)]
  pub const fn g(self) -> u8 {
    (self.0 >> 8) as u8
  }

  #[inline(always)]
  pub const fn b(self) -> u8 {
    (self.0 >> 16) as u8
  }

  #[inline(always)]
  pub const fn a(self) -> u8 {
    (self.0 >> 24) as u8
  }

  /// Convert to linear-ish float channels in [0, 1], RGBA order.
  pub fn to_f32_array(self) -> [f32; 4] {
    [
      self.r() as f32 / 255.0,
      self.g() as f32 / 255.0,
      self.b() as f32 / 255.0,
      self.a() as f32 / 255.0,
    ]
  }
}

/// Output vertex: position plus packed color.
///
/// Matches the position-color dynamic buffer layout
/// ([`VertexFormat::PositionColor`]), 16 bytes per vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineVertex {
  /// Vertex position in world coordinates.
  pub position: [f32; 3],

  /// Packed RGBA color.
  pub color: PackedColor,
}

impl Default for OutlineVertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      color: PackedColor::rgba(0, 0, 0, 0),
    }
  }
}

/// Axis-aligned bounding box of the block targeted by the view ray.
///
/// Produced by the upstream ray-picking subsystem and trusted to be
/// well-formed (min <= max on all axes); read-only input here.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectedBox {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl SelectedBox {
  /// Create a box from min/max corners.
  pub const fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Unit cube covering the block at integer cell coordinates.
  pub fn block(x: i32, y: i32, z: i32) -> Self {
    let min = [x as f32, y as f32, z as f32];
    Self {
      min,
      max: [min[0] + 1.0, min[1] + 1.0, min[2] + 1.0],
    }
  }
}

/// Vertex layouts the frame submitter can ask the backend for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexFormat {
  /// 3 position floats + packed RGBA color (the only format used here).
  PositionColor,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
