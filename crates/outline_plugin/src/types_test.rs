use super::*;

#[test]
fn test_packed_color_channel_roundtrip() {
  let col = PackedColor::rgba(12, 34, 56, 78);

  assert_eq!(col.r(), 12);
  assert_eq!(col.g(), 34);
  assert_eq!(col.b(), 56);
  assert_eq!(col.a(), 78);
}

#[test]
fn test_packed_color_to_f32() {
  let col = PackedColor::rgba(0, 255, 0, 102);
  let f = col.to_f32_array();

  assert_eq!(f[0], 0.0);
  assert_eq!(f[1], 1.0);
  assert_eq!(f[2], 0.0);
  assert!((f[3] - 102.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_outline_vertex_is_16_bytes() {
  // Position-color dynamic buffer layout: 3 floats + packed u32.
  assert_eq!(std::mem::size_of::<OutlineVertex>(), 16);
}

#[test]
fn test_selected_box_block() {
  let b = SelectedBox::block(4, -2, 7);

  assert_eq!(b.min, [4.0, -2.0, 7.0]);
  assert_eq!(b.max, [5.0, -1.0, 8.0]);
}
