use super::*;

#[test]
fn test_table_size() {
  assert_eq!(FACE_TOPOLOGY.len(), VERTEX_COUNT);
  assert_eq!(VERTEX_COUNT, 576);
  assert_eq!(QUAD_COUNT, 96);
}

#[test]
fn test_selectors_in_range() {
  for (idx, sel) in FACE_TOPOLOGY.iter().enumerate() {
    for axis in 0..3 {
      assert!(sel[axis] <= 3, "entry {} axis {} selector {} out of range", idx, axis, sel[axis]);
    }
  }
}

#[test]
fn test_face_blocks_have_constant_fixed_axis() {
  let block_len = VERTEX_COUNT / FACE_COUNT;
  // Emission order: Y-min, Y-max, X-min, X-max, Z-min, Z-max.
  let expected = [(1, 0), (1, 3), (0, 0), (0, 3), (2, 0), (2, 3)];

  for (face, &(axis, value)) in expected.iter().enumerate() {
    let block = &FACE_TOPOLOGY[face * block_len..(face + 1) * block_len];
    for sel in block {
      assert_eq!(
        sel[axis] as usize, value,
        "face {} should hold axis {} at selector {}",
        face, axis, value
      );
    }
  }
}

#[test]
fn test_frame_cells_skip_center() {
  // No vertex may sit strictly inside the frame on both in-plane axes:
  // a (1,1)..(2,2) cell would fill the face instead of outlining it.
  let block_len = VERTEX_COUNT / FACE_COUNT;
  let fixed_axes = [1usize, 1, 0, 0, 2, 2];

  for (face, &fixed) in fixed_axes.iter().enumerate() {
    let u = (fixed + 1) % 3;
    let v = (fixed + 2) % 3;
    let block = &FACE_TOPOLOGY[face * block_len..(face + 1) * block_len];

    for quad in block.chunks(6) {
      let inner_only = quad
        .iter()
        .all(|sel| (1..=2).contains(&sel[u]) && (1..=2).contains(&sel[v]));
      assert!(!inner_only, "face {} contains a center-cell quad", face);
    }
  }
}

#[test]
fn test_quads_are_nondegenerate() {
  // Each group of 6 entries is one quad: two triangles over exactly 4
  // distinct selector triplets.
  for (q, quad) in FACE_TOPOLOGY.chunks(6).enumerate() {
    let mut distinct: Vec<[u8; 3]> = Vec::new();
    for sel in quad {
      if !distinct.contains(sel) {
        distinct.push(*sel);
      }
    }
    assert_eq!(distinct.len(), 4, "quad {} should have 4 distinct corners", q);
  }
}

#[test]
fn test_both_windings_present() {
  // Consecutive quads within a cell are the same 4 corners in opposite
  // winding, so the cage is double-sided.
  for cell in FACE_TOPOLOGY.chunks(12) {
    let (front, back) = cell.split_at(6);
    let mut front_sorted: Vec<[u8; 3]> = front.to_vec();
    let mut back_sorted: Vec<[u8; 3]> = back.to_vec();
    front_sorted.sort();
    back_sorted.sort();

    assert_eq!(front_sorted, back_sorted);
    assert_ne!(front, back);
  }
}
