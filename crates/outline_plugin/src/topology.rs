//! Precomputed face topology for the thick-line outline cage.
//!
//! The outline is not drawn with real lines. Each box face gets a hollow
//! picture-frame of quads between an outer boundary (box corners pushed
//! outward by a small inset) and an inner boundary (the outer pulled back
//! in by the line thickness), giving exactly 4 coordinate values per axis:
//!
//! ```text
//!                #--#----------#--#<== OUTER_MAX (3)
//!                |  |          |  |
//!                |  #----------#<===== INNER_MAX (2)
//!                |  |          |  |
//!                |  |          |  |
//!                |  |          |  |
//! (1) INNER_MIN ===>#----------#  |
//!                |  |          |  |
//! (0) OUTER_MIN =>#--#----------#--#
//! ```
//!
//! The inner/outer gap is greatly exaggerated; the real band is a few
//! hundredths of a block wide, which reads as a thick line.
//!
//! The 4 values per axis partition each face into a 3x3 grid of cells.
//! The frame is the 8 outer cells (center omitted), and every cell is
//! emitted with both windings so the cage stays visible from inside the
//! block as well:
//!
//! ```text
//! 6 faces x 8 frame cells x 2 windings = 96 quads
//! 96 quads x 6 vertices (two triangles) = 576 vertices
//! ```
//!
//! Vertices carry no positions here, only coordinate *selectors*: each
//! table entry is `[sel_x, sel_y, sel_z]` with components in 0..=3,
//! indexing the per-axis 4-element coordinate arrays built by the
//! geometry builder. The table is generated at compile time and never
//! changes; only the 4x3 coordinate values vary per update.

/// Box faces covered by the outline cage.
pub const FACE_COUNT: usize = 6;

/// Quads per face: 8 frame cells, each emitted front and back.
pub const QUADS_PER_FACE: usize = 16;

/// Total quads in the cage.
pub const QUAD_COUNT: usize = FACE_COUNT * QUADS_PER_FACE;

/// Triangle-list vertices per quad.
pub const VERTS_PER_QUAD: usize = 6;

/// Total vertices emitted per update. Invariant regardless of box shape.
pub const VERTEX_COUNT: usize = QUAD_COUNT * VERTS_PER_QUAD;

/// Fixed axis of each face block, in emission order:
/// Y-min, Y-max, X-min, X-max, Z-min, Z-max.
const FACE_AXIS: [usize; FACE_COUNT] = [1, 1, 0, 0, 2, 2];

/// Coordinate selector of the fixed axis per face (0 = outer-min side,
/// 3 = outer-max side).
const FACE_SELECTOR: [u8; FACE_COUNT] = [0, 3, 0, 3, 0, 3];

/// Vertex emission order within one frame cell: the quad's two triangles,
/// then the same two triangles with reversed winding for the back side.
const CELL_ORDER: [usize; VERTS_PER_QUAD * 2] = [0, 1, 2, 2, 3, 0, 0, 2, 1, 2, 0, 3];

/// Coordinate selector triplets, one per emitted vertex.
///
/// Organized as 6 face blocks of 96 entries in FACE_AXIS order. Within a
/// block the fixed-axis component is constant (0 or 3) and the in-plane
/// components walk the 8 frame cells.
pub const FACE_TOPOLOGY: [[u8; 3]; VERTEX_COUNT] = generate_face_topology();

/// Generate the selector table at compile time.
const fn generate_face_topology() -> [[u8; 3]; VERTEX_COUNT] {
  let mut table = [[0u8; 3]; VERTEX_COUNT];
  let mut out = 0usize;

  let mut face = 0usize;
  while face < FACE_COUNT {
    let fixed = FACE_AXIS[face];
    let u = (fixed + 1) % 3;
    let v = (fixed + 2) % 3;

    let mut i = 0u8;
    while i < 3 {
      let mut j = 0u8;
      while j < 3 {
        // Skip the center cell; the frame is hollow.
        if !(i == 1 && j == 1) {
          let corners = [[i, j], [i + 1, j], [i + 1, j + 1], [i, j + 1]];

          let mut k = 0usize;
          while k < CELL_ORDER.len() {
            let corner = corners[CELL_ORDER[k]];
            let mut sel = [0u8; 3];
            sel[fixed] = FACE_SELECTOR[face];
            sel[u] = corner[0];
            sel[v] = corner[1];
            table[out] = sel;
            out += 1;
            k += 1;
          }
        }
        j += 1;
      }
      i += 1;
    }
    face += 1;
  }

  table
}

#[cfg(test)]
#[path = "topology_test.rs"]
mod topology_test;
