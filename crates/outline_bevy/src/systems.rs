//! Outline mesh setup and per-frame rewrite.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;

use outline_plugin::{OutlineVertex, VERTEX_COUNT};

use crate::resources::{OutlineAssets, OutlineState, SelectedBlock};

/// Split the packed vertex array into Bevy mesh attribute vectors.
pub fn mesh_attributes(vertices: &[OutlineVertex]) -> (Vec<[f32; 3]>, Vec<[f32; 4]>) {
  let positions = vertices.iter().map(|v| v.position).collect();
  let colors = vertices.iter().map(|v| v.color.to_f32_array()).collect();
  (positions, colors)
}

/// Create the outline mesh, material, and entity. The entity starts
/// hidden until something is selected.
pub fn setup_outline(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
) {
  let (positions, colors) = mesh_attributes(&[OutlineVertex::default(); VERTEX_COUNT]);

  let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
  mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
  mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
  let mesh = meshes.add(mesh);

  // Blend mode disables depth write, so the outline composites over the
  // scene without occluding it.
  let material = materials.add(StandardMaterial {
    base_color: Color::WHITE,
    unlit: true,
    alpha_mode: AlphaMode::Blend,
    ..default()
  });

  let entity = commands
    .spawn((
      Mesh3d(mesh.clone()),
      MeshMaterial3d(material),
      Visibility::Hidden,
      // The mesh is rewritten in place as the selection moves; the Aabb
      // computed at spawn would cull it elsewhere.
      NoFrustumCulling,
    ))
    .id();

  commands.insert_resource(OutlineAssets { mesh, entity });
}

/// Rebuild the cage for the current selection and camera, and rewrite
/// the mesh attributes. Hides the entity when nothing is selected.
pub fn update_outline(
  selected: Res<SelectedBlock>,
  assets: Res<OutlineAssets>,
  mut state: ResMut<OutlineState>,
  mut meshes: ResMut<Assets<Mesh>>,
  cameras: Query<&GlobalTransform, With<Camera3d>>,
  mut visibility: Query<&mut Visibility>,
) {
  let Ok(mut vis) = visibility.get_mut(assets.entity) else {
    return;
  };

  let (Some(selected), Ok(camera)) = (selected.0, cameras.single()) else {
    *vis = Visibility::Hidden;
    return;
  };

  state.geometry.update(&selected, camera.translation().to_array());

  if let Some(mesh) = meshes.get_mut(&assets.mesh) {
    let (positions, colors) = mesh_attributes(state.geometry.vertices());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    *vis = Visibility::Visible;
  }
}

#[cfg(test)]
#[path = "systems_test.rs"]
mod systems_test;
