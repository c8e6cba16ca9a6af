//! Outline demo: a grid of blocks with the selection walking across it.
//!
//! There is no picking here on purpose; the demo drives the
//! `SelectedBlock` resource directly so the cage and its
//! distance-adaptive thickness are easy to inspect from the slowly
//! orbiting camera.

use bevy::prelude::*;

use outline_bevy::{BlockOutlinePlugin, SelectedBlock};
use outline_plugin::SelectedBox;

const GRID_SIZE: i32 = 8;

fn main() {
  App::new()
    .add_plugins(DefaultPlugins)
    .add_plugins(BlockOutlinePlugin)
    .add_systems(Startup, setup_scene)
    .add_systems(Update, (walk_selection, orbit_camera))
    .run();
}

fn setup_scene(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
) {
  let block = meshes.add(Cuboid::from_length(1.0));
  let stone = materials.add(StandardMaterial {
    base_color: Color::srgb(0.55, 0.55, 0.6),
    ..default()
  });

  for x in 0..GRID_SIZE {
    for z in 0..GRID_SIZE {
      commands.spawn((
        Mesh3d(block.clone()),
        MeshMaterial3d(stone.clone()),
        // Cuboid is centered; block cells are min-corner addressed.
        Transform::from_xyz(x as f32 + 0.5, 0.5, z as f32 + 0.5),
      ));
    }
  }

  commands.spawn((
    DirectionalLight {
      illuminance: 8_000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_xyz(6.0, 12.0, 4.0).looking_at(Vec3::new(4.0, 0.0, 4.0), Vec3::Y),
  ));

  commands.spawn((
    Camera3d::default(),
    Transform::from_xyz(12.0, 7.0, 12.0).looking_at(Vec3::new(4.0, 0.5, 4.0), Vec3::Y),
  ));
}

/// Step the selection across the grid about twice a second.
fn walk_selection(time: Res<Time>, mut selected: ResMut<SelectedBlock>) {
  let step = (time.elapsed_secs() * 2.0) as i32;
  let x = step % GRID_SIZE;
  let z = (step / GRID_SIZE) % GRID_SIZE;
  selected.0 = Some(SelectedBox::block(x, 0, z));
}

fn orbit_camera(time: Res<Time>, mut cameras: Query<&mut Transform, With<Camera3d>>) {
  let center = Vec3::new(GRID_SIZE as f32 / 2.0, 0.5, GRID_SIZE as f32 / 2.0);
  let angle = time.elapsed_secs() * 0.2;
  // Radius sweeps in and out so every thickness tier gets exercised.
  let radius = 8.0 + 7.0 * (time.elapsed_secs() * 0.1).sin();

  for mut transform in &mut cameras {
    transform.translation = center + Vec3::new(angle.cos() * radius, 4.0, angle.sin() * radius);
    transform.look_at(center, Vec3::Y);
  }
}
