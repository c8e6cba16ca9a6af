//! Bevy resources for the targeted-block outline.

use bevy::prelude::*;
use outline_plugin::{OutlineGeometry, SelectedBox};

/// Output of the picking subsystem: the box currently targeted by the
/// view ray, or `None` when nothing is in reach (outline hidden).
#[derive(Resource, Default)]
pub struct SelectedBlock(pub Option<SelectedBox>);

/// Handles to the outline mesh asset and its entity.
#[derive(Resource)]
pub struct OutlineAssets {
  pub mesh: Handle<Mesh>,
  pub entity: Entity,
}

/// The reused geometry builder backing the mesh rewrite.
#[derive(Resource, Default)]
pub struct OutlineState {
  pub geometry: OutlineGeometry,
}
