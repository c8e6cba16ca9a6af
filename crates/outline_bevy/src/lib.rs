//! Bevy presentation layer for outline_plugin.
//!
//! Bridges the engine-independent outline geometry with Bevy: the cage is
//! kept as a single triangle-list `Mesh` asset whose position and color
//! attributes are rewritten whenever the selection or the camera moves.
//! Bevy owns buffer upload and device lifecycle here; the alpha-blended
//! unlit material reproduces the blend-on / depth-write-off compositing
//! the core frame submitter specifies.

pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use resources::{OutlineAssets, SelectedBlock};

/// Bevy plugin rendering the targeted-block outline.
pub struct BlockOutlinePlugin;

impl Plugin for BlockOutlinePlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<SelectedBlock>()
      .init_resource::<resources::OutlineState>()
      .add_systems(Startup, systems::setup_outline)
      .add_systems(Update, systems::update_outline);
  }
}
