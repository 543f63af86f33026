//! # Host Interface
//!
//! The narrow boundary between the level core and the rendering/physics
//! host. The core never touches rendering, physics, or input APIs; it only
//! issues the five calls below. Asset and network fetches (player model,
//! skybox image) happen on the host's side of this trait, after expansion
//! returns.

use crate::expand::{Vec3, WorldPlacements};

/// Operations the rendering/physics host exposes to the level core.
///
/// `instantiate_player` and `request_skybox` may be asynchronous on the
/// host's side; the core treats every call as a black box that eventually
/// succeeds or fails within the host.
pub trait WorldHost {
    /// Opaque identifier for an instantiated object.
    type Handle;

    /// Creates one static collidable block.
    fn instantiate_static(&mut self, position: Vec3) -> Self::Handle;

    /// Creates the goal marker.
    fn instantiate_goal_marker(&mut self, position: Vec3) -> Self::Handle;

    /// Creates the player at its spawn position.
    fn instantiate_player(&mut self, position: Vec3) -> Self::Handle;

    /// Creates one enemy at its spawn position.
    fn instantiate_enemy(&mut self, position: Vec3) -> Self::Handle;

    /// Kicks off a skybox fetch. Fire-and-forget from the core's view.
    fn request_skybox(&mut self, url: &str);
}

/// Stages an expanded level on a host.
///
/// Call order is deterministic: all blocks in placement order, then the goal
/// marker, then the player, then all enemies, then the skybox request if any.
/// Returns the player handle, since that is the object the caller almost
/// always needs next (camera follow, input binding).
pub fn stage_level<H: WorldHost>(host: &mut H, placements: &WorldPlacements) -> H::Handle {
    for &block in &placements.blocks {
        host.instantiate_static(block);
    }
    host.instantiate_goal_marker(placements.goal);
    let player = host.instantiate_player(placements.spawn);
    for &enemy in &placements.enemies {
        host.instantiate_enemy(enemy);
    }
    if let Some(skybox) = &placements.skybox {
        host.request_skybox(&skybox.url);
    }

    log::info!(
        "staged level: {} blocks, {} enemies, skybox={}",
        placements.blocks.len(),
        placements.enemies.len(),
        placements.skybox.is_some()
    );

    player
}

/// One call recorded by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum StagedCall {
    Static(Vec3),
    GoalMarker(Vec3),
    Player(Vec3),
    Enemy(Vec3),
    Skybox(String),
}

/// A host double that records every call instead of instantiating anything.
/// Used by tests and by the CLI's dry-run expansion.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<StagedCall>,
}

impl RecordingHost {
    /// Creates an empty recording host.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorldHost for RecordingHost {
    type Handle = usize;

    fn instantiate_static(&mut self, position: Vec3) -> usize {
        self.calls.push(StagedCall::Static(position));
        self.calls.len() - 1
    }

    fn instantiate_goal_marker(&mut self, position: Vec3) -> usize {
        self.calls.push(StagedCall::GoalMarker(position));
        self.calls.len() - 1
    }

    fn instantiate_player(&mut self, position: Vec3) -> usize {
        self.calls.push(StagedCall::Player(position));
        self.calls.len() - 1
    }

    fn instantiate_enemy(&mut self, position: Vec3) -> usize {
        self.calls.push(StagedCall::Enemy(position));
        self.calls.len() - 1
    }

    fn request_skybox(&mut self, url: &str) {
        self.calls.push(StagedCall::Skybox(url.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::SkyboxRequest;

    fn placements() -> WorldPlacements {
        WorldPlacements {
            spawn: Vec3::new(0.0, 0.5, 0.0),
            goal: Vec3::new(1.0, 0.5, 1.0),
            blocks: vec![Vec3::new(-1.0, 0.5, -1.0), Vec3::new(-1.0, 0.5, 0.0)],
            enemies: vec![Vec3::new(1.0, 0.5, -1.0)],
            skybox: Some(SkyboxRequest {
                url: "https://cdn.example/sky.png".to_string(),
            }),
        }
    }

    #[test]
    fn test_stage_level_call_order() {
        let mut host = RecordingHost::new();
        stage_level(&mut host, &placements());

        assert_eq!(
            host.calls,
            vec![
                StagedCall::Static(Vec3::new(-1.0, 0.5, -1.0)),
                StagedCall::Static(Vec3::new(-1.0, 0.5, 0.0)),
                StagedCall::GoalMarker(Vec3::new(1.0, 0.5, 1.0)),
                StagedCall::Player(Vec3::new(0.0, 0.5, 0.0)),
                StagedCall::Enemy(Vec3::new(1.0, 0.5, -1.0)),
                StagedCall::Skybox("https://cdn.example/sky.png".to_string()),
            ]
        );
    }

    #[test]
    fn test_stage_level_returns_player_handle() {
        let mut host = RecordingHost::new();
        let handle = stage_level(&mut host, &placements());
        assert_eq!(host.calls[handle], StagedCall::Player(Vec3::new(0.0, 0.5, 0.0)));
    }

    #[test]
    fn test_no_skybox_means_no_request() {
        let mut host = RecordingHost::new();
        let mut p = placements();
        p.skybox = None;
        stage_level(&mut host, &p);
        assert!(!host
            .calls
            .iter()
            .any(|call| matches!(call, StagedCall::Skybox(_))));
    }
}
