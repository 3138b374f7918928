//! In-memory world client that replays queued frames
//!
//! Stands in for the network client in the demo binary and in tests. Each
//! call to `fetch_creature_state` pops the next queued frame; a `NoData`
//! frame reproduces a server timeout. Every command the agent emits is
//! recorded for later inspection.

use crate::core::error::{AgentError, Result};
use crate::core::types::{CreatureId, Vec2};
use crate::world::client::WorldClient;
use crate::world::objects::{Inventory, WorldObject};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted world tick
#[derive(Debug, Clone)]
pub enum Frame {
    /// A full visible-object snapshot
    Scene(Vec<WorldObject>),
    /// Server had nothing for this tick
    NoData,
    /// Connection-level failure, unlike a plain timeout
    Fault(String),
}

/// Command recorded by the scripted world
#[derive(Debug, Clone, PartialEq)]
pub enum EmittedCommand {
    Move { target: Vec2 },
    Rotate,
    SackIt { item: String },
    EatIt { item: String },
    Stop,
    Start,
    Terminate,
}

#[derive(Default)]
struct ScriptedState {
    frames: VecDeque<Frame>,
    commands: Vec<EmittedCommand>,
    inventory: Inventory,
    send_fault: Option<String>,
}

/// Scripted in-memory [`WorldClient`]
#[derive(Default)]
pub struct ScriptedWorld {
    state: Mutex<ScriptedState>,
    /// When the frame queue runs dry: repeat the last scene frame if true,
    /// otherwise answer `NoDataAvailable`.
    repeat_last: bool,
    last_scene: Mutex<Option<Vec<WorldObject>>>,
}

impl ScriptedWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep serving the final scene frame after the script is exhausted
    pub fn repeating() -> Self {
        Self {
            repeat_last: true,
            ..Self::default()
        }
    }

    pub fn push_frame(&self, frame: Frame) {
        self.state.lock().unwrap().frames.push_back(frame);
    }

    pub fn push_scene(&self, objects: Vec<WorldObject>) {
        self.push_frame(Frame::Scene(objects));
    }

    pub fn set_inventory(&self, inventory: Inventory) {
        self.state.lock().unwrap().inventory = inventory;
    }

    /// Make the next action send fail with an `EmitFailure`. Applies to
    /// action commands only, not to lifecycle calls.
    pub fn fail_next_send(&self, reason: &str) {
        self.state.lock().unwrap().send_fault = Some(reason.into());
    }

    /// Commands emitted so far, in order
    pub fn commands(&self) -> Vec<EmittedCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    fn record(&self, command: EmittedCommand) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = state.send_fault.take() {
            return Err(AgentError::EmitFailure(reason));
        }
        state.commands.push(command);
        Ok(())
    }
}

#[async_trait]
impl WorldClient for ScriptedWorld {
    async fn fetch_creature_state(&self, _creature: &CreatureId) -> Result<Vec<WorldObject>> {
        let frame = self.state.lock().unwrap().frames.pop_front();
        match frame {
            Some(Frame::Scene(objects)) => {
                *self.last_scene.lock().unwrap() = Some(objects.clone());
                Ok(objects)
            }
            Some(Frame::NoData) => Err(AgentError::NoDataAvailable),
            Some(Frame::Fault(reason)) => Err(AgentError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                reason,
            ))),
            None if self.repeat_last => self
                .last_scene
                .lock()
                .unwrap()
                .clone()
                .ok_or(AgentError::NoDataAvailable),
            None => Err(AgentError::NoDataAvailable),
        }
    }

    async fn fetch_inventory(&self, _container: &str) -> Result<Inventory> {
        Ok(self.state.lock().unwrap().inventory.clone())
    }

    async fn send_move(&self, _creature: &CreatureId, _right: f32, _left: f32, target: Vec2) -> Result<()> {
        self.record(EmittedCommand::Move { target })
    }

    async fn send_rotate(&self, _creature: &CreatureId, _right: f32, _left: f32, _angular: f32) -> Result<()> {
        self.record(EmittedCommand::Rotate)
    }

    async fn send_sack_it(&self, _creature: &CreatureId, item: &str) -> Result<()> {
        self.record(EmittedCommand::SackIt { item: item.into() })
    }

    async fn send_eat_it(&self, _creature: &CreatureId, item: &str) -> Result<()> {
        self.record(EmittedCommand::EatIt { item: item.into() })
    }

    async fn send_stop(&self, _creature: &CreatureId) -> Result<()> {
        self.record(EmittedCommand::Stop)
    }

    async fn start_creature(&self, _creature: &CreatureId) -> Result<()> {
        self.state.lock().unwrap().commands.push(EmittedCommand::Start);
        Ok(())
    }

    async fn terminate_creature(&self, _creature: &CreatureId) -> Result<()> {
        self.state.lock().unwrap().commands.push(EmittedCommand::Terminate);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::objects::ObjectCategory;

    #[tokio::test]
    async fn test_frames_replay_in_order() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        world.push_scene(vec![WorldObject::creature("c", 1000.0, false, vec![])]);
        world.push_frame(Frame::NoData);

        let first = world.fetch_creature_state(&id).await.unwrap();
        assert_eq!(first[0].category, ObjectCategory::Creature);
        assert!(matches!(
            world.fetch_creature_state(&id).await,
            Err(AgentError::NoDataAvailable)
        ));
        // Queue exhausted, non-repeating
        assert!(world.fetch_creature_state(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_repeating_world_serves_last_scene() {
        let world = ScriptedWorld::repeating();
        let id = CreatureId::new("c");
        world.push_scene(vec![WorldObject::creature("c", 1000.0, false, vec![])]);

        assert!(world.fetch_creature_state(&id).await.is_ok());
        assert!(world.fetch_creature_state(&id).await.is_ok());
    }

    #[tokio::test]
    async fn test_injected_send_fault_fails_exactly_once() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        world.fail_next_send("actuator down");

        assert!(matches!(
            world.send_sack_it(&id, "jewel-1").await,
            Err(AgentError::EmitFailure(_))
        ));
        // The fault is consumed; the failed command was not recorded
        world.send_sack_it(&id, "jewel-1").await.unwrap();
        assert_eq!(
            world.commands(),
            vec![EmittedCommand::SackIt { item: "jewel-1".into() }]
        );
    }

    #[tokio::test]
    async fn test_fault_frame_is_not_a_timeout() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        world.push_frame(Frame::Fault("socket closed".into()));

        match world.fetch_creature_state(&id).await {
            Err(AgentError::IoError(_)) => {}
            other => panic!("expected IoError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_commands_are_recorded() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        world.send_sack_it(&id, "jewel-3").await.unwrap();
        world.send_stop(&id).await.unwrap();
        assert_eq!(
            world.commands(),
            vec![
                EmittedCommand::SackIt { item: "jewel-3".into() },
                EmittedCommand::Stop
            ]
        );
    }
}
