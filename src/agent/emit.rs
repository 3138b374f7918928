//! Action emission - chosen action to world server commands
//!
//! The last stage of a cycle. Targeted actions silently do nothing when
//! the decision carried no target; the rotate parameters reproduce the
//! reference clockwise turn.

use crate::core::error::Result;
use crate::core::types::CreatureId;
use crate::mind::preference::Decision;
use crate::rules::action_rules::CreatureAction;
use crate::world::client::WorldClient;

/// Wheel speed used when driving toward a target
const GO_SPEED: f32 = 1.0;
/// Wheel speeds and angular velocity of the clockwise avoidance turn
const ROTATE_PARAMS: (f32, f32, f32) = (2.0, -2.0, 1.0);

/// Send the chosen action to the world server.
///
/// Fire-and-forget: a failure is reported to the caller for logging but
/// the action is never retried within the cycle.
pub async fn emit_action(
    client: &dyn WorldClient,
    creature: &CreatureId,
    action: CreatureAction,
    decision: &Decision,
) -> Result<()> {
    match action {
        CreatureAction::DoNothing => Ok(()),
        CreatureAction::RotateClockwise => {
            let (right, left, angular) = ROTATE_PARAMS;
            client.send_rotate(creature, right, left, angular).await
        }
        CreatureAction::GoToItem => match &decision.target {
            Some(target) => {
                client
                    .send_move(creature, GO_SPEED, GO_SPEED, target.position)
                    .await
            }
            None => Ok(()),
        },
        CreatureAction::SackItem => match &decision.target {
            Some(target) => client.send_sack_it(creature, &target.name).await,
            None => Ok(()),
        },
        CreatureAction::EatItem => match &decision.target {
            Some(target) => client.send_eat_it(creature, &target.name).await,
            None => Ok(()),
        },
        CreatureAction::StopCreature => client.send_stop(creature).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;
    use crate::world::objects::{ObjectCategory, WorldObject};
    use crate::world::scripted::{EmittedCommand, ScriptedWorld};

    fn targeted(name: &str) -> Decision {
        Decision {
            target: Some(WorldObject::item(
                name,
                ObjectCategory::Jewel,
                Vec2::new(10.0, 20.0),
                30.0,
                "Red",
            )),
            sack_it: true,
            ..Decision::none()
        }
    }

    #[tokio::test]
    async fn test_sack_sends_item_name() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        emit_action(&world, &id, CreatureAction::SackItem, &targeted("jewel-7"))
            .await
            .unwrap();
        assert_eq!(world.commands(), vec![EmittedCommand::SackIt { item: "jewel-7".into() }]);
    }

    #[tokio::test]
    async fn test_go_to_item_sends_target_position() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        emit_action(&world, &id, CreatureAction::GoToItem, &targeted("jewel-7"))
            .await
            .unwrap();
        assert_eq!(
            world.commands(),
            vec![EmittedCommand::Move { target: Vec2::new(10.0, 20.0) }]
        );
    }

    #[tokio::test]
    async fn test_targeted_action_without_target_is_noop() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        for action in [CreatureAction::GoToItem, CreatureAction::SackItem, CreatureAction::EatItem] {
            emit_action(&world, &id, action, &Decision::none()).await.unwrap();
        }
        assert!(world.commands().is_empty());
    }

    #[tokio::test]
    async fn test_do_nothing_emits_nothing() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        emit_action(&world, &id, CreatureAction::DoNothing, &Decision::none())
            .await
            .unwrap();
        assert!(world.commands().is_empty());
    }

    #[tokio::test]
    async fn test_rotate_and_stop() {
        let world = ScriptedWorld::new();
        let id = CreatureId::new("c");
        emit_action(&world, &id, CreatureAction::RotateClockwise, &Decision::none())
            .await
            .unwrap();
        emit_action(&world, &id, CreatureAction::StopCreature, &Decision::none())
            .await
            .unwrap();
        assert_eq!(world.commands(), vec![EmittedCommand::Rotate, EmittedCommand::Stop]);
    }
}
