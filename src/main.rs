//! Demo entry point
//!
//! Runs the cognitive scheduler against a scripted in-memory world that
//! replays a handful of hand-built scenes, then prints the command log.
//! The scenes walk the agent through its whole behavioral repertoire:
//! sack a near jewel, eat near food, wander when nothing is reachable,
//! survive a server timeout, and stop once every leaflet is satisfied.

use clap::Parser;
use std::sync::Arc;
use ws3d_creature_agent::agent::CognitiveScheduler;
use ws3d_creature_agent::core::config::AgentConfig;
use ws3d_creature_agent::core::error::Result;
use ws3d_creature_agent::core::types::{CreatureId, Vec2};
use ws3d_creature_agent::world::client::LeafletMonitor;
use ws3d_creature_agent::world::objects::{Inventory, Leaflet, LeafletItem, ObjectCategory, WorldObject};
use ws3d_creature_agent::world::scripted::{Frame, ScriptedWorld};

/// Prints the per-cycle leaflet snapshot, standing in for the GUI mind
/// window of the full system
struct PrintMonitor;

impl LeafletMonitor for PrintMonitor {
    fn observe(&self, leaflets: &[Leaflet], _inventory: Option<&Inventory>) {
        match serde_json::to_string(leaflets) {
            Ok(json) => println!("leaflets: {json}"),
            Err(e) => tracing::warn!(error = %e, "could not serialize leaflets"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ws3d-creature-agent", about = "Scripted demo of the creature decision core")]
struct Args {
    /// Delay between cognitive cycles in milliseconds
    #[arg(long, default_value_t = 100)]
    pace_ms: u64,

    /// Cycle limit for the run; the demo script yields five deciding
    /// frames, and past those the final scene repeats
    #[arg(long, default_value_t = 5)]
    cycles: u64,

    /// Optional TOML configuration file overriding the defaults
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn leaflets(satisfied: bool) -> Vec<Leaflet> {
    vec![
        Leaflet::new(1, 24, satisfied, vec![LeafletItem::new("Red", if satisfied { 2 } else { 0 }, 2)]),
        Leaflet::new(2, 16, satisfied, vec![LeafletItem::new("Green", if satisfied { 1 } else { 0 }, 1)]),
        Leaflet::new(3, 30, satisfied, vec![LeafletItem::new("Blue", if satisfied { 3 } else { 0 }, 3)]),
    ]
}

fn creature(satisfied: bool) -> WorldObject {
    WorldObject::creature("creature-0", 900.0, false, leaflets(satisfied))
}

fn jewel(name: &str, color: &str, distance: f32) -> WorldObject {
    WorldObject::item(name, ObjectCategory::Jewel, Vec2::new(distance, 0.0), distance, color)
}

fn food(name: &str, distance: f32) -> WorldObject {
    WorldObject::item(name, ObjectCategory::Food, Vec2::new(0.0, distance), distance, "Food")
}

fn brick(distance: f32) -> WorldObject {
    WorldObject::item("wall", ObjectCategory::Brick, Vec2::new(distance, 0.0), distance, "Brick")
}

/// The demo script: one frame per cognitive cycle
fn build_script(world: &ScriptedWorld) {
    // Near jewel: gets sacked
    world.push_scene(vec![creature(false), jewel("jewel-red-1", "Red", 30.0)]);
    // Near food: gets eaten
    world.push_scene(vec![creature(false), food("food-1", 25.0)]);
    // Leaflet jewel in the distance with plenty of fuel: approached
    world.push_scene(vec![creature(false), jewel("jewel-green-1", "Green", 320.0)]);
    // Wall ahead: rotate away
    world.push_scene(vec![creature(false), brick(50.0), food("food-2", 200.0)]);
    // Server timeout: cycle skipped entirely
    world.push_frame(Frame::NoData);
    // Every leaflet satisfied: stop
    world.push_scene(vec![creature(true), food("food-2", 200.0)]);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("ws3d_creature_agent=debug")
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => AgentConfig::from_toml_file(path)?,
        None => AgentConfig::default(),
    };
    config.pace_ms = args.pace_ms;
    // One cycle per scene frame; the no-data frame is skipped, not counted
    config.max_cycles = Some(args.cycles);

    let world = Arc::new(ScriptedWorld::repeating());
    build_script(&world);

    tracing::info!("running scripted demo");
    let mut scheduler = CognitiveScheduler::with_monitor(
        world.clone(),
        Arc::new(PrintMonitor),
        CreatureId::new("creature-0"),
        config,
    )?;
    scheduler.start().await?;
    scheduler.join().await;

    println!("\n=== emitted commands ===");
    for (i, command) in world.commands().iter().enumerate() {
        println!("{:>2}. {:?}", i + 1, command);
    }
    println!(
        "\nCompleted {} cognitive cycles (final state: {:?})",
        scheduler.cycles(),
        scheduler.state()
    );
    Ok(())
}
