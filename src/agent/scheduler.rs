//! Cognitive cycle scheduler - the perceive-decide-act control loop
//!
//! Runs the whole decision pipeline on one dedicated tokio task:
//! fetch world state -> normalize -> select preference -> encode ->
//! select action -> emit -> pace. Cycles are strictly sequential; one
//! cycle's action is emitted before the next fetch begins.
//!
//! Cancellation is cooperative: `abort` flips a watch flag observed at
//! the top of every cycle and inside the pacing sleep, so cancellation
//! latency is bounded by one in-flight fetch/emit plus the pacing
//! interval. Transient per-cycle failures are contained here; anything
//! else stops the loop. Configuration errors surface to the caller at
//! construction.

use crate::agent::emit::emit_action;
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use crate::core::types::{CreatureId, Cycle};
use crate::mind::{creature_record, encode, normalize, select_preference};
use crate::rules::RuleSet;
use crate::world::client::{LeafletMonitor, NullMonitor, WorldClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Container id of the creature's sack on the world server
const SACK_CONTAINER: &str = "0";

/// Lifecycle state of the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Aborted,
}

/// Drives the cognitive cycle loop for one creature
pub struct CognitiveScheduler {
    client: Arc<dyn WorldClient>,
    monitor: Arc<dyn LeafletMonitor>,
    config: AgentConfig,
    rules: RuleSet,
    creature: CreatureId,
    state: Arc<Mutex<RunState>>,
    cycles: Arc<AtomicU64>,
    abort_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl CognitiveScheduler {
    /// Build a scheduler with the standard rule set and no visualization
    pub fn new(client: Arc<dyn WorldClient>, creature: CreatureId, config: AgentConfig) -> Result<Self> {
        Self::with_monitor(client, Arc::new(NullMonitor), creature, config)
    }

    /// Build a scheduler that forwards leaflet snapshots to a monitor
    pub fn with_monitor(
        client: Arc<dyn WorldClient>,
        monitor: Arc<dyn LeafletMonitor>,
        creature: CreatureId,
        config: AgentConfig,
    ) -> Result<Self> {
        config.validate()?;
        let rules = RuleSet::standard();
        rules.validate()?;

        let (abort_tx, _) = watch::channel(false);
        Ok(Self {
            client,
            monitor,
            config,
            rules,
            creature,
            state: Arc::new(Mutex::new(RunState::Idle)),
            cycles: Arc::new(AtomicU64::new(0)),
            abort_tx,
            handle: None,
        })
    }

    pub fn state(&self) -> RunState {
        *self.state.lock().unwrap()
    }

    /// Completed cognitive cycles. Skipped cycles do not count.
    pub fn cycles(&self) -> Cycle {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Start the cycle loop. Valid only from `Idle`; a no-op otherwise.
    pub async fn start(&mut self) -> Result<()> {
        {
            let mut state = self.state.lock().unwrap();
            if *state != RunState::Idle {
                tracing::debug!(state = ?*state, "start ignored: scheduler not idle");
                return Ok(());
            }
            *state = RunState::Running;
        }

        if let Err(e) = self.client.start_creature(&self.creature).await {
            tracing::warn!(error = %e, "could not start creature actuators");
        }
        tracing::info!(creature = %self.creature, "cognitive cycle starting");

        let loop_task = CycleLoop {
            client: Arc::clone(&self.client),
            monitor: Arc::clone(&self.monitor),
            config: self.config.clone(),
            rules: self.rules.clone(),
            creature: self.creature.clone(),
            state: Arc::clone(&self.state),
            cycles: Arc::clone(&self.cycles),
            abort_rx: self.abort_tx.subscribe(),
        };
        self.handle = Some(tokio::spawn(loop_task.run()));
        Ok(())
    }

    /// Request cooperative cancellation. A no-op unless the loop is
    /// running, so repeated calls and calls while idle change nothing.
    /// With `terminate_creature` the creature is also removed from the
    /// world, independently of loop cancellation.
    pub async fn abort(&mut self, terminate_creature: bool) {
        {
            let mut state = self.state.lock().unwrap();
            if *state == RunState::Running {
                tracing::info!(creature = %self.creature, "aborting cognitive cycle");
                let _ = self.abort_tx.send(true);
                *state = RunState::Aborted;
            }
        }

        if terminate_creature {
            if let Err(e) = self.client.terminate_creature(&self.creature).await {
                tracing::warn!(error = %e, "could not terminate creature");
            }
        }
    }

    /// Wait for the loop task to finish (after completion or abort)
    pub async fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

/// Owned state of the spawned loop task
struct CycleLoop {
    client: Arc<dyn WorldClient>,
    monitor: Arc<dyn LeafletMonitor>,
    config: AgentConfig,
    rules: RuleSet,
    creature: CreatureId,
    state: Arc<Mutex<RunState>>,
    cycles: Arc<AtomicU64>,
    abort_rx: watch::Receiver<bool>,
}

impl CycleLoop {
    async fn run(mut self) {
        loop {
            if *self.abort_rx.borrow() {
                break;
            }

            if let Err(e) = self.run_one_cycle().await {
                if e.is_transient() {
                    tracing::warn!(error = %e, "skipping cycle");
                } else {
                    tracing::error!(error = %e, "world client failed, stopping");
                    let mut state = self.state.lock().unwrap();
                    if *state == RunState::Running {
                        *state = RunState::Aborted;
                    }
                    break;
                }
            }

            if let Some(max) = self.config.max_cycles {
                if self.cycles.load(Ordering::SeqCst) >= max {
                    tracing::info!(cycles = max, "cycle limit reached");
                    let mut state = self.state.lock().unwrap();
                    if *state == RunState::Running {
                        *state = RunState::Idle;
                    }
                    return;
                }
            }

            if let Some(pace) = self.config.pace() {
                tokio::select! {
                    _ = tokio::time::sleep(pace) => {}
                    _ = self.abort_rx.changed() => break,
                }
            } else {
                // Keep an unpaced loop cancellable and cooperative
                tokio::task::yield_now().await;
            }
        }

        tracing::info!(creature = %self.creature, "cognitive cycle stopped");
    }

    /// One perceive-decide-act iteration. An error before the decision
    /// point skips the cycle and leaves the counter untouched; an emit
    /// failure after it is logged and the counter still advances.
    async fn run_one_cycle(&self) -> Result<()> {
        let objects = self.client.fetch_creature_state(&self.creature).await?;
        let creature = creature_record(&objects)?;

        // Display-only snapshot; fetch failure never skips the cycle
        let inventory = match self.client.fetch_inventory(SACK_CONTAINER).await {
            Ok(inventory) => Some(inventory),
            Err(e) => {
                tracing::debug!(error = %e, "inventory unavailable this cycle");
                None
            }
        };
        self.monitor.observe(&creature.leaflets, inventory.as_ref());

        let facts = normalize(&objects, &self.config)?;

        let fuel = creature.fuel.unwrap_or(0.0);
        let decision = select_preference(&facts, fuel, &creature.leaflets, &self.config);
        let activations = encode(&decision);
        let action = self.rules.select_action(&activations);

        tracing::debug!(
            cycle = self.cycles.load(Ordering::SeqCst),
            ?action,
            target = decision.target.as_ref().map(|t| t.name.as_str()),
            collided = facts.has_collided,
            wall_ahead = facts.wall_ahead,
            items = facts.sorted_items.len(),
            "cycle decision"
        );

        if let Err(e) = emit_action(self.client.as_ref(), &self.creature, action, &decision).await {
            tracing::warn!(error = %e, ?action, "emit failed, not retrying this cycle");
        }

        self.cycles.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
