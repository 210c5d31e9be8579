//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems once per display frame, and produces `GameStateSnapshot`s.
//! Completely headless (no renderer or XR dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use fruitblade_core::commands::PlayerCommand;
use fruitblade_core::components::{Controller, Fruit};
use fruitblade_core::config::GameConfig;
use fruitblade_core::enums::{GamePhase, Hand};
use fruitblade_core::events::GameEvent;
use fruitblade_core::state::GameStateSnapshot;
use fruitblade_core::types::{Pose, SimTime};

use crate::hud::ScoreHud;
use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all game state.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_fruit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
    hud: ScoreHud,
}

impl SimulationEngine {
    /// Create a new engine. The config is validated first.
    pub fn new(config: GameConfig) -> Result<Self, String> {
        config.validate()?;
        let hud = ScoreHud::new(&config.hud, None);
        let mut world = World::new();
        world_setup::setup_world(&mut world, &config.sword);
        Ok(Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            next_fruit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            hud,
        })
    }

    /// Attach the family name of the font the host loaded for the HUD.
    pub fn set_hud_font(&mut self, family: impl Into<String>) {
        self.hud.set_font(family.into());
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one display frame of `dt` seconds and return the snapshot.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = self.clamp_dt(dt);
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            self.hud.view(),
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn hud(&self) -> &ScoreHud {
        &self.hud
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of fruit currently in flight.
    pub fn fruit_count(&self) -> usize {
        self.world.query::<&Fruit>().iter().count()
    }

    /// Place a fruit directly (bypasses the spawn roll).
    #[cfg(test)]
    pub fn spawn_test_fruit(
        &mut self,
        position: fruitblade_core::types::Position,
        velocity: fruitblade_core::types::Velocity,
    ) -> hecs::Entity {
        let id = self.next_fruit_id;
        self.next_fruit_id += 1;
        self.score.spawned += 1;
        world_setup::spawn_fruit_at(&mut self.world, &self.config.spawn, id, position, velocity)
    }

    /// Negative or non-finite deltas integrate as zero; large ones are clamped.
    fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_delta)
        } else {
            0.0
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::Idle {
                    self.set_phase(GamePhase::Active);
                }
            }
            PlayerCommand::EndSession => {
                if self.phase != GamePhase::Idle {
                    let cleared = world_setup::clear_fruit(&mut self.world, &mut self.despawn_buffer);
                    debug!(cleared, "cleared fruit at session end");
                    self.set_phase(GamePhase::Idle);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.set_phase(GamePhase::Paused);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.set_phase(GamePhase::Active);
                }
            }
            PlayerCommand::ControllerConnected { hand } => {
                for (_entity, controller) in self.world.query_mut::<&mut Controller>() {
                    if controller.hand == hand {
                        controller.connected = true;
                        controller.tracked = false;
                        debug!(?hand, "controller connected");
                    }
                }
            }
            PlayerCommand::ControllerDisconnected { hand } => {
                for (_entity, controller) in self.world.query_mut::<&mut Controller>() {
                    if controller.hand == hand {
                        controller.connected = false;
                        controller.tracked = false;
                        debug!(?hand, "controller disconnected");
                    }
                }
            }
            PlayerCommand::UpdateControllerPose { hand, pose } => {
                self.update_pose(hand, pose);
            }
        }
    }

    /// A pose is proof of connection, so it also marks the controller connected.
    /// Non-finite or degenerate poses are dropped.
    fn update_pose(&mut self, hand: Hand, pose: Pose) {
        if !(pose.position.is_finite() && pose.orientation.is_finite())
            || pose.orientation.length_squared() <= f32::EPSILON
        {
            return;
        }
        for (_entity, controller) in self.world.query_mut::<&mut Controller>() {
            if controller.hand == hand {
                controller.pose = Pose::new(pose.position, pose.orientation.normalize());
                controller.connected = true;
                controller.tracked = true;
            }
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        info!(from = ?self.phase, to = ?phase, "session phase changed");
        self.phase = phase;
        self.events.push(GameEvent::PhaseChanged { phase });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Spawn roll
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.config.spawn,
            &mut self.next_fruit_id,
            &mut self.score,
            &mut self.events,
        );
        // 2. Sword hit points from controller poses
        systems::sword::run(&mut self.world);
        // 3. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 4. Hit test and depth cull (marks only)
        systems::slicing::run(
            &self.world,
            &self.config.rules,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. Remove marked fruit
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. HUD refresh
        if self.hud.update(self.score.score) {
            self.events.push(GameEvent::ScoreChanged {
                score: self.score.score,
            });
        }
    }
}
