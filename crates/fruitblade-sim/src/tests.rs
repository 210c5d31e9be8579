//! Tests for the simulation engine: spawning, slicing, culling, HUD and session flow.

use glam::{Quat, Vec3};

use fruitblade_core::commands::PlayerCommand;
use fruitblade_core::components::{Fruit, Spin};
use fruitblade_core::config::GameConfig;
use fruitblade_core::enums::*;
use fruitblade_core::events::GameEvent;
use fruitblade_core::types::{Pose, Position, Rotation, Velocity};

use crate::engine::SimulationEngine;

const FRAME: f32 = 1.0 / 72.0;

/// Engine with spawning disabled and the session already active.
fn quiet_engine() -> SimulationEngine {
    let mut config = GameConfig::default();
    config.spawn.probability = 0.0;
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::StartSession);
    engine.tick(0.0);
    engine
}

/// Pose whose sword hit point (default offset 0, -0.25, 0) lands on `point`.
fn pose_for_sword_at(point: Vec3) -> Pose {
    Pose::new(point + Vec3::new(0.0, 0.25, 0.0), Quat::IDENTITY)
}

fn place_sword(engine: &mut SimulationEngine, hand: Hand, point: Vec3) {
    engine.queue_command(PlayerCommand::UpdateControllerPose {
        hand,
        pose: pose_for_sword_at(point),
    });
}

fn still() -> Velocity {
    Velocity::new(0.0, 0.0, 0.0)
}

// ---- Scenario ----

#[test]
fn test_fruit_near_sword_is_sliced() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Right, Vec3::ZERO);
    engine.spawn_test_fruit(Position::new(0.1, 0.0, 0.0), still());

    let snap = engine.tick(FRAME);

    assert_eq!(snap.score.score, 1);
    assert_eq!(snap.score.sliced, 1);
    assert!(snap.fruits.is_empty());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::FruitSliced { hand: Hand::Right, .. })));
    assert!(snap
        .events
        .contains(&GameEvent::ScoreChanged { score: 1 }));
}

#[test]
fn test_fruit_outside_radius_is_retained() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::new(0.0, 0.0, 0.8));
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 1.0), still());

    let snap = engine.tick(FRAME);

    assert_eq!(snap.score.score, 0);
    assert_eq!(snap.fruits.len(), 1);
    assert_eq!(snap.score.missed, 0);
}

#[test]
fn test_fruit_past_depth_bound_is_missed() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    engine.spawn_test_fruit(Position::new(0.0, 1.0, 1.6), still());

    let snap = engine.tick(FRAME);

    assert_eq!(snap.score.score, 0);
    assert_eq!(snap.score.missed, 1);
    assert!(snap.fruits.is_empty());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::FruitMissed { .. })));
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ScoreChanged { .. })));
}

#[test]
fn test_fruit_exactly_at_bounds_is_retained() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 1.5), still());

    let snap = engine.tick(FRAME);
    assert_eq!(snap.fruits.len(), 1, "z == cull depth is still in play");
}

#[test]
fn test_hit_checked_before_cull() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Right, Vec3::new(0.0, 0.0, 1.6));
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 1.65), still());

    let snap = engine.tick(FRAME);
    assert_eq!(snap.score.score, 1);
    assert_eq!(snap.score.missed, 0);
}

#[test]
fn test_two_swords_score_once() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    place_sword(&mut engine, Hand::Right, Vec3::new(0.01, 0.0, 0.0));
    engine.spawn_test_fruit(Position::new(0.0, 0.05, 0.0), still());

    let snap = engine.tick(FRAME);
    assert_eq!(snap.score.score, 1);
    let sliced = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::FruitSliced { .. }))
        .count();
    assert_eq!(sliced, 1);
}

#[test]
fn test_removal_does_not_skip_neighbours() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    for i in 0..5 {
        engine.spawn_test_fruit(Position::new(i as f32 * 0.01, 0.0, 0.0), still());
    }
    for i in 0..5 {
        engine.spawn_test_fruit(Position::new(i as f32, 0.0, 2.0), still());
    }

    let snap = engine.tick(FRAME);
    assert_eq!(snap.score.score, 5);
    assert_eq!(snap.score.missed, 5);
    assert!(snap.fruits.is_empty());
    assert_eq!(engine.fruit_count(), 0);
}

#[test]
fn test_fruit_moves_by_velocity_times_dt() {
    let mut engine = quiet_engine();
    engine.spawn_test_fruit(Position::new(0.0, 1.0, -2.0), Velocity::new(0.0, 1.2, 3.0));

    let snap = engine.tick(0.05);
    let fruit = &snap.fruits[0];
    assert!((fruit.position.0 - Vec3::new(0.0, 1.06, -1.85)).length() < 1e-5);
}

#[test]
fn test_large_dt_is_clamped() {
    let mut engine = quiet_engine();
    engine.spawn_test_fruit(Position::new(0.0, 0.0, -2.0), Velocity::new(0.0, 0.0, 10.0));

    let snap = engine.tick(5.0);
    let fruit = &snap.fruits[0];
    assert!((fruit.position.depth() - -1.0).abs() < 1e-5);
    assert!((snap.time.elapsed_secs - 0.1).abs() < 1e-6);
}

#[test]
fn test_negative_and_nan_dt_do_not_move_fruit() {
    let mut engine = quiet_engine();
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 0.0), Velocity::new(0.0, 0.0, 1.0));

    engine.tick(-1.0);
    let snap = engine.tick(f32::NAN);
    assert_eq!(snap.fruits[0].position.depth(), 0.0);
}

// ---- Swords ----

#[test]
fn test_untracked_sword_does_not_slice() {
    let mut engine = quiet_engine();
    // No pose yet: the sword sits at the origin but is inactive.
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 0.0), still());

    let snap = engine.tick(FRAME);
    assert_eq!(snap.score.score, 0);
    assert!(snap.swords.iter().all(|s| !s.active));
}

#[test]
fn test_disconnected_sword_does_not_slice() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    engine.tick(FRAME);

    engine.queue_command(PlayerCommand::ControllerDisconnected { hand: Hand::Left });
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 0.0), still());
    let snap = engine.tick(FRAME);
    assert_eq!(snap.score.score, 0);

    // A fresh pose reconnects the controller.
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    let snap = engine.tick(FRAME);
    assert_eq!(snap.score.score, 1);
}

#[test]
fn test_sword_follows_controller_rotation() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::UpdateControllerPose {
        hand: Hand::Right,
        pose: Pose::new(
            Vec3::new(0.0, 1.0, 0.0),
            Quat::from_rotation_x(std::f32::consts::PI),
        ),
    });
    let snap = engine.tick(FRAME);
    let right = snap.swords.iter().find(|s| s.hand == Hand::Right).unwrap();
    assert!(right.active);
    // Flipped upside down, the blade points up.
    assert!((right.position.0 - Vec3::new(0.0, 1.25, 0.0)).length() < 1e-5);
}

#[test]
fn test_degenerate_pose_is_ignored() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::UpdateControllerPose {
        hand: Hand::Left,
        pose: Pose::new(Vec3::new(f32::NAN, 0.0, 0.0), Quat::IDENTITY),
    });
    engine.queue_command(PlayerCommand::UpdateControllerPose {
        hand: Hand::Right,
        pose: Pose::new(Vec3::ZERO, Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)),
    });
    let snap = engine.tick(FRAME);
    assert!(snap.swords.iter().all(|s| !s.active));
}

// ---- Spawning ----

#[test]
fn test_spawn_rate_matches_probability() {
    let mut engine = SimulationEngine::new(GameConfig {
        seed: 2024,
        ..Default::default()
    })
    .unwrap();
    engine.queue_command(PlayerCommand::StartSession);

    let frames = 100_000;
    for _ in 0..frames {
        engine.tick(FRAME);
    }

    let spawned = engine.score().spawned as f64;
    let rate = spawned / frames as f64;
    // Expected 3000 ± 54 (1σ); allow 5σ.
    assert!(
        (rate - 0.03).abs() < 0.0027,
        "spawn rate {rate} too far from 0.03"
    );
}

#[test]
fn test_spawned_fruit_placement() {
    let mut config = GameConfig::default();
    config.spawn.probability = 1.0;
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::StartSession);

    for _ in 0..50 {
        engine.tick(0.0);
    }
    let snap = engine.tick(0.0);
    assert_eq!(snap.fruits.len(), 51);
    for fruit in &snap.fruits {
        let p = fruit.position.0;
        assert!(p.x >= -0.75 && p.x < 0.75, "x out of band: {}", p.x);
        assert_eq!(p.y, 1.0);
        assert_eq!(p.z, -2.0);
        assert_eq!(fruit.shape, FruitShape::Sphere);
        assert_eq!(fruit.color.0, 0x00ff00);
    }
    let mut query = engine.world().query::<(&Fruit, &Velocity)>();
    for (_entity, (_fruit, vel)) in query.iter() {
        assert_eq!(vel.0, Vec3::new(0.0, 1.2, 3.0));
    }
}

#[test]
fn test_spinning_preset_spins_fruit() {
    let mut config = GameConfig::preset(Preset::Spinning);
    config.spawn.probability = 1.0;
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::StartSession);

    for _ in 0..20 {
        engine.tick(FRAME);
    }

    let spinning = engine.world().query::<(&Fruit, &Spin)>().iter().count();
    assert_eq!(spinning, engine.fruit_count());

    let rotated = engine
        .world()
        .query::<&Rotation>()
        .iter()
        .filter(|(_, r)| r.0 != Vec3::ZERO)
        .count();
    assert!(rotated > 0);

    let snap = engine.tick(FRAME);
    let shapes: std::collections::HashSet<_> = snap.fruits.iter().map(|f| f.shape).collect();
    assert!(shapes.len() > 1, "expected a mix of shapes");
    assert!(!shapes.contains(&FruitShape::Model));
}

#[test]
fn test_model_preset_spawns_model_fruit() {
    let mut config = GameConfig::preset(Preset::Model);
    config.spawn.probability = 1.0;
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::StartSession);
    let snap = engine.tick(FRAME);
    assert!(snap.fruits.iter().all(|f| f.shape == FruitShape::Model));
}

// ---- Score invariants ----

#[test]
fn test_score_is_monotonic_with_sweeping_sword() {
    let mut engine = SimulationEngine::new(GameConfig {
        seed: 7,
        ..Default::default()
    })
    .unwrap();
    engine.queue_command(PlayerCommand::StartSession);
    // Park the right sword in the middle of the flight path.
    place_sword(&mut engine, Hand::Right, Vec3::new(0.0, 1.4, -1.0));

    let mut last = 0;
    let mut last_revision = 0;
    for _ in 0..20_000 {
        let snap = engine.tick(FRAME);
        assert!(snap.score.score >= last, "score went backwards");
        if snap.score.score != last {
            assert!(snap.hud.revision > last_revision);
        } else {
            assert_eq!(snap.hud.revision, last_revision);
        }
        assert_eq!(snap.hud.text, format!("Points: {}", snap.score.score));
        last = snap.score.score;
        last_revision = snap.hud.revision;
    }

    let score = engine.score();
    assert!(score.score > 0, "sword in the flight path should slice something");
    assert_eq!(score.score, score.sliced);
    assert_eq!(
        score.spawned,
        score.sliced + score.missed + engine.fruit_count() as u32
    );
}

#[test]
fn test_fruit_resolves_once() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 0.0), still());

    let mut sliced_events = 0;
    for _ in 0..10 {
        let snap = engine.tick(FRAME);
        sliced_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::FruitSliced { .. }))
            .count();
    }
    assert_eq!(sliced_events, 1);
    assert_eq!(engine.score().score, 1);
}

// ---- Session ----

#[test]
fn test_idle_engine_does_not_advance() {
    let mut config = GameConfig::default();
    config.spawn.probability = 1.0;
    let mut engine = SimulationEngine::new(config).unwrap();

    let snap = engine.tick(FRAME);
    assert_eq!(snap.phase, GamePhase::Idle);
    assert_eq!(snap.time.frame, 0);
    assert!(snap.fruits.is_empty());
}

#[test]
fn test_pause_resume() {
    let mut config = GameConfig::default();
    config.spawn.probability = 1.0;
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::StartSession);
    let snap = engine.tick(FRAME);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.fruits.len(), 1);

    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.tick(FRAME);
    assert_eq!(snap.phase, GamePhase::Paused);
    let paused_frame = snap.time.frame;
    let paused_position = snap.fruits[0].position;

    let snap = engine.tick(FRAME);
    assert_eq!(snap.time.frame, paused_frame);
    assert_eq!(snap.fruits.len(), 1);
    assert_eq!(snap.fruits[0].position, paused_position);

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.tick(FRAME);
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(snap.time.frame > paused_frame);
}

#[test]
fn test_end_session_clears_fruit_keeps_score() {
    let mut engine = quiet_engine();
    place_sword(&mut engine, Hand::Left, Vec3::ZERO);
    engine.spawn_test_fruit(Position::new(0.0, 0.0, 0.0), still());
    engine.tick(FRAME);
    engine.spawn_test_fruit(Position::new(0.0, 1.0, -2.0), still());

    engine.queue_command(PlayerCommand::EndSession);
    let snap = engine.tick(FRAME);
    assert_eq!(snap.phase, GamePhase::Idle);
    assert!(snap.fruits.is_empty());
    assert_eq!(snap.score.score, 1);
    assert!(snap.events.contains(&GameEvent::PhaseChanged {
        phase: GamePhase::Idle
    }));

    engine.queue_command(PlayerCommand::StartSession);
    let snap = engine.tick(FRAME);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.score.score, 1);
    assert_eq!(snap.swords.len(), 2);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = GameConfig::default();
    config.spawn.probability = 2.0;
    assert!(SimulationEngine::new(config).is_err());
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = GameConfig::preset(Preset::Spinning);
    let mut engine_a = SimulationEngine::new(config.clone()).unwrap();
    let mut engine_b = SimulationEngine::new(config).unwrap();

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::StartSession);
        place_sword(engine, Hand::Left, Vec3::new(-0.2, 1.3, -1.2));
        place_sword(engine, Hand::Right, Vec3::new(0.2, 1.3, -1.2));
    }

    for _ in 0..2_000 {
        let snap_a = engine_a.tick(FRAME);
        let snap_b = engine_b.tick(FRAME);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(GameConfig {
        seed: 111,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SimulationEngine::new(GameConfig {
        seed: 222,
        ..Default::default()
    })
    .unwrap();
    engine_a.queue_command(PlayerCommand::StartSession);
    engine_b.queue_command(PlayerCommand::StartSession);

    let mut diverged = false;
    for _ in 0..1_000 {
        let json_a = serde_json::to_string(&engine_a.tick(FRAME)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(FRAME)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}
