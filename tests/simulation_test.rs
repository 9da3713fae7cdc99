//! Behavior tests for the simulation driven through the public API.
//!
//! Scenarios cover crash detection, scoring, pipe lifecycle and restart,
//! using a seeded ChaCha8Rng and explicit timestamps.

use flappy::sim::{Command, Control, CrashCause, Obstacle, Phase, Simulation, TickEvent};
use flappy::{Clock, TickClock, Tuning};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// Keep the player hovering mid-gap so long scenarios never crash.
fn hold_player(sim: &mut Simulation) {
    sim.player.y = 300.0;
    sim.player.velocity = 0.0;
}

#[test]
fn test_gravity_accrues_before_position() {
    let mut sim = Simulation::new(Tuning::default(), 0);
    let mut rng = create_test_rng();

    sim.tick(0, &mut rng);
    assert_eq!(sim.player.velocity, 0.25);
    assert_eq!(sim.player.y, 300.25);

    sim.tick(0, &mut rng);
    assert_eq!(sim.player.velocity, 0.5);
    assert_eq!(sim.player.y, 300.75);
}

#[test]
fn test_flap_then_tick() {
    let mut sim = Simulation::new(Tuning::default(), 0);
    sim.apply(Command::Flap, 0);
    sim.tick(0, &mut create_test_rng());
    assert_eq!(sim.player.velocity, -6.75);
    assert_eq!(sim.player.y, 293.25);
}

#[test]
fn test_leaving_top_ends_game_and_freezes() {
    let mut sim = Simulation::new(Tuning::default(), 0);
    let mut rng = create_test_rng();
    sim.player.y = -1.25;
    sim.player.velocity = -0.25;

    let result = sim.tick(0, &mut rng);
    assert_eq!(result.crashed(), Some(CrashCause::OutOfBounds));
    assert_eq!(sim.phase, Phase::GameOver);

    let y = sim.player.y;
    let ticks = sim.ticks_survived;
    let frozen = sim.tick(5_000, &mut rng);
    assert!(frozen.events.is_empty());
    assert_eq!(sim.player.y, y);
    assert_eq!(sim.ticks_survived, ticks);
    assert!(sim.obstacles.is_empty());
}

#[test]
fn test_leaving_bottom_ends_game() {
    let mut sim = Simulation::new(Tuning::default(), 0);
    sim.player.y = 600.0;
    let result = sim.tick(0, &mut create_test_rng());
    assert_eq!(result.crashed(), Some(CrashCause::OutOfBounds));
}

#[test]
fn test_free_fall_eventually_crashes() {
    let tuning = Tuning::default();
    let mut clock = TickClock::new(tuning.tick_rate);
    let mut sim = Simulation::new(tuning, clock.now_ms());
    let mut rng = create_test_rng();

    let mut crashed = None;
    for _ in 0..200 {
        clock.advance();
        if let Some(cause) = sim.tick(clock.now_ms(), &mut rng).crashed() {
            crashed = Some(cause);
            break;
        }
    }
    assert_eq!(crashed, Some(CrashCause::OutOfBounds));
    // y(n) = 300 + 0.125 n (n + 1) first exceeds 600 at n = 49
    assert_eq!(sim.ticks_survived, 49);
}

#[test]
fn test_hitting_pipe_ends_game() {
    let tuning = Tuning::default();
    let mut sim = Simulation::new(tuning.clone(), 0);
    // Opening spans 25..175; the player at y=300 sits inside the lower pipe.
    sim.obstacles.push(Obstacle::with_gap(&tuning, 150.0, 100.0));
    let result = sim.tick(0, &mut create_test_rng());
    assert_eq!(result.crashed(), Some(CrashCause::HitObstacle));
    assert!(sim.is_game_over());
}

#[test]
fn test_flying_through_gap_is_safe() {
    let tuning = Tuning::default();
    let mut sim = Simulation::new(tuning.clone(), 0);
    sim.obstacles.push(Obstacle::with_gap(&tuning, 150.0, 300.0));
    let result = sim.tick(0, &mut create_test_rng());
    assert_eq!(result.crashed(), None);
}

#[test]
fn test_flat_volume_at_screen_edge_is_harmless() {
    // Smallest valid margin: a gap touching an edge leaves a zero-height volume.
    let tuning = Tuning {
        gap_margin: 75.0,
        ..Tuning::default()
    };
    assert!(tuning.validate().is_ok());
    let mut rng = create_test_rng();

    let mut sim = Simulation::new(tuning.clone(), 0);
    let pipe = Obstacle::with_gap(&tuning, 150.0, 525.0);
    assert_eq!(pipe.lower().top(), 600.0);
    assert_eq!(pipe.lower().height, 0.0);
    sim.obstacles.push(pipe);
    sim.player.y = 580.0;
    let result = sim.tick(0, &mut rng);
    assert_eq!(result.crashed(), None);
    assert!(!sim.is_game_over());

    let mut sim = Simulation::new(tuning.clone(), 0);
    let pipe = Obstacle::with_gap(&tuning, 150.0, 75.0);
    assert_eq!(pipe.upper().height, 0.0);
    sim.obstacles.push(pipe);
    sim.player.y = 0.5;
    sim.player.velocity = -0.25;
    let result = sim.tick(0, &mut rng);
    assert_eq!(result.crashed(), None);
}

#[test]
fn test_two_pipes_scored_in_one_tick() {
    let tuning = Tuning::default();
    let mut sim = Simulation::new(tuning.clone(), 0);
    let player_x = sim.player.x;
    // Both land left of the player after this tick's 3px scroll.
    sim.obstacles
        .push(Obstacle::with_gap(&tuning, player_x + 1.0, 300.0));
    sim.obstacles
        .push(Obstacle::with_gap(&tuning, player_x + 2.0, 300.0));

    let result = sim.tick(0, &mut create_test_rng());
    assert_eq!(result.crashed(), None);
    assert_eq!(sim.score, 2);
    assert_eq!(result.points_scored(), 2);
    assert_eq!(
        result.events,
        vec![TickEvent::Scored { score: 1 }, TickEvent::Scored { score: 2 }]
    );
    assert!(sim.obstacles.iter().all(|o| o.passed));
}

#[test]
fn test_pipe_scores_only_once() {
    let tuning = Tuning::default();
    let mut sim = Simulation::new(tuning.clone(), 0);
    let mut rng = create_test_rng();
    sim.obstacles
        .push(Obstacle::with_gap(&tuning, sim.player.x + 1.0, 300.0));

    for _ in 0..20 {
        hold_player(&mut sim);
        sim.tick(0, &mut rng);
    }
    assert_eq!(sim.score, 1);
}

#[test]
fn test_pipe_removed_after_fully_off_screen() {
    let tuning = Tuning::default();
    let mut sim = Simulation::new(tuning.clone(), 0);
    let mut rng = create_test_rng();
    sim.obstacles
        .push(Obstacle::with_gap(&tuning, tuning.screen_width, 300.0));

    // After 150 ticks x == -width exactly, which is still on screen.
    for _ in 0..150 {
        hold_player(&mut sim);
        let result = sim.tick(0, &mut rng);
        assert!(!result.events.contains(&TickEvent::ObstacleRemoved));
    }
    assert_eq!(sim.obstacles.len(), 1);
    assert_eq!(sim.obstacles[0].x, -50.0);

    hold_player(&mut sim);
    let result = sim.tick(0, &mut rng);
    assert!(result.events.contains(&TickEvent::ObstacleRemoved));
    assert!(sim.obstacles.is_empty());
    assert_eq!(sim.score, 1);
}

#[test]
fn test_first_spawn_with_tick_clock() {
    let tuning = Tuning::default();
    let mut clock = TickClock::new(tuning.tick_rate);
    let mut sim = Simulation::new(tuning, clock.now_ms());
    let mut rng = create_test_rng();

    let mut spawned_at = None;
    for _ in 0..120 {
        hold_player(&mut sim);
        clock.advance();
        let result = sim.tick(clock.now_ms(), &mut rng);
        if result
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::ObstacleSpawned { .. }))
        {
            spawned_at = Some(clock.ticks());
            break;
        }
    }
    // Tick 90 is exactly 1500 ms; spawning needs strictly more.
    assert_eq!(spawned_at, Some(91));
    assert_eq!(sim.obstacles.len(), 1);
}

#[test]
fn test_same_seed_same_pipes() {
    let tuning = Tuning::default();
    let gaps = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut sim = Simulation::new(tuning.clone(), 0);
        let mut now = 0;
        let mut centers = Vec::new();
        for _ in 0..5 {
            hold_player(&mut sim);
            now += 1501;
            for event in sim.tick(now, &mut rng).events {
                if let TickEvent::ObstacleSpawned { gap_center } = event {
                    centers.push(gap_center);
                }
            }
        }
        centers
    };
    assert_eq!(gaps(7), gaps(7));
    assert_eq!(gaps(7).len(), 5);
}

#[test]
fn test_restart_after_game_over() {
    let tuning = Tuning::default();
    let mut sim = Simulation::new(tuning.clone(), 0);
    let mut rng = create_test_rng();
    sim.score = 9;
    sim.obstacles.push(Obstacle::with_gap(&tuning, 150.0, 100.0));
    sim.tick(0, &mut rng);
    assert!(sim.is_game_over());

    assert_eq!(sim.apply(Command::Flap, 4_000), Control::Continue);
    assert_eq!(sim.phase, Phase::Running);
    assert_eq!(sim.score, 0);
    assert!(sim.obstacles.is_empty());
    assert_eq!(sim.player.y, 300.0);
    // The restarting press is not also a flap.
    assert_eq!(sim.player.velocity, 0.0);
    assert_eq!(sim.last_spawn_ms, 4_000);
    assert_eq!(sim.ticks_survived, 0);

    // Spawn timer restarted from the restart timestamp
    sim.tick(5_500, &mut rng);
    assert!(sim.obstacles.is_empty());
    sim.tick(5_501, &mut rng);
    assert_eq!(sim.obstacles.len(), 1);
}

#[test]
fn test_quit_in_any_phase() {
    let mut sim = Simulation::new(Tuning::default(), 0);
    assert_eq!(sim.apply(Command::Quit, 0), Control::Quit);
    sim.phase = Phase::GameOver;
    assert_eq!(sim.apply(Command::Quit, 0), Control::Quit);
    assert!(sim.is_game_over());
}

proptest! {
    #[test]
    fn prop_gap_volumes_never_negative(gap_center in 200.0f64..=400.0) {
        let tuning = Tuning::default();
        let pipe = Obstacle::with_gap(&tuning, 100.0, gap_center);
        prop_assert!(pipe.upper().height >= 0.0);
        prop_assert!(pipe.lower().height >= 0.0);
        prop_assert!(pipe.lower().bottom() <= tuning.screen_height + 1e-9);
    }

    #[test]
    fn prop_spawned_gap_within_margin(seed in any::<u64>()) {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pipe = Obstacle::spawn(&tuning, &mut rng);
        prop_assert!(pipe.gap_center >= tuning.gap_margin);
        prop_assert!(pipe.gap_center <= tuning.screen_height - tuning.gap_margin);
        prop_assert_eq!(pipe.gap_center.fract(), 0.0);
        prop_assert_eq!(pipe.x, tuning.screen_width);
    }

    #[test]
    fn prop_velocity_bounded_by_gravity_and_flap(flaps in proptest::collection::vec(any::<bool>(), 1..40)) {
        let tuning = Tuning::default();
        let mut sim = Simulation::new(tuning.clone(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for flap in flaps {
            if sim.is_game_over() {
                break;
            }
            if flap {
                sim.apply(Command::Flap, 0);
                prop_assert_eq!(sim.player.velocity, tuning.flap_velocity);
            }
            let before = sim.player.velocity;
            sim.tick(0, &mut rng);
            prop_assert!((sim.player.velocity - before - tuning.gravity).abs() < 1e-9);
        }
    }
}
