//! Laser Siege entry point
//!
//! Runs a headless session: the autopilot plays through the same edge-latched
//! controls a keyboard would, and the host logs what happens each frame.

#[cfg(not(target_arch = "wasm32"))]
use laser_siege::sim::GameEvent;

/// Totals for the end-of-run summary
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
struct RunTally {
    shots: u32,
    dropped: u32,
    kills: u32,
    hits: u32,
    wins: u32,
    losses: u32,
    restarts: u32,
    best_score: u32,
}

#[cfg(not(target_arch = "wasm32"))]
impl RunTally {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerFired { .. } => self.shots += 1,
            GameEvent::ShotDropped { owner } => {
                self.dropped += 1;
                log::debug!("{:?} shot dropped, laser pool full", owner);
            }
            GameEvent::EnemyDestroyed { index } => {
                self.kills += 1;
                log::debug!("Enemy {} destroyed", index);
            }
            GameEvent::PlayerHit { lives_left } => {
                self.hits += 1;
                log::debug!("Player hit, {} lives left", lives_left);
            }
            GameEvent::Victory => self.wins += 1,
            GameEvent::GameOver => self.losses += 1,
            GameEvent::Restarted => self.restarts += 1,
            GameEvent::EnemyFired { .. } => {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use laser_siege::sim::{GameState, autopilot, tick};
    use laser_siege::{Controls, Settings, Snapshot};

    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!(
        "Laser Siege (headless) starting: seed {}, {} frames at {} fps",
        seed,
        settings.total_frames(),
        settings.frame_rate
    );

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::with_layout(settings.arena, settings.sprites, &mut rng);
    let mut controls = Controls::default();
    let mut tally = RunTally::default();
    let dt = settings.frame_dt();

    for _ in 0..settings.total_frames() {
        controls.update(&autopilot::drive(&state));
        tick(&mut state, &controls.tick_input(), dt, &mut rng);

        for event in &state.events {
            tally.record(event);
        }
        tally.best_score = tally.best_score.max(state.player.score);
    }

    let snapshot = Snapshot::capture(&state);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => log::debug!("Final snapshot:\n{}", json),
        Err(e) => log::warn!("Could not serialize final snapshot: {}", e),
    }

    log::info!("Run finished: {:?}", tally);
    println!(
        "seed {}: best score {}, {} kills, {} wins, {} losses, {} restarts",
        seed, tally.best_score, tally.kills, tally.wins, tally.losses, tally.restarts
    );
    println!(
        "  {} shots, {} dropped, {} hits taken",
        tally.shots, tally.dropped, tally.hits
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is a library on the web; a page-side renderer drives it
}
