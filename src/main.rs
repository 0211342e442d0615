//! Stone Catch headless runner
//!
//! Plays one scripted round against the simulation core and prints the final
//! frame as JSON. The collector sweeps side to side in place of face tracking.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use stone_catch::consts::TICK_INTERVAL_MS;
    use stone_catch::sim::TickInput;
    use stone_catch::{GameConfig, Session};

    env_logger::init();
    log::info!("Stone Catch (headless) starting...");

    let config = GameConfig::load_or_default();
    let round_ms = (config.time_limit as f64 + 1.0) * 1000.0;
    let mut session = Session::new(config);

    let mut now_ms = 0.0;
    let mut caught = 0;
    let mut missed = 0;
    while now_ms <= round_ms {
        let sweep = (now_ms / 1000.0 * 1.3).sin() as f32 * 0.12;
        let input = TickInput {
            start: true,
            tracked: Some(Vec2::new(sweep, -0.15)),
            ..Default::default()
        };
        let (_, report) = session.tick(now_ms, &input);
        caught += report.caught.len();
        missed += report.missed.len();
        now_ms += TICK_INTERVAL_MS as f64;
    }

    let frame = session.frame();
    log::info!(
        "Round over: {} caught, {} missed, score {}",
        caught,
        missed,
        session.state().round.score
    );

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize frame: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is driven by the host page on web; nothing to run here
}
