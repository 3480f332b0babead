//! Circle Game entry point
//!
//! Runs a headless session: the autopilot plays, "Next" is pressed after each
//! death, and every frame is tessellated as a real front end would upload it.

fn main() {
    env_logger::init();
    log::info!("Circle Game (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

mod native {
    use std::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    use circle_game::Settings;
    use circle_game::input::{InputEvent, InputState};
    use circle_game::platform::{EventSource, FramePacer, ScriptedEvents};
    use circle_game::renderer::{Surface, VertexSurface, build_scene, vertex};
    use circle_game::sim::{Command, GameEvent, GamePhase, GameState, tick};
    use circle_game::ui::{Button, button_layout};

    /// Longest tessellated edge in pixels
    const MAX_EDGE: f32 = 4.0;

    pub fn run() -> Result<(), Box<dyn Error>> {
        let settings = Settings::load()?;
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let mut state = GameState::with_settings(seed, &settings)?;

        let buttons = button_layout(settings.width);
        let mut input_state = InputState::new(settings.idle_mode);
        let mut source = ScriptedEvents::new(opening_script(&buttons));
        let mut surface = VertexSurface::new(MAX_EDGE);
        let mut pacer = FramePacer::new(settings.tick_rate);
        let mut deaths = 0u32;

        log::info!(
            "Running at {} Hz, idle mode {}",
            settings.tick_rate,
            settings.idle_mode
        );

        loop {
            let mut raw = source.poll();
            if state.phase == GamePhase::GameOver {
                raw.extend(click(&buttons, Command::NextLevel));
            }
            if settings.max_ticks > 0 && state.time_ticks >= settings.max_ticks {
                raw.push(InputEvent::Quit);
            }

            let input = input_state.collect(&raw, &buttons);
            for event in tick(&mut state, &input) {
                if matches!(event, GameEvent::PlayerDied { .. }) {
                    deaths += 1;
                }
                log_event(&event);
            }
            if state.phase == GamePhase::Quit {
                break;
            }

            let hovered = input_state.hovered(&buttons);
            surface.draw_all(&build_scene(&state, &buttons, hovered));
            log::trace!(
                "Tick {}: {} vertices ({} bytes), {} text runs",
                state.time_ticks,
                surface.vertices.len(),
                vertex::as_bytes(&surface.vertices).len(),
                surface.texts.len()
            );

            pacer.tick();
        }

        log::info!(
            "Session over after {} ticks: {} points, {} deaths",
            state.time_ticks,
            state.points_collected(),
            deaths
        );
        Ok(())
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    /// Sweep the pointer down the button column so hover states show up
    fn opening_script(buttons: &[Button]) -> Vec<Vec<InputEvent>> {
        buttons
            .iter()
            .map(|b| vec![InputEvent::MouseMoved(b.rect.min + b.rect.size / 2.0)])
            .collect()
    }

    fn click(buttons: &[Button], action: Command) -> Option<InputEvent> {
        buttons
            .iter()
            .find(|b| b.action == action)
            .map(|b| InputEvent::MouseDown(b.rect.min + b.rect.size / 2.0))
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::GoalCollected {
                orbit_index,
                points,
            } => log::info!("Goal on orbit {} collected, score {}", orbit_index, points),
            GameEvent::GoalsRespawned { count } => log::info!("Goals respawned ({})", count),
            GameEvent::PlayerDied {
                orbit_index,
                points,
            } => log::info!("Caught on orbit {} at {} points", orbit_index, points),
            GameEvent::NewGame | GameEvent::NextLevel | GameEvent::Quit => {
                log::debug!("{:?}", event)
            }
        }
    }
}
