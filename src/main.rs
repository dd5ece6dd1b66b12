//! Resume Quest entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless walkthrough: the player walks right, collects each token
//! on reach, and every overlay change is logged.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use resume_quest::sim::{GamePhase, OverlayContent, ResumeScene, TickInput};
    use resume_quest::ui::{DisplaySurface, render_overlay};
    use resume_quest::{ResumeData, Result, Tuning};

    const SAMPLE_RESUME: &str = include_str!("../data/resumeData.json");

    /// Simulated frame length (seconds)
    const FRAME_DT: f64 = 1.0 / 60.0;
    /// Horizontal distance at which the walker touches a token
    const TOKEN_REACH: f32 = 16.0;
    /// Give up after this much game time
    const MAX_RUN_SECS: f64 = 600.0;

    /// Surface that logs overlay changes
    struct LogSurface;

    impl DisplaySurface for LogSurface {
        fn show(&mut self, content: &OverlayContent) {
            log::info!("[overlay] {}", render_overlay(content));
        }

        fn hide(&mut self) {
            log::info!("[overlay] hidden");
        }
    }

    pub fn run(path: Option<String>) -> Result<()> {
        let json = match &path {
            Some(path) => std::fs::read_to_string(path)?,
            None => SAMPLE_RESUME.to_string(),
        };
        let resume = ResumeData::from_json(&json)?;
        log::info!(
            "Walking through {}",
            path.as_deref().unwrap_or("the sample résumé")
        );

        let mut scene = ResumeScene::init(resume, 800.0, 600.0, Tuning::default(), LogSurface)?;
        let world_width = scene.layout().size.x;
        let mut x = scene.layout().player_spawn.x;
        let mut now = 0.0;

        while now < MAX_RUN_SECS {
            now += FRAME_DT;
            let walking = x < world_width;
            let input = TickInput {
                right: walking,
                grounded: true,
                ..Default::default()
            };
            let command = scene.on_tick(&input, now);
            x = (x + command.velocity_x * FRAME_DT as f32).min(world_width);

            let reached: Vec<usize> = scene
                .state()
                .tokens
                .iter()
                .filter(|t| !t.collected && (t.position.x - x).abs() <= TOKEN_REACH)
                .map(|t| t.index)
                .collect();
            for index in reached {
                scene.on_overlap(index, now)?;
            }

            for event in scene.drain_events() {
                log::debug!("t={:.2} {:?}", now, event);
            }

            if scene.phase() == GamePhase::Finished {
                break;
            }
            if !walking && scene.progress().total_count == 0 {
                break;
            }
        }

        let progress = scene.progress();
        log::info!(
            "Done at t={:.2}: {}/{} collected, phase {:?}",
            now,
            progress.collected_count,
            progress.total_count,
            scene.phase()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Resume Quest (native) starting...");
    log::info!("Browser build is driven from JS - this is a headless walkthrough");

    if let Err(e) = headless::run(std::env::args().nth(1)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
