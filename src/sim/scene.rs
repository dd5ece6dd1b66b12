//! Résumé scene: the component the host engine drives
//!
//! Lifecycle hooks:
//! - [`ResumeScene::init`] once, with the loaded résumé and viewport size
//! - [`ResumeScene::on_overlap`] whenever the player body overlaps a token
//! - [`ResumeScene::on_tick`] once per frame with the sampled input
//!
//! Time is the host's game clock in seconds. Timers fire on the first hook
//! call at or after their due time.

use super::layout::WorldLayout;
use super::overlay::{Overlay, OverlayState};
use super::state::{Collection, GameEvent, GamePhase, GameState, ProgressState};
use super::tick::{Facing, MotionCommand, TickInput, motion_for};
use super::timer::{GameTime, TimerId, TimerKind, Timers};
use crate::error::Result;
use crate::resume::ResumeData;
use crate::tuning::Tuning;
use crate::ui::DisplaySurface;

/// One play session over a résumé
#[derive(Debug)]
pub struct ResumeScene<D: DisplaySurface> {
    state: GameState,
    overlay: Overlay,
    timers: Timers,
    /// Pending summary reveal (scheduled once, on completion)
    summary_timer: Option<TimerId>,
    facing: Facing,
    tuning: Tuning,
    display: D,
    /// Latest time seen by any hook
    now: GameTime,
}

impl<D: DisplaySurface> ResumeScene<D> {
    /// Build the level for `resume` and start with the overlay hidden
    pub fn init(
        resume: ResumeData,
        viewport_width: f32,
        viewport_height: f32,
        tuning: Tuning,
        mut display: D,
    ) -> Result<Self> {
        tuning.validate()?;
        let state = GameState::new(resume, viewport_width, viewport_height, &tuning);
        display.hide();

        log::info!(
            "Scene ready: {} tokens, world {}x{}",
            state.progress.total_count,
            state.layout.width,
            state.layout.size.y
        );

        Ok(Self {
            state,
            overlay: Overlay::new(),
            timers: Timers::new(),
            summary_timer: None,
            facing: Facing::default(),
            tuning,
            display,
            now: 0.0,
        })
    }

    /// Player overlapped token `index` at time `now`
    pub fn on_overlap(&mut self, index: usize, now: GameTime) -> Result<Collection> {
        self.advance(now);

        let outcome = match self.state.collect(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Rejected overlap: {}", e);
                return Err(e);
            }
        };

        if let Collection::Collected { completed } = outcome {
            let entry = &self.state.resume.experience[index];
            self.overlay.show_detail(
                entry,
                self.now,
                self.tuning.detail_hide_delay,
                &mut self.timers,
                &mut self.display,
            );

            if completed && self.summary_timer.is_none() {
                let due = self.now + self.tuning.summary_delay;
                self.summary_timer = Some(self.timers.schedule(due, TimerKind::ShowSummary));
                log::info!("All tokens collected, summary at t={:.2}", due);
            }
        }

        Ok(outcome)
    }

    /// Per-frame hook: fire due timers and map input to player motion
    pub fn on_tick(&mut self, input: &TickInput, now: GameTime) -> MotionCommand {
        self.advance(now);
        let command = motion_for(input, self.facing, &self.tuning);
        self.facing = command.facing;
        command
    }

    /// Move the clock forward and fire due timers. Time never runs backwards.
    pub fn advance(&mut self, now: GameTime) {
        if now > self.now {
            self.now = now;
        }

        for (id, kind) in self.timers.take_due(self.now) {
            match kind {
                TimerKind::HideOverlay => {
                    self.overlay.expire(id, &mut self.display);
                }
                TimerKind::ShowSummary => {
                    if self.summary_timer != Some(id) {
                        continue;
                    }
                    self.summary_timer = None;
                    let resume = &self.state.resume;
                    self.overlay.show_summary(
                        &resume.summary,
                        &resume.contact,
                        &mut self.timers,
                        &mut self.display,
                    );
                    self.state.finish();
                    log::info!("Summary shown at t={:.2}", self.now);
                }
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn layout(&self) -> &WorldLayout {
        &self.state.layout
    }

    pub fn progress(&self) -> ProgressState {
        self.state.progress
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn overlay(&self) -> &OverlayState {
        self.overlay.state()
    }

    /// Due time of the pending summary reveal
    pub fn summary_due(&self) -> Option<GameTime> {
        self.summary_timer.and_then(|id| self.timers.due_at(id))
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn now(&self) -> GameTime {
        self.now
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Take all events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
