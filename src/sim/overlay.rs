//! Overlay state machine
//!
//! Hidden -> Detail -> Hidden (timeout), or anything -> Summary (terminal).
//! Each new detail cancels the pending hide timer and schedules its own, so
//! the latest entry always gets the full display time.

use serde::{Deserialize, Serialize};

use super::timer::{GameTime, TimerId, TimerKind, Timers};
use crate::resume::{Contact, ResumeEntry};
use crate::ui::DisplaySurface;

/// What the overlay panel shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayContent {
    #[default]
    None,
    EntryDetail(ResumeEntry),
    Summary { summary: String, contact: Contact },
}

/// Observable overlay state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    pub visible: bool,
    pub content: OverlayContent,
    /// When the current detail auto-hides (None for hidden or summary)
    pub expires_at: Option<GameTime>,
}

/// Overlay plus its pending hide timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overlay {
    state: OverlayState,
    hide_timer: Option<TimerId>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_summary(&self) -> bool {
        matches!(self.state.content, OverlayContent::Summary { .. })
    }

    /// Pending hide timer, if a detail is showing
    pub fn hide_timer(&self) -> Option<TimerId> {
        self.hide_timer
    }

    /// Show an entry for `hide_delay` seconds, superseding any current detail.
    ///
    /// Ignored once the summary is up. Returns whether the detail was shown.
    pub fn show_detail<D: DisplaySurface + ?Sized>(
        &mut self,
        entry: &ResumeEntry,
        now: GameTime,
        hide_delay: GameTime,
        timers: &mut Timers,
        display: &mut D,
    ) -> bool {
        if self.is_summary() {
            log::debug!("Summary showing, ignoring detail for '{}'", entry.title);
            return false;
        }

        if let Some(previous) = self.hide_timer.take() {
            timers.cancel(previous);
        }

        let expires_at = now + hide_delay;
        self.state = OverlayState {
            visible: true,
            content: OverlayContent::EntryDetail(entry.clone()),
            expires_at: Some(expires_at),
        };
        self.hide_timer = Some(timers.schedule(expires_at, TimerKind::HideOverlay));
        display.show(&self.state.content);
        log::debug!("Overlay: '{}' until t={:.2}", entry.title, expires_at);
        true
    }

    /// Show the final summary. Stays up for the rest of the session.
    pub fn show_summary<D: DisplaySurface + ?Sized>(
        &mut self,
        summary: &str,
        contact: &Contact,
        timers: &mut Timers,
        display: &mut D,
    ) {
        if let Some(previous) = self.hide_timer.take() {
            timers.cancel(previous);
        }
        self.state = OverlayState {
            visible: true,
            content: OverlayContent::Summary {
                summary: summary.to_string(),
                contact: contact.clone(),
            },
            expires_at: None,
        };
        display.show(&self.state.content);
        log::debug!("Overlay: summary");
    }

    /// Handle a fired hide timer. Stale ids are ignored.
    pub fn expire<D: DisplaySurface + ?Sized>(&mut self, id: TimerId, display: &mut D) -> bool {
        if self.hide_timer != Some(id) {
            return false;
        }
        self.hide_timer = None;
        self.state = OverlayState::default();
        display.hide();
        log::debug!("Overlay hidden");
        true
    }
}
