//! Scene state and collection tracking
//!
//! Everything here is plain data owned by one scene instance. Progress only
//! moves forward: tokens flip to collected once and the count never drops.

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use super::layout::{WorldLayout, derive_layout};
use crate::error::{GameError, Result};
use crate::resume::{Contact, ResumeData, ResumeEntry};
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Tokens left to collect
    #[default]
    Exploring,
    /// Every token collected, summary pending
    Collected,
    /// Summary on screen
    Finished,
}

/// Events for the host (sound, analytics, HUD)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A token was collected for the first time
    EntryCollected { index: usize, entry: ResumeEntry },
    /// The summary was revealed
    AllCollected { summary: String, contact: Contact },
}

/// A collectible, one per résumé entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Index into `experience`
    pub index: usize,
    pub position: Vec2,
    pub collected: bool,
}

/// Collection progress. `collected_count <= total_count` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    pub collected_count: usize,
    pub total_count: usize,
}

impl ProgressState {
    /// Completion needs at least one token; an empty résumé never completes.
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.collected_count == self.total_count
    }

    pub fn remaining(&self) -> usize {
        self.total_count - self.collected_count
    }
}

/// Outcome of [`GameState::collect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// First collection of this token; `completed` if it was the last one
    Collected { completed: bool },
    /// Token was already collected; nothing changed
    AlreadyCollected,
}

/// Complete scene state (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub resume: ResumeData,
    pub layout: WorldLayout,
    pub tokens: Vec<Token>,
    pub progress: ProgressState,
    pub phase: GamePhase,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out the level and create one token per entry
    pub fn new(
        resume: ResumeData,
        viewport_width: f32,
        viewport_height: f32,
        tuning: &Tuning,
    ) -> Self {
        let total = resume.entry_count();
        let layout = derive_layout(total, vec2(viewport_width, viewport_height), tuning);
        let tokens = layout
            .tokens
            .iter()
            .enumerate()
            .map(|(index, &position)| Token {
                index,
                position,
                collected: false,
            })
            .collect();

        Self {
            resume,
            layout,
            tokens,
            progress: ProgressState {
                collected_count: 0,
                total_count: total,
            },
            phase: GamePhase::Exploring,
            events: Vec::new(),
        }
    }

    /// Mark a token collected. Repeat calls for the same token are no-ops.
    pub fn collect(&mut self, index: usize) -> Result<Collection> {
        let total = self.progress.total_count;
        let out_of_range = || GameError::TokenOutOfRange { index, total };
        let entry = self.resume.entry(index).ok_or_else(out_of_range)?;
        let token = self.tokens.get_mut(index).ok_or_else(out_of_range)?;

        if token.collected {
            return Ok(Collection::AlreadyCollected);
        }
        token.collected = true;
        self.progress.collected_count += 1;

        let entry = entry.clone();
        log::debug!(
            "Collected token {} ({} @ {}), {}/{}",
            index,
            entry.title,
            entry.company,
            self.progress.collected_count,
            total
        );
        self.events.push(GameEvent::EntryCollected { index, entry });

        let completed = self.progress.is_complete();
        if completed {
            self.phase = GamePhase::Collected;
        }
        Ok(Collection::Collected { completed })
    }

    /// Record that the summary is on screen.
    ///
    /// Only valid once, after the last token; otherwise a no-op returning false.
    pub fn finish(&mut self) -> bool {
        if self.phase != GamePhase::Collected || !self.progress.is_complete() {
            return false;
        }
        self.phase = GamePhase::Finished;
        self.events.push(GameEvent::AllCollected {
            summary: self.resume.summary.clone(),
            contact: self.resume.contact.clone(),
        });
        true
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
