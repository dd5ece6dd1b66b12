//! Browser bindings
//!
//! The JS engine owns physics and rendering. It builds bodies from
//! `layoutJson()`, forwards overlaps and per-frame input, and applies the
//! returned motion command to the player sprite.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Response};

use crate::error::GameError;
use crate::resume::ResumeData;
use crate::sim::{Collection, GamePhase, OverlayContent, ResumeScene, TickInput};
use crate::tuning::Tuning;
use crate::ui::{DisplaySurface, render_overlay};

/// DOM id of the overlay panel
pub const INFO_BOX_ID: &str = "info-box";

impl From<GameError> for JsValue {
    fn from(e: GameError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Overlay panel backed by a DOM element
#[derive(Debug)]
pub struct DomOverlay {
    element: Option<HtmlElement>,
}

impl DomOverlay {
    /// Look up the panel by id. A missing element turns show/hide into no-ops.
    pub fn from_id(id: &str) -> Self {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if element.is_none() {
            log::warn!("Overlay element #{} not found", id);
        }
        Self { element }
    }

    fn set_display(&self, value: &str) {
        if let Some(el) = &self.element {
            let _ = el.style().set_property("display", value);
        }
    }
}

impl DisplaySurface for DomOverlay {
    fn show(&mut self, content: &OverlayContent) {
        if let Some(el) = &self.element {
            el.set_inner_html(&render_overlay(content));
        }
        self.set_display("block");
    }

    fn hide(&mut self) {
        self.set_display("none");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Resume Quest core loaded");
}

/// Scene handle exported to JS
#[wasm_bindgen]
pub struct WebGame {
    scene: ResumeScene<DomOverlay>,
}

impl WebGame {
    fn build(
        resume_json: &str,
        tuning: Tuning,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<WebGame, GameError> {
        let resume = ResumeData::from_json(resume_json)?;
        let scene = ResumeScene::init(
            resume,
            viewport_width,
            viewport_height,
            tuning,
            DomOverlay::from_id(INFO_BOX_ID),
        )?;
        Ok(WebGame { scene })
    }
}

#[wasm_bindgen]
impl WebGame {
    /// Build a scene from résumé JSON with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(
        resume_json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<WebGame, JsValue> {
        Ok(Self::build(resume_json, Tuning::default(), viewport_width, viewport_height)?)
    }

    /// Build a scene with a tuning override file
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(
        resume_json: &str,
        tuning_json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<WebGame, JsValue> {
        let tuning = Tuning::from_json(tuning_json)?;
        Ok(Self::build(resume_json, tuning, viewport_width, viewport_height)?)
    }

    /// World layout (bounds, ground tiles, tokens, spawn) as JSON
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        Ok(serde_json::to_string(self.scene.layout()).map_err(GameError::from)?)
    }

    #[wasm_bindgen(js_name = worldWidth)]
    pub fn world_width(&self) -> f64 {
        self.scene.layout().width
    }

    #[wasm_bindgen(js_name = tokenCount)]
    pub fn token_count(&self) -> usize {
        self.scene.state().tokens.len()
    }

    /// Player overlapped a token. Returns true on first collection.
    #[wasm_bindgen(js_name = onOverlap)]
    pub fn on_overlap(&mut self, index: usize, now_ms: f64) -> Result<bool, JsValue> {
        let outcome = self.scene.on_overlap(index, now_ms / 1000.0)?;
        Ok(matches!(outcome, Collection::Collected { .. }))
    }

    /// Per-frame input; returns the motion command as JSON
    #[wasm_bindgen(js_name = onTick)]
    pub fn on_tick(
        &mut self,
        left: bool,
        right: bool,
        jump: bool,
        grounded: bool,
        now_ms: f64,
    ) -> Result<String, JsValue> {
        let input = TickInput {
            left,
            right,
            jump,
            grounded,
        };
        let command = self.scene.on_tick(&input, now_ms / 1000.0);
        Ok(serde_json::to_string(&command).map_err(GameError::from)?)
    }

    #[wasm_bindgen(js_name = collectedCount)]
    pub fn collected_count(&self) -> usize {
        self.scene.progress().collected_count
    }

    #[wasm_bindgen(js_name = totalCount)]
    pub fn total_count(&self) -> usize {
        self.scene.progress().total_count
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.scene.phase() != GamePhase::Exploring
    }

    /// Events since the last call, as a JSON array
    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        let events = self.scene.drain_events();
        Ok(serde_json::to_string(&events).map_err(GameError::from)?)
    }
}

/// Fetch the résumé file and build a scene
#[wasm_bindgen(js_name = loadGame)]
pub async fn load_game(
    url: String,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<WebGame, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(&url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "failed to fetch {}: HTTP {}",
            url,
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?).await?;
    let json = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("résumé response is not text"))?;
    log::info!("Fetched {}", url);
    WebGame::new(&json, viewport_width, viewport_height)
}
