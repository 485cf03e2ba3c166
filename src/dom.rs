//! Handles on the page elements the game attaches to. The page owns the markup;
//! we only look elements up, toggle classes and write text.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, window};

use crate::config::PageSelectors;
use crate::error::{GameError, Result};
use crate::game::TargetKind;

pub fn document() -> Result<Document> {
    window()
        .ok_or(GameError::NoWindow)?
        .document()
        .ok_or(GameError::NoDocument)
}

pub struct Page {
    pub start_button: HtmlButtonElement,
    pub radios: Vec<HtmlInputElement>,
    /// Index-aligned with `holes`.
    pub moles: Vec<Element>,
    score: Element,
    timer: Element,
    holes: Vec<Element>,
    show_class: String,
    cybermole_class: String,
}

impl Page {
    pub fn query(doc: &Document, selectors: &PageSelectors) -> Result<Self> {
        let start_button: HtmlButtonElement = require(doc, &selectors.start_button)?
            .dyn_into()
            .map_err(|_| missing(&selectors.start_button))?;
        let score = require(doc, &selectors.score)?;
        let timer = require(doc, &selectors.timer)?;

        let holes = query_all(doc, &selectors.holes)?;
        if holes.is_empty() {
            return Err(missing(&selectors.holes));
        }
        let moles = holes
            .iter()
            .map(|hole| {
                hole.query_selector(&selectors.mole)?
                    .ok_or_else(|| missing(&selectors.mole))
            })
            .collect::<Result<Vec<_>>>()?;

        let radios = query_all(doc, &selectors.difficulty_radios)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .collect();

        Ok(Self {
            start_button,
            radios,
            moles,
            score,
            timer,
            holes,
            show_class: selectors.show_class.clone(),
            cybermole_class: selectors.cybermole_class.clone(),
        })
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn show(&self, hole: usize, kind: TargetKind) -> Result<()> {
        if let Some(mole) = self.moles.get(hole) {
            mole.class_list().toggle_with_force(
                &self.cybermole_class,
                kind == TargetKind::Cybermole,
            )?;
        }
        if let Some(el) = self.holes.get(hole) {
            el.class_list().add_1(&self.show_class)?;
        }
        Ok(())
    }

    pub fn hide(&self, hole: usize) -> Result<()> {
        if let Some(el) = self.holes.get(hole) {
            el.class_list().remove_1(&self.show_class)?;
        }
        Ok(())
    }

    pub fn render_score(&self, points: u32) {
        self.score.set_text_content(Some(&points.to_string()));
    }

    pub fn render_timer(&self, secs: u32) {
        self.timer.set_text_content(Some(&secs.to_string()));
    }

    /// Start button and difficulty radios are disabled together during a round.
    pub fn set_controls_disabled(&self, disabled: bool) {
        self.start_button.set_disabled(disabled);
        for radio in &self.radios {
            radio.set_disabled(disabled);
        }
    }

    pub fn checked_difficulty(&self) -> Option<String> {
        self.radios.iter().find(|r| r.checked()).map(|r| r.value())
    }
}

fn require(doc: &Document, selector: &str) -> Result<Element> {
    doc.query_selector(selector)?
        .ok_or_else(|| missing(selector))
}

fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn missing(selector: &str) -> GameError {
    GameError::MissingElement {
        selector: selector.to_string(),
    }
}
