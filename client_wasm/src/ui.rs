//! DOM panels around the canvas: start/restart buttons, end-of-round
//! message and the info popup

use game_core::RoundOutcome;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

fn element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn set_display(element: Option<&HtmlElement>, value: &str) {
    if let Some(element) = element {
        let _ = element.style().set_property("display", value);
    }
}

pub struct Ui {
    start_button: Option<HtmlElement>,
    restart_button: Option<HtmlElement>,
    message: Option<HtmlElement>,
    score_display: Option<HtmlElement>,
}

impl Ui {
    pub fn new(document: &Document) -> Self {
        Self {
            start_button: element(document, "startButton"),
            restart_button: element(document, "restartButton"),
            message: element(document, "gameMessage"),
            score_display: element(document, "scoreDisplay"),
        }
    }

    pub fn start_button(&self) -> Option<&HtmlElement> {
        self.start_button.as_ref()
    }

    pub fn restart_button(&self) -> Option<&HtmlElement> {
        self.restart_button.as_ref()
    }

    pub fn round_started(&self) {
        set_display(self.message.as_ref(), "none");
        set_display(self.start_button.as_ref(), "none");
    }

    pub fn round_ended(&self, outcome: &RoundOutcome) {
        if let Some(display) = &self.score_display {
            display.set_text_content(Some(&outcome.summary()));
        }
        set_display(self.message.as_ref(), "block");
        if let Some(button) = &self.restart_button {
            let _ = button.focus();
        }
    }
}

/// Show or hide the info popup
pub fn set_popup_visible(document: &Document, visible: bool) {
    let value = if visible { "flex" } else { "none" };
    set_display(element(document, "popup").as_ref(), value);
}
