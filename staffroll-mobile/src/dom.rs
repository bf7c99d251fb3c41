//! DOM-backed focus delivery

use staffroll_common::{FocusRequest, FocusTarget};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Resolves focus requests by element id in the current document
pub struct DomFocusTarget;

impl FocusTarget for DomFocusTarget {
    fn deliver(&mut self, request: &FocusRequest) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&request.element_id()))
        else {
            return false;
        };

        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            return false;
        };

        let _ = input.focus();
        if request.select {
            input.select();
        }
        true
    }
}
