//! Reducer wrapper around the shared editor

use std::ops::Deref;
use std::rc::Rc;

use staffroll_common::{EditorConfig, EditorEvent, EmployeeListEditor, EventOutcome};
use yew::prelude::*;

/// Handle the pages use to read and drive the editor
pub type EditorContext = UseReducerHandle<EditorStore>;

pub enum EditorAction {
    Event(EditorEvent),
    Configure(EditorConfig),
}

#[derive(Clone, PartialEq)]
pub struct EditorStore(EmployeeListEditor);

impl EditorStore {
    pub fn new(config: EditorConfig) -> Self {
        match EmployeeListEditor::with_config(config) {
            Ok(editor) => Self(editor),
            Err(err) => {
                web_sys::console::warn_1(&format!("Using default config: {}", err).into());
                Self(EmployeeListEditor::new())
            }
        }
    }
}

impl Deref for EditorStore {
    type Target = EmployeeListEditor;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for EditorStore {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            EditorAction::Event(event) => {
                if let EventOutcome::Removed(id) = next.0.apply(event) {
                    web_sys::console::log_1(&format!("Removed employee {}", id).into());
                }
            }
            EditorAction::Configure(config) => {
                if let Err(err) = next.0.set_config(config) {
                    web_sys::console::error_1(&err.to_string().into());
                    return self;
                }
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
