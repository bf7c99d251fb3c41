//! Employee list editor
//!
//! `EmployeeListEditor` owns the roster together with the transient
//! interaction state (swipe tracking, focused field, pending focus request).
//! UI layers send it one event at a time, either through the typed methods or
//! through [`EmployeeListEditor::apply`], and then render from its getters.

use serde::{Deserialize, Deserializer, Serialize};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::employee::{Employee, EmployeeId, Field, Gender};
use crate::focus::{FocusRequest, FocusTarget};
use crate::roster::Roster;
use crate::salary::{self, SalaryBand, SalaryMode};
use crate::swipe::{SwipeOutcome, SwipeState, SwipeVisual};
use crate::{age, placeholder, Result};

/// Every UI event the editor understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    Add,
    Update {
        id: EmployeeId,
        field: Field,
        #[serde(deserialize_with = "scalar_text")]
        value: String,
    },
    Remove {
        id: EmployeeId,
    },
    ToggleGender {
        id: EmployeeId,
    },
    Focus {
        id: EmployeeId,
        field: Field,
    },
    Input {
        id: EmployeeId,
        field: Field,
        #[serde(deserialize_with = "scalar_text")]
        value: String,
    },
    Blur {
        id: EmployeeId,
        field: Field,
    },
    TouchStart {
        id: EmployeeId,
        x: f64,
    },
    TouchMove {
        id: EmployeeId,
        x: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_width: Option<f64>,
    },
    TouchEnd {
        id: EmployeeId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_width: Option<f64>,
    },
    TouchCancel {
        id: EmployeeId,
    },
    FocusDelivered {
        seq: u64,
    },
    /// The slide-out of a swiped-away card has finished
    DismissEnd {
        id: EmployeeId,
    },
}

/// Field values typed into hand-written scripts may come through as bare
/// numbers (`value: 41` in YAML); keep them as the text the field would hold.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    })
}

impl EditorEvent {
    /// Fill in a card width on touch events that don't carry one
    pub fn with_default_card_width(self, width: f64) -> Self {
        match self {
            Self::TouchMove { id, x, card_width } => Self::TouchMove {
                id,
                x,
                card_width: card_width.or(Some(width)),
            },
            Self::TouchEnd { id, card_width } => Self::TouchEnd {
                id,
                card_width: card_width.or(Some(width)),
            },
            other => other,
        }
    }
}

/// Result of applying a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum EventOutcome {
    Added(EmployeeId),
    Removed(EmployeeId),
    /// A swipe was released short of the threshold
    SwipeCancelled(EmployeeId),
    Applied,
    /// Unknown id, untracked swipe or stale focus acknowledgement
    Ignored,
}

/// A record already removed by a committed swipe whose card is still sliding out
#[derive(Debug, Clone, PartialEq)]
pub struct Leaving {
    pub employee: Rc<Employee>,
    pub index: usize, // where it sat in the list
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListEditor {
    config: EditorConfig,
    roster: Roster,
    swipe: SwipeState,
    leaving: Option<Leaving>,
    focused: Option<(EmployeeId, Field)>,
    pending_focus: Option<FocusRequest>,
    focus_seq: u64,
}

impl Default for EmployeeListEditor {
    fn default() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }
}

impl EmployeeListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        Self {
            config,
            roster: Roster::new(),
            swipe: SwipeState::Idle,
            leaving: None,
            focused: None,
            pending_focus: None,
            focus_seq: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn employees(&self) -> impl Iterator<Item = &Rc<Employee>> {
        self.roster.iter()
    }

    pub fn swipe(&self) -> &SwipeState {
        &self.swipe
    }

    /// Set between a committed swipe and its `DismissEnd` when commits are animated
    pub fn leaving(&self) -> Option<&Leaving> {
        self.leaving.as_ref()
    }

    pub fn focused(&self) -> Option<(EmployeeId, Field)> {
        self.focused
    }

    pub fn pending_focus(&self) -> Option<&FocusRequest> {
        self.pending_focus.as_ref()
    }

    /// Swap in a new configuration. Salary values are carried across a mode
    /// change so every record stays valid for the new input discipline.
    pub fn set_config(&mut self, config: EditorConfig) -> Result<()> {
        config.validate()?;

        let from = self.config.salary.mode;
        let to = config.salary.mode;
        self.config = config;

        if from != to {
            for id in self.roster.ids() {
                let current = match self.roster.get(id) {
                    Some(emp) => emp.salary.clone(),
                    None => continue,
                };
                let converted = self.convert_salary(&current, to);
                self.roster.update(id, Field::Salary, converted);
            }
            debug!(?from, ?to, "salary mode changed");
        }

        // An in-flight gesture was measured against the old limits
        self.swipe = SwipeState::Idle;
        Ok(())
    }

    fn convert_salary(&self, value: &str, to: SalaryMode) -> String {
        match to {
            SalaryMode::Banded => salary::parse_amount(value)
                .map(SalaryBand::for_amount)
                .unwrap_or_else(SalaryBand::lowest)
                .label(),
            SalaryMode::FreeText => {
                let amount = SalaryBand::from_label(value).map(|b| b.floor_amount()).unwrap_or(0);
                salary::format_grouped(&amount.to_string(), self.config.salary.grouping_separator)
                    .unwrap_or_default()
            }
        }
    }

    /// Append a default record and ask for its name field to be focused once rendered
    pub fn add(&mut self) -> EmployeeId {
        let id = self.roster.add(&self.config);
        self.request_focus(id, Field::Name, false);
        id
    }

    pub fn update(&mut self, id: EmployeeId, field: Field, value: impl Into<String>) -> bool {
        self.roster.update(id, field, value.into())
    }

    /// Remove a record and forget any interaction state that points at it
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.detach(id).is_some()
    }

    fn detach(&mut self, id: EmployeeId) -> Option<(usize, Rc<Employee>)> {
        let taken = self.roster.take(id)?;
        self.swipe.clear_if(id);
        if matches!(self.focused, Some((focused, _)) if focused == id) {
            self.focused = None;
        }
        if matches!(self.pending_focus, Some(req) if req.id == id) {
            self.pending_focus = None;
        }
        Some(taken)
    }

    pub fn toggle_gender(&mut self, id: EmployeeId) -> Option<Gender> {
        self.roster.toggle_gender(id)
    }

    pub fn focus(&mut self, id: EmployeeId, field: Field) -> bool {
        let Some(current) = self.roster.get(id).map(|e| e.field(field).to_string()) else {
            return false;
        };
        self.focused = Some((id, field));

        match field {
            Field::Name => {
                if let Some(cleared) = placeholder::on_focus(&current, &self.config.name_placeholder) {
                    self.roster.update(id, field, cleared);
                }
            }
            Field::Salary if self.config.salary.mode == SalaryMode::FreeText => {
                self.roster.update(id, field, salary::strip_grouping(&current));
                self.request_focus(id, field, true);
            }
            Field::Salary | Field::Age => {}
        }
        true
    }

    /// Keystroke-level change. Salary and age input is filtered silently.
    pub fn input(&mut self, id: EmployeeId, field: Field, raw: &str) -> bool {
        if !self.roster.contains(id) {
            return false;
        }

        let value = match field {
            Field::Name => raw.to_string(),
            Field::Salary => match self.config.salary.mode {
                SalaryMode::FreeText => salary::filter_digits(raw, self.config.salary.max_digits),
                SalaryMode::Banded => match SalaryBand::from_label(raw) {
                    Some(band) => band.label(),
                    None => {
                        warn!(%id, value = raw, "not a salary band, ignoring");
                        return false;
                    }
                },
            },
            Field::Age => age::filter_input(raw, &self.config.age),
        };
        self.roster.update(id, field, value)
    }

    pub fn blur(&mut self, id: EmployeeId, field: Field) -> bool {
        let Some(current) = self.roster.get(id).map(|e| e.field(field).to_string()) else {
            return false;
        };
        if self.focused == Some((id, field)) {
            self.focused = None;
        }

        let next = match field {
            Field::Name => placeholder::on_blur(&current, &self.config.name_placeholder),
            Field::Salary => match self.config.salary.mode {
                SalaryMode::FreeText => salary::format_grouped(
                    &salary::strip_grouping(&current),
                    self.config.salary.grouping_separator,
                ),
                SalaryMode::Banded => None,
            },
            Field::Age => Some(age::normalize(&current, &self.config.age)),
        };
        if let Some(value) = next {
            self.roster.update(id, field, value);
        }
        true
    }

    pub fn touch_start(&mut self, id: EmployeeId, x: f64) -> bool {
        if !self.roster.contains(id) {
            return false;
        }
        self.swipe.touch_start(id, x);
        true
    }

    pub fn touch_move(&mut self, id: EmployeeId, x: f64, card_width: f64) -> bool {
        self.swipe.touch_move(id, x, &self.config.swipe, card_width)
    }

    /// Release. A committed swipe removes the record before returning; with
    /// `animate_commit` the removed record is also parked in [`Self::leaving`]
    /// so its card can finish sliding out.
    pub fn touch_end(&mut self, id: EmployeeId, card_width: f64) -> SwipeOutcome {
        let outcome = self.swipe.touch_end(id, &self.config.swipe, card_width);
        if let SwipeOutcome::Committed(id) = outcome {
            if let Some((index, employee)) = self.detach(id) {
                if self.config.swipe.animate_commit {
                    self.leaving = Some(Leaving { employee, index });
                }
            }
        }
        outcome
    }

    /// Drop the leaving record once its slide-out is over
    pub fn finish_leaving(&mut self, id: EmployeeId) -> bool {
        if matches!(&self.leaving, Some(leaving) if leaving.employee.id == id) {
            self.leaving = None;
            true
        } else {
            false
        }
    }

    /// The platform aborted the touch; the card springs back without deleting
    pub fn touch_cancel(&mut self, id: EmployeeId) -> bool {
        self.swipe.clear_if(id)
    }

    /// How the card for `id` should currently be drawn
    pub fn swipe_visual(&self, id: EmployeeId, card_width: f64) -> SwipeVisual {
        SwipeVisual::new(self.swipe.offset_for(id), card_width, self.config.swipe.fade)
    }

    fn request_focus(&mut self, id: EmployeeId, field: Field, select: bool) {
        self.focus_seq += 1;
        self.pending_focus = Some(FocusRequest {
            seq: self.focus_seq,
            id,
            field,
            select,
        });
    }

    /// Clear the pending request if it is the one with `seq`
    pub fn acknowledge_focus(&mut self, seq: u64) -> bool {
        match self.pending_focus {
            Some(req) if req.seq == seq => {
                self.pending_focus = None;
                true
            }
            _ => false,
        }
    }

    /// Hand the pending request to `target`; call after each render pass
    pub fn flush_focus<T: FocusTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        let Some(request) = self.pending_focus else {
            return false;
        };
        if target.deliver(&request) {
            self.pending_focus = None;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, event: EditorEvent) -> EventOutcome {
        fn applied(ok: bool) -> EventOutcome {
            if ok {
                EventOutcome::Applied
            } else {
                EventOutcome::Ignored
            }
        }

        match event {
            EditorEvent::Add => EventOutcome::Added(self.add()),
            EditorEvent::Update { id, field, value } => applied(self.update(id, field, value)),
            EditorEvent::Remove { id } => {
                if self.remove(id) {
                    EventOutcome::Removed(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            EditorEvent::ToggleGender { id } => applied(self.toggle_gender(id).is_some()),
            EditorEvent::Focus { id, field } => applied(self.focus(id, field)),
            EditorEvent::Input { id, field, value } => applied(self.input(id, field, &value)),
            EditorEvent::Blur { id, field } => applied(self.blur(id, field)),
            EditorEvent::TouchStart { id, x } => applied(self.touch_start(id, x)),
            EditorEvent::TouchMove { id, x, card_width } => {
                applied(self.touch_move(id, x, card_width.unwrap_or(0.0)))
            }
            EditorEvent::TouchEnd { id, card_width } => {
                match self.touch_end(id, card_width.unwrap_or(0.0)) {
                    SwipeOutcome::Committed(id) => EventOutcome::Removed(id),
                    SwipeOutcome::Cancelled(id) => EventOutcome::SwipeCancelled(id),
                    SwipeOutcome::Ignored => EventOutcome::Ignored,
                }
            }
            EditorEvent::TouchCancel { id } => applied(self.touch_cancel(id)),
            EditorEvent::FocusDelivered { seq } => applied(self.acknowledge_focus(seq)),
            EditorEvent::DismissEnd { id } => applied(self.finish_leaving(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwipePreset;

    #[derive(Default)]
    struct Recorder {
        rendered: bool,
        delivered: Vec<FocusRequest>,
    }

    impl FocusTarget for Recorder {
        fn deliver(&mut self, request: &FocusRequest) -> bool {
            if self.rendered {
                self.delivered.push(*request);
            }
            self.rendered
        }
    }

    #[test]
    fn test_add_requests_name_focus() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();

        let req = editor.pending_focus().copied().unwrap();
        assert_eq!(req.id, id);
        assert_eq!(req.field, Field::Name);
        assert!(!req.select);
    }

    #[test]
    fn test_focus_waits_for_render() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();
        let mut target = Recorder::default();

        assert!(!editor.flush_focus(&mut target));
        assert!(editor.pending_focus().is_some());

        target.rendered = true;
        assert!(editor.flush_focus(&mut target));
        assert!(editor.pending_focus().is_none());
        assert_eq!(target.delivered.len(), 1);
        assert_eq!(target.delivered[0].id, id);

        // runs once only
        assert!(!editor.flush_focus(&mut target));
        assert_eq!(target.delivered.len(), 1);
    }

    #[test]
    fn test_stale_focus_ack_ignored() {
        let mut editor = EmployeeListEditor::new();
        editor.add();
        let first = editor.pending_focus().unwrap().seq;
        editor.add();

        assert!(!editor.acknowledge_focus(first));
        let second = editor.pending_focus().unwrap().seq;
        assert!(editor.acknowledge_focus(second));
    }

    #[test]
    fn test_name_placeholder_round_trip() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();

        editor.focus(id, Field::Name);
        assert_eq!(editor.roster().get(id).unwrap().name, "");
        assert_eq!(editor.focused(), Some((id, Field::Name)));

        editor.blur(id, Field::Name);
        assert_eq!(editor.roster().get(id).unwrap().name, "New Employee");
        assert_eq!(editor.focused(), None);
    }

    #[test]
    fn test_name_kept_after_typing() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();

        editor.focus(id, Field::Name);
        editor.input(id, Field::Name, "Bob");
        editor.blur(id, Field::Name);
        assert_eq!(editor.roster().get(id).unwrap().name, "Bob");

        // focusing a real name leaves it alone
        editor.focus(id, Field::Name);
        assert_eq!(editor.roster().get(id).unwrap().name, "Bob");
    }

    #[test]
    fn test_salary_edit_cycle() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();
        editor.acknowledge_focus(editor.pending_focus().unwrap().seq);

        editor.focus(id, Field::Salary);
        let req = editor.pending_focus().copied().unwrap();
        assert_eq!(req.field, Field::Salary);
        assert!(req.select);

        editor.input(id, Field::Salary, "12a3b456789");
        assert_eq!(editor.roster().get(id).unwrap().salary, "123456");

        editor.blur(id, Field::Salary);
        assert_eq!(editor.roster().get(id).unwrap().salary, "123,456");

        editor.focus(id, Field::Salary);
        assert_eq!(editor.roster().get(id).unwrap().salary, "123456");
    }

    #[test]
    fn test_empty_salary_stays_empty_on_blur() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();

        editor.focus(id, Field::Salary);
        editor.input(id, Field::Salary, "abc");
        editor.blur(id, Field::Salary);
        assert_eq!(editor.roster().get(id).unwrap().salary, "");
    }

    #[test]
    fn test_banded_salary_accepts_only_bands() {
        let mut config = EditorConfig::default();
        config.salary.mode = SalaryMode::Banded;
        let mut editor = EmployeeListEditor::with_config(config).unwrap();
        let id = editor.add();

        assert_eq!(editor.roster().get(id).unwrap().salary, "<5k");
        assert!(editor.input(id, Field::Salary, "45k–50k"));
        assert!(!editor.input(id, Field::Salary, "47000"));

        editor.focus(id, Field::Salary);
        editor.blur(id, Field::Salary);
        assert_eq!(editor.roster().get(id).unwrap().salary, "45k–50k");
    }

    #[test]
    fn test_salary_mode_switch_converts_values() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();
        editor.update(id, Field::Salary, "47,500");

        let mut banded = editor.config().clone();
        banded.salary.mode = SalaryMode::Banded;
        editor.set_config(banded).unwrap();
        assert_eq!(editor.roster().get(id).unwrap().salary, "45k–50k");

        let mut free = editor.config().clone();
        free.salary.mode = SalaryMode::FreeText;
        editor.set_config(free).unwrap();
        assert_eq!(editor.roster().get(id).unwrap().salary, "45,000");
    }

    #[test]
    fn test_age_filter_and_clamp() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();

        editor.focus(id, Field::Age);
        editor.input(id, Field::Age, "9x9");
        assert_eq!(editor.roster().get(id).unwrap().age, "99");
        editor.blur(id, Field::Age);
        assert_eq!(editor.roster().get(id).unwrap().age, "67");
    }

    #[test]
    fn test_swipe_commit_removes_record() {
        let config = EditorConfig::with_preset(SwipePreset::Simple);
        let mut editor = EmployeeListEditor::with_config(config).unwrap();
        let keep = editor.add();
        let doomed = editor.add();

        editor.touch_start(doomed, 300.0);
        editor.touch_move(doomed, 200.0, 360.0);
        assert_eq!(editor.swipe_visual(doomed, 360.0).translate_x, -100.0);

        assert_eq!(editor.touch_end(doomed, 360.0), SwipeOutcome::Committed(doomed));
        assert_eq!(editor.roster().ids(), vec![keep]);
        assert!(editor.swipe().is_idle());
    }

    #[test]
    fn test_committed_swipe_survives_touch_on_other_card() {
        let config = EditorConfig::with_preset(SwipePreset::Proportional);
        let mut editor = EmployeeListEditor::with_config(config).unwrap();
        let a = editor.add();
        let b = editor.add();

        editor.touch_start(a, 400.0);
        editor.touch_move(a, 250.0, 400.0);
        assert_eq!(editor.touch_end(a, 400.0), SwipeOutcome::Committed(a));
        assert_eq!(editor.roster().ids(), vec![b]);

        // a second finger lands while the first card is still sliding out
        assert!(editor.touch_start(b, 300.0));
        assert!(!editor.touch_start(a, 300.0));
        assert_eq!(editor.swipe().swiping_id(), Some(b));

        let leaving = editor.leaving().unwrap();
        assert_eq!(leaving.employee.id, a);
        assert_eq!(leaving.index, 0);

        assert_eq!(editor.apply(EditorEvent::DismissEnd { id: a }), EventOutcome::Applied);
        assert!(editor.leaving().is_none());
        assert_eq!(editor.roster().ids(), vec![b]);
        assert_eq!(editor.apply(EditorEvent::DismissEnd { id: a }), EventOutcome::Ignored);
    }

    #[test]
    fn test_unanimated_commit_leaves_nothing_behind() {
        let config = EditorConfig::with_preset(SwipePreset::Simple);
        let mut editor = EmployeeListEditor::with_config(config).unwrap();
        let id = editor.add();

        editor.touch_start(id, 300.0);
        editor.touch_move(id, 200.0, 360.0);
        assert_eq!(editor.touch_end(id, 360.0), SwipeOutcome::Committed(id));
        assert!(editor.leaving().is_none());

        // the delete button never animates either
        let mut animated = EmployeeListEditor::new();
        let other = animated.add();
        animated.remove(other);
        assert!(animated.leaving().is_none());
    }

    #[test]
    fn test_numeric_script_values_become_text() {
        let event: EditorEvent =
            serde_json::from_str(r#"{"event": "input", "id": 1, "field": "age", "value": 41}"#).unwrap();
        assert_eq!(
            event,
            EditorEvent::Input {
                id: EmployeeId::new(1),
                field: Field::Age,
                value: "41".to_string(),
            }
        );

        let event: EditorEvent =
            serde_json::from_str(r#"{"event": "update", "id": 1, "field": "salary", "value": -5}"#).unwrap();
        assert!(matches!(event, EditorEvent::Update { ref value, .. } if value == "-5"));
    }

    #[test]
    fn test_swipe_cancel_keeps_record() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();

        editor.touch_start(id, 300.0);
        editor.touch_move(id, 250.0, 400.0);
        assert_eq!(editor.touch_end(id, 400.0), SwipeOutcome::Cancelled(id));
        assert!(editor.roster().contains(id));
        assert_eq!(editor.swipe_visual(id, 400.0), SwipeVisual::REST);
    }

    #[test]
    fn test_touch_cancel_never_deletes() {
        let config = EditorConfig::with_preset(SwipePreset::Simple);
        let mut editor = EmployeeListEditor::with_config(config).unwrap();
        let id = editor.add();

        editor.touch_start(id, 300.0);
        editor.touch_move(id, 100.0, 360.0);
        assert!(editor.touch_cancel(id));
        assert!(editor.roster().contains(id));
        assert!(editor.swipe().is_idle());
        assert_eq!(editor.touch_end(id, 360.0), SwipeOutcome::Ignored);
    }

    #[test]
    fn test_touch_start_on_unknown_record_ignored() {
        let mut editor = EmployeeListEditor::new();
        assert!(!editor.touch_start(EmployeeId::new(5), 10.0));
        assert!(editor.swipe().is_idle());
    }

    #[test]
    fn test_remove_clears_interaction_state() {
        let mut editor = EmployeeListEditor::new();
        let id = editor.add();
        editor.focus(id, Field::Age);
        editor.touch_start(id, 100.0);

        assert!(editor.remove(id));
        assert!(editor.swipe().is_idle());
        assert_eq!(editor.focused(), None);
        assert!(editor.pending_focus().is_none());
        assert!(!editor.remove(id));
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let mut editor = EmployeeListEditor::new();
        let mut bad = EditorConfig::default();
        bad.age.max = 1;
        assert!(editor.set_config(bad).is_err());
        assert_eq!(editor.config(), &EditorConfig::default());
    }

    #[test]
    fn test_event_json_shape() {
        let event: EditorEvent =
            serde_json::from_str(r#"{"event": "touch_move", "id": 2, "x": 120.5}"#).unwrap();
        assert_eq!(
            event,
            EditorEvent::TouchMove {
                id: EmployeeId::new(2),
                x: 120.5,
                card_width: None
            }
        );

        let filled = event.with_default_card_width(360.0);
        assert!(matches!(filled, EditorEvent::TouchMove { card_width: Some(w), .. } if w == 360.0));

        let json = serde_json::to_string(&EditorEvent::Add).unwrap();
        assert_eq!(json, r#"{"event":"add"}"#);
    }

    #[test]
    fn test_apply_outcomes() {
        let mut editor = EmployeeListEditor::new();
        let EventOutcome::Added(id) = editor.apply(EditorEvent::Add) else {
            panic!("add did not report an id");
        };

        assert_eq!(editor.apply(EditorEvent::ToggleGender { id }), EventOutcome::Applied);
        assert_eq!(
            editor.apply(EditorEvent::ToggleGender { id: EmployeeId::new(99) }),
            EventOutcome::Ignored
        );
        assert_eq!(editor.apply(EditorEvent::Remove { id }), EventOutcome::Removed(id));
        assert_eq!(editor.apply(EditorEvent::Remove { id }), EventOutcome::Ignored);
    }
}
