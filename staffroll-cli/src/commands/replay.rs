//! Event script replay

use anyhow::Result;
use serde::Serialize;
use staffroll_common::{
    EditorConfig, EditorEvent, Employee, EmployeeListEditor, EventOutcome, FocusRequest,
    FocusTarget, SwipeState,
};
use std::path::Path;
use tabled::Tabled;
use tracing::{debug, info};

use crate::output::{self, OutputFormat};
use crate::script;

#[derive(Tabled)]
struct EmployeeRow {
    id: u64,
    name: String,
    salary: String,
    age: String,
    gender: String,
}

impl EmployeeRow {
    fn new(emp: &Employee, currency: &str) -> Self {
        Self {
            id: emp.id.get(),
            name: emp.name.clone(),
            salary: if emp.salary.is_empty() {
                "-".to_string()
            } else {
                format!("{}{}", currency, emp.salary)
            },
            age: if emp.age.is_empty() { "-".to_string() } else { emp.age.clone() },
            gender: emp.gender.to_string(),
        }
    }
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "#")]
    index: usize,
    event: String,
    outcome: String,
    swipe: String,
}

impl From<&Step> for StepRow {
    fn from(step: &Step) -> Self {
        Self {
            index: step.index,
            event: event_name(&step.event),
            outcome: describe_outcome(&step.outcome),
            swipe: describe_swipe(&step.swipe),
        }
    }
}

/// One applied event and the state right after it
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: EditorEvent,
    pub outcome: EventOutcome,
    pub swipe: SwipeState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    pub focus_delivered: Vec<FocusRequest>,
    pub employees: Vec<Employee>,
}

/// Headless stand-in for the DOM: every requested element exists
#[derive(Default)]
struct RecordingFocus {
    delivered: Vec<FocusRequest>,
}

impl FocusTarget for RecordingFocus {
    fn deliver(&mut self, request: &FocusRequest) -> bool {
        debug!(element = %request.element_id(), select = request.select, "focus delivered");
        self.delivered.push(*request);
        true
    }
}

/// Apply `events` in order, delivering pending focus after each one
pub fn replay(
    events: Vec<EditorEvent>,
    config: &EditorConfig,
    card_width: f64,
    keep_steps: bool,
) -> Result<ReplayReport> {
    let mut editor = EmployeeListEditor::with_config(config.clone())?;
    let mut focus = RecordingFocus::default();
    let mut steps = Vec::new();

    for (index, event) in events.into_iter().enumerate() {
        let event = event.with_default_card_width(card_width);
        let outcome = editor.apply(event.clone());
        if outcome == EventOutcome::Ignored {
            debug!(index, ?event, "event ignored");
        }
        editor.flush_focus(&mut focus);

        if keep_steps {
            steps.push(Step {
                index: index + 1,
                event,
                outcome,
                swipe: *editor.swipe(),
            });
        }
    }

    info!(employees = editor.roster().len(), "replay finished");
    Ok(ReplayReport {
        steps,
        focus_delivered: focus.delivered,
        employees: editor.roster().to_vec(),
    })
}

pub fn run(
    path: &Path,
    config: &EditorConfig,
    card_width: f64,
    steps: bool,
    format: OutputFormat,
) -> Result<()> {
    let events = script::load(path)?;
    let report = replay(events, config, card_width, steps)?;

    if format == OutputFormat::Table && steps {
        output::print_table(report.steps.iter().map(StepRow::from).collect(), "No events");
        println!();
    }

    let rows = report
        .employees
        .iter()
        .map(|e| EmployeeRow::new(e, &config.salary.currency_symbol))
        .collect();
    output::print_output(rows, &report, format, "No employees")
}

fn event_name(event: &EditorEvent) -> String {
    serde_json::to_value(event)
        .ok()
        .and_then(|v| v.get("event").and_then(|n| n.as_str()).map(str::to_string))
        .unwrap_or_default()
}

fn describe_outcome(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::Added(id) => format!("added #{}", id),
        EventOutcome::Removed(id) => format!("removed #{}", id),
        EventOutcome::SwipeCancelled(id) => format!("sprang back #{}", id),
        EventOutcome::Applied => "ok".to_string(),
        EventOutcome::Ignored => "ignored".to_string(),
    }
}

fn describe_swipe(swipe: &SwipeState) -> String {
    match swipe {
        SwipeState::Idle => "idle".to_string(),
        SwipeState::Swiping { id, offset, .. } => format!("#{} at {:.0}px", id, offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffroll_common::{EmployeeId, Field, Gender, SwipePreset};

    fn id(n: u64) -> EmployeeId {
        EmployeeId::new(n)
    }

    #[test]
    fn test_replay_end_to_end() {
        let events = vec![
            EditorEvent::Add,
            EditorEvent::Update {
                id: id(1),
                field: Field::Name,
                value: "Alice".to_string(),
            },
            EditorEvent::ToggleGender { id: id(1) },
        ];

        let report = replay(events, &EditorConfig::default(), 360.0, false).unwrap();
        assert!(report.steps.is_empty());
        assert_eq!(report.employees.len(), 1);
        assert_eq!(report.employees[0].name, "Alice");
        assert_eq!(report.employees[0].gender, Gender::Female);

        // the add asked for the new name field to be focused
        assert_eq!(report.focus_delivered.len(), 1);
        assert_eq!(report.focus_delivered[0].element_id(), "employee-name-1");
    }

    #[test]
    fn test_replay_uses_default_card_width() {
        // 25% of 360 is 90; a 100px swipe commits only if the width was filled in
        let events = vec![
            EditorEvent::Add,
            EditorEvent::TouchStart { id: id(1), x: 300.0 },
            EditorEvent::TouchMove { id: id(1), x: 200.0, card_width: None },
            EditorEvent::TouchEnd { id: id(1), card_width: None },
        ];

        let config = EditorConfig::with_preset(SwipePreset::Proportional);
        let report = replay(events, &config, 360.0, true).unwrap();

        assert!(report.employees.is_empty());
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[3].outcome, EventOutcome::Removed(id(1)));
        assert!(report.steps[3].swipe.is_idle());
    }

    #[test]
    fn test_replay_rejects_invalid_config() {
        let mut config = EditorConfig::default();
        config.salary.max_digits = 0;
        assert!(replay(vec![], &config, 360.0, false).is_err());
    }

    #[test]
    fn test_step_descriptions() {
        let step = Step {
            index: 2,
            event: EditorEvent::TouchStart { id: id(4), x: 10.0 },
            outcome: EventOutcome::Applied,
            swipe: SwipeState::Swiping {
                id: id(4),
                start_x: 10.0,
                offset: 42.4,
            },
        };
        let row = StepRow::from(&step);
        assert_eq!(row.event, "touch_start");
        assert_eq!(row.outcome, "ok");
        assert_eq!(row.swipe, "#4 at 42px");
    }

    #[test]
    fn test_employee_row_placeholders() {
        let config = EditorConfig::default();
        let mut emp = Employee::new(id(9), &config);
        emp.salary.clear();

        let row = EmployeeRow::new(&emp, "€");
        assert_eq!(row.salary, "-");
        assert_eq!(row.age, "-");
        assert_eq!(row.gender, "male");
    }
}
