//! Employee list page

use staffroll_common::{EditorEvent, FocusTarget};
use yew::prelude::*;

use crate::components::{EmployeeCard, Header};
use crate::dom::DomFocusTarget;
use crate::store::{EditorAction, EditorContext};

#[function_component(EmployeeList)]
pub fn employee_list() -> Html {
    let editor = use_context::<EditorContext>().expect("EditorContext is provided by App");

    let on_event = {
        let editor = editor.clone();
        Callback::from(move |event: EditorEvent| editor.dispatch(EditorAction::Event(event)))
    };

    let on_add = {
        let on_event = on_event.clone();
        Callback::from(move |_: ()| on_event.emit(EditorEvent::Add))
    };

    // Pending focus is delivered after the render that created its target
    {
        let editor = editor.clone();
        let request = editor.pending_focus().copied();

        use_effect_with(request, move |request| {
            if let Some(request) = request {
                if DomFocusTarget.deliver(request) {
                    editor.dispatch(EditorAction::Event(EditorEvent::FocusDelivered {
                        seq: request.seq,
                    }));
                }
            }
            || ()
        });
    }

    let config = editor.config().clone();
    let swipe = *editor.swipe();

    let mut cards: Vec<Html> = editor
        .employees()
        .map(|emp| {
            html! {
                <EmployeeCard
                    key={emp.id.get()}
                    employee={emp.clone()}
                    config={config.clone()}
                    swipe={swipe}
                    on_event={on_event.clone()}
                />
            }
        })
        .collect();

    // A swiped-away card keeps its slot until the slide-out ends
    if let Some(leaving) = editor.leaving() {
        let card = html! {
            <EmployeeCard
                key={leaving.employee.id.get()}
                employee={leaving.employee.clone()}
                config={config.clone()}
                swipe={swipe}
                on_event={on_event.clone()}
                leaving={true}
            />
        };
        cards.insert(leaving.index.min(cards.len()), card);
    }

    html! {
        <div class="employees-page">
            <Header
                title={format!("Employees ({})", editor.roster().len())}
                action_label={Some("+".to_string())}
                on_action={Some(on_add)}
            />

            <div class="page-content">
                {if cards.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No employees yet. Tap + to add one."}</p>
                        </div>
                    }
                } else {
                    cards.into_iter().collect::<Html>()
                }}
            </div>
        </div>
    }
}
