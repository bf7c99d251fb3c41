//! One editable employee row

use std::rc::Rc;

use staffroll_common::focus::element_id;
use staffroll_common::{EditorConfig, EditorEvent, Employee, Field, SwipeState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{GenderToggle, SalaryInput, SwipeCard};

#[derive(Properties, PartialEq)]
pub struct EmployeeCardProps {
    pub employee: Rc<Employee>,
    pub config: EditorConfig,
    pub swipe: SwipeState,
    pub on_event: Callback<EditorEvent>,
    #[prop_or_default]
    pub leaving: bool,
}

/// Focus, input and blur handlers for a plain text field
fn text_handlers(
    on_event: &Callback<EditorEvent>,
    employee: &Employee,
    field: Field,
) -> (Callback<FocusEvent>, Callback<InputEvent>, Callback<FocusEvent>) {
    let id = employee.id;

    let onfocus = {
        let on_event = on_event.clone();
        Callback::from(move |_: FocusEvent| on_event.emit(EditorEvent::Focus { id, field }))
    };
    let oninput = {
        let on_event = on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(EditorEvent::Input {
                id,
                field,
                value: input.value(),
            });
        })
    };
    let onblur = {
        let on_event = on_event.clone();
        Callback::from(move |_: FocusEvent| on_event.emit(EditorEvent::Blur { id, field }))
    };

    (onfocus, oninput, onblur)
}

#[function_component(EmployeeCard)]
pub fn employee_card(props: &EmployeeCardProps) -> Html {
    let emp = &props.employee;
    let id = emp.id;

    let (name_focus, name_input, name_blur) = text_handlers(&props.on_event, emp, Field::Name);
    let (age_focus, age_input, age_blur) = text_handlers(&props.on_event, emp, Field::Age);

    let on_toggle = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: ()| on_event.emit(EditorEvent::ToggleGender { id }))
    };

    let on_delete = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(EditorEvent::Remove { id }))
    };

    let age_hint = format!("{}–{}", props.config.age.min, props.config.age.max);

    html! {
        <SwipeCard
            id={id}
            swipe={props.swipe}
            config={props.config.swipe.clone()}
            on_event={props.on_event.clone()}
            leaving={props.leaving}
        >
            <div class="card employee-card">
                <div class="employee-fields">
                    <input
                        id={element_id(id, Field::Name)}
                        class="employee-name"
                        type="text"
                        placeholder="Name"
                        value={emp.name.clone()}
                        onfocus={name_focus}
                        oninput={name_input}
                        onblur={name_blur}
                    />
                    <SalaryInput
                        id={id}
                        value={emp.salary.clone()}
                        config={props.config.salary.clone()}
                        on_event={props.on_event.clone()}
                    />
                    <input
                        id={element_id(id, Field::Age)}
                        class="employee-age"
                        type="text"
                        inputmode="numeric"
                        placeholder={age_hint}
                        value={emp.age.clone()}
                        onfocus={age_focus}
                        oninput={age_input}
                        onblur={age_blur}
                    />
                    <GenderToggle gender={emp.gender} {on_toggle} />
                </div>
                <button type="button" class="delete-button" aria-label="Delete" onclick={on_delete}>
                    {"✕"}
                </button>
            </div>
        </SwipeCard>
    }
}
