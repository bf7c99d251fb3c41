//! Salary field: free text with a currency prefix, or a band picker

use staffroll_common::config::SalaryConfig;
use staffroll_common::focus::element_id;
use staffroll_common::{EditorEvent, EmployeeId, Field, SalaryBand, SalaryMode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SalaryInputProps {
    pub id: EmployeeId,
    pub value: String,
    pub config: SalaryConfig,
    pub on_event: Callback<EditorEvent>,
}

#[function_component(SalaryInput)]
pub fn salary_input(props: &SalaryInputProps) -> Html {
    let id = props.id;
    let dom_id = element_id(id, Field::Salary);

    match props.config.mode {
        SalaryMode::FreeText => {
            let onfocus = {
                let on_event = props.on_event.clone();
                Callback::from(move |_: FocusEvent| {
                    on_event.emit(EditorEvent::Focus { id, field: Field::Salary })
                })
            };
            let oninput = {
                let on_event = props.on_event.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_event.emit(EditorEvent::Input {
                        id,
                        field: Field::Salary,
                        value: input.value(),
                    });
                })
            };
            let onblur = {
                let on_event = props.on_event.clone();
                Callback::from(move |_: FocusEvent| {
                    on_event.emit(EditorEvent::Blur { id, field: Field::Salary })
                })
            };

            html! {
                <div class="input-group salary">
                    <span class="input-prefix">{&props.config.currency_symbol}</span>
                    <input
                        id={dom_id}
                        type="text"
                        inputmode="numeric"
                        placeholder="Salary"
                        value={props.value.clone()}
                        {onfocus}
                        {oninput}
                        {onblur}
                    />
                </div>
            }
        }
        SalaryMode::Banded => {
            let onchange = {
                let on_event = props.on_event.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_event.emit(EditorEvent::Input {
                        id,
                        field: Field::Salary,
                        value: select.value(),
                    });
                })
            };

            html! {
                <select id={dom_id} class="salary-band" {onchange}>
                    {for SalaryBand::all().into_iter().map(|band| {
                        let label = band.label();
                        let selected = label == props.value;
                        html! {
                            <option value={label.clone()} {selected}>
                                {format!("{}{}", props.config.currency_symbol, label)}
                            </option>
                        }
                    })}
                </select>
            }
        }
    }
}
