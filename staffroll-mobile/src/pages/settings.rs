//! Settings page for mobile UI

use staffroll_common::{EditorConfig, SalaryMode, SwipePreset};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::Header;
use crate::storage::ConfigStore;
use crate::store::{EditorAction, EditorContext};

#[function_component(Settings)]
pub fn settings() -> Html {
    let editor = use_context::<EditorContext>().expect("EditorContext is provided by App");
    let config = editor.config().clone();

    let apply = {
        let editor = editor.clone();
        move |next: EditorConfig| {
            ConfigStore::save(&next);
            editor.dispatch(EditorAction::Configure(next));
        }
    };

    let on_preset = {
        let config = config.clone();
        let apply = apply.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<SwipePreset>() {
                Ok(preset) => {
                    let mut next = config.clone();
                    next.swipe = preset.config();
                    apply(next);
                }
                Err(err) => web_sys::console::error_1(&err.to_string().into()),
            }
        })
    };

    let on_salary_mode = {
        let config = config.clone();
        let apply = apply.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = config.clone();
            next.salary.mode = if select.value() == "banded" {
                SalaryMode::Banded
            } else {
                SalaryMode::FreeText
            };
            apply(next);
        })
    };

    let reset = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            ConfigStore::clear();
            editor.dispatch(EditorAction::Configure(EditorConfig::default()));
        })
    };

    let current_preset = SwipePreset::detect(&config.swipe);

    html! {
        <div class="settings-page">
            <Header title="Settings" />
            <div class="page-content">
                <div class="settings-section">
                    <h2>{"Swipe to delete"}</h2>
                    <select onchange={on_preset}>
                        {if current_preset.is_none() {
                            html! { <option selected={true} disabled={true}>{"Custom"}</option> }
                        } else {
                            html! {}
                        }}
                        <option value="simple" selected={current_preset == Some(SwipePreset::Simple)}>
                            {"Simple (delete past 50px)"}
                        </option>
                        <option value="proportional" selected={current_preset == Some(SwipePreset::Proportional)}>
                            {"Proportional (delete past a quarter of the card)"}
                        </option>
                    </select>
                </div>

                <div class="settings-section">
                    <h2>{"Salary input"}</h2>
                    <select onchange={on_salary_mode}>
                        <option value="free_text" selected={config.salary.mode == SalaryMode::FreeText}>
                            {"Exact amount"}
                        </option>
                        <option value="banded" selected={config.salary.mode == SalaryMode::Banded}>
                            {"Salary band"}
                        </option>
                    </select>
                </div>

                <div class="settings-section">
                    <button class="mobile-button danger" onclick={reset}>
                        {"Reset settings"}
                    </button>
                </div>

                <div class="settings-section">
                    <h2>{"About"}</h2>
                    <p>{"Staffroll Mobile v0.1.0"}</p>
                    <p>{"Built with Rust + Yew"}</p>
                </div>
            </div>
        </div>
    }
}
