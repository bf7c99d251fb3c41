//! Two-state gender button

use staffroll_common::Gender;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GenderToggleProps {
    pub gender: Gender,
    pub on_toggle: Callback<()>,
}

#[function_component(GenderToggle)]
pub fn gender_toggle(props: &GenderToggleProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit(()));

    let (class, symbol) = match props.gender {
        Gender::Male => ("gender-toggle male", "♂"),
        Gender::Female => ("gender-toggle female", "♀"),
    };

    html! {
        <button
            type="button"
            class={class}
            title={props.gender.to_string()}
            onclick={onclick}
        >
            {symbol}
        </button>
    }
}
