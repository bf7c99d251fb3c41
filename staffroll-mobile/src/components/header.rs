//! Page header with an optional trailing action button

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    #[prop_or_default]
    pub action_label: Option<String>,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_action = props.on_action.clone();
    let handle_action = Callback::from(move |_: MouseEvent| {
        if let Some(ref callback) = on_action {
            callback.emit(());
        }
    });

    html! {
        <header class="mobile-header">
            <h1 class="header-title">{&props.title}</h1>
            {if let Some(ref label) = props.action_label {
                html! {
                    <button class="header-action" aria-label={label.clone()} onclick={handle_action}>
                        {label}
                    </button>
                }
            } else {
                html! { <div class="header-spacer"></div> }
            }}
        </header>
    }
}
