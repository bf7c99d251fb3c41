//! Staffroll Mobile UI
//!
//! Touch-first employee list editor built with Yew. All list state lives in
//! a single `EmployeeListEditor` held by the root component and shared with
//! the pages through context, so switching pages keeps the list intact.

mod components;
mod dom;
mod pages;
mod router;
mod storage;
mod store;

use yew::prelude::*;
use router::{switch, Route};
use store::{EditorContext, EditorStore};
use yew_router::prelude::*;

/// Main mobile application component
#[function_component(App)]
pub fn app() -> Html {
    let editor = use_reducer(|| EditorStore::new(storage::ConfigStore::load()));

    html! {
        <ContextProvider<EditorContext> context={editor}>
            <BrowserRouter>
                <div class="mobile-app">
                    <Switch<Route> render={switch} />
                    <BottomNav />
                </div>
            </BrowserRouter>
        </ContextProvider<EditorContext>>
    }
}

/// Bottom navigation bar for mobile
#[function_component(BottomNav)]
fn bottom_nav() -> Html {
    let navigator = use_navigator().unwrap();

    let go_list = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Employees))
    };

    let go_settings = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Settings))
    };

    html! {
        <nav class="bottom-nav">
            <button class="nav-item" onclick={go_list}>
                <span class="icon">{"👥"}</span>
                <span class="label">{"Employees"}</span>
            </button>
            <button class="nav-item" onclick={go_settings}>
                <span class="icon">{"⚙️"}</span>
                <span class="label">{"Settings"}</span>
            </button>
        </nav>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
