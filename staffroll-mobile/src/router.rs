//! Router configuration for mobile UI

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::*;

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Employees,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function to render pages
pub fn switch(route: Route) -> Html {
    match route {
        Route::Employees => html! { <employees::EmployeeList /> },
        Route::Settings => html! { <settings::Settings /> },
        Route::NotFound => html! { <h1>{"404 - Page Not Found"}</h1> },
    }
}
