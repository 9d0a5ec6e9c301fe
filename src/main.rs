use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll;
mod lead {
    pub mod analytics;
    pub mod api;
    pub mod form_state;
    pub mod models;
    pub mod pricing;
}
mod components {
    pub mod before_after;
    pub mod faq;
    pub mod header;
    pub mod lead_form;
    pub mod reveal;
    pub mod sticky_cta;
    pub mod success_modal;
}
mod pages {
    pub mod footer;
    pub mod home;
    pub mod privacy;
    pub mod sections;
}

use components::{header::Header, sticky_cta::StickyCta};
use pages::{home::Home, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <StickyCta />
            <style>
                {r#"
                *, *::before, *::after { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    background: #f8fafc;
                    color: #0f172a;
                    -webkit-font-smoothing: antialiased;
                }
                button { font-family: inherit; cursor: pointer; }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
