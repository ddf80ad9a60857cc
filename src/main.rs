use log::info;
use yew::prelude::*;

mod config;
mod styles;
mod whatsapp;
mod navigation {
    pub mod controller;
    pub mod debounce;
    pub mod dom;
    pub mod state;
}
mod components {
    pub mod book_meeting_btn;
    pub mod footer;
    pub mod header;
    pub mod hero_slider;
    pub mod reviews_widget;
    pub mod section_divider;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod find_us;
    pub mod home;
    pub mod partners;
    pub mod services;
    pub mod testimonials;
    pub mod why_choose_us;
}

use pages::home::Home;
use styles::GlobalStyles;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
