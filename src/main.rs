use yew::prelude::*;
use log::{info, Level};

mod config;
mod chat {
    pub mod client;
    pub mod controller;
    pub mod conversation;
    pub mod error;
    pub mod models;
    pub mod transcript;
}
mod components {
    pub mod chat_widget;
}
mod pages {
    pub mod home;
}

use pages::home::Home;


#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting storefront, completions via {}", config::get_completion_url());
    yew::Renderer::<App>::new().render();
}
