use log::info;
use yew::prelude::*;

pub mod config;
pub mod viewport;
pub mod animation {
    pub mod counter;
    pub mod hero_visibility;
    pub mod reveal;
}
pub mod pages {
    pub mod landing;
    pub mod lead_form;
}

use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    info!("Rendering landing page");
    html! { <Landing /> }
}
