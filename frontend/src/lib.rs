//! Marketing sections for the consulting site: a service showcase with a
//! synchronized phone preview, plus study-abroad, startup and scientific
//! events promotion.

use yew::prelude::*;

pub mod config;
pub mod showcase {
    pub mod catalog;
    pub mod color;
    pub mod hover;
    pub mod icon;
    pub mod layout;
    pub mod projection;
    pub mod selection;
}
pub mod components {
    pub mod marquee;
    pub mod motion;
    pub mod phone_mockup;
    pub mod section_header;
    pub mod service_card;
    pub mod vertical_timeline;
}
pub mod sections {
    pub mod scientific_events;
    pub mod services_overview;
    pub mod startups;
    pub mod study_abroad;
}
pub mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
pub fn App() -> Html {
    html! {
        <Home />
    }
}
