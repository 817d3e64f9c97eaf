use yew::prelude::*;

use crate::components::motion::use_reveal;
use crate::showcase::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub icon: Icon,
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// Badge pill, two-tone heading and lead paragraph shared by the sections.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let revealed = use_reveal();

    html! {
        <div class={classes!("section-header", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-badge">
                { props.icon.render(20, "var(--primary)") }
                <span>{ props.badge }</span>
            </div>
            <h2 class="section-title">
                { props.title }{" "}
                <span class="text-gradient-primary">{ props.highlight }</span>
            </h2>
            <p class="section-lead">
                { for props.children.iter() }
            </p>
        </div>
    }
}
