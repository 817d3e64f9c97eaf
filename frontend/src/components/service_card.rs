use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::motion::{Bounds, Tilt};
use crate::showcase::catalog::CatalogItem;
use crate::showcase::color::rgba;
use crate::showcase::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub item: &'static CatalogItem,
    pub is_active: bool,
    pub on_select: Callback<u32>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { item, is_active, on_select } = props;
    let tilt = use_state(Tilt::default);

    let onmousemove = {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let element = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok());
            if let Some(element) = element {
                let bounds = Bounds::from(element.get_bounding_client_rect());
                tilt.set(Tilt::from_pointer(e.client_x() as f64, e.client_y() as f64, bounds));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::default()))
    };

    let onmouseenter = {
        let on_select = on_select.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    // touch devices never fire mouseenter
    let onpointerdown = {
        let on_select = on_select.clone();
        let id = item.id;
        Callback::from(move |_: PointerEvent| on_select.emit(id))
    };

    let color = item.accent_color;
    let panel_style = format!(
        "border-color: {}; background-color: {};",
        if *is_active { rgba(color, 0.12) } else { "rgba(0,0,0,0.04)".to_string() },
        if *is_active { "rgba(255,255,255,0.06)" } else { "rgba(255,255,255,0.02)" },
    );
    let icon_style = format!(
        "background-color: {}; border: 1px solid {};",
        rgba(color, 0.13),
        rgba(color, 0.2)
    );
    let chevron_style = format!(
        "background: {};",
        if *is_active { rgba(color, 0.08) } else { "transparent".to_string() }
    );

    html! {
        <div
            class={classes!("service-card", (*is_active).then(|| "active"))}
            style={tilt.style()}
            {onmousemove}
            {onmouseleave}
            {onmouseenter}
            {onpointerdown}
        >
            <div class="service-card-accent" style={format!("background: {};", color)}></div>
            <div class="service-card-tint" style={format!("background: {};", rgba(color, 0.06))}></div>
            <div class="service-card-panel" style={panel_style}>
                <div
                    class="service-card-glow"
                    style={format!("background: radial-gradient(circle at center, {} 0%, transparent 70%);", rgba(color, 0.27))}
                ></div>
                <div class="service-card-heading">
                    <div class="service-card-icon" style={icon_style}>
                        { item.icon.render(24, color) }
                    </div>
                    <h3>{ item.title }</h3>
                </div>
                <p class="service-card-description">{ item.description }</p>
                <div class="service-card-footer">
                    <span class="service-card-tagline">{ item.tagline }</span>
                    <div class="service-card-chevron" style={chevron_style}>
                        { Icon::ChevronRight.render(14, if *is_active { color } else { "#9CA3AF" }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
