use yew::prelude::*;

use crate::config;
use crate::showcase::layout::looped;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
}

/// Endless horizontal scroll of chips. Hovering or pressing pauses it.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let paused = use_state(|| false);

    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: ()| paused.set(true))
    };
    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: ()| paused.set(false))
    };

    html! {
        <div
            class="marquee"
            onmouseenter={pause.reform(|_: MouseEvent| ())}
            onmouseleave={resume.reform(|_: MouseEvent| ())}
            onpointerdown={pause.reform(|_: PointerEvent| ())}
            onpointerup={resume.reform(|_: PointerEvent| ())}
        >
            <div
                class={classes!("marquee-track", "animate", (*paused).then(|| "paused"))}
                style={format!("animation-duration: {}s;", config::MARQUEE_SECONDS)}
            >
                { for looped(props.items).enumerate().map(|(i, item)| html! {
                    <div key={format!("{}-{}", item, i)} class="marquee-chip">{ *item }</div>
                }) }
            </div>
        </div>
    }
}
