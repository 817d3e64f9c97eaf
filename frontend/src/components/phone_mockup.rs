use yew::prelude::*;

use crate::showcase::projection::DetailPayload;

#[derive(Properties, PartialEq)]
pub struct PhoneMockupProps {
    pub id: u32,
    pub payload: DetailPayload,
}

/// Device frame previewing the active service. The screen is keyed on the
/// item id so its slide-in animation restarts on every selection change.
#[function_component(PhoneMockup)]
pub fn phone_mockup(props: &PhoneMockupProps) -> Html {
    let payload = &props.payload;

    html! {
        <div class="phone-mockup">
            <div class="phone-frame">
                <div class="phone-notch">
                    <div class="phone-speaker"></div>
                </div>

                <div class="phone-screen-slot">
                    <div key={props.id} class="phone-screen" style={format!("background: {};", payload.backdrop)}>
                        <div class="phone-status-bar">
                            <span>{"9:41"}</span>
                            <div class="phone-status-icons">
                                <div class="phone-battery"></div>
                                <div class="phone-signal"></div>
                            </div>
                        </div>

                        <div class="phone-body">
                            <div class="phone-app-icon">
                                { payload.icon.render(48, "white") }
                            </div>

                            <div class="phone-copy">
                                <h2>{ payload.heading }</h2>
                                <p>{ payload.body }</p>
                            </div>

                            <div class="phone-features">
                                { for payload.bullet_list.iter().enumerate().map(|(i, feature)| html! {
                                    <div
                                        key={*feature}
                                        class="phone-feature"
                                        style={format!("animation-delay: {}ms;", 200 + i * 100)}
                                    >
                                        <div class="phone-feature-dot" style={format!("background: {};", payload.accent_color)}></div>
                                        <span>{ *feature }</span>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <button class="phone-cta">{"Get Started"}</button>
                    </div>
                </div>
            </div>
            <div class="phone-reflection"></div>
        </div>
    }
}
