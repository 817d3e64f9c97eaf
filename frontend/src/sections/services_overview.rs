use log::{debug, info};
use yew::prelude::*;

use crate::components::motion::{stagger, use_reveal};
use crate::components::phone_mockup::PhoneMockup;
use crate::components::service_card::ServiceCard;
use crate::config;
use crate::showcase::catalog::services;
use crate::showcase::projection::DetailPayload;
use crate::showcase::selection::{SelectionAction, SelectionState};

/// Service grid with a phone preview that follows the hovered card.
#[function_component(ServicesOverview)]
pub fn services_overview() -> Html {
    let selection = use_reducer_eq(|| SelectionState::new(services()));
    let revealed = use_reveal();

    use_effect_with_deps(
        |_| {
            info!("Mounted services overview");
            || ()
        },
        (),
    );

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |id: u32| {
            if !selection.is_active(id) {
                debug!("Selecting service {}", id);
            }
            selection.dispatch(SelectionAction::Select(id));
        })
    };

    let active = selection.active_item();
    let payload = DetailPayload::from(active);
    let caption = payload.caption.clone();

    html! {
        <section class="services-overview">
            <style>{ STYLES }</style>
            <div class="container">
                <div class={classes!("overview-header", "reveal", revealed.then(|| "revealed"))}>
                    <p class="overview-eyebrow">{"Overview"}</p>
                    <h3>{"Explore our services"}</h3>
                    <p class="overview-lead">{"Interactive preview of each service with synchronized mockup."}</p>
                </div>

                <div class="overview-layout">
                    <div class="overview-cards">
                        { for selection.catalog().items().iter().enumerate().map(|(idx, item)| html! {
                            <div
                                key={item.id}
                                class={classes!("reveal", revealed.then(|| "revealed"))}
                                style={stagger(idx, config::CARD_STAGGER_MS)}
                            >
                                <ServiceCard
                                    item={item}
                                    is_active={selection.is_active(item.id)}
                                    on_select={on_select.clone()}
                                />
                            </div>
                        }) }
                    </div>

                    <div class="overview-preview">
                        <div class={classes!("reveal-scale", revealed.then(|| "revealed"))}>
                            <PhoneMockup id={active.id} payload={payload} />
                            <div class="overview-caption-slot">
                                <div key={active.id} class="overview-caption">
                                    <p class="overview-caption-label">{"Synchronized Module"}</p>
                                    <p class="overview-caption-title">{ caption }</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const STYLES: &str = r#"
    .services-overview {
        padding: 5rem 0;
        background: #ffffff;
    }
    .services-overview .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .overview-header {
        text-align: center;
        max-width: 56rem;
        margin: 0 auto 2.5rem;
    }
    .overview-eyebrow { color: #6b7280; }
    .overview-header h3 {
        font-size: 1.875rem;
        font-weight: 900;
        margin-top: 1rem;
    }
    .overview-lead { color: #9ca3af; margin-top: 0.75rem; }
    .overview-layout {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        align-items: center;
    }
    .overview-cards {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        order: 2;
    }
    .overview-preview {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        order: 1;
    }
    .overview-caption {
        margin-top: 2.5rem;
        text-align: center;
        animation: caption-in 0.3s ease-out;
    }
    .overview-caption-label {
        font-size: 10px;
        text-transform: uppercase;
        font-weight: 900;
        letter-spacing: 0.5em;
        color: #9ca3af;
    }
    .overview-caption-title {
        font-size: 0.875rem;
        font-weight: 600;
        color: #4b5563;
    }
    @keyframes caption-in {
        from { opacity: 0; transform: translateY(6px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .reveal-scale {
        opacity: 0;
        transform: scale(0.98);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal-scale.revealed { opacity: 1; transform: scale(1); }

    .service-card {
        position: relative;
        width: 100%;
        cursor: pointer;
        border-radius: 1rem;
        opacity: 0.8;
        transition: transform 0.3s ease, opacity 0.5s ease;
    }
    .service-card.active { opacity: 1; z-index: 10; }
    .service-card-accent {
        position: absolute;
        left: 0; top: 0; bottom: 0;
        width: 4px;
        border-radius: 6px 0 0 6px;
        opacity: 0;
        transition: opacity 0.3s;
    }
    .service-card-tint {
        position: absolute;
        inset: 0;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s;
    }
    .service-card:hover .service-card-accent,
    .service-card:hover .service-card-tint { opacity: 1; }
    .service-card-panel {
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid;
        backdrop-filter: blur(24px);
        display: flex;
        flex-direction: column;
        height: 100%;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        overflow: hidden;
        transition: all 0.3s;
    }
    .service-card:hover .service-card-panel { transform: translateY(-6px); }
    .service-card.active .service-card-panel { transform: scale(1.03); }
    .service-card-glow {
        position: absolute;
        inset: 0;
        pointer-events: none;
        opacity: 0;
        transition: opacity 0.5s;
    }
    .service-card:hover .service-card-glow { opacity: 0.1; }
    .service-card-heading {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .service-card-heading h3 {
        font-size: 1.125rem;
        font-weight: 700;
        color: #111827;
        letter-spacing: -0.025em;
    }
    .service-card-icon {
        padding: 0.75rem;
        border-radius: 0.75rem;
        transition: transform 0.2s;
    }
    .service-card:hover .service-card-icon { transform: scale(1.1); }
    .service-card-description {
        font-size: 0.875rem;
        color: #4b5563;
        line-height: 1.6;
        margin-bottom: 1.5rem;
        flex: 1;
    }
    .service-card-footer {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding-top: 1rem;
        border-top: 1px solid #f3f4f6;
    }
    .service-card-tagline {
        font-size: 10px;
        font-weight: 700;
        color: #6b7280;
        text-transform: uppercase;
        letter-spacing: 0.2em;
    }
    .service-card-chevron {
        padding: 0.375rem;
        border-radius: 9999px;
        opacity: 0;
        transform: translateX(-0.5rem);
        transition: all 0.3s;
    }
    .service-card:hover .service-card-chevron { opacity: 1; transform: translateX(0); }

    .phone-mockup {
        position: relative;
        width: 280px;
        height: 580px;
        filter: drop-shadow(0 35px 35px rgba(0, 0, 0, 0.12));
    }
    .phone-frame {
        position: absolute;
        inset: 0;
        background: #ffffff;
        border-radius: 3rem;
        border: 8px solid #f3f4f6;
        overflow: hidden;
    }
    .phone-notch {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 8rem;
        height: 1.5rem;
        background: #f3f4f6;
        border-radius: 0 0 1rem 1rem;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .phone-speaker { width: 2.5rem; height: 0.25rem; border-radius: 9999px; background: #e5e7eb; }
    .phone-screen {
        position: absolute;
        inset: 0;
        padding: 3rem 1.5rem 1.5rem;
        display: flex;
        flex-direction: column;
        animation: screen-in 0.4s ease-out;
    }
    @keyframes screen-in {
        from { opacity: 0; transform: translateX(20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .phone-status-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0 1rem;
        margin-bottom: 2rem;
        font-size: 10px;
        font-weight: 700;
        color: rgba(255, 255, 255, 0.7);
    }
    .phone-status-icons { display: flex; gap: 0.375rem; align-items: center; }
    .phone-battery { width: 1rem; height: 0.5rem; border-radius: 2px; border: 1px solid rgba(255, 255, 255, 0.3); }
    .phone-signal { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.3); }
    .phone-body { flex: 1; display: flex; flex-direction: column; gap: 2rem; padding-top: 1rem; }
    .phone-app-icon {
        width: 6rem;
        height: 6rem;
        margin: 0 auto;
        background: rgba(255, 255, 255, 0.3);
        border-radius: 2.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border: 1px solid rgba(255, 255, 255, 0.1);
        animation: float 6s ease-in-out infinite;
    }
    @keyframes float {
        0%, 100% { transform: translateY(0) scale(1); }
        50% { transform: translateY(-8px) scale(1.03); }
    }
    .phone-copy { text-align: center; padding: 0 0.5rem; }
    .phone-copy h2 { font-size: 1.5rem; font-weight: 900; color: #ffffff; line-height: 1.2; }
    .phone-copy p { font-size: 0.75rem; color: rgba(255, 255, 255, 0.8); line-height: 1.6; margin-top: 0.75rem; }
    .phone-features { display: flex; flex-direction: column; gap: 0.75rem; padding: 0 0.5rem; }
    .phone-feature {
        padding: 0.875rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        gap: 0.75rem;
        opacity: 0;
        animation: feature-in 0.3s ease-out forwards;
    }
    @keyframes feature-in {
        from { opacity: 0; transform: translateX(-10px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .phone-feature-dot { width: 0.375rem; height: 0.375rem; border-radius: 9999px; }
    .phone-feature span { font-size: 11px; font-weight: 700; color: rgba(255, 255, 255, 0.9); }
    .phone-cta {
        margin-top: auto;
        width: 100%;
        padding: 1rem 0;
        background: #ffffff;
        color: #000000;
        font-weight: 900;
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.3em;
        border: none;
        border-radius: 1rem;
        cursor: pointer;
        transition: transform 0.15s;
    }
    .phone-cta:hover { transform: scale(1.02); }
    .phone-cta:active { transform: scale(0.98); }
    .phone-reflection {
        position: absolute;
        inset: 0;
        pointer-events: none;
        border-radius: 3rem;
        z-index: 40;
        background: linear-gradient(to top right, rgba(255, 255, 255, 0.3), transparent);
    }

    @media (min-width: 768px) {
        .overview-cards { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 1024px) {
        .services-overview .container { padding: 0 3rem; }
        .overview-layout { grid-template-columns: 2fr 1fr; }
        .overview-cards { order: 1; }
        .overview-preview { order: 2; }
        .phone-mockup { width: 320px; height: 640px; }
    }
"#;
