use log::info;
use yew::prelude::*;

use crate::components::motion::{stagger, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::showcase::color::{linear_gradient, rgba};
use crate::showcase::icon::Icon;

struct EventType {
    icon: Icon,
    name: &'static str,
    description: &'static str,
    accent: &'static str,
    badge: &'static str,
}

const EVENT_TYPES: &[EventType] = &[
    EventType { icon: Icon::Globe, name: "International Conferences", description: "Global research exposure", accent: "#2563EB", badge: "Global" },
    EventType { icon: Icon::Award, name: "Awards & Recognitions", description: "Celebrate academic excellence", accent: "#F59E0B", badge: "Prestige" },
    EventType { icon: Icon::Users, name: "FDPs (Faculty Development)", description: "Professional growth for educators", accent: "#059669", badge: "Faculty" },
    EventType { icon: Icon::Presentation, name: "Workshops", description: "Hands-on skill building", accent: "#7C3AED", badge: "Practical" },
];

const DOMAINS: &[&str] = &[
    "Engineering & Technology",
    "Health & Medical Sciences",
    "Business & Economics",
    "Education",
    "Social Sciences & Humanities",
    "Physical & Life Sciences",
    "Mathematics & Data Science",
    "Agriculture & Food Sciences",
    "Arts, Culture & Communication",
    "Interdisciplinary & Emerging Fields",
];

#[function_component(ScientificEvents)]
pub fn scientific_events() -> Html {
    let revealed = use_reveal();

    use_effect_with_deps(
        |_| {
            info!("Mounted scientific events section");
            || ()
        },
        (),
    );

    let reveal_class = revealed.then(|| "revealed");

    html! {
        <section class="section-padding scientific-events">
            <style>{ STYLES }</style>
            <div class="container-custom">
                <SectionHeader icon={Icon::Calendar} badge="Academic Excellence" title="Scientific" highlight="Events">
                    {"Build your academic profile through international conferences, awards,"}
                    <br />
                    {"faculty development programs, and research workshops."}
                </SectionHeader>

                <div class="events-grid">
                    { for EVENT_TYPES.iter().enumerate().map(|(index, event)| html! {
                        <div
                            key={event.name}
                            class={classes!("event-card", "reveal", reveal_class)}
                            style={stagger(index, config::CARD_STAGGER_MS)}
                        >
                            <div
                                class="event-glow"
                                style={format!("background: linear-gradient(120deg, {}, transparent 40%);", rgba(event.accent, 0.13))}
                            ></div>
                            <div class="event-body">
                                <div class="event-badge" style={format!("background: {};", event.accent)}>
                                    { event.badge }
                                </div>
                                <div
                                    class="event-icon"
                                    style={format!("background: {};", linear_gradient(135, event.accent, &rgba(event.accent, 0.6)))}
                                >
                                    { event.icon.render(32, "#ffffff") }
                                </div>
                                <h4>{ event.name }</h4>
                                <p>{ event.description }</p>

                                <div class="event-stats">
                                    <div class="event-stat">
                                        <div class="event-stat-value">{"300+"}</div>
                                        <div class="event-stat-label">{"Universities"}</div>
                                    </div>
                                    <div class="event-stat-divider"></div>
                                    <div class="event-stat">
                                        <div class="event-stat-value">{"20+"}</div>
                                        <div class="event-stat-label">{"Countries"}</div>
                                    </div>
                                </div>

                                <div class="event-action">
                                    <button class="event-button">{"Learn More"}</button>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class={classes!("domains", "reveal", reveal_class)}>
                    <h3 class="subsection-title">{"Research Domains Covered"}</h3>
                    <div class="chip-row">
                        { for DOMAINS.iter().map(|domain| html! {
                            <span key={*domain} class="domain-chip">{ *domain }</span>
                        }) }
                    </div>
                    <div class="section-cta">
                        <button class="btn btn-default btn-lg">{"Explore Upcoming Events"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

const STYLES: &str = r#"
    .scientific-events { background: var(--background); }
    .events-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; margin-bottom: 4rem; }
    .event-card {
        position: relative;
        border-radius: 1rem;
        padding: 1.5rem;
        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.6), rgba(255, 255, 255, 0.3));
        overflow: hidden;
    }
    .event-glow {
        position: absolute;
        inset: -2px;
        border-radius: 1rem;
        filter: blur(16px);
        opacity: 0;
        transition: opacity 0.3s;
    }
    .event-card:hover .event-glow { opacity: 1; }
    .event-body {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 1rem;
        transition: transform 0.2s;
    }
    .event-body:hover { transform: scale(1.02); }
    .event-badge {
        position: absolute;
        top: 1rem;
        left: 1rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        font-weight: 600;
        color: #ffffff;
    }
    .event-icon {
        width: 5rem;
        height: 5rem;
        border-radius: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .event-body h4 { font-weight: 700; margin-bottom: 0.5rem; }
    .event-body p { font-size: 0.875rem; color: var(--muted-foreground); margin-bottom: 1rem; }
    .event-stats { display: flex; gap: 0.75rem; align-items: center; }
    .event-stat { text-align: center; }
    .event-stat-value { font-size: 1.5rem; font-weight: 800; }
    .event-stat-label { font-size: 0.75rem; color: var(--muted-foreground); }
    .event-stat-divider { height: 2px; width: 1.5rem; background: rgba(226, 232, 240, 0.4); }
    .event-action { margin-top: 1.5rem; transition: transform 0.2s; }
    .event-action:hover { transform: translateY(-4px); }
    .event-button {
        padding: 0.5rem 1.25rem;
        border-radius: 9999px;
        border: 2px solid rgba(0, 0, 0, 0.06);
        background: linear-gradient(90deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.02));
        cursor: pointer;
    }
    .event-button:hover { border-color: transparent; }

    .domains { background: rgba(37, 99, 235, 0.05); border-radius: 1rem; padding: 2rem; }
    .domain-chip {
        padding: 0.5rem 1rem;
        background: var(--background);
        border-radius: 0.5rem;
        font-size: 0.875rem;
        font-weight: 500;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }

    @media (min-width: 768px) {
        .events-grid { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 1024px) {
        .events-grid { grid-template-columns: repeat(4, 1fr); }
    }
"#;
