use log::info;
use yew::prelude::*;

use crate::components::motion::{stagger, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::showcase::color::{linear_gradient, rgba, STARTUP_ACCENTS};
use crate::showcase::icon::Icon;

struct SupportArea {
    icon: Icon,
    title: &'static str,
    features: &'static [&'static str],
}

const SUPPORT_AREAS: &[SupportArea] = &[
    SupportArea {
        icon: Icon::Lightbulb,
        title: "Idea Incubation & Mentoring",
        features: &["Structured Idea Validation", "Expert Mentorship Network", "Curated Curriculum"],
    },
    SupportArea {
        icon: Icon::DollarSign,
        title: "Access to Funding & Capital",
        features: &["Strategic Funding Roadmap", "Exclusive Investor Introductions", "Grant and Subsidy Navigation"],
    },
    SupportArea {
        icon: Icon::Rocket,
        title: "Product Launch & Scaling Support",
        features: &["Go-to-Market Strategy", "Operational Scaling Toolkit", "Global Expansion Readiness"],
    },
    SupportArea {
        icon: Icon::Handshake,
        title: "Networking & Investor Connect",
        features: &["High-Value Connect Events", "Ecosystem Integration", "Strategic Partnerships"],
    },
];

const USE_CASES: &[&str] = &[
    "Student Founders",
    "Early-stage Startups",
    "Academic Research Commercialization",
    "Side Project to Startup Transition",
];

#[function_component(Startups)]
pub fn startups() -> Html {
    let revealed = use_reveal();

    use_effect_with_deps(
        |_| {
            info!("Mounted startups section");
            || ()
        },
        (),
    );

    let reveal_class = revealed.then(|| "revealed");

    html! {
        <section class="section-padding startups">
            <style>{ STYLES }</style>
            <div class="container-custom">
                <SectionHeader icon={Icon::Rocket} badge="Entrepreneurship" title="Startups Support" highlight="& Investors Connect">
                    {"A structured ecosystem to take your idea from incubation to investor funding. Not isolated mentoring, comprehensive startup support."}
                </SectionHeader>

                <div class="support-areas">
                    <div class="support-rule"></div>
                    <div class="support-grid">
                        { for SUPPORT_AREAS.iter().enumerate().map(|(index, area)| {
                            let color = STARTUP_ACCENTS.pick(index);
                            html! {
                                <div
                                    key={area.title}
                                    class={classes!("support-card", "reveal", reveal_class)}
                                    style={stagger(index, 60)}
                                >
                                    <div
                                        class="support-overlay"
                                        style={format!("background: linear-gradient(120deg, {}, transparent 60%);", rgba(color, 0.06))}
                                        aria-hidden="true"
                                    ></div>
                                    <div class="support-number" style={format!("background: {};", color)}>
                                        { index + 1 }
                                    </div>
                                    <div class="support-icon-row">
                                        <div
                                            class="support-icon"
                                            style={format!("background: {};", linear_gradient(135, color, &rgba(color, 0.6)))}
                                        >
                                            { area.icon.render(24, "#ffffff") }
                                        </div>
                                    </div>
                                    <h4>{ area.title }</h4>
                                    <p>{ area.features.first().copied().unwrap_or_default() }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <div class={classes!("use-cases", "reveal", reveal_class)}>
                    <h3 class="subsection-title">{"Who Can Benefit?"}</h3>
                    <div class="chip-row">
                        { for USE_CASES.iter().map(|use_case| html! {
                            <span key={*use_case} class="use-case-chip">{ *use_case }</span>
                        }) }
                    </div>
                    <button class="btn btn-accent btn-lg">{"Connect with Investors"}</button>
                </div>
            </div>
        </section>
    }
}

const STYLES: &str = r#"
    .startups { background: rgba(241, 245, 249, 0.3); }
    .support-areas { position: relative; margin-bottom: 4rem; }
    .support-rule {
        display: none;
        position: absolute;
        left: 2rem;
        right: 2rem;
        top: 7rem;
        height: 4px;
        background: rgba(37, 99, 235, 0.1);
        border-radius: 9999px;
    }
    .support-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
    .support-card {
        position: relative;
        background: var(--background);
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: var(--shadow-soft);
    }
    .support-card.revealed:hover { transform: translateY(-4px); box-shadow: var(--shadow-elevated); }
    .support-overlay {
        position: absolute;
        inset: 0;
        border-radius: 1rem;
        pointer-events: none;
        opacity: 0;
        transition: opacity 0.3s;
    }
    .support-card:hover .support-overlay { opacity: 0.8; }
    .support-number {
        position: absolute;
        top: -0.75rem;
        right: 1.5rem;
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        color: #ffffff;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    }
    .support-icon-row { display: flex; justify-content: center; margin-bottom: 1.5rem; position: relative; z-index: 10; }
    .support-icon {
        width: 5rem;
        height: 5rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        transition: transform 0.2s;
    }
    .support-card:hover .support-icon { transform: scale(1.05); }
    .support-card h4 { font-weight: 700; font-size: 1.125rem; text-align: center; margin-bottom: 0.5rem; position: relative; z-index: 10; }
    .support-card p { font-size: 0.875rem; color: var(--muted-foreground); text-align: center; position: relative; z-index: 10; }

    .use-cases {
        background: var(--background);
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: var(--shadow-soft);
        text-align: center;
    }
    .chip-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 2rem; }
    .use-case-chip {
        padding: 0.75rem 1.5rem;
        background: rgba(249, 115, 22, 0.1);
        border: 1px solid rgba(249, 115, 22, 0.3);
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 600;
    }

    @media (min-width: 768px) {
        .support-grid { grid-template-columns: repeat(4, 1fr); }
    }
    @media (min-width: 1024px) {
        .support-rule { display: block; }
    }
"#;
