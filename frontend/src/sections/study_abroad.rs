use log::info;
use yew::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::motion::{stagger, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::components::vertical_timeline::VerticalTimeline;
use crate::showcase::color::{linear_gradient, rgba};
use crate::showcase::hover::{HoverAction, HoverState};
use crate::showcase::icon::Icon;
use crate::showcase::layout::Columns;

struct Stat {
    value: &'static str,
    label: &'static str,
    colors: [&'static str; 2],
}

struct Feature {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    colors: [&'static str; 2],
}

const COUNTRIES: &[&str] = &["UK", "USA", "Canada", "Germany", "France", "Australia", "Ireland", "Spain"];

const STATS: &[Stat] = &[
    Stat { value: "20+", label: "Countries", colors: ["#2563EB", "#1E40AF"] },
    Stat { value: "3000+", label: "Universities", colors: ["#059669", "#0EA5A9"] },
    Stat { value: "UG/PG/PhD", label: "Programs", colors: ["#7C3AED", "#6D28D9"] },
    Stat { value: "FREE", label: "Profile Evaluation", colors: ["#F97316", "#F43F5E"] },
];

const FEATURES: &[Feature] = &[
    Feature { icon: Icon::FileCheck, title: "Free Profile Weightage", description: "Get your admission chances evaluated", colors: ["#2563EB", "#1E40AF"] },
    Feature { icon: Icon::GraduationCap, title: "University Shortlisting", description: "3000+ universities across 20+ countries", colors: ["#059669", "#0EA5A9"] },
    Feature { icon: Icon::BookOpen, title: "SOP & LOR Support", description: "Expert assistance for applications", colors: ["#7C3AED", "#6D28D9"] },
    Feature { icon: Icon::Award, title: "IELTS/TOEFL/PTE Training", description: "Language proficiency preparation", colors: ["#F97316", "#F43F5E"] },
    Feature { icon: Icon::Plane, title: "Spot Admissions Drives", description: "Direct university interviews", colors: ["#EC4899", "#DB2777"] },
    Feature { icon: Icon::Globe, title: "Visa Guidance", description: "Complete visa support", colors: ["#06B6D4", "#0284C7"] },
];

const UNIVERSITIES: &[&str] = &[
    "Liverpool John Moores University",
    "Golden Gate University",
    "University of Warwick",
    "Michigan State University",
    "Johnson & Wales University",
    "James Cook University",
    "Deakin University",
    "University of Arizona",
    "University of Bridgeport",
    "Wharton Business School",
    "University Canada West",
    "SSBM Geneva",
];

/// Pointer handlers that highlight card `index` while hovered or pressed.
struct HoverHandlers {
    onmouseenter: Callback<MouseEvent>,
    onmouseleave: Callback<MouseEvent>,
    onpointerdown: Callback<PointerEvent>,
    onpointerup: Callback<PointerEvent>,
}

fn hover_handlers(hover: &UseReducerHandle<HoverState>, index: usize) -> HoverHandlers {
    let enter = {
        let hover = hover.clone();
        Callback::from(move |_: ()| hover.dispatch(HoverAction::Enter(index)))
    };
    let leave = {
        let hover = hover.clone();
        Callback::from(move |_: ()| hover.dispatch(HoverAction::Leave))
    };
    HoverHandlers {
        onmouseenter: enter.reform(|_: MouseEvent| ()),
        onmouseleave: leave.reform(|_: MouseEvent| ()),
        onpointerdown: enter.reform(|_: PointerEvent| ()),
        onpointerup: leave.reform(|_: PointerEvent| ()),
    }
}

#[function_component(StudyAbroad)]
pub fn study_abroad() -> Html {
    let hovered_stat = use_reducer_eq(HoverState::default);
    let hovered_feature = use_reducer_eq(HoverState::default);
    let revealed = use_reveal();

    use_effect_with_deps(
        |_| {
            info!("Mounted study abroad section");
            || ()
        },
        (),
    );

    let reveal_class = revealed.then(|| "revealed");

    html! {
        <section id="study-abroad" class="section-padding study-abroad">
            <style>{ STYLES }</style>
            <div class="container-custom">
                <SectionHeader icon={Icon::Globe} badge="Global Education" title="Study" highlight="Abroad">
                    {"Transform your education by making the world your campus. Access 3000+ universities across 20+ countries with integrated career counselling + admissions strategy."}
                </SectionHeader>

                <div class="stats-row">
                    { for STATS.iter().enumerate().map(|(index, stat)| {
                        let is_hovered = hovered_stat.is_hovered(index);
                        let handlers = hover_handlers(&hovered_stat, index);
                        let style = if is_hovered {
                            format!("background: {}; color: #ffffff;", linear_gradient(90, stat.colors[0], stat.colors[1]))
                        } else {
                            String::new()
                        };
                        html! {
                            <div
                                key={stat.label}
                                class={classes!("stat-card", "reveal", reveal_class, is_hovered.then(|| "hovered"))}
                                style={format!("{}{}", stagger(index, 20), style)}
                                onmouseenter={handlers.onmouseenter}
                                onmouseleave={handlers.onmouseleave}
                                onpointerdown={handlers.onpointerdown}
                                onpointerup={handlers.onpointerup}
                            >
                                <div class="stat-value">{ stat.value }</div>
                                <p class="stat-label">{ stat.label }</p>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("destinations", "reveal", reveal_class)}>
                    <h3 class="subsection-title">{"Study Destinations"}</h3>
                    <Marquee items={COUNTRIES} />
                </div>

                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| {
                        let is_hovered = hovered_feature.is_hovered(index);
                        let handlers = hover_handlers(&hovered_feature, index);
                        let card_style = if is_hovered {
                            format!("background: {}; color: #fff;", linear_gradient(90, feature.colors[0], feature.colors[1]))
                        } else {
                            String::new()
                        };
                        let icon_style = if is_hovered {
                            format!("background-color: {};", rgba(feature.colors[0], 0.13))
                        } else {
                            String::new()
                        };
                        html! {
                            <div
                                key={feature.title}
                                class={classes!("feature-card", "reveal", reveal_class, is_hovered.then(|| "hovered"))}
                                style={format!("{}{}", stagger(index, 60), card_style)}
                                onmouseenter={handlers.onmouseenter}
                                onmouseleave={handlers.onmouseleave}
                                onpointerdown={handlers.onpointerdown}
                                onpointerup={handlers.onpointerup}
                            >
                                <div class="feature-icon" style={icon_style}>
                                    { feature.icon.render(24, if is_hovered { "#ffffff" } else { "var(--primary)" }) }
                                </div>
                                <h4>{ feature.title }</h4>
                                <p>{ feature.description }</p>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("universities", "reveal", reveal_class)}>
                    <h3 class="subsection-title">{"Partner Universities Abroad"}</h3>
                    <div class="universities-timeline">
                        <VerticalTimeline items={UNIVERSITIES} columns={Columns::Two} />
                    </div>
                    <div class="section-cta">
                        <button class="btn btn-default btn-lg">{"Get Free Profile Evaluation"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

const STYLES: &str = r#"
    .study-abroad { background: rgba(241, 245, 249, 0.3); }
    .stats-row {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.5rem;
        margin-bottom: 4rem;
    }
    .stat-card {
        border-radius: 1rem;
        padding: 1.5rem;
        text-align: center;
        box-shadow: var(--shadow-soft);
        cursor: pointer;
        user-select: none;
    }
    .stat-card:hover { transform: scale(1.03); }
    .stat-card:active { transform: scale(0.98); }
    .stat-value {
        font-size: 1.875rem;
        font-weight: 800;
        margin-bottom: 0.5rem;
        color: var(--primary);
    }
    .stat-label { font-size: 0.875rem; font-weight: 500; color: var(--muted-foreground); }
    .stat-card.hovered .stat-value { color: #ffffff; }
    .stat-card.hovered .stat-label { color: rgba(255, 255, 255, 0.9); }

    .destinations { margin-bottom: 4rem; }
    .marquee { overflow: hidden; }
    .marquee-track { display: flex; gap: 12px; align-items: center; width: max-content; }
    @keyframes marquee-left {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    .marquee-track.animate { animation-name: marquee-left; animation-timing-function: linear; animation-iteration-count: infinite; }
    .marquee-track.animate.paused { animation-play-state: paused; }
    .marquee-chip {
        padding: 0.75rem 1.5rem;
        background: var(--background);
        border: 1px solid var(--border);
        border-radius: 9999px;
        font-weight: 600;
        min-width: 120px;
        text-align: center;
        cursor: pointer;
        transition: color 0.2s, border-color 0.2s;
    }
    .marquee-chip:hover { border-color: var(--primary); color: var(--primary); }

    .features-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        margin-bottom: 4rem;
    }
    .feature-card {
        border-radius: 1rem;
        padding: 1.5rem;
        box-shadow: var(--shadow-soft);
        cursor: pointer;
        user-select: none;
    }
    .feature-card:hover { transform: scale(1.02); }
    .feature-card:active { transform: scale(0.99); }
    .feature-icon { padding: 0.75rem; border-radius: 0.75rem; width: fit-content; margin-bottom: 1rem; }
    .feature-card h4 { font-weight: 700; margin-bottom: 0.5rem; color: var(--foreground); }
    .feature-card p { font-size: 0.875rem; color: var(--muted-foreground); }
    .feature-card.hovered h4 { color: #ffffff; }
    .feature-card.hovered p { color: rgba(255, 255, 255, 0.9); }

    .universities {
        background: var(--background);
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: var(--shadow-soft);
    }
    .universities-timeline { margin-bottom: 2rem; }

    .timeline-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; align-items: start; }
    .timeline-half { min-height: 220px; display: flex; flex-direction: column; justify-content: space-between; }
    .timeline-stack > * + * { margin-top: 1rem; }
    .timeline-column { display: grid; gap: 1.25rem; }
    .timeline-row {
        display: flex;
        align-items: center;
        gap: 1rem;
        border-radius: 1rem;
        padding: 1.25rem;
        background: rgba(255, 255, 255, 0.6);
        border: 1px solid var(--border);
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .timeline-row.revealed:hover { transform: translateY(-4px); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
    .timeline-accent { width: 6px; height: 2.5rem; border-radius: 4px; }
    .timeline-label { flex: 1; font-size: 1rem; font-weight: 600; color: var(--foreground); transition: color 0.22s; }
    .timeline-row:hover .timeline-label { color: var(--primary); }

    @media (min-width: 768px) {
        .stats-row { grid-template-columns: repeat(4, 1fr); }
        .stat-value { font-size: 2.25rem; }
        .features-grid { grid-template-columns: repeat(2, 1fr); }
        .timeline-grid { grid-template-columns: repeat(2, 1fr); }
        .timeline-label { font-size: 1.125rem; }
    }
    @media (min-width: 1024px) {
        .features-grid { grid-template-columns: repeat(3, 1fr); }
    }
"#;
