use yew::prelude::*;

use crate::sections::scientific_events::ScientificEvents;
use crate::sections::services_overview::ServicesOverview;
use crate::sections::startups::Startups;
use crate::sections::study_abroad::StudyAbroad;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <style>{ BASE_STYLES }</style>
            <ServicesOverview />
            <StudyAbroad />
            <Startups />
            <ScientificEvents />
        </main>
    }
}

const BASE_STYLES: &str = r#"
    :root {
        --primary: #2563eb;
        --foreground: #0f172a;
        --muted-foreground: #64748b;
        --background: #ffffff;
        --border: #e2e8f0;
        --accent: #f97316;
        --shadow-soft: 0 4px 20px -4px rgba(15, 23, 42, 0.08);
        --shadow-elevated: 0 20px 40px -12px rgba(15, 23, 42, 0.18);
    }
    * { box-sizing: border-box; margin: 0; }
    body {
        font-family: "Inter", system-ui, -apple-system, sans-serif;
        color: var(--foreground);
        background: var(--background);
    }
    .section-padding { padding: 5rem 0; }
    .container-custom { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }

    .reveal {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.45s ease-out, transform 0.45s ease-out;
    }
    .reveal.revealed { opacity: 1; transform: translateY(0); }

    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: rgba(37, 99, 235, 0.1);
        border-radius: 9999px;
        padding: 0.5rem 1rem;
        margin-bottom: 1.5rem;
        font-size: 0.875rem;
        font-weight: 600;
        color: var(--primary);
    }
    .section-title { font-size: 1.875rem; font-weight: 800; margin-bottom: 1rem; }
    .text-gradient-primary {
        background: linear-gradient(90deg, #2563eb, #7c3aed);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .section-lead { font-size: 1.125rem; color: var(--muted-foreground); max-width: 48rem; margin: 0 auto; }
    .subsection-title { font-size: 1.25rem; font-weight: 700; text-align: center; margin-bottom: 1.5rem; }
    .section-cta { text-align: center; }

    .btn {
        border: none;
        border-radius: 0.5rem;
        font-weight: 600;
        cursor: pointer;
        transition: opacity 0.2s;
    }
    .btn:hover { opacity: 0.9; }
    .btn-lg { padding: 0.875rem 2rem; font-size: 1rem; }
    .btn-default { background: var(--primary); color: #ffffff; }
    .btn-accent { background: var(--accent); color: #ffffff; }

    @media (min-width: 768px) {
        .section-title { font-size: 2.25rem; }
    }
    @media (min-width: 1024px) {
        .section-title { font-size: 3rem; }
    }
"#;
