use yew::prelude::*;

use crate::components::motion::{stagger, use_reveal};
use crate::config;
use crate::showcase::color::TIMELINE_ACCENTS;
use crate::showcase::layout::{split_columns, ColumnSplit, Columns};

#[derive(Properties, PartialEq)]
pub struct VerticalTimelineProps {
    pub items: &'static [&'static str],
    #[prop_or_default]
    pub columns: Columns,
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq)]
struct ColumnProps {
    items: &'static [&'static str],
    #[prop_or_default]
    class: Classes,
}

#[function_component(Column)]
fn column(props: &ColumnProps) -> Html {
    let revealed = use_reveal();

    html! {
        <div class={classes!("timeline-column", props.class.clone())}>
            { for props.items.iter().enumerate().map(|(idx, item)| html! {
                <div
                    key={format!("{}-{}", item, idx)}
                    class={classes!("timeline-row", "reveal", revealed.then(|| "revealed"))}
                    style={stagger(idx, config::TIMELINE_STAGGER_MS)}
                >
                    <span
                        class="timeline-accent"
                        style={format!("background: {};", TIMELINE_ACCENTS.pick(idx))}
                        aria-hidden="true"
                    ></span>
                    <div class="timeline-label">{ *item }</div>
                </div>
            }) }
        </div>
    }
}

#[function_component(VerticalTimeline)]
pub fn vertical_timeline(props: &VerticalTimelineProps) -> Html {
    match split_columns(props.items, props.columns) {
        ColumnSplit::Pair(left, right) => html! {
            <div class={classes!("timeline-grid", props.class.clone())}>
                <div class="timeline-half">
                    <Column items={left} />
                </div>
                <div class="timeline-half">
                    <Column items={right} />
                </div>
            </div>
        },
        ColumnSplit::Single(items) => html! {
            <div class="timeline-stack">
                <Column items={items} class={props.class.clone()} />
            </div>
        },
    }
}
