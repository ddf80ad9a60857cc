use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionDividerProps {
    /// Seconds before the bars grow in.
    #[prop_or(0.4)]
    pub delay: f64,
}

#[styled_component(SectionDivider)]
pub fn section_divider(props: &SectionDividerProps) -> Html {
    let bars = css!(
        r#"
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        margin-bottom: 2rem;
        animation: divider-grow 0.8s ease-out both;

        .bar {
            height: 0.25rem;
            border-radius: 9999px;
        }
        .bar.left {
            width: 3rem;
            background: linear-gradient(to right, transparent, #14b8a6);
        }
        .bar.middle {
            width: 2rem;
            background: linear-gradient(to right, #14b8a6, #2563eb);
        }
        .bar.right {
            width: 3rem;
            background: linear-gradient(to right, #2563eb, transparent);
        }
        "#
    );

    html! {
        <div class={bars} style={format!("animation-delay: {}s;", props.delay)}>
            <div class="bar left"></div>
            <div class="bar middle"></div>
            <div class="bar right"></div>
        </div>
    }
}
