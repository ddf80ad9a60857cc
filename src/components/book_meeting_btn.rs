use yew::prelude::*;

use crate::config::WHATSAPP_NUMBER;
use crate::whatsapp::{interest_message, open_chat};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CtaIcon {
    #[default]
    Arrow,
    Calendar,
}

#[derive(Properties, PartialEq)]
pub struct BookMeetingBtnProps {
    #[prop_or(String::from("Book Free Meeting"))]
    pub text: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub show_icon: bool,
    #[prop_or_default]
    pub icon: CtaIcon,
}

fn render_icon(icon: CtaIcon) -> Html {
    match icon {
        CtaIcon::Calendar => html! {
            <svg class="cta-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                    d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z" />
            </svg>
        },
        CtaIcon::Arrow => html! {
            <svg class="cta-icon cta-icon-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                    d="M17 8l4 4m0 0l-4 4m4-4H3" />
            </svg>
        },
    }
}

/// Call-to-action that opens a WhatsApp chat asking about `text`.
#[function_component(BookMeetingBtn)]
pub fn book_meeting_btn(props: &BookMeetingBtnProps) -> Html {
    let onclick = {
        let message = interest_message(&props.text);
        Callback::from(move |_: MouseEvent| open_chat(WHATSAPP_NUMBER, &message))
    };

    let icon = props.show_icon.then(|| render_icon(props.icon));
    let (leading, trailing) = match props.icon {
        CtaIcon::Calendar => (icon, None),
        CtaIcon::Arrow => (None, icon),
    };

    html! {
        <button class={classes!("cta-button", props.class.clone())} {onclick}>
            <div class="cta-shine"></div>
            <span class="cta-label">
                { for leading }
                { &props.text }
                { for trailing }
            </span>
        </button>
    }
}
