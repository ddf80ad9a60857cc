use log::{debug, warn};
use yew::prelude::*;

use crate::config::{REVIEWS_SCRIPT_URL, REVIEWS_WIDGET_CLASS};

const SCRIPT_ID: &str = "reviews-platform-script";

/// Appends the platform script to `<body>` unless an earlier mount already did.
fn ensure_platform_script() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };
    match document.create_element("script") {
        Ok(script) => {
            script.set_id(SCRIPT_ID);
            let _ = script.set_attribute("src", REVIEWS_SCRIPT_URL);
            let _ = script.set_attribute("async", "");
            if body.append_child(&script).is_err() {
                warn!("Could not attach reviews script");
            } else {
                debug!("Reviews script attached");
            }
        }
        Err(_) => warn!("Could not create reviews script element"),
    }
}

/// Third-party reviews embed. The widget renders itself into the container.
#[function_component(ReviewsWidget)]
pub fn reviews_widget() -> Html {
    use_effect_with_deps(
        move |_| {
            ensure_platform_script();
            || ()
        },
        (),
    );

    html! {
        <div class={REVIEWS_WIDGET_CLASS} data-elfsight-app-lazy=""></div>
    }
}
