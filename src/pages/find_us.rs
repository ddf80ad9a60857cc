use yew::prelude::*;

use crate::components::section_divider::SectionDivider;
use crate::config::MAP_EMBED_URL;

#[function_component(FindUsSection)]
pub fn find_us_section() -> Html {
    html! {
        <section class="section find-us-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Find Us"}</h2>
                    <SectionDivider />
                    <p>{"Visit our office in the heart of Dubai's business district."}</p>
                </div>
                <div class="map-frame">
                    <iframe
                        src={MAP_EMBED_URL}
                        width="100%"
                        height="500"
                        style="border: 0;"
                        allowfullscreen=true
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        title="AL ABABIL office location"
                    />
                </div>
            </div>
        </section>
    }
}
