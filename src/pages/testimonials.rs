use yew::prelude::*;

use crate::components::reviews_widget::ReviewsWidget;
use crate::components::section_divider::SectionDivider;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section class="section testimonials-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Happy Clients"}</h2>
                    <SectionDivider />
                    <p>{"Don't just take our word for it. Here's what our satisfied clients have to say about our services."}</p>
                </div>
                <ReviewsWidget />
            </div>
        </section>
    }
}
