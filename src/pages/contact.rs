use yew::prelude::*;

use crate::components::book_meeting_btn::{BookMeetingBtn, CtaIcon};
use crate::components::section_divider::SectionDivider;
use crate::config::{EMAIL, OFFICE_ADDRESS, PHONE_DISPLAY};

#[derive(Properties, PartialEq)]
struct ContactCardProps {
    icon: &'static str,
    title: &'static str,
    children: Children,
}

#[function_component(ContactCard)]
fn contact_card(props: &ContactCardProps) -> Html {
    html! {
        <div class="contact-card">
            <div class="contact-card-icon">{ props.icon }</div>
            <h3>{ props.title }</h3>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Contact Us"}</h2>
                    <SectionDivider />
                    <p>{"Ready to get started? Contact us today for professional document clearing services."}</p>
                </div>

                <div class="consultation-card">
                    <div class="consultation-icon">{"💬"}</div>
                    <h3>{"Ready to Simplify Your Business Setup?"}</h3>
                    <p>{"Schedule a free consultation with our experts and discover how we can streamline your document clearing process."}</p>
                    <BookMeetingBtn class="wide-cta" icon={CtaIcon::Calendar} />
                </div>

                <div class="contact-grid">
                    <ContactCard icon="📍" title="Office Address">
                        <p>{ OFFICE_ADDRESS }</p>
                    </ContactCard>
                    <ContactCard icon="📞" title="Phone Number">
                        <p class="contact-strong">{ PHONE_DISPLAY }</p>
                        <p class="contact-muted">{"Available 24/7"}</p>
                    </ContactCard>
                    <ContactCard icon="✉" title="Email Address">
                        <p class="contact-strong">{ EMAIL }</p>
                        <p class="contact-muted">{"Response within 24 hours"}</p>
                    </ContactCard>
                    <ContactCard icon="🕘" title="Business Hours">
                        <div>{"Mon - Sat: 9AM - 6PM"}</div>
                        <div>{"Sun: Closed"}</div>
                    </ContactCard>
                </div>
            </div>
        </section>
    }
}
