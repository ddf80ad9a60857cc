use yew::prelude::*;

use crate::components::section_divider::SectionDivider;

const TRACK_RECORD: [(&str, &str); 4] = [
    ("500+", "Happy Clients"),
    ("5+", "Years Experience"),
    ("100%", "Success Rate"),
    ("24/7", "Support"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section about-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"About AL ABABIL"}</h2>
                    <SectionDivider delay={0.2} />
                    <p>{"Your trusted partner for document clearing and business services in the UAE."}</p>
                </div>

                <div class="about-row">
                    <div class="about-text">
                        <h3>{"Who We Are"}</h3>
                        <p>
                            {"AL ABABIL is a leading document clearing and business services company in the UAE, \
                              dedicated to simplifying government procedures and business processes for our clients. \
                              With years of experience navigating the UAE's regulatory landscape, we provide \
                              comprehensive solutions that save you time and ensure compliance with all government requirements."}
                        </p>
                    </div>
                    <img
                        class="about-image"
                        src="https://media.istockphoto.com/id/2199054272/photo/young-saudi-professionals-developing-ideas-for-new-business.jpg?s=1024x1024&w=is&k=20"
                        alt="AL ABABIL Team"
                        loading="lazy"
                    />
                </div>

                <div class="about-row reverse">
                    <img
                        class="about-image"
                        src="https://media.istockphoto.com/id/1286642966/photo/adult-arabic-man-with-arabic-woman-in-hijab-pays-for-real-estate-agent-services-real-estate.webp?s=1024x1024&w=is&k=20"
                        alt="Professional Services"
                        loading="lazy"
                    />
                    <div class="about-text">
                        <h3>{"What We Do"}</h3>
                        <p>
                            {"We specialize in visa processing, business setup, document attestation, PRO services, \
                              and complete business formation across all Emirates of the UAE. \
                              Our comprehensive services ensure that whether you're an individual seeking visa assistance \
                              or a business looking to establish operations in the UAE, we have the expertise to guide you through every step."}
                        </p>
                    </div>
                </div>

                <div class="track-record">
                    <h3>{"Our Track Record"}</h3>
                    <div class="track-record-grid">
                        { for TRACK_RECORD.iter().map(|(value, label)| html! {
                            <div class="track-record-item">
                                <h4>{ *value }</h4>
                                <p>{ *label }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
