use yew::prelude::*;

use crate::components::book_meeting_btn::BookMeetingBtn;
use crate::components::section_divider::SectionDivider;

struct Reason {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    stat: &'static str,
    stat_label: &'static str,
}

const REASONS: [Reason; 6] = [
    Reason {
        icon: "⚡",
        title: "Fast & Efficient Service",
        description: "We streamline government procedures to save you time and ensure quick processing of your documents.",
        stat: "2-3 Days",
        stat_label: "Average Processing",
    },
    Reason {
        icon: "🎯",
        title: "Expert Knowledge",
        description: "Our team has extensive experience with UAE regulations and maintains up-to-date knowledge of all government requirements.",
        stat: "5+ Years",
        stat_label: "Experience",
    },
    Reason {
        icon: "💯",
        title: "100% Success Rate",
        description: "We have a proven track record of successful applications and satisfied clients across all Emirates.",
        stat: "500+",
        stat_label: "Happy Clients",
    },
    Reason {
        icon: "🔒",
        title: "Secure & Confidential",
        description: "Your documents and personal information are handled with the highest level of security and confidentiality.",
        stat: "24/7",
        stat_label: "Support Available",
    },
    Reason {
        icon: "💰",
        title: "Transparent Pricing",
        description: "No hidden fees or surprise charges. We provide clear, upfront pricing for all our services.",
        stat: "0%",
        stat_label: "Hidden Fees",
    },
    Reason {
        icon: "🌟",
        title: "Personalized Service",
        description: "Each client receives dedicated attention and customized solutions based on their specific requirements.",
        stat: "1-on-1",
        stat_label: "Personal Consultation",
    },
];

#[function_component(WhyChooseUsSection)]
pub fn why_choose_us_section() -> Html {
    html! {
        <section class="section why-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Why Choose AL ABABIL?"}</h2>
                    <SectionDivider />
                    <p>{"Discover what makes us the preferred choice for document clearing and business services in the UAE."}</p>
                </div>
                <div class="reasons-grid">
                    { for REASONS.iter().map(|reason| html! {
                        <div class="reason-card">
                            <div class="reason-top">
                                <span class="reason-icon">{ reason.icon }</span>
                                <div class="reason-stat">
                                    <div class="reason-stat-value">{ reason.stat }</div>
                                    <div class="reason-stat-label">{ reason.stat_label }</div>
                                </div>
                            </div>
                            <h3>{ reason.title }</h3>
                            <p>{ reason.description }</p>
                            <div class="reason-accent"></div>
                        </div>
                    }) }
                </div>
                <div class="centered-cta">
                    <BookMeetingBtn class="wide-cta" show_icon={false} />
                </div>
            </div>
        </section>
    }
}
