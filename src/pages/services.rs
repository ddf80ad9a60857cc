use yew::prelude::*;

use crate::components::book_meeting_btn::{BookMeetingBtn, CtaIcon};
use crate::components::section_divider::SectionDivider;

struct Service {
    icon: &'static str,
    image: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    /// Portrait photos are anchored to the top instead of centred.
    crop_top: bool,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "📄",
        image: "/assets/img/Services/License.PNG",
        title: "License Services",
        description: "Complete assistance with new license issuance, renewal, and modification for all types of business activities in the UAE.",
        features: ["New License Issuance", "License Renewal", "License Modification", "Business Activity Updates"],
        crop_top: false,
    },
    Service {
        icon: "🛂",
        image: "/assets/img/Services/visa.JPG",
        title: "Visa Services",
        description: "Professional visa processing services for employment, family, investor, and tourist visas with expert guidance.",
        features: ["Employment Visas", "Family Visas", "Investor Visas", "Tourist Visas"],
        crop_top: false,
    },
    Service {
        icon: "📊",
        image: "/assets/img/Services/vat.PNG",
        title: "VAT & Tax Services",
        description: "Comprehensive VAT registration, filing, and tax consultation services to ensure compliance with UAE regulations.",
        features: ["VAT Registration", "Tax Filing", "Tax Consultation", "Compliance Support"],
        crop_top: false,
    },
    Service {
        icon: "🏦",
        image: "/assets/img/Services/banking.JPG",
        title: "Banking Solutions",
        description: "Expert assistance with business and corporate bank account opening across major UAE banks.",
        features: ["Business Bank Accounts", "Corporate Banking", "Account Setup Assistance", "Banking Documentation"],
        crop_top: true,
    },
    Service {
        icon: "™️",
        image: "/assets/img/Services/trademark.JPG",
        title: "Trademark & Business Formation",
        description: "Complete trademark registration and business formation services including company setup and registration.",
        features: ["Trademark Registration", "Company Formation", "Business Setup", "Legal Documentation"],
        crop_top: true,
    },
    Service {
        icon: "💳",
        image: "/assets/img/Services/payment.JPG",
        title: "Payment Solutions",
        description: "Modern payment solutions including payment links, gateways, and mobile POS devices for your business needs.",
        features: ["Payment Links", "Payment Gateways", "Mobile POS Devices", "Payment Integration"],
        crop_top: false,
    },
];

/// Cards show a two-digit position badge.
fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

fn render_service(index: usize, service: &Service) -> Html {
    html! {
        <div class="service-card">
            <div class="service-icon">{ service.icon }</div>
            <div class="service-number">{ card_number(index) }</div>
            <div class="service-image">
                <img
                    src={service.image}
                    alt={service.title}
                    loading="lazy"
                    style={service.crop_top.then_some("object-position: top;")}
                />
            </div>
            <div class="service-body">
                <h3>{ service.title }</h3>
                <p>{ service.description }</p>
                <ul class="service-features">
                    { for service.features.iter().take(3).map(|feature| html! {
                        <li><span class="feature-dot"></span><span>{ *feature }</span></li>
                    }) }
                </ul>
                <BookMeetingBtn text="Book Free Consultation" class="service-cta" icon={CtaIcon::Arrow} />
            </div>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="section services-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Services"}</h2>
                    <SectionDivider />
                    <p>
                        {"Professional document clearing and business services across the UAE,"}
                        <span class="accent">{" ensuring your paperwork is handled efficiently and accurately."}</span>
                    </p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| render_service(i, service)) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_numbers_are_zero_padded() {
        assert_eq!(card_number(0), "01");
        assert_eq!(card_number(5), "06");
        assert_eq!(card_number(11), "12");
    }
}
