use yew::prelude::*;

use crate::components::header::Logo;
use crate::config::{
    COMPANY_NAME, COMPANY_TAGLINE, EMAIL, FACEBOOK_URL, FOOTER_WHATSAPP_MESSAGE, INSTAGRAM_URL,
    PHONE_DISPLAY, WHATSAPP_NUMBER,
};
use crate::navigation::controller::Viewport;
use crate::navigation::dom::DomPage;
use crate::navigation::state::SectionId;
use crate::whatsapp::whatsapp_url;

struct SocialLink {
    label: &'static str,
    icon: &'static str,
    href: String,
    hover_class: &'static str,
    external: bool,
}

fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "Facebook",
            icon: "f",
            href: FACEBOOK_URL.to_string(),
            hover_class: "hover-facebook",
            external: true,
        },
        SocialLink {
            label: "Instagram",
            icon: "◎",
            href: INSTAGRAM_URL.to_string(),
            hover_class: "hover-instagram",
            external: true,
        },
        SocialLink {
            label: "WhatsApp",
            icon: "✆",
            href: whatsapp_url(WHATSAPP_NUMBER, FOOTER_WHATSAPP_MESSAGE),
            hover_class: "hover-whatsapp",
            external: true,
        },
        SocialLink {
            label: "Email",
            icon: "✉",
            href: format!("mailto:{}", EMAIL),
            hover_class: "hover-email",
            external: false,
        },
    ]
}

const FOOTER_SERVICES: [&str; 4] = [
    "Visa Services",
    "Business Setup",
    "Document Attestation",
    "PRO Services",
];

const QUICK_LINKS: [(&str, SectionId); 4] = [
    ("About", SectionId::About),
    ("Our Services", SectionId::Services),
    ("FAQ", SectionId::Faq),
    ("Contact", SectionId::Contact),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let to_top = Callback::from(|_: MouseEvent| DomPage.scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="footer-brand-row">
                        <Logo onclick={to_top} />
                        <div>
                            <h3>{ COMPANY_NAME }</h3>
                            <p class="brand-tagline">{ COMPANY_TAGLINE }</p>
                        </div>
                    </div>
                    <p>{"Your trusted partner for document clearing and business services in the UAE."}</p>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|name| html! {
                            <li><a href={SectionId::Services.href()}>{ *name }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(name, section)| html! {
                            <li><a href={section.href()}>{ *name }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Connect With Us"}</h4>
                    <div class="social-links">
                        { for social_links().into_iter().map(|link| html! {
                            <a
                                href={link.href}
                                class={classes!("social-link", link.hover_class)}
                                aria-label={link.label}
                                target={if link.external { "_blank" } else { "_self" }}
                                rel={link.external.then_some("noopener noreferrer")}
                            >
                                { link.icon }
                            </a>
                        }) }
                    </div>
                    <p class="footer-contact">{"✆ "}{ PHONE_DISPLAY }</p>
                    <p class="footer-contact">{"✉ "}{ EMAIL }</p>
                </div>
            </div>
            <div class="footer-bottom">
                {"© 2024 AL ABABIL Document Clearing Co. All rights reserved."}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mail_link_stays_in_tab() {
        let links = social_links();
        let internal: Vec<_> = links.iter().filter(|l| !l.external).map(|l| l.label).collect();
        assert_eq!(internal, ["Email"]);
        assert!(links.iter().any(|l| l.href
            == "https://wa.me/971529794631?text=Hello%20I%20am%20interested%20in%20your%20services"));
    }
}
