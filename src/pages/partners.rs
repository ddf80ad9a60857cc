use yew::prelude::*;

use crate::components::section_divider::SectionDivider;

const PARTNER_LOGO_COUNT: usize = 8;

/// Logo paths repeated three times so the CSS marquee can loop by
/// translating one third of the strip.
fn marquee_logos() -> Vec<String> {
    (0..3)
        .flat_map(|_| 1..=PARTNER_LOGO_COUNT)
        .map(|n| format!("/assets/img/companySilderImages/{}.png", n))
        .collect()
}

#[function_component(PartnersSection)]
pub fn partners_section() -> Html {
    html! {
        <section class="section partners-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"We Deal With"}</h2>
                    <SectionDivider />
                    <p>{"We handle document processing and services with these official government companies and departments across the UAE."}</p>
                </div>
            </div>
            <div class="marquee">
                <div class="marquee-track">
                    { for marquee_logos().into_iter().enumerate().map(|(i, src)| html! {
                        <div class="marquee-item" key={i}>
                            <img src={src} alt={format!("Company Image {}", i % PARTNER_LOGO_COUNT + 1)} loading="lazy" />
                        </div>
                    }) }
                </div>
                <div class="marquee-fade left"></div>
                <div class="marquee-fade right"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_repeats_logos_three_times() {
        let logos = marquee_logos();
        assert_eq!(logos.len(), 3 * PARTNER_LOGO_COUNT);
        assert_eq!(logos[0], logos[PARTNER_LOGO_COUNT]);
        assert_eq!(logos[0], "/assets/img/companySilderImages/1.png");
        assert_eq!(logos[PARTNER_LOGO_COUNT - 1], "/assets/img/companySilderImages/8.png");
    }
}
