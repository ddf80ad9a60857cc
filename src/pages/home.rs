use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero_slider::HeroSlider;
use crate::pages::about::AboutSection;
use crate::pages::contact::ContactSection;
use crate::pages::faq::FaqSection;
use crate::pages::find_us::FindUsSection;
use crate::pages::partners::PartnersSection;
use crate::pages::services::ServicesSection;
use crate::pages::testimonials::TestimonialsSection;
use crate::pages::why_choose_us::WhyChooseUsSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <Header />
            <main>
                <HeroSlider />
                <ServicesSection />
                <TestimonialsSection />
                <AboutSection />
                <PartnersSection />
                <WhyChooseUsSection />
                <FaqSection />
                <ContactSection />
                <FindUsSection />
            </main>
            <Footer />
        </div>
    }
}
