use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COMPANY_NAME: &str = "AL ABABIL";
pub const COMPANY_TAGLINE: &str = "DOCUMENTS CLEARING CO.";

pub const WHATSAPP_NUMBER: &str = "+971529794631";
pub const PHONE_DISPLAY: &str = "+971 52 979 4631";
pub const EMAIL: &str = "ababeldcs@gmail.com";
pub const OFFICE_ADDRESS: &str = "183 Al Nahda St - Al Twar Fifth - Dubai - United Arab Emirates";

pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61557408093406&mibextid=ZbWKwL";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/al_ababil_dcs?igsh=MWswaTFhdWJocmw0ag==";
pub const FOOTER_WHATSAPP_MESSAGE: &str = "Hello I am interested in your services";

pub const REVIEWS_SCRIPT_URL: &str = "https://elfsightcdn.com/platform.js";
pub const REVIEWS_WIDGET_CLASS: &str = "elfsight-app-37fd5c24-e261-4448-84e2-e2340b7c0908";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3114.876384291!2d55.3848743!3d25.2644422!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3e5f5dd5aaab947b%3A0xd07e7ce645a081c!2sAL%20ABABIL%20DOCUMENTS%20CLEARING%20CO.!5e1!3m2!1sen!2s!4v1760348218930!5m2!1sen!2s";

/// Header switches to its solid style once the page is scrolled past this.
pub const HEADER_SOLID_THRESHOLD: u32 = 50;
/// Fixed header height added to the scroll offset when testing which
/// section is under the header. Also the offset below which no section
/// is active.
pub const SECTION_OFFSET: u32 = 100;
pub const SCROLL_DEBOUNCE_MS: u32 = 100;

pub const HERO_AUTOPLAY_MS: u32 = 5000;
