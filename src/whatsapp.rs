use log::{info, warn};

/// `https://wa.me/<digits>?text=<message>` for the given number.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    )
}

pub fn interest_message(label: &str) -> String {
    format!(
        "Hello! I'm interested in {}. Could you please provide me with more information?",
        label.to_lowercase()
    )
}

/// Opens the chat in a new browsing context.
pub fn open_chat(number: &str, message: &str) {
    let url = whatsapp_url(number, message);
    match web_sys::window() {
        Some(window) => {
            info!("Opening WhatsApp chat");
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                warn!("Browser refused to open {}", url);
            }
        }
        None => warn!("No window to open {}", url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_non_digits() {
        let url = whatsapp_url("+971 52-979 4631", "hi");
        assert_eq!(url, "https://wa.me/971529794631?text=hi");
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let url = whatsapp_url("+971529794631", "Hello I am interested in your services");
        assert_eq!(
            url,
            "https://wa.me/971529794631?text=Hello%20I%20am%20interested%20in%20your%20services"
        );

        let url = whatsapp_url("1", "What's up? a&b=c");
        assert_eq!(url, "https://wa.me/1?text=What%27s%20up%3F%20a%26b%3Dc");
    }

    #[test]
    fn test_interest_message_lowercases_label() {
        assert_eq!(
            interest_message("Book Free Meeting"),
            "Hello! I'm interested in book free meeting. Could you please provide me with more information?"
        );
    }
}
