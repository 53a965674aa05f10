//! Outbound WhatsApp deep link for the sales team.

use chicory_core::DomainError;

/// Sales WhatsApp number, E.164 without the leading `+`.
pub const SALES_PHONE: &str = "919810550456";

/// Pre-filled chat opener.
pub const SALES_MESSAGE: &str = "Hello RSI Chicory! I am interested in your chicory products and would like to discuss bulk pricing and MOQ. Please provide details about your current product range.";

/// A `https://wa.me/<phone>?text=<message>` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    phone: String,
    message: String,
}

impl WhatsAppLink {
    /// Build a link. A leading `+` on `phone` is dropped; what remains must be
    /// 8 to 15 digits.
    pub fn new(phone: &str, message: impl Into<String>) -> Result<Self, DomainError> {
        let digits = phone.trim().trim_start_matches('+');
        if !(8..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "whatsapp number must be 8-15 digits: {phone:?}"
            )));
        }
        Ok(Self {
            phone: digits.to_string(),
            message: message.into(),
        })
    }

    /// The site-wide sales link, checked like any other number.
    pub fn sales() -> Result<Self, DomainError> {
        Self::new(SALES_PHONE, SALES_MESSAGE)
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The deep link, with the message percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&self.message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_text(link: &str) -> String {
        let url = url::Url::parse(link).unwrap();
        url.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn sales_link_targets_the_sales_number() {
        let url = WhatsAppLink::sales().unwrap().url();
        assert!(url.starts_with("https://wa.me/919810550456?text=Hello%20RSI%20Chicory%21%20I%20am"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn sales_message_round_trips() {
        let url = WhatsAppLink::sales().unwrap().url();
        assert_eq!(decoded_text(&url), SALES_MESSAGE);
        let (_, encoded) = url.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), SALES_MESSAGE);
    }

    #[test]
    fn sales_link_passes_number_validation() {
        let sales = WhatsAppLink::sales().unwrap();
        assert_eq!(sales, WhatsAppLink::new("+919810550456", SALES_MESSAGE).unwrap());
        assert_eq!(sales.phone(), SALES_PHONE);
        assert_eq!(sales.message(), SALES_MESSAGE);
    }

    #[test]
    fn plus_prefix_is_dropped() {
        let link = WhatsAppLink::new("+919810550456", "hi").unwrap();
        assert_eq!(link.phone(), "919810550456");
        assert_eq!(link.url(), "https://wa.me/919810550456?text=hi");
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(WhatsAppLink::new("", "hi").is_err());
        assert!(WhatsAppLink::new("+91 98105 50456", "hi").is_err());
        assert!(WhatsAppLink::new("1234", "hi").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: decoding the `text` parameter gives back the message exactly.
            #[test]
            fn message_survives_percent_encoding(message in "\\PC{0,200}") {
                let link = WhatsAppLink::new(SALES_PHONE, message.clone()).unwrap();
                prop_assert_eq!(decoded_text(&link.url()), message);
            }
        }
    }
}
