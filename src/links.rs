//! Contact-link generation for product inquiries and the site footer.
//!
//! All functions are pure; configuration values are passed in by the caller.

use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

/// Strips a display phone number down to its digits, as required by
/// `wa.me` deep links.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Builds a WhatsApp deep link with a pre-filled inquiry message for a
/// product. Returns `None` when no usable phone number is configured.
pub fn whatsapp_inquiry_url(raw_number: &str, product_name: &str, price: &Decimal) -> Option<String> {
    let phone = digits_only(raw_number);
    if phone.is_empty() {
        return None;
    }

    let message = format!("Hi, I'm interested in {} - ${}", product_name, price);

    let mut url = Url::parse(&format!("https://wa.me/{}", phone)).ok()?;
    url.query_pairs_mut().append_pair("text", &message);
    Some(url.to_string())
}

/// Mailto-style inquiry payload for a product detail page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmailInquiry {
    /// Store contact address
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

pub fn email_inquiry(
    contact_email: &str,
    product_name: &str,
    price: &Decimal,
    description: &str,
) -> EmailInquiry {
    EmailInquiry {
        recipient: contact_email.to_string(),
        subject: format!("Inquiry about {}", product_name),
        body: format!(
            "Hi,\n\nI'm interested in the following product:\n\n\
             Product: {}\nPrice: ${}\nDescription: {}\n\n\
             Please provide more details.\n\nThank you!",
            product_name, price, description
        ),
    }
}

/// Contact details rendered into page footers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteContacts {
    pub contact_email: String,
    /// WhatsApp number as configured (display form)
    pub whatsapp_number: String,
    /// WhatsApp number normalized to digits
    pub whatsapp_number_clean: String,
}

pub fn site_contacts(contact_email: &str, whatsapp_number: &str) -> SiteContacts {
    SiteContacts {
        contact_email: contact_email.to_string(),
        whatsapp_number: whatsapp_number.to_string(),
        whatsapp_number_clean: digits_only(whatsapp_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn digits_only_strips_formatting() {
        assert_eq!(digits_only("+1 (555) 010-7788"), "15550107788");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("no digits"), "");
    }

    #[test]
    fn whatsapp_url_has_digit_phone_and_encoded_text() {
        let url = whatsapp_inquiry_url("+1 (555) 010-7788", "Trail Runner", &dec!(89.99))
            .expect("number is configured");

        assert!(url.starts_with("https://wa.me/15550107788?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("Trail"));
        assert!(url.contains("89.99"));
    }

    #[test]
    fn whatsapp_url_requires_a_number() {
        assert!(whatsapp_inquiry_url("", "Trail Runner", &dec!(89.99)).is_none());
        assert!(whatsapp_inquiry_url("ext.", "Trail Runner", &dec!(89.99)).is_none());
    }

    #[test]
    fn email_inquiry_names_the_product() {
        let inquiry = email_inquiry(
            "hello@example.com",
            "Trail Runner",
            &dec!(89.99),
            "Lightweight trail shoe",
        );

        assert_eq!(inquiry.recipient, "hello@example.com");
        assert_eq!(inquiry.subject, "Inquiry about Trail Runner");
        assert!(inquiry.body.contains("Trail Runner"));
        assert!(inquiry.body.contains("$89.99"));
        assert!(inquiry.body.contains("Lightweight trail shoe"));
    }

    #[test]
    fn site_contacts_exposes_clean_number() {
        let contacts = site_contacts("hello@example.com", "+49 151 23456789");
        assert_eq!(contacts.whatsapp_number, "+49 151 23456789");
        assert_eq!(contacts.whatsapp_number_clean, "4915123456789");
    }
}
