//! Subject/body template pairs for the storefront's outbound mail.
//!
//! Each mail renders to a plain-text and an HTML variant from the same data,
//! so gateways and clients can pick whichever they prefer.

use crate::entities::{ContactMessageModel, ContactReplyModel};
use chrono::{Datelike, Utc};

/// Rendered subject/body pair.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Site identity woven into every template.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub site_name: String,
    pub contact_email: String,
    pub whatsapp_number: String,
}

fn footer_text(site: &SiteContext) -> String {
    format!(
        "--\n{} | {} | WhatsApp: {}\n(c) {}",
        site.site_name,
        site.contact_email,
        site.whatsapp_number,
        Utc::now().year()
    )
}

fn footer_html(site: &SiteContext) -> String {
    format!(
        "<hr><p style=\"color:#888;font-size:12px\">{} | {} | WhatsApp: {} | &copy; {}</p>",
        site.site_name,
        site.contact_email,
        site.whatsapp_number,
        Utc::now().year()
    )
}

/// Notification to the store owner about a new contact message.
pub fn contact_notification(message: &ContactMessageModel, site: &SiteContext) -> RenderedEmail {
    let subject = format!("New Contact Message: {}", message.subject);

    let phone = message.phone.as_deref().unwrap_or("-");
    let text = format!(
        "A new contact message arrived.\n\n\
         From: {} <{}>\nPhone: {}\nSubject: {}\n\n{}\n\n{}",
        message.name,
        message.email,
        phone,
        message.subject,
        message.message,
        footer_text(site)
    );

    let html = format!(
        "<h2>New contact message</h2>\
         <p><strong>From:</strong> {} &lt;{}&gt;<br>\
         <strong>Phone:</strong> {}<br>\
         <strong>Subject:</strong> {}</p>\
         <blockquote>{}</blockquote>{}",
        message.name,
        message.email,
        phone,
        message.subject,
        message.message,
        footer_html(site)
    );

    RenderedEmail { subject, text, html }
}

/// Confirmation to the shopper that their message was received.
pub fn contact_confirmation(message: &ContactMessageModel, site: &SiteContext) -> RenderedEmail {
    let subject = format!("Thank you for contacting {}!", site.site_name);

    let text = format!(
        "Hi {},\n\n\
         Thanks for reaching out. We received your message about \"{}\" and \
         will get back to you as soon as we can.\n\n\
         If it is urgent, reach us on WhatsApp at {} or email {}.\n\n{}",
        message.name,
        message.subject,
        site.whatsapp_number,
        site.contact_email,
        footer_text(site)
    );

    let html = format!(
        "<p>Hi {},</p>\
         <p>Thanks for reaching out. We received your message about \
         <strong>{}</strong> and will get back to you as soon as we can.</p>\
         <p>If it is urgent, reach us on WhatsApp at {} or email \
         <a href=\"mailto:{}\">{}</a>.</p>{}",
        message.name,
        message.subject,
        site.whatsapp_number,
        site.contact_email,
        site.contact_email,
        footer_html(site)
    );

    RenderedEmail { subject, text, html }
}

/// Staff reply delivered to the shopper. The subject threads onto the
/// original message.
pub fn reply_email(
    reply: &ContactReplyModel,
    message: &ContactMessageModel,
    site: &SiteContext,
) -> RenderedEmail {
    let subject = format!("Re: {}", message.subject);

    let signature = reply
        .sent_by
        .as_deref()
        .map(|name| format!("{}, {}", name, site.site_name))
        .unwrap_or_else(|| site.site_name.clone());

    let text = format!(
        "Hi {},\n\n{}\n\nBest regards,\n{}\n\n{}",
        message.name,
        reply.reply_message,
        signature,
        footer_text(site)
    );

    let html = format!(
        "<p>Hi {},</p><p>{}</p><p>Best regards,<br>{}</p>{}",
        message.name,
        reply.reply_message,
        signature,
        footer_html(site)
    );

    RenderedEmail { subject, text, html }
}
