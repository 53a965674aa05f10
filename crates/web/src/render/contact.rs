use maud::{Markup, html};

use chicory_contact::{InquiryField, InquiryForm};

use crate::content::{EXPORT_CREDENTIALS, SERVICES};
use crate::context::PageContext;
use crate::render::components::whatsapp_button;
use crate::route::Route;
use crate::site::Site;

/// How a form field is presented.
struct FieldView {
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
}

fn field_view(field: InquiryField) -> FieldView {
    let (label, input_type, placeholder, required) = match field {
        InquiryField::Name => ("Full Name", "text", "Your full name", true),
        InquiryField::Company => ("Company Name", "text", "Your company name", true),
        InquiryField::Email => ("Business Email", "email", "your.email@company.com", true),
        InquiryField::Phone => ("Phone Number", "tel", "+1 234 567 8900", true),
        InquiryField::Country => ("Country", "text", "Your country", true),
        InquiryField::Quantity => ("Expected Quantity", "text", "e.g., 5 tons/month", false),
        InquiryField::ProductInterest => (
            "Product Interest",
            "text",
            "Which chicory products are you interested in?",
            false,
        ),
        InquiryField::Message => (
            "Message",
            "textarea",
            "Please describe your requirements, including intended use, packaging preferences, and any specific quality requirements...",
            true,
        ),
    };
    FieldView {
        label,
        input_type,
        placeholder,
        required,
    }
}

/// Order fields appear in on the page (quantity sits next to country).
const LAYOUT: [InquiryField; 8] = [
    InquiryField::Name,
    InquiryField::Company,
    InquiryField::Email,
    InquiryField::Phone,
    InquiryField::Country,
    InquiryField::Quantity,
    InquiryField::ProductInterest,
    InquiryField::Message,
];

fn form_field(form: &InquiryForm, field: InquiryField) -> Markup {
    let view = field_view(field);
    let name = field.wire_name();
    html! {
        div class="field" {
            label for=(name) {
                (view.label)
                @if view.required { " *" }
            }
            @if view.input_type == "textarea" {
                textarea id=(name) name=(name) rows="6" placeholder=(view.placeholder) required[view.required] {
                    (form.value(field))
                }
            } @else {
                input id=(name) name=(name) type=(view.input_type) placeholder=(view.placeholder)
                    value=(form.value(field)) required[view.required];
            }
        }
    }
}

pub fn contact(site: &Site, ctx: &PageContext) -> Markup {
    let company = &site.company;
    let form = ctx.inquiry();
    html! {
        section class="container page-header" {
            h1 { "Contact " (company.brand) }
            p class="lead" {
                "Ready to discuss your chicory requirements? Our B2B sales team is here to help with bulk pricing, samples, and export documentation. Contact us today."
            }
        }

        section class="container detail-grid" {
            div class="detail-main card" {
                h2 { "Business Inquiry Form" }
                p {
                    "Fill out this form for bulk quotes, samples, or general business inquiries. We respond to all B2B inquiries within 24 hours."
                }
                @if let Some(ack) = ctx.acknowledgment() {
                    div class="notice" role="status" {
                        strong { (ack.title) }
                        p { (ack.message) }
                    }
                }
                form method="post" action=(Route::Contact.path()) class="inquiry" {
                    @for field in LAYOUT {
                        (form_field(form, field))
                    }
                    button type="submit" class="btn btn-cta" { "Submit Inquiry" }
                }
            }

            aside class="detail-side" {
                div class="card" {
                    h3 { "Quick Contact" }
                    p { "For immediate assistance, use these direct contact methods" }
                    (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
                    p class="muted" { "Sales WhatsApp" }
                    p { (company.phone) }
                }
                div class="card" {
                    h3 { "Phone" }
                    p { a href=(company.tel_uri()) { (company.phone) } }
                    p class="muted" { "Direct line for business inquiries" }
                }
                div class="card" {
                    h3 { "Email" }
                    p { a href=(company.mailto_uri()) { (company.email) } }
                    p class="muted" { "Email for quotes and documentation" }
                }
                div class="card" {
                    h3 { "Address" }
                    @for line in company.address {
                        p { (line) }
                    }
                    p class="muted" { "Manufacturing facility location" }
                }
                div class="card" {
                    h3 { "Business Hours" }
                    @for line in company.hours {
                        p { (line) }
                    }
                    p class="muted" { (company.timezone) }
                }
                div class="card" {
                    h3 { "Our Services" }
                    ul {
                        @for service in SERVICES {
                            li { (service) }
                        }
                    }
                }
                div class="card" {
                    h3 { "Export Markets" }
                    p { "We serve B2B clients worldwide with proper export documentation:" }
                    ul {
                        @for credential in EXPORT_CREDENTIALS {
                            li { (credential) }
                        }
                    }
                }
            }
        }

        section class="container card closing" {
            h2 { "Need Immediate Assistance?" }
            p { "Our sales team is ready to help with your chicory requirements. Contact us directly for faster response." }
            div class="actions" {
                a class="btn btn-secondary" href=(company.tel_uri()) { "Call: " (company.phone) }
                a class="btn btn-outline" href=(company.mailto_uri()) { "Email: " (company.email) }
                (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_hints_follow_the_form() {
        let site = Site::load().unwrap();
        let ctx = PageContext::new(Route::Contact, 2025);
        let html = contact(&site, &ctx).into_string();

        assert!(html.contains("name=\"company\" type=\"text\""));
        assert_eq!(html.matches(" required").count(), 6);
        assert!(!html.contains("Inquiry Submitted"));
    }

    #[test]
    fn acknowledgment_is_shown_with_empty_fields() {
        let site = Site::load().unwrap();
        let mut form = InquiryForm::new();
        form.update_field(InquiryField::Company, "Acme Roasters");
        let ack = form.submit();

        let ctx = PageContext::new(Route::Contact, 2025).with_inquiry(form, Some(ack));
        let html = contact(&site, &ctx).into_string();
        assert!(html.contains("Inquiry Submitted"));
        assert!(html.contains("Our team will contact you within 24 hours."));
        assert!(!html.contains("Acme Roasters"));
    }

    #[test]
    fn layout_covers_every_field_once() {
        for field in InquiryField::ALL {
            assert_eq!(LAYOUT.iter().filter(|&&f| f == field).count(), 1);
        }
    }
}
