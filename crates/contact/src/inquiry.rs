use core::str::FromStr;

use serde::Serialize;

use chicory_core::DomainError;

/// A field of the business inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryField {
    Name,
    Company,
    Email,
    Phone,
    Country,
    ProductInterest,
    Quantity,
    Message,
}

impl InquiryField {
    /// Every field, in form order.
    pub const ALL: [InquiryField; 8] = [
        InquiryField::Name,
        InquiryField::Company,
        InquiryField::Email,
        InquiryField::Phone,
        InquiryField::Country,
        InquiryField::ProductInterest,
        InquiryField::Quantity,
        InquiryField::Message,
    ];

    /// The `name` attribute used on the HTML form.
    pub fn wire_name(self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Company => "company",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::Country => "country",
            InquiryField::ProductInterest => "productInterest",
            InquiryField::Quantity => "quantity",
            InquiryField::Message => "message",
        }
    }
}

impl FromStr for InquiryField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown inquiry field {s:?}")))
    }
}

/// What the visitor sees after submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub message: &'static str,
}

impl Acknowledgment {
    pub const SUBMITTED: Acknowledgment = Acknowledgment {
        title: "Inquiry Submitted",
        message: "Thank you for your interest. Our team will contact you within 24 hours.",
    };
}

/// Free-text inquiry state. Every field starts empty and nothing is validated:
/// `required` hints on the HTML form are the only checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    values: [String; 8],
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: InquiryField) -> &str {
        &self.values[field as usize]
    }

    pub fn update_field(&mut self, field: InquiryField, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    /// Fields holding non-blank text, in form order.
    pub fn filled_fields(&self) -> Vec<InquiryField> {
        InquiryField::ALL
            .into_iter()
            .filter(|&field| !self.value(field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Acknowledge the inquiry and clear the form. Nothing is sent anywhere.
    pub fn submit(&mut self) -> Acknowledgment {
        *self = Self::default();
        Acknowledgment::SUBMITTED
    }
}
