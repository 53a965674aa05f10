//! Contact channels: the business inquiry form, the WhatsApp deep link and
//! the company's published contact details.
//!
//! Nothing here sends or stores anything; an inquiry ends in a local
//! acknowledgment and the deep link is handed to the browser.

pub mod directory;
pub mod inquiry;
pub mod whatsapp;

pub use directory::{CompanyContact, RSI_CHICORY};
pub use inquiry::{Acknowledgment, InquiryField, InquiryForm};
pub use whatsapp::WhatsAppLink;
