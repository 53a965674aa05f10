use chicory_contact::{Acknowledgment, InquiryForm};

use crate::route::Route;

/// Per-request rendering context.
///
/// Everything a page needs beyond the static site content. Built fresh for
/// each request, so nothing carries over between navigations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    route: Route,
    year: i32,
    inquiry: InquiryForm,
    acknowledgment: Option<Acknowledgment>,
}

impl PageContext {
    pub fn new(route: Route, year: i32) -> Self {
        Self {
            route,
            year,
            inquiry: InquiryForm::default(),
            acknowledgment: None,
        }
    }

    /// Attach the inquiry form state shown on the contact page.
    pub fn with_inquiry(mut self, inquiry: InquiryForm, acknowledgment: Option<Acknowledgment>) -> Self {
        self.inquiry = inquiry;
        self.acknowledgment = acknowledgment;
        self
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Copyright year printed in the footer.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn inquiry(&self) -> &InquiryForm {
        &self.inquiry
    }

    pub fn acknowledgment(&self) -> Option<&Acknowledgment> {
        self.acknowledgment.as_ref()
    }

    /// Navigation highlight rule: `/` matches only itself, every other entry
    /// matches its whole subtree.
    pub fn is_active(&self, href: &str) -> bool {
        let current = self.route.base_path();
        if href == "/" {
            return current == "/";
        }
        current == href || current.starts_with(&format!("{href}/"))
    }
}
