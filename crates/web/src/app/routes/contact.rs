use std::sync::Arc;

use axum::extract::{Extension, Form};
use maud::Markup;

use chicory_contact::{InquiryField, InquiryForm};

use crate::app::routes::pages::{context, render_route};
use crate::render;
use crate::route::Route;
use crate::site::Site;

pub async fn show(Extension(site): Extension<Arc<Site>>) -> Markup {
    render_route(&site, Route::Contact)
}

/// Apply every posted field, acknowledge, and re-render with a cleared form.
/// Unknown field names are ignored.
pub async fn submit(
    Extension(site): Extension<Arc<Site>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Markup {
    let mut form = InquiryForm::new();
    for (name, value) in fields {
        match name.parse::<InquiryField>() {
            Ok(field) => form.update_field(field, value),
            Err(e) => tracing::debug!(error = %e, "ignoring inquiry field"),
        }
    }

    let filled: Vec<&str> = form
        .filled_fields()
        .into_iter()
        .map(InquiryField::wire_name)
        .collect();
    tracing::info!(fields = ?filled, "inquiry submitted");

    let ack = form.submit();
    let ctx = context(Route::Contact).with_inquiry(form, Some(ack));
    render::page(&site, &ctx)
}
