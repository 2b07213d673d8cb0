//! Contact-form validation and submission to the form processor.

use tracing::{info, warn};

use crate::net;
use crate::state::{ContactField, ContactFormState};

/// Default form-processing endpoint (overridable via settings/CLI).
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xvgqapob";

/// What: Validate the form fields before submission.
///
/// Inputs:
/// - `form`: Current form state
///
/// Output:
/// - Per-field translation keys for every failing field; empty when the
///   form may be submitted.
///
/// Details:
/// - Name and message must be non-blank. The email needs a non-empty local
///   part and a domain containing a dot, which is the same light check the
///   site's form markup enforced.
#[must_use]
pub fn validate(form: &ContactFormState) -> Vec<(ContactField, &'static str)> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push((ContactField::Name, "contact.errors.name"));
    }
    if !email_looks_valid(&form.email) {
        errors.push((ContactField::Email, "contact.errors.email"));
    }
    if form.message.trim().is_empty() {
        errors.push((ContactField::Message, "contact.errors.message"));
    }
    errors
}

/// What: Light-weight email shape check.
fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// What: Submit a validated form to the processing endpoint.
///
/// Inputs:
/// - `endpoint`: Absolute HTTPS URL of the form processor
/// - `form`: Form state (assumed validated)
///
/// Output:
/// - `Ok(())` on acceptance; `Err(message)` with the processor's error
///   string or the transport failure otherwise.
///
/// Details:
/// - Fields go out form-encoded with `Accept: application/json`, matching
///   the processor's AJAX contract. There is no retry.
pub async fn submit(endpoint: &str, form: &ContactFormState) -> Result<(), String> {
    let fields = [
        ("name", form.name.trim()),
        ("email", form.email.trim()),
        ("message", form.message.trim()),
    ];
    match net::post_form(endpoint, &fields).await {
        Ok(()) => {
            info!(endpoint, "contact message accepted");
            Ok(())
        }
        Err(err) => {
            warn!(endpoint, error = %err, "contact submission failed");
            Err(err.to_string())
        }
    }
}
