//! Form submission boundary.
//!
//! Contact and newsletter forms share one pipeline: validate the submitted
//! field mapping, hand it to a delivery mechanism, and reset the input state
//! on success. Delivery itself is an external collaborator behind the
//! [`Delivery`] trait — the real site posts to an HTTP endpoint; the shipped
//! fallback composes a `mailto:` URL for the visitor's mail client.
//!
//! ## Failure policy
//!
//! Validation problems come back as [`FormError`] so the presentation can
//! point at the offending field. Delivery problems never do: if the primary
//! mechanism fails the fallback is tried, and if both fail the result is
//! [`Notice::Failed`] — a user-visible notice, not an error. Nothing on this
//! path may take the page down, and the visitor's input is only cleared when
//! something was actually sent.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Submitted field values, keyed by field name.
pub type Fields = BTreeMap<String, String>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("required field is empty: {0}")]
    MissingField(String),
    #[error("not a valid email address: {0}")]
    InvalidEmail(String),
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("delivery unavailable: {0}")]
    Unavailable(String),
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// One field of a form. All defined fields are required.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Email,
        }
    }
}

/// A form definition: a name and its ordered required fields.
#[derive(Debug, Clone)]
pub struct FormDef {
    name: String,
    fields: Vec<FieldDef>,
}

impl FormDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// The contact page form: name, email, message.
    pub fn contact() -> Self {
        Self::new(
            "contact",
            vec![
                FieldDef::text("name"),
                FieldDef::email("email"),
                FieldDef::text("message"),
            ],
        )
    }

    /// The footer newsletter form: a single email field.
    pub fn newsletter() -> Self {
        Self::new("newsletter", vec![FieldDef::email("email")])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Check every defined field in definition order: present and non-blank,
    /// and a plausible address for email fields.
    pub fn validate(&self, fields: &Fields) -> Result<(), FormError> {
        for def in &self.fields {
            let value = fields.get(&def.name).map(String::as_str).unwrap_or("");
            if value.trim().is_empty() {
                return Err(FormError::MissingField(def.name.clone()));
            }
            if def.kind == FieldKind::Email && !email_regex().is_match(value.trim()) {
                return Err(FormError::InvalidEmail(def.name.clone()));
            }
        }
        Ok(())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// External delivery mechanism for a validated submission.
pub trait Delivery {
    fn deliver(&mut self, form: &FormDef, fields: &Fields) -> Result<(), DeliveryError>;
}

/// The user-visible outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    SentViaFallback,
    Failed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notice::Sent => "Thank you! Your message has been sent.",
            Notice::SentViaFallback => {
                "Thank you! Your mail client has been opened to send the message."
            }
            Notice::Failed => "Sorry, your message could not be sent. Please try again later.",
        })
    }
}

/// Validate and deliver a submission.
///
/// On successful delivery (primary or fallback) the field mapping is cleared
/// — the form resets. When both mechanisms fail the fields are left intact so
/// the visitor can retry without retyping.
pub fn submit(
    def: &FormDef,
    fields: &mut Fields,
    primary: &mut dyn Delivery,
    fallback: &mut dyn Delivery,
) -> Result<Notice, FormError> {
    def.validate(fields)?;

    if primary.deliver(def, fields).is_ok() {
        fields.clear();
        return Ok(Notice::Sent);
    }
    if fallback.deliver(def, fields).is_ok() {
        fields.clear();
        return Ok(Notice::SentViaFallback);
    }
    Ok(Notice::Failed)
}

/// Primary delivery for sites shipped without a backend. Always unavailable,
/// which routes every submission through the fallback path.
#[derive(Debug, Default)]
pub struct NoEndpoint;

impl Delivery for NoEndpoint {
    fn deliver(&mut self, _form: &FormDef, _fields: &Fields) -> Result<(), DeliveryError> {
        Err(DeliveryError::Unavailable(
            "no submission endpoint configured".into(),
        ))
    }
}

/// Fallback delivery: compose a `mailto:` URL and hand it to an opener
/// (the browser, or stdout in the CLI).
pub struct MailtoDelivery<'a> {
    recipient: String,
    open: Box<dyn FnMut(&str) -> bool + 'a>,
}

impl<'a> MailtoDelivery<'a> {
    pub fn new(recipient: impl Into<String>, open: impl FnMut(&str) -> bool + 'a) -> Self {
        Self {
            recipient: recipient.into(),
            open: Box::new(open),
        }
    }
}

impl Delivery for MailtoDelivery<'_> {
    fn deliver(&mut self, form: &FormDef, fields: &Fields) -> Result<(), DeliveryError> {
        let url = compose_mailto(&self.recipient, form, fields);
        if (self.open)(&url) {
            Ok(())
        } else {
            Err(DeliveryError::Unavailable("mail client not opened".into()))
        }
    }
}

/// Build a `mailto:` URL with the submission as percent-encoded subject and
/// body. Body lines follow the form's field order.
pub fn compose_mailto(recipient: &str, form: &FormDef, fields: &Fields) -> String {
    let subject = format!("New {} submission", form.name());
    let body = form
        .fields()
        .iter()
        .filter_map(|def| {
            fields
                .get(&def.name)
                .map(|value| format!("{}: {}", def.name, value))
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_fields() -> Fields {
        Fields::from([
            ("name".into(), "Achol Deng".into()),
            ("email".into(), "achol@example.com".into()),
            ("message".into(), "Do you deliver to Munuki?".into()),
        ])
    }

    /// Test double that records deliveries and can be set to fail.
    #[derive(Default)]
    struct RecordingDelivery {
        delivered: Vec<Fields>,
        fail: bool,
    }

    impl Delivery for RecordingDelivery {
        fn deliver(&mut self, _form: &FormDef, fields: &Fields) -> Result<(), DeliveryError> {
            if self.fail {
                return Err(DeliveryError::Unavailable("down".into()));
            }
            self.delivered.push(fields.clone());
            Ok(())
        }
    }

    #[test]
    fn valid_contact_submission_passes() {
        assert_eq!(FormDef::contact().validate(&contact_fields()), Ok(()));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut fields = contact_fields();
        fields.remove("message");
        assert_eq!(
            FormDef::contact().validate(&fields),
            Err(FormError::MissingField("message".into()))
        );
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let mut fields = contact_fields();
        fields.insert("name".into(), "   ".into());
        assert_eq!(
            FormDef::contact().validate(&fields),
            Err(FormError::MissingField("name".into()))
        );
    }

    #[test]
    fn fields_are_checked_in_definition_order() {
        // Both name and email are bad; name comes first in the definition.
        let mut fields = contact_fields();
        fields.insert("name".into(), "".into());
        fields.insert("email".into(), "not-an-address".into());
        assert_eq!(
            FormDef::contact().validate(&fields),
            Err(FormError::MissingField("name".into()))
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        let def = FormDef::newsletter();
        for bad in ["plainaddress", "missing@tld", "two words@example.com", "@example.com"] {
            let fields = Fields::from([("email".into(), bad.to_string())]);
            assert_eq!(
                def.validate(&fields),
                Err(FormError::InvalidEmail("email".into())),
                "should reject {bad:?}"
            );
        }
    }

    #[test]
    fn reasonable_emails_are_accepted() {
        let def = FormDef::newsletter();
        for good in ["a@b.co", "first.last@shop.example.com", "user+tag@mail.org"] {
            let fields = Fields::from([("email".into(), good.to_string())]);
            assert_eq!(def.validate(&fields), Ok(()), "should accept {good:?}");
        }
    }

    #[test]
    fn email_with_surrounding_whitespace_is_accepted() {
        let fields = Fields::from([("email".into(), "  a@b.co  ".into())]);
        assert_eq!(FormDef::newsletter().validate(&fields), Ok(()));
    }

    #[test]
    fn submit_delivers_and_resets() {
        let mut fields = contact_fields();
        let mut primary = RecordingDelivery::default();
        let mut fallback = RecordingDelivery::default();
        let notice =
            submit(&FormDef::contact(), &mut fields, &mut primary, &mut fallback).unwrap();
        assert_eq!(notice, Notice::Sent);
        assert!(fields.is_empty());
        assert_eq!(primary.delivered.len(), 1);
        assert!(fallback.delivered.is_empty());
    }

    #[test]
    fn submit_falls_back_when_primary_fails() {
        let mut fields = contact_fields();
        let mut primary = RecordingDelivery {
            fail: true,
            ..Default::default()
        };
        let mut fallback = RecordingDelivery::default();
        let notice =
            submit(&FormDef::contact(), &mut fields, &mut primary, &mut fallback).unwrap();
        assert_eq!(notice, Notice::SentViaFallback);
        assert!(fields.is_empty());
        assert_eq!(fallback.delivered.len(), 1);
    }

    #[test]
    fn submit_keeps_fields_when_everything_fails() {
        let mut fields = contact_fields();
        let mut primary = RecordingDelivery {
            fail: true,
            ..Default::default()
        };
        let mut fallback = RecordingDelivery {
            fail: true,
            ..Default::default()
        };
        let notice =
            submit(&FormDef::contact(), &mut fields, &mut primary, &mut fallback).unwrap();
        assert_eq!(notice, Notice::Failed);
        assert_eq!(fields, contact_fields());
    }

    #[test]
    fn invalid_submission_never_reaches_delivery() {
        let mut fields = Fields::new();
        let mut primary = RecordingDelivery::default();
        let mut fallback = RecordingDelivery::default();
        let result = submit(&FormDef::contact(), &mut fields, &mut primary, &mut fallback);
        assert!(result.is_err());
        assert!(primary.delivered.is_empty());
        assert!(fallback.delivered.is_empty());
    }

    #[test]
    fn no_endpoint_is_always_unavailable() {
        let mut delivery = NoEndpoint;
        let result = delivery.deliver(&FormDef::contact(), &contact_fields());
        assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    }

    #[test]
    fn mailto_url_encodes_subject_and_body() {
        let url = compose_mailto("info@junubmart.example", &FormDef::contact(), &contact_fields());
        assert!(url.starts_with("mailto:info@junubmart.example?subject="));
        assert!(url.contains("New%20contact%20submission"));
        // Body lines follow definition order: name, email, message.
        let body = url.split("&body=").nth(1).unwrap();
        assert!(body.starts_with("name%3A%20Achol%20Deng%0A"));
        assert!(body.contains("Munuki%3F"));
    }

    #[test]
    fn mailto_delivery_reports_opener_outcome() {
        let mut opened = Vec::new();
        let mut delivery = MailtoDelivery::new("info@junubmart.example", |url: &str| {
            opened.push(url.to_string());
            true
        });
        assert!(delivery
            .deliver(&FormDef::newsletter(), &Fields::from([("email".into(), "a@b.co".into())]))
            .is_ok());
        drop(delivery);
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("mailto:"));

        let mut failing = MailtoDelivery::new("info@junubmart.example", |_: &str| false);
        let result = failing.deliver(&FormDef::newsletter(), &Fields::new());
        assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    }
}
