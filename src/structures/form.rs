use std::fmt::{Display, Formatter};

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::RequestBuilder;

/// Body of a creation request. Built by the caller and sent untouched.
#[derive(Debug)]
pub enum PropertyForm {
    Multipart(Form),
    Raw {
        content_type: String,
        body: Vec<u8>,
    },
}

impl PropertyForm {
    pub fn raw(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        PropertyForm::Raw { content_type: content_type.into(), body: body.into() }
    }

    pub(crate) fn attach(self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            PropertyForm::Multipart(form) => builder.multipart(form),
            PropertyForm::Raw { content_type, body } => builder.header(CONTENT_TYPE, content_type).body(body),
        }
    }
}

impl From<Form> for PropertyForm {
    fn from(form: Form) -> Self {
        PropertyForm::Multipart(form)
    }
}

impl Display for PropertyForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyForm::Multipart(form) => write!(f, "multipart form (boundary {})", form.boundary()),
            PropertyForm::Raw { content_type, body } => write!(f, "{} body of {} bytes", content_type, body.len()),
        }
    }
}
