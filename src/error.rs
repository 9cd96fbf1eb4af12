use std::fmt::Display;

use crate::models::ParsePriceError;

/// A problem worth showing to the user, rendered in the footer
#[derive(Debug, Clone, PartialEq)]
pub struct UserError {
    pub title: &'static str,
    pub message: Box<str>,
}

impl Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl From<(&'static str, String)> for UserError {
    fn from(value: (&'static str, String)) -> Self {
        Self { title: value.0, message: value.1.into_boxed_str() }
    }
}

impl From<(&'static str, anyhow::Error)> for UserError {
    fn from(value: (&'static str, anyhow::Error)) -> Self {
        Self { title: value.0, message: format!("{:?}", value.1).into_boxed_str() }
    }
}

impl From<(&'static str, ParsePriceError)> for UserError {
    fn from(value: (&'static str, ParsePriceError)) -> Self {
        Self { title: value.0, message: value.1.to_string().into_boxed_str() }
    }
}
