use crate::{Error, FieldError, Time};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub author: String,
    pub text: String,

    /// Assigned by the store at insertion, never caller-supplied.
    pub date: Time,
}

/// Form input for a comment; the store stamps the date on acceptance.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub author: String,
    pub text: String,
}

impl NewComment {
    /// Checks both fields before reporting, like `NewEvent::validate`.
    pub fn validate(&self) -> Result<(), Error> {
        let mut errs = Vec::new();
        if self.author.trim().is_empty() {
            errs.push(FieldError::Author);
        }
        if self.text.trim().is_empty() {
            errs.push(FieldError::Text);
        }
        if errs.is_empty() {
            Ok(())
        } else {
            Err(Error::Invalid(errs))
        }
    }
}
