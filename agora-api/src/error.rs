use crate::{EventId, DESCRIPTION_MIN_LEN, TITLE_MAX_LEN, TITLE_MIN_LEN};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no event with id {0:?}")]
    NotFound(EventId),

    #[error("invalid fields: {}", field_list(.0))]
    Invalid(Vec<FieldError>),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// One validation failure. `NewEvent::validate` and `NewComment::validate`
/// check every field before reporting, so an `Error::Invalid` carries one of
/// these per problem and a caller can surface all of them at once.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("title must be {} to {} characters", TITLE_MIN_LEN, TITLE_MAX_LEN)]
    Title,

    #[error("description must be at least {} characters", DESCRIPTION_MIN_LEN)]
    Description,

    #[error("date must be a valid calendar date")]
    Date,

    #[error("category must not be empty")]
    Category,

    #[error("author must not be empty")]
    Author,

    #[error("comment text must not be empty")]
    Text,
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Title => "title",
            FieldError::Description => "description",
            FieldError::Date => "date",
            FieldError::Category => "category",
            FieldError::Author => "author",
            FieldError::Text => "text",
        }
    }
}

fn field_list(errs: &[FieldError]) -> String {
    errs.iter()
        .map(FieldError::field)
        .collect::<Vec<_>>()
        .join(", ")
}
