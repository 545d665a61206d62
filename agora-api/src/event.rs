use chrono::NaiveDate;
use uuid::Uuid;

use crate::{Comment, Error, FieldError, STUB_UUID};

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 20;

/// Substituted for `image_url` when the submitted value is empty.
pub const PLACEHOLDER_IMAGE: &str = "assets/img/event-placeholder.jpg";

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn stub() -> EventId {
        EventId(STUB_UUID)
    }
}

/// One user-visible event: browsable, votable, commentable.
///
/// Serializes with camelCase keys (`imageUrl`) so the persisted mirror stays
/// readable by the web front-end that shares it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub image_url: String,

    /// Never decremented; there is no unvote.
    pub votes: u32,

    /// Append-only, in arrival order. Display orderings are read-time
    /// projections over this.
    pub comments: Vec<Comment>,
}

/// Form input for creating an event. Everything arrives as raw strings; the
/// store parses and trims on acceptance.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub image_url: String,
}

impl NewEvent {
    /// Checks every field before reporting, so the caller gets all problems
    /// in one `Error::Invalid` rather than fixing them one at a time.
    pub fn validate(&self) -> Result<(), Error> {
        let mut errs = Vec::new();
        let title_len = self.title.trim().chars().count();
        if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&title_len) {
            errs.push(FieldError::Title);
        }
        if self.description.trim().chars().count() < DESCRIPTION_MIN_LEN {
            errs.push(FieldError::Description);
        }
        if self.parsed_date().is_none() {
            errs.push(FieldError::Date);
        }
        if self.category.trim().is_empty() {
            errs.push(FieldError::Category);
        }
        if errs.is_empty() {
            Ok(())
        } else {
            Err(Error::Invalid(errs))
        }
    }

    /// The submitted calendar date, if it parses as ISO `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}
