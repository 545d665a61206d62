mod comment;
pub use comment::{Comment, NewComment};

mod error;
pub use error::{Error, FieldError};

mod event;
pub use event::{
    Event, EventId, NewEvent, DESCRIPTION_MIN_LEN, PLACEHOLDER_IMAGE, TITLE_MAX_LEN, TITLE_MIN_LEN,
};

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");
