use std::cmp::Reverse;

use chrono::Utc;

use crate::{
    api::{Comment, Error, Event, EventId, FieldError, NewComment, NewEvent, Uuid, PLACEHOLDER_IMAGE},
    seed, Storage,
};

/// Storage key under which the whole collection is mirrored, as one JSON
/// array of events.
pub const STORAGE_KEY: &str = "agora.events";

/// Sole owner of the event collection.
///
/// Every read and write goes through here. Mutations apply in memory first
/// and the mirror is rewritten wholesale before the operation completes; if
/// the write fails, the in-memory change is rolled back so memory and mirror
/// never diverge.
pub struct EventStore<S> {
    events: Vec<Event>,
    storage: S,
}

impl<S: Storage> EventStore<S> {
    /// Hydrates from the persisted mirror if present, otherwise seeds the
    /// demo set and writes it through. A mirror that no longer parses is
    /// treated like an absent one, except it gets logged.
    pub fn open(storage: S) -> Result<EventStore<S>, Error> {
        let mut store = EventStore {
            events: Vec::new(),
            storage,
        };
        match store.storage.read(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(events) => {
                    store.events = events;
                    tracing::debug!(events = store.events.len(), "hydrated persisted mirror");
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "persisted mirror is corrupt, falling back to seed data"
                    );
                    store.events = seed::events();
                    store.persist()?;
                }
            },
            None => {
                tracing::debug!("no persisted mirror, seeding demo events");
                store.events = seed::events();
                store.persist()?;
            }
        }
        Ok(store)
    }

    fn persist(&self) -> Result<(), Error> {
        let raw = serde_json::to_string(&self.events)
            .map_err(|e| Error::Storage(format!("serializing event collection: {e}")))?;
        self.storage.write(STORAGE_KEY, &raw)?;
        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Linear scan; collections stay demo-sized so no index is kept.
    pub fn find(&self, id: EventId) -> Result<&Event, Error> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(Error::NotFound(id))
    }

    fn position(&self, id: EventId) -> Result<usize, Error> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Adds exactly one vote and persists. Returns the new count.
    pub fn vote(&mut self, id: EventId) -> Result<u32, Error> {
        let idx = self.position(id)?;
        self.events[idx].votes += 1;
        if let Err(e) = self.persist() {
            self.events[idx].votes -= 1;
            return Err(e);
        }
        Ok(self.events[idx].votes)
    }

    /// Appends a comment stamped with the current instant and persists.
    /// Returns the event's full comment sequence, in arrival order.
    pub fn add_comment(&mut self, id: EventId, comment: NewComment) -> Result<&[Comment], Error> {
        comment.validate()?;
        let idx = self.position(id)?;
        self.events[idx].comments.push(Comment {
            author: comment.author.trim().to_string(),
            text: comment.text.trim().to_string(),
            date: Utc::now(),
        });
        if let Err(e) = self.persist() {
            self.events[idx].comments.pop();
            return Err(e);
        }
        Ok(&self.events[idx].comments)
    }

    /// Validates the submission, mints a fresh id, appends and persists.
    /// Returns the stored event.
    pub fn create_event(&mut self, event: NewEvent) -> Result<&Event, Error> {
        event.validate()?;
        let date = match event.parsed_date() {
            Some(date) => date,
            // validate() already rejected unparseable dates
            None => return Err(Error::Invalid(vec![FieldError::Date])),
        };
        let image_url = match event.image_url.trim() {
            "" => PLACEHOLDER_IMAGE.to_string(),
            url => url.to_string(),
        };
        let idx = self.events.len();
        self.events.push(Event {
            id: EventId(Uuid::new_v4()),
            title: event.title.trim().to_string(),
            description: event.description.trim().to_string(),
            category: event.category.trim().to_string(),
            date,
            image_url,
            votes: 0,
            comments: Vec::new(),
        });
        if let Err(e) = self.persist() {
            self.events.truncate(idx);
            return Err(e);
        }
        Ok(&self.events[idx])
    }

    /// Events by vote count, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> impl Iterator<Item = &Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| Reverse(e.votes));
        events.into_iter()
    }

    /// Events by calendar date, soonest first. Ties keep insertion order.
    pub fn upcoming(&self) -> impl Iterator<Item = &Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| e.date);
        events.into_iter()
    }

    /// The event's comments, most recent first; among comments sharing a
    /// timestamp the later-appended one comes first.
    pub fn comments_of(&self, id: EventId) -> Result<impl Iterator<Item = &Comment>, Error> {
        let event = self.find(id)?;
        let mut comments: Vec<(usize, &Comment)> = event.comments.iter().enumerate().collect();
        comments.sort_by_key(|(idx, c)| (Reverse(c.date), Reverse(*idx)));
        Ok(comments.into_iter().map(|(_, c)| c))
    }
}
