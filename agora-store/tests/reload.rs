//! Persist→reload round trips through the file backend.

use agora_store::{
    api::{EventId, NewComment, NewEvent, Uuid},
    EventStore, FileStorage,
};

fn submission() -> NewEvent {
    NewEvent {
        title: String::from("Harbor lights parade"),
        description: String::from("Decorated boats loop the harbor after sunset."),
        category: String::from("Outdoors"),
        date: String::from("2026-12-05"),
        image_url: String::new(),
    }
}

#[test]
fn fresh_directory_seeds_and_persists() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = EventStore::open(FileStorage::new(dir.path()))?;
    assert_eq!(store.len(), 5);

    // the seed was written through, so a second open sees the same data
    let again = EventStore::open(FileStorage::new(dir.path()))?;
    assert_eq!(again.events(), store.events());
    Ok(())
}

#[test]
fn mutations_survive_reopening_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let expected = {
        let mut store = EventStore::open(FileStorage::new(dir.path()))?;
        let id = store.events()[0].id;
        store.vote(id)?;
        store.vote(id)?;
        store.add_comment(
            id,
            NewComment {
                author: String::from("Ann"),
                text: String::from("Bringing the whole family."),
            },
        )?;
        store.create_event(submission())?;
        store.events().to_vec()
    };

    let reloaded = EventStore::open(FileStorage::new(dir.path()))?;
    assert_eq!(reloaded.events(), &expected[..]);

    // unknown ids still miss after a reload
    let id = EventId(Uuid::new_v4());
    assert!(reloaded.find(id).is_err());
    Ok(())
}

#[test]
fn unreadable_mirror_is_replaced_by_the_seed_set() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join(format!("{}.json", agora_store::STORAGE_KEY)),
        "{ this is not a collection",
    )?;
    let store = EventStore::open(FileStorage::new(dir.path()))?;
    assert_eq!(store.len(), 5);

    let reloaded = EventStore::open(FileStorage::new(dir.path()))?;
    assert_eq!(reloaded.events(), store.events());
    Ok(())
}
