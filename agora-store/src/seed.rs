use chrono::{NaiveDate, TimeZone, Utc};

use crate::api::{uuid, Comment, Event, EventId, Time};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is a valid calendar date")
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Time {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("seed timestamp is a valid instant")
}

/// Fixed demo set, used only when no persisted mirror exists or the mirror
/// is unreadable.
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: EventId(uuid!("be9177a2-0fc5-4f1f-8729-3c7e5066bdb1")),
            title: String::from("Riverside Jazz Festival"),
            description: String::from(
                "Three stages of live jazz along the river promenade, with \
                 local food stalls and a late-night jam session.",
            ),
            category: String::from("Music"),
            date: date(2026, 9, 12),
            image_url: String::from("assets/img/jazz-festival.jpg"),
            votes: 120,
            comments: vec![
                Comment {
                    author: String::from("Marta"),
                    text: String::from("Went last year, the late session is the best part."),
                    date: at(2026, 8, 2, 18, 40),
                },
                Comment {
                    author: String::from("Jon"),
                    text: String::from("Is the promenade stage covered if it rains?"),
                    date: at(2026, 8, 5, 9, 15),
                },
            ],
        },
        Event {
            id: EventId(uuid!("0ce39b5b-0765-4f2c-9131-addcf35d3f94")),
            title: String::from("Open Source Saturday"),
            description: String::from(
                "A full day of hands-on workshops for first-time contributors, \
                 from picking an issue to landing the pull request.",
            ),
            category: String::from("Technology"),
            date: date(2026, 9, 26),
            image_url: String::from("assets/img/oss-saturday.jpg"),
            votes: 85,
            comments: Vec::new(),
        },
        Event {
            id: EventId(uuid!("5e11c548-29cf-4c05-b964-13e460cb360b")),
            title: String::from("Street Food Fair"),
            description: String::from(
                "Forty food trucks from across the region take over the old \
                 market square for one weekend.",
            ),
            category: String::from("Food"),
            date: date(2026, 8, 30),
            image_url: String::from("assets/img/street-food.jpg"),
            votes: 95,
            comments: vec![Comment {
                author: String::from("Priya"),
                text: String::from("The dumpling truck alone is worth the trip."),
                date: at(2026, 8, 10, 12, 5),
            }],
        },
        Event {
            id: EventId(uuid!("0177b3e5-7a98-46e6-aa05-0cfde1e11ea4")),
            title: String::from("Night Sky Watch"),
            description: String::from(
                "Guided telescope session on the observatory hill, weather \
                 permitting; bring warm clothes.",
            ),
            category: String::from("Outdoors"),
            date: date(2026, 10, 17),
            image_url: String::from("assets/img/night-sky.jpg"),
            votes: 60,
            comments: Vec::new(),
        },
        Event {
            id: EventId(uuid!("c41b4a51-3b25-4b36-bf0f-6b926ecf0d51")),
            title: String::from("City Marathon Expo"),
            description: String::from(
                "Bib pickup, gear stands and pacing talks in the convention \
                 hall on the two days before the race.",
            ),
            category: String::from("Sports"),
            date: date(2026, 10, 2),
            image_url: String::from("assets/img/marathon-expo.jpg"),
            votes: 75,
            comments: Vec::new(),
        },
    ]
}
