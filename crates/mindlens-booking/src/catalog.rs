//! What can be booked: the three clinical services and the daily slot
//! grid. Fixed data, defined at process start.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A bookable clinical service.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub duration_minutes: u16,
    pub fee_usd: u32,
    pub description: String,
}

static SERVICES: LazyLock<Vec<Service>> = LazyLock::new(|| {
    vec![
        Service {
            id: "individual".to_string(),
            title: "Individual Therapy".to_string(),
            duration_minutes: 50,
            fee_usd: 80,
            description: "One-on-one session using CBT/ACT techniques.".to_string(),
        },
        Service {
            id: "couple".to_string(),
            title: "Couple Counseling".to_string(),
            duration_minutes: 75,
            fee_usd: 120,
            description: "Improving communication and relationship dynamics.".to_string(),
        },
        Service {
            id: "diagnostic".to_string(),
            title: "Clinical Review".to_string(),
            duration_minutes: 30,
            fee_usd: 50,
            description: "Expert analysis of your MindLens assessments.".to_string(),
        },
    ]
});

/// Every service the practice offers.
pub fn services() -> &'static [Service] {
    &SERVICES
}

/// Look up a service by ID.
pub fn get_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// The six bookable start times, the same every day.
pub fn time_slots() -> &'static [jiff::civil::Time] {
    static SLOTS: LazyLock<Vec<jiff::civil::Time>> = LazyLock::new(|| {
        vec![
            jiff::civil::time(9, 0, 0, 0),
            jiff::civil::time(10, 30, 0, 0),
            jiff::civil::time(13, 0, 0, 0),
            jiff::civil::time(14, 30, 0, 0),
            jiff::civil::time(16, 0, 0, 0),
            jiff::civil::time(17, 30, 0, 0),
        ]
    });
    &SLOTS
}

/// Twelve-hour display label for a slot, e.g. `09:00 AM`.
pub fn slot_label(slot: jiff::civil::Time) -> String {
    slot.strftime("%I:%M %p").to_string()
}
