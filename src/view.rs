//! Declarative view of the activity list.
//!
//! The view is rebuilt from scratch from every fetched [`ActivityMap`]; the
//! surfaces throw the previous one away and draw this one. Nothing here is
//! diffed against what was shown before.

use crate::model::structs::{Activity, ActivityMap};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const PARTICIPANTS_TITLE: &str = "Current Participants:";
pub const SCHEDULE_LABEL: &str = "Schedule:";
pub const SPOTS_LABEL: &str = "Available Spots:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantList {
    Enrolled(Vec<String>),
    Empty,
}

impl ParticipantList {
    /// List items as drawn: one per email, or the single placeholder.
    pub fn items(&self) -> Vec<&str> {
        match self {
            ParticipantList::Enrolled(emails) => emails.iter().map(String::as_str).collect(),
            ParticipantList::Empty => vec![NO_PARTICIPANTS],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub available: i64,
    pub capacity: u32,
    pub participants: ParticipantList,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantList::Empty
        } else {
            ParticipantList::Enrolled(activity.participants.clone())
        };

        Self {
            title: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            available: activity.available_spots(),
            capacity: activity.max_participants,
            participants,
        }
    }

    /// `X of Y`, without the label.
    pub fn spots_text(&self) -> String {
        format!("{} of {}", self.available, self.capacity)
    }

    pub fn spots_line(&self) -> String {
        format!("{} {}", SPOTS_LABEL, self.spots_text())
    }

    pub fn schedule_line(&self) -> String {
        format!("{} {}", SCHEDULE_LABEL, self.schedule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesView {
    pub cards: Vec<ActivityCard>,
    /// Selection entries, placeholder first.
    pub options: Vec<SelectOption>,
}

impl ActivitiesView {
    pub fn build(activities: &ActivityMap) -> Self {
        let mut options = Vec::with_capacity(activities.len() + 1);
        options.push(SelectOption::placeholder());

        let mut cards = Vec::with_capacity(activities.len());
        for (name, activity) in activities {
            cards.push(ActivityCard::new(name, activity));
            options.push(SelectOption {
                value: name.clone(),
                label: name.clone(),
            });
        }

        Self { cards, options }
    }

    /// What the selection control holds after a failed load.
    pub fn placeholder_options() -> Vec<SelectOption> {
        vec![SelectOption::placeholder()]
    }
}
