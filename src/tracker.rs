//! Job-application tracker: a flat list of applications, each carrying an
//! append-only event log driven by status transitions.
//!
//! Deliberately permissive: any status may follow any other, so
//! [`JobApplication::update_status`] is infallible and always appends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub job_url: Option<String>,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub notes: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub is_remote: bool,
    pub events: Vec<ApplicationEvent>,
}

impl Default for JobApplication {
    fn default() -> Self {
        JobApplication::new("", "")
    }
}

impl JobApplication {
    pub fn new(company: &str, position: &str) -> Self {
        let now = Utc::now();
        JobApplication {
            id: Uuid::new_v4(),
            company: company.to_string(),
            position: position.to_string(),
            job_url: None,
            status: ApplicationStatus::Applied,
            applied_date: now,
            last_updated: now,
            notes: String::new(),
            contact_name: None,
            contact_email: None,
            salary: None,
            location: None,
            is_remote: false,
            events: vec![ApplicationEvent::now(EventKind::Applied)],
        }
    }

    /// Moves the application to `new_status`, appending the derived event and
    /// refreshing `last_updated`. Never rejects a transition.
    pub fn update_status(&mut self, new_status: ApplicationStatus) {
        self.status = new_status;
        self.last_updated = Utc::now();
        self.events.push(ApplicationEvent::now(new_status.event_kind()));
    }

    /// Appends a free-form note event without changing the status.
    pub fn add_note(&mut self, note: &str) {
        self.last_updated = Utc::now();
        let mut event = ApplicationEvent::now(EventKind::Note);
        event.notes = Some(note.to_string());
        self.events.push(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Reviewing,
    PhoneScreen,
    Interview,
    TechnicalInterview,
    FinalInterview,
    Offer,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Reviewing => "Under Review",
            ApplicationStatus::PhoneScreen => "Phone Screen",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::TechnicalInterview => "Technical Interview",
            ApplicationStatus::FinalInterview => "Final Interview",
            ApplicationStatus::Offer => "Offer Received",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }

    /// Event kind recorded when transitioning into this status.
    fn event_kind(&self) -> EventKind {
        match self {
            ApplicationStatus::Applied => EventKind::Applied,
            ApplicationStatus::Reviewing => EventKind::StatusChange,
            ApplicationStatus::PhoneScreen => EventKind::PhoneScreen,
            ApplicationStatus::Interview => EventKind::Interview,
            ApplicationStatus::TechnicalInterview => EventKind::TechnicalInterview,
            ApplicationStatus::FinalInterview => EventKind::FinalInterview,
            ApplicationStatus::Offer => EventKind::Offer,
            ApplicationStatus::Accepted => EventKind::Accepted,
            ApplicationStatus::Rejected => EventKind::Rejected,
            ApplicationStatus::Withdrawn => EventKind::Withdrawn,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationEvent {
    pub id: Uuid,
    pub kind: EventKind,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl ApplicationEvent {
    fn now(kind: EventKind) -> Self {
        ApplicationEvent {
            id: Uuid::new_v4(),
            kind,
            date: Utc::now(),
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Applied,
    StatusChange,
    PhoneScreen,
    Interview,
    TechnicalInterview,
    FinalInterview,
    Offer,
    Accepted,
    Rejected,
    Withdrawn,
    Note,
    FollowUp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_application_starts_with_applied_event() {
        let app = JobApplication::new("Acme", "Engineer");
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert_eq!(app.events.len(), 1);
        assert_eq!(app.events[0].kind, EventKind::Applied);
    }

    #[test]
    fn update_status_appends_and_refreshes() {
        let mut app = JobApplication::new("Acme", "Engineer");
        let before = app.last_updated;
        app.update_status(ApplicationStatus::Interview);
        assert_eq!(app.status, ApplicationStatus::Interview);
        assert_eq!(app.events.len(), 2);
        assert_eq!(app.events[1].kind, EventKind::Interview);
        assert!(app.last_updated >= before);
    }

    #[test]
    fn any_transition_is_allowed() {
        let mut app = JobApplication::new("Acme", "Engineer");
        app.update_status(ApplicationStatus::Accepted);
        // Backwards transition is permitted and still logged.
        app.update_status(ApplicationStatus::Applied);
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert_eq!(app.events.len(), 3);
    }

    #[test]
    fn reviewing_maps_to_generic_status_change_event() {
        let mut app = JobApplication::new("Acme", "Engineer");
        app.update_status(ApplicationStatus::Reviewing);
        assert_eq!(app.events[1].kind, EventKind::StatusChange);
    }

    #[test]
    fn add_note_keeps_status() {
        let mut app = JobApplication::new("Acme", "Engineer");
        app.add_note("spoke to recruiter");
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert_eq!(app.events[1].kind, EventKind::Note);
        assert_eq!(app.events[1].notes.as_deref(), Some("spoke to recruiter"));
    }
}
