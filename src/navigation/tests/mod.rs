
use crate::navigation::{MemoryHistory, RouteTable, Router, ViewHost};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Users,
    Offers,
    EditOffer(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Unmount,
    Mount(View),
    Scroll,
}

/// Records every call the router makes.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn mounted(&self) -> Vec<View> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Mount(view) => Some(view.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ViewHost<View> for RecordingHost {
    fn unmount(&mut self) {
        self.events.push(HostEvent::Unmount);
    }

    fn mount(&mut self, view: &View) {
        self.events.push(HostEvent::Mount(view.clone()));
    }

    fn scroll_to_top(&mut self) {
        self.events.push(HostEvent::Scroll);
    }
}

pub fn router(start: &str) -> Router<View, MemoryHistory> {
    let table = RouteTable::new(View::Dashboard)
        .route("/", |_| Some(View::Dashboard))
        .route("/users", |_| Some(View::Users))
        .route("/offers", |_| Some(View::Offers))
        .route("/offers/{id}/edit", |p| p.id("id").map(View::EditOffer));

    Router::new(table, MemoryHistory::starting_at(start))
}

pub const NAV: [&str; 3] = ["/", "/users", "/offers"];
