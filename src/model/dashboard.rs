use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary cards of the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub pending_offers: u64,
    pub active_internships: u64,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}
