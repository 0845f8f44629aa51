//! Backend paths, relative to the configured API base URL. Trailing slashes are kept.

pub const USERS: &str = "/users/";
pub const USERS_EXPORT: &str = "/users/export/";
pub const USERS_STATS: &str = "/users/stats/";

pub fn user(id: u64) -> String {
    format!("/users/{}/", id)
}

pub fn user_documents(user_id: u64) -> String {
    format!("/users/{}/documents/", user_id)
}

pub fn user_document(user_id: u64, document_id: u64) -> String {
    format!("/users/{}/documents/{}/", user_id, document_id)
}

pub fn user_document_download(user_id: u64, document_id: u64) -> String {
    format!("/users/{}/documents/{}/download/", user_id, document_id)
}

pub const OFFERS: &str = "/offers/";

pub fn offer(id: u64) -> String {
    format!("/offers/{}/", id)
}

pub fn offer_approve(id: u64) -> String {
    format!("/offers/{}/approve/", id)
}

pub fn offer_reject(id: u64) -> String {
    format!("/offers/{}/reject/", id)
}

pub fn offer_close(id: u64) -> String {
    format!("/offers/{}/close/", id)
}

pub const REPORTS: &str = "/reports/";
pub const REPORTS_GENERATE: &str = "/reports/generate/";

pub fn report(id: u64) -> String {
    format!("/reports/{}/", id)
}

pub fn report_download(id: u64) -> String {
    format!("/reports/{}/download/", id)
}

pub const DASHBOARD_STATS: &str = "/dashboard/stats/";
pub const DASHBOARD_ACTIVITY: &str = "/dashboard/activity/";

pub const COMPANY_OFFERS: &str = "/company/offers/";
pub const COMPANY_APPLICANTS: &str = "/company/applicants/";
pub const COMPANY_ACTIVITY: &str = "/company/dashboard/activity/";

pub fn company_offer(id: u64) -> String {
    format!("/company/offers/{}/", id)
}

pub fn company_offer_applicants(offer_id: u64) -> String {
    format!("/company/offers/{}/applicants/", offer_id)
}

pub fn company_applicant(offer_id: u64, applicant_id: u64) -> String {
    format!("/company/offers/{}/applicants/{}/", offer_id, applicant_id)
}
