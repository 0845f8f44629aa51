//! Repositories behind the dashboards.
//!
//! Each entity has a repository trait. [`MemoryBackend`] answers from generated data held in
//! memory, and [`HttpBackend`] forwards every call to the REST backend through the API
//! gateway. Views only see the traits.

pub mod http;
pub mod memory;
pub mod mock;

#[cfg(test)]
mod tests;

use crate::{
    error::Error,
    export::Download,
    listing::Filters,
    model::{
        applicant::{Applicant, ApplicantUpdate},
        company_offer::{CompanyOffer, CompanyOfferDraft, CompanyOfferStatus},
        dashboard::{Activity, DashboardStats},
        document::{DocumentPreview, UserDocument},
        offer::{Offer, RejectOffer},
        report::{Report, ReportPreview, ReportRequest},
        user::{NewUser, User, UserStats, UserUpdate},
    },
};

pub use self::{http::HttpBackend, memory::MemoryBackend};

#[allow(async_fn_in_trait)]
pub trait UserRepository {
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    async fn user_stats(&self) -> Result<UserStats, Error>;

    async fn create_user(&self, user: &NewUser) -> Result<User, Error>;

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, Error>;

    async fn delete_user(&self, id: u64) -> Result<(), Error>;

    /// CSV of the users matching `filters`.
    async fn export_users(&self, filters: &Filters) -> Result<Download, Error>;

    async fn user_documents(&self, user_id: u64) -> Result<Vec<UserDocument>, Error>;

    async fn preview_document(
        &self,
        user_id: u64,
        document_id: u64,
    ) -> Result<DocumentPreview, Error>;

    async fn download_document(&self, user_id: u64, document_id: u64) -> Result<Download, Error>;
}

/// Offers as moderated by the administrator. Every transition returns the updated offer.
#[allow(async_fn_in_trait)]
pub trait OfferRepository {
    async fn list_offers(&self) -> Result<Vec<Offer>, Error>;

    async fn approve_offer(&self, id: u64) -> Result<Offer, Error>;

    async fn reject_offer(&self, id: u64, rejection: &RejectOffer) -> Result<Offer, Error>;

    async fn close_offer(&self, id: u64) -> Result<Offer, Error>;
}

#[allow(async_fn_in_trait)]
pub trait ReportRepository {
    async fn list_reports(&self) -> Result<Vec<Report>, Error>;

    async fn generate_report(&self, request: &ReportRequest) -> Result<Report, Error>;

    async fn preview_report(&self, id: u64) -> Result<ReportPreview, Error>;

    async fn download_report(&self, id: u64) -> Result<Download, Error>;

    async fn delete_report(&self, id: u64) -> Result<(), Error>;
}

#[allow(async_fn_in_trait)]
pub trait DashboardRepository {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error>;

    /// Most recent first.
    async fn recent_activity(&self) -> Result<Vec<Activity>, Error>;
}

/// Offers published by the signed-in company.
#[allow(async_fn_in_trait)]
pub trait CompanyOfferRepository {
    async fn list_company_offers(&self) -> Result<Vec<CompanyOffer>, Error>;

    async fn get_company_offer(&self, id: u64) -> Result<CompanyOffer, Error>;

    async fn create_company_offer(&self, draft: &CompanyOfferDraft) -> Result<CompanyOffer, Error>;

    async fn update_company_offer(
        &self,
        id: u64,
        draft: &CompanyOfferDraft,
    ) -> Result<CompanyOffer, Error>;

    /// Publishing sets the published date when the offer has none.
    async fn set_company_offer_status(
        &self,
        id: u64,
        status: CompanyOfferStatus,
    ) -> Result<CompanyOffer, Error>;

    async fn delete_company_offer(&self, id: u64) -> Result<(), Error>;

    async fn company_activity(&self) -> Result<Vec<Activity>, Error>;
}

#[allow(async_fn_in_trait)]
pub trait ApplicantRepository {
    async fn list_applicants(&self) -> Result<Vec<Applicant>, Error>;

    async fn update_applicant(
        &self,
        offer_id: u64,
        applicant_id: u64,
        update: &ApplicantUpdate,
    ) -> Result<Applicant, Error>;
}
