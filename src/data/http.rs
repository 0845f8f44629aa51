use std::rc::Rc;

use chrono::Utc;

use crate::{
    api::{endpoints, ApiClient, Session, Transport},
    data::{
        ApplicantRepository, CompanyOfferRepository, DashboardRepository, OfferRepository,
        ReportRepository, UserRepository,
    },
    error::Error,
    export::{export_filename, Download},
    listing::Filters,
    model::{
        api::ListResponse,
        applicant::{Applicant, ApplicantUpdate},
        company_offer::{
            CompanyOffer, CompanyOfferDraft, CompanyOfferStatus, CompanyOfferStatusUpdate,
        },
        dashboard::{Activity, DashboardStats},
        document::{DocumentPreview, UserDocument},
        offer::{Offer, RejectOffer},
        report::{Report, ReportPreview, ReportRequest},
        user::{NewUser, User, UserStats, UserUpdate},
    },
};

/// Backend forwarding every call to the REST API.
pub struct HttpBackend<T, S> {
    api: Rc<ApiClient<T, S>>,
}

impl<T, S> Clone for HttpBackend<T, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
        }
    }
}

impl<T: Transport, S: Session> HttpBackend<T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { api: Rc::new(api) }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    async fn list<R: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<R>, Error> {
        let response: ListResponse<R> = self.api.get(endpoint, &[]).await?;

        Ok(response.into_items())
    }
}

/// Query parameter for a filter, left out when the filter is inactive.
fn filter_param(filters: &Filters, key: &str) -> Option<String> {
    filters
        .get(key)
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != Filters::ALL)
        .map(str::to_string)
}

impl<T: Transport, S: Session> UserRepository for HttpBackend<T, S> {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.list(endpoints::USERS).await
    }

    async fn user_stats(&self) -> Result<UserStats, Error> {
        Ok(self.api.get(endpoints::USERS_STATS, &[]).await?)
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        Ok(self.api.post(endpoints::USERS, user).await?)
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, Error> {
        Ok(self.api.put(&endpoints::user(id), update).await?)
    }

    async fn delete_user(&self, id: u64) -> Result<(), Error> {
        Ok(self.api.delete(&endpoints::user(id)).await?)
    }

    async fn export_users(&self, filters: &Filters) -> Result<Download, Error> {
        let query = [
            (Filters::SEARCH, filter_param(filters, Filters::SEARCH)),
            ("type", filter_param(filters, "type")),
            ("status", filter_param(filters, "status")),
        ];
        let fallback = export_filename("users", Utc::now().date_naive());

        Ok(self
            .api
            .download(endpoints::USERS_EXPORT, &query, &fallback)
            .await?)
    }

    async fn user_documents(&self, user_id: u64) -> Result<Vec<UserDocument>, Error> {
        self.list(&endpoints::user_documents(user_id)).await
    }

    async fn preview_document(
        &self,
        user_id: u64,
        document_id: u64,
    ) -> Result<DocumentPreview, Error> {
        Ok(self
            .api
            .get(&endpoints::user_document(user_id, document_id), &[])
            .await?)
    }

    async fn download_document(&self, user_id: u64, document_id: u64) -> Result<Download, Error> {
        let fallback = format!("document_{}.pdf", document_id);

        Ok(self
            .api
            .download(
                &endpoints::user_document_download(user_id, document_id),
                &[],
                &fallback,
            )
            .await?)
    }
}

impl<T: Transport, S: Session> OfferRepository for HttpBackend<T, S> {
    async fn list_offers(&self) -> Result<Vec<Offer>, Error> {
        self.list(endpoints::OFFERS).await
    }

    async fn approve_offer(&self, id: u64) -> Result<Offer, Error> {
        Ok(self.api.post_empty(&endpoints::offer_approve(id)).await?)
    }

    async fn reject_offer(&self, id: u64, rejection: &RejectOffer) -> Result<Offer, Error> {
        Ok(self.api.post(&endpoints::offer_reject(id), rejection).await?)
    }

    async fn close_offer(&self, id: u64) -> Result<Offer, Error> {
        Ok(self.api.post_empty(&endpoints::offer_close(id)).await?)
    }
}

impl<T: Transport, S: Session> ReportRepository for HttpBackend<T, S> {
    async fn list_reports(&self) -> Result<Vec<Report>, Error> {
        self.list(endpoints::REPORTS).await
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Report, Error> {
        Ok(self.api.post(endpoints::REPORTS_GENERATE, request).await?)
    }

    async fn preview_report(&self, id: u64) -> Result<ReportPreview, Error> {
        Ok(self.api.get(&endpoints::report(id), &[]).await?)
    }

    async fn download_report(&self, id: u64) -> Result<Download, Error> {
        let fallback = format!("report_{}.pdf", id);

        Ok(self
            .api
            .download(&endpoints::report_download(id), &[], &fallback)
            .await?)
    }

    async fn delete_report(&self, id: u64) -> Result<(), Error> {
        Ok(self.api.delete(&endpoints::report(id)).await?)
    }
}

impl<T: Transport, S: Session> DashboardRepository for HttpBackend<T, S> {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        Ok(self.api.get(endpoints::DASHBOARD_STATS, &[]).await?)
    }

    async fn recent_activity(&self) -> Result<Vec<Activity>, Error> {
        self.list(endpoints::DASHBOARD_ACTIVITY).await
    }
}

impl<T: Transport, S: Session> CompanyOfferRepository for HttpBackend<T, S> {
    async fn list_company_offers(&self) -> Result<Vec<CompanyOffer>, Error> {
        self.list(endpoints::COMPANY_OFFERS).await
    }

    async fn get_company_offer(&self, id: u64) -> Result<CompanyOffer, Error> {
        Ok(self.api.get(&endpoints::company_offer(id), &[]).await?)
    }

    async fn create_company_offer(&self, draft: &CompanyOfferDraft) -> Result<CompanyOffer, Error> {
        Ok(self.api.post(endpoints::COMPANY_OFFERS, draft).await?)
    }

    async fn update_company_offer(
        &self,
        id: u64,
        draft: &CompanyOfferDraft,
    ) -> Result<CompanyOffer, Error> {
        Ok(self.api.put(&endpoints::company_offer(id), draft).await?)
    }

    async fn set_company_offer_status(
        &self,
        id: u64,
        status: CompanyOfferStatus,
    ) -> Result<CompanyOffer, Error> {
        let body = CompanyOfferStatusUpdate { status };

        Ok(self.api.patch(&endpoints::company_offer(id), &body).await?)
    }

    async fn delete_company_offer(&self, id: u64) -> Result<(), Error> {
        Ok(self.api.delete(&endpoints::company_offer(id)).await?)
    }

    async fn company_activity(&self) -> Result<Vec<Activity>, Error> {
        self.list(endpoints::COMPANY_ACTIVITY).await
    }
}

impl<T: Transport, S: Session> ApplicantRepository for HttpBackend<T, S> {
    async fn list_applicants(&self) -> Result<Vec<Applicant>, Error> {
        self.list(endpoints::COMPANY_APPLICANTS).await
    }

    async fn update_applicant(
        &self,
        offer_id: u64,
        applicant_id: u64,
        update: &ApplicantUpdate,
    ) -> Result<Applicant, Error> {
        Ok(self
            .api
            .patch(&endpoints::company_applicant(offer_id, applicant_id), update)
            .await?)
    }
}
