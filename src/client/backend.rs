use chrono::Utc;
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::{
    api::{ApiClient, BrowserSession, ReqwasmTransport},
    data::HttpBackend,
};
use crate::{
    config::{Config, DataSource, Panel},
    data::{
        ApplicantRepository, CompanyOfferRepository, DashboardRepository, MemoryBackend,
        OfferRepository, ReportRepository, UserRepository,
    },
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

/// Repository implementation picked at startup and shared through context.
#[derive(Clone)]
pub enum Backend {
    Memory(MemoryBackend),
    #[cfg(feature = "web")]
    Http(HttpBackend<ReqwasmTransport, BrowserSession>),
}

impl Backend {
    pub fn from_config(config: &Config, panel: Panel) -> Self {
        match config.data_source {
            DataSource::Memory => Self::memory(config),
            DataSource::Http => Self::http(config, panel),
        }
    }

    fn memory(config: &Config) -> Self {
        let seed = Utc::now().timestamp_millis() as u64;
        tracing::info!("Using the in-memory backend");

        Self::Memory(MemoryBackend::seeded(seed).with_latency(config.mock_latency))
    }

    #[cfg(feature = "web")]
    fn http(config: &Config, panel: Panel) -> Self {
        let session = BrowserSession::new(panel.storage_prefix(), config.login_path.clone());
        tracing::info!("Using the REST backend at {}", config.api_url);

        Self::Http(HttpBackend::new(ApiClient::new(
            config,
            ReqwasmTransport,
            session,
        )))
    }

    #[cfg(not(feature = "web"))]
    fn http(config: &Config, _panel: Panel) -> Self {
        tracing::warn!("The REST backend needs the `web` feature, falling back to memory");

        Self::memory(config)
    }
}

macro_rules! delegate {
    ($self:ident . $method:ident ( $($arg:expr),* )) => {
        match $self {
            Backend::Memory(backend) => backend.$method($($arg),*).await,
            #[cfg(feature = "web")]
            Backend::Http(backend) => backend.$method($($arg),*).await,
        }
    };
}

impl UserRepository for Backend {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        delegate!(self.list_users())
    }

    async fn user_stats(&self) -> Result<UserStats, Error> {
        delegate!(self.user_stats())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        delegate!(self.create_user(user))
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, Error> {
        delegate!(self.update_user(id, update))
    }

    async fn delete_user(&self, id: u64) -> Result<(), Error> {
        delegate!(self.delete_user(id))
    }

    async fn export_users(&self, filters: &Filters) -> Result<Download, Error> {
        delegate!(self.export_users(filters))
    }

    async fn user_documents(&self, user_id: u64) -> Result<Vec<UserDocument>, Error> {
        delegate!(self.user_documents(user_id))
    }

    async fn preview_document(
        &self,
        user_id: u64,
        document_id: u64,
    ) -> Result<DocumentPreview, Error> {
        delegate!(self.preview_document(user_id, document_id))
    }

    async fn download_document(&self, user_id: u64, document_id: u64) -> Result<Download, Error> {
        delegate!(self.download_document(user_id, document_id))
    }
}

impl OfferRepository for Backend {
    async fn list_offers(&self) -> Result<Vec<Offer>, Error> {
        delegate!(self.list_offers())
    }

    async fn approve_offer(&self, id: u64) -> Result<Offer, Error> {
        delegate!(self.approve_offer(id))
    }

    async fn reject_offer(&self, id: u64, rejection: &RejectOffer) -> Result<Offer, Error> {
        delegate!(self.reject_offer(id, rejection))
    }

    async fn close_offer(&self, id: u64) -> Result<Offer, Error> {
        delegate!(self.close_offer(id))
    }
}

impl ReportRepository for Backend {
    async fn list_reports(&self) -> Result<Vec<Report>, Error> {
        delegate!(self.list_reports())
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Report, Error> {
        delegate!(self.generate_report(request))
    }

    async fn preview_report(&self, id: u64) -> Result<ReportPreview, Error> {
        delegate!(self.preview_report(id))
    }

    async fn download_report(&self, id: u64) -> Result<Download, Error> {
        delegate!(self.download_report(id))
    }

    async fn delete_report(&self, id: u64) -> Result<(), Error> {
        delegate!(self.delete_report(id))
    }
}

impl DashboardRepository for Backend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        delegate!(self.dashboard_stats())
    }

    async fn recent_activity(&self) -> Result<Vec<Activity>, Error> {
        delegate!(self.recent_activity())
    }
}

impl CompanyOfferRepository for Backend {
    async fn list_company_offers(&self) -> Result<Vec<CompanyOffer>, Error> {
        delegate!(self.list_company_offers())
    }

    async fn get_company_offer(&self, id: u64) -> Result<CompanyOffer, Error> {
        delegate!(self.get_company_offer(id))
    }

    async fn create_company_offer(&self, draft: &CompanyOfferDraft) -> Result<CompanyOffer, Error> {
        delegate!(self.create_company_offer(draft))
    }

    async fn update_company_offer(
        &self,
        id: u64,
        draft: &CompanyOfferDraft,
    ) -> Result<CompanyOffer, Error> {
        delegate!(self.update_company_offer(id, draft))
    }

    async fn set_company_offer_status(
        &self,
        id: u64,
        status: CompanyOfferStatus,
    ) -> Result<CompanyOffer, Error> {
        delegate!(self.set_company_offer_status(id, status))
    }

    async fn delete_company_offer(&self, id: u64) -> Result<(), Error> {
        delegate!(self.delete_company_offer(id))
    }

    async fn company_activity(&self) -> Result<Vec<Activity>, Error> {
        delegate!(self.company_activity())
    }
}

impl ApplicantRepository for Backend {
    async fn list_applicants(&self) -> Result<Vec<Applicant>, Error> {
        delegate!(self.list_applicants())
    }

    async fn update_applicant(
        &self,
        offer_id: u64,
        applicant_id: u64,
        update: &ApplicantUpdate,
    ) -> Result<Applicant, Error> {
        delegate!(self.update_applicant(offer_id, applicant_id, update))
    }
}

/// The panel's backend, read from context. Usable inside event handlers and spawned tasks.
pub fn backend() -> Backend {
    dioxus::prelude::consume_context::<Backend>()
}
