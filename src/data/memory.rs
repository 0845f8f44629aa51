use std::{cell::RefCell, rc::Rc, time::Duration};

use chrono::Utc;
use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    data::{
        mock, ApplicantRepository, CompanyOfferRepository, DashboardRepository, OfferRepository,
        ReportRepository, UserRepository,
    },
    error::{data::DataError, Error},
    export::{export_filename, to_csv, Download},
    listing::{Filters, Record},
    model::{
        applicant::{Applicant, ApplicantUpdate},
        company_offer::{CompanyOffer, CompanyOfferDraft, CompanyOfferStatus},
        dashboard::{Activity, DashboardStats},
        document::{expected_documents, DocumentPreview, UserDocument},
        offer::{Offer, OfferStatus, RejectOffer},
        report::{Report, ReportPreview, ReportRequest},
        user::{NewUser, User, UserStats, UserUpdate},
    },
};

struct MemoryState {
    rng: StdRng,
    users: Vec<User>,
    offers: Vec<Offer>,
    reports: Vec<Report>,
    company_offers: Vec<CompanyOffer>,
    applicants: Vec<Applicant>,
    admin_activity: Vec<Activity>,
    company_activity: Vec<Activity>,
}

/// Backend answering from records held in memory.
///
/// Clones share the same records. Every call waits for the configured latency first, so the
/// loader and in-flight guards behave as they do against the real backend.
#[derive(Clone)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
    latency: Duration,
    fail_next: Rc<RefCell<Option<Error>>>,
}

impl MemoryBackend {
    /// Creates a backend without any record.
    pub fn empty(seed: u64) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                rng: StdRng::seed_from_u64(seed),
                users: Vec::new(),
                offers: Vec::new(),
                reports: Vec::new(),
                company_offers: Vec::new(),
                applicants: Vec::new(),
                admin_activity: Vec::new(),
                company_activity: Vec::new(),
            })),
            latency: Duration::ZERO,
            fail_next: Rc::new(RefCell::new(None)),
        }
    }

    /// Creates a backend filled with generated records.
    pub fn seeded(seed: u64) -> Self {
        let backend = Self::empty(seed);
        let now = Utc::now();

        {
            let mut state = backend.state.borrow_mut();
            let state = &mut *state;
            state.users = mock::users(&mut state.rng, mock::USER_COUNT, now);
            state.offers = mock::offers(&mut state.rng, mock::OFFER_COUNT, now);
            state.reports = mock::reports(now);
            state.company_offers = mock::company_offers();
            state.applicants = mock::applicants();
            state.admin_activity = mock::admin_activity(now);
            state.company_activity = mock::company_activity(now);
        }

        tracing::debug!("Seeded in-memory backend with seed {}", seed);

        backend
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.state.borrow_mut().users = users;
        self
    }

    pub fn with_offers(self, offers: Vec<Offer>) -> Self {
        self.state.borrow_mut().offers = offers;
        self
    }

    pub fn with_reports(self, reports: Vec<Report>) -> Self {
        self.state.borrow_mut().reports = reports;
        self
    }

    pub fn with_company_offers(self, offers: Vec<CompanyOffer>) -> Self {
        self.state.borrow_mut().company_offers = offers;
        self
    }

    pub fn with_applicants(self, applicants: Vec<Applicant>) -> Self {
        self.state.borrow_mut().applicants = applicants;
        self
    }

    /// Makes the next call fail with `err` instead of touching the records.
    pub fn fail_next(&self, err: impl Into<Error>) {
        *self.fail_next.borrow_mut() = Some(err.into());
    }

    async fn begin(&self) -> Result<(), Error> {
        crate::util::time::sleep(self.latency).await;

        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn next_id<T: Record>(records: &[T]) -> u64 {
    records.iter().map(Record::id).max().unwrap_or(0) + 1
}

fn find_mut<'a, T: Record>(
    records: &'a mut [T],
    entity: &'static str,
    id: u64,
) -> Result<&'a mut T, Error> {
    records
        .iter_mut()
        .find(|record| record.id() == id)
        .ok_or(Error::Data(DataError::NotFound { entity, id }))
}

fn remove<T: Record>(records: &mut Vec<T>, entity: &'static str, id: u64) -> Result<T, Error> {
    let index = records
        .iter()
        .position(|record| record.id() == id)
        .ok_or(Error::Data(DataError::NotFound { entity, id }))?;

    Ok(records.remove(index))
}

impl MemoryBackend {
    fn document(&self, user_id: u64, document_id: u64) -> Result<(User, UserDocument), Error> {
        let state = self.state.borrow();
        let user = state
            .users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or(DataError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        let document = expected_documents(&user)
            .into_iter()
            .find(|document| document.id == document_id)
            .ok_or(DataError::NotFound {
                entity: "Document",
                id: document_id,
            })?;

        Ok((user, document))
    }

    fn report(&self, id: u64) -> Result<Report, Error> {
        self.state
            .borrow()
            .reports
            .iter()
            .find(|report| report.id == id)
            .cloned()
            .ok_or(Error::Data(DataError::NotFound {
                entity: "Report",
                id,
            }))
    }

    fn set_offer_status(
        &self,
        id: u64,
        status: OfferStatus,
        reason: Option<String>,
    ) -> Result<Offer, Error> {
        let mut state = self.state.borrow_mut();
        let offer = find_mut(&mut state.offers, "Offer", id)?;
        offer.status = status;
        offer.rejection_reason = reason;

        Ok(offer.clone())
    }
}

impl UserRepository for MemoryBackend {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().users.clone())
    }

    async fn user_stats(&self) -> Result<UserStats, Error> {
        self.begin().await?;

        Ok(UserStats::from_users(&self.state.borrow().users))
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let created = User {
            id: next_id(&state.users),
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.user_type,
            status: user.status,
            created_at: Utc::now(),
            last_login: None,
        };
        state.users.insert(0, created.clone());

        Ok(created)
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let user = find_mut(&mut state.users, "User", id)?;
        user.name = update.name.clone();
        user.email = update.email.clone();
        user.user_type = update.user_type;
        user.status = update.status;

        Ok(user.clone())
    }

    async fn delete_user(&self, id: u64) -> Result<(), Error> {
        self.begin().await?;

        remove(&mut self.state.borrow_mut().users, "User", id)?;

        Ok(())
    }

    async fn export_users(&self, filters: &Filters) -> Result<Download, Error> {
        self.begin().await?;

        let state = self.state.borrow();
        let csv = to_csv(state.users.iter().filter(|user| filters.matches(*user)));

        Ok(Download::csv(
            export_filename("users", Utc::now().date_naive()),
            csv,
        ))
    }

    async fn user_documents(&self, user_id: u64) -> Result<Vec<UserDocument>, Error> {
        self.begin().await?;

        let state = self.state.borrow();
        let user = state
            .users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or(DataError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        Ok(expected_documents(user))
    }

    async fn preview_document(
        &self,
        user_id: u64,
        document_id: u64,
    ) -> Result<DocumentPreview, Error> {
        self.begin().await?;

        let (user, document) = self.document(user_id, document_id)?;
        let content = mock::document_content(&user, &document);

        Ok(DocumentPreview { document, content })
    }

    async fn download_document(&self, user_id: u64, document_id: u64) -> Result<Download, Error> {
        self.begin().await?;

        let (user, document) = self.document(user_id, document_id)?;
        let content = mock::document_content(&user, &document);

        Ok(Download::text(document.name, content))
    }
}

impl OfferRepository for MemoryBackend {
    async fn list_offers(&self) -> Result<Vec<Offer>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().offers.clone())
    }

    async fn approve_offer(&self, id: u64) -> Result<Offer, Error> {
        self.begin().await?;

        self.set_offer_status(id, OfferStatus::Approved, None)
    }

    async fn reject_offer(&self, id: u64, rejection: &RejectOffer) -> Result<Offer, Error> {
        self.begin().await?;

        self.set_offer_status(id, OfferStatus::Rejected, Some(rejection.reason.clone()))
    }

    async fn close_offer(&self, id: u64) -> Result<Offer, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let offer = find_mut(&mut state.offers, "Offer", id)?;
        offer.status = OfferStatus::Closed;

        Ok(offer.clone())
    }
}

impl ReportRepository for MemoryBackend {
    async fn list_reports(&self) -> Result<Vec<Report>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().reports.clone())
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Report, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let report = Report {
            id: next_id(&state.reports),
            name: request.report_name(),
            report_type: request.report_type,
            format: request.format,
            created_at: Utc::now(),
            size: mock::report_size(&mut state.rng),
        };
        state.reports.insert(0, report.clone());

        Ok(report)
    }

    async fn preview_report(&self, id: u64) -> Result<ReportPreview, Error> {
        self.begin().await?;

        let report = self.report(id)?;

        Ok(ReportPreview {
            content: mock::report_content(&report),
        })
    }

    async fn download_report(&self, id: u64) -> Result<Download, Error> {
        self.begin().await?;

        let report = self.report(id)?;

        Ok(Download::text(report.file_name(), mock::report_content(&report)))
    }

    async fn delete_report(&self, id: u64) -> Result<(), Error> {
        self.begin().await?;

        remove(&mut self.state.borrow_mut().reports, "Report", id)?;

        Ok(())
    }
}

impl DashboardRepository for MemoryBackend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        self.begin().await?;

        let state = self.state.borrow();
        let count = |status: OfferStatus| {
            state
                .offers
                .iter()
                .filter(|offer| offer.status == status)
                .count() as u64
        };

        Ok(DashboardStats {
            total_users: state.users.len() as u64,
            pending_offers: count(OfferStatus::Pending),
            active_internships: count(OfferStatus::Approved),
        })
    }

    async fn recent_activity(&self) -> Result<Vec<Activity>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().admin_activity.clone())
    }
}

impl CompanyOfferRepository for MemoryBackend {
    async fn list_company_offers(&self) -> Result<Vec<CompanyOffer>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().company_offers.clone())
    }

    async fn get_company_offer(&self, id: u64) -> Result<CompanyOffer, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();

        Ok(find_mut(&mut state.company_offers, "Company offer", id)?.clone())
    }

    async fn create_company_offer(&self, draft: &CompanyOfferDraft) -> Result<CompanyOffer, Error> {
        self.begin().await?;

        let today = Utc::now().date_naive();
        let mut state = self.state.borrow_mut();
        let offer = CompanyOffer {
            id: next_id(&state.company_offers),
            title: draft.title.clone(),
            description: draft.description.clone(),
            area: draft.area.clone(),
            requirements: draft.requirements.clone(),
            status: draft.status,
            applicants: 0,
            vacancies: draft.vacancies,
            duration: draft.duration,
            modality: draft.modality,
            published_date: (draft.status == CompanyOfferStatus::Active).then_some(today),
            created_date: today,
        };
        state.company_offers.insert(0, offer.clone());

        Ok(offer)
    }

    async fn update_company_offer(
        &self,
        id: u64,
        draft: &CompanyOfferDraft,
    ) -> Result<CompanyOffer, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let offer = find_mut(&mut state.company_offers, "Company offer", id)?;
        offer.title = draft.title.clone();
        offer.description = draft.description.clone();
        offer.area = draft.area.clone();
        offer.requirements = draft.requirements.clone();
        offer.vacancies = draft.vacancies;
        offer.duration = draft.duration;
        offer.modality = draft.modality;
        set_company_status(offer, draft.status);

        Ok(offer.clone())
    }

    async fn set_company_offer_status(
        &self,
        id: u64,
        status: CompanyOfferStatus,
    ) -> Result<CompanyOffer, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let offer = find_mut(&mut state.company_offers, "Company offer", id)?;
        set_company_status(offer, status);

        Ok(offer.clone())
    }

    async fn delete_company_offer(&self, id: u64) -> Result<(), Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        remove(&mut state.company_offers, "Company offer", id)?;
        // Applications go with their offer
        state.applicants.retain(|applicant| applicant.offer_id != id);

        Ok(())
    }

    async fn company_activity(&self) -> Result<Vec<Activity>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().company_activity.clone())
    }
}

fn set_company_status(offer: &mut CompanyOffer, status: CompanyOfferStatus) {
    offer.status = status;
    if status == CompanyOfferStatus::Active && offer.published_date.is_none() {
        offer.published_date = Some(Utc::now().date_naive());
    }
}

impl ApplicantRepository for MemoryBackend {
    async fn list_applicants(&self) -> Result<Vec<Applicant>, Error> {
        self.begin().await?;

        Ok(self.state.borrow().applicants.clone())
    }

    async fn update_applicant(
        &self,
        offer_id: u64,
        applicant_id: u64,
        update: &ApplicantUpdate,
    ) -> Result<Applicant, Error> {
        self.begin().await?;

        let mut state = self.state.borrow_mut();
        let applicant = state
            .applicants
            .iter_mut()
            .find(|applicant| applicant.id == applicant_id && applicant.offer_id == offer_id)
            .ok_or(DataError::NotFound {
                entity: "Applicant",
                id: applicant_id,
            })?;

        match update {
            ApplicantUpdate::Status { status } => applicant.status = *status,
            ApplicantUpdate::Notes { notes } => applicant.notes = notes.clone(),
        }

        Ok(applicant.clone())
    }
}
