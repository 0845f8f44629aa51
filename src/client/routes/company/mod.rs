pub mod applicants;
pub mod dashboard;
pub mod offer_form;
pub mod offers;

pub use applicants::Applicants;
pub use dashboard::Dashboard;
pub use offer_form::OfferForm;
pub use offers::Offers;
