pub mod dashboard;
pub mod offers;
pub mod reports;
pub mod user_modals;
pub mod users;

pub use dashboard::Dashboard;
pub use offers::Offers;
pub use reports::Reports;
pub use users::Users;
