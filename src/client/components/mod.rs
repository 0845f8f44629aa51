pub mod badge;
pub mod confirm_host;
pub mod layout;
pub mod loader;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod stats;
pub mod table;
pub mod toast_host;

pub use badge::Badge;
pub use confirm_host::ConfirmHost;
pub use layout::Layout;
pub use loader::LoaderOverlay;
pub use modal::ModalFrame;
pub use page::Page;
pub use pagination::PaginationBar;
pub use stats::StatCard;
pub use table::{EmptyRow, SortHeader};
pub use toast_host::ToastHost;
