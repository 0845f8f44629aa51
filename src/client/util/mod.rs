pub mod download;
pub mod list;
pub mod session;

pub use download::save_download;
pub use list::{filter_list, page_list, sort_list};
pub use session::sign_out;
