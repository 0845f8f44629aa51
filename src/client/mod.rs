pub mod app;
pub mod backend;
pub mod components;
pub mod router;
pub mod routes;
pub mod state;
pub mod util;

pub use app::App;
