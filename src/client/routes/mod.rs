pub mod admin;
pub mod company;
