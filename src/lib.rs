//! Admin and company dashboards for the student internship management platform.
//!
//! The crate is split between framework-independent modules (list controllers, hash router,
//! UI service state, API gateway, repositories and export helpers) and the Dioxus `client`
//! module which binds them to the browser.

#![allow(non_snake_case)]

pub mod api;
pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod listing;
pub mod model;
pub mod navigation;
pub mod service;
pub mod ui;
pub mod util;
