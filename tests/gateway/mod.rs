//! Tests for the API gateway over real HTTP.
//!
//! Each test starts a mockito server standing in for the REST backend and sends requests
//! through `ApiClient` with the `reqwest` transport.

mod download;
mod errors;
mod request;

use internhub_test_utils::prelude::*;
