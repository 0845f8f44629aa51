//! Tests for the repository implementations.
//!
//! `HttpBackend` is exercised against mockito endpoints, `MemoryBackend` through complete
//! dashboard workflows on fixture records.

mod http;
mod memory;

use internhub_test_utils::prelude::*;
