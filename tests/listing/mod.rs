//! End-to-end list scenarios: filtering, paging and export of the visible rows.

mod export;
mod paging;

use internhub_test_utils::prelude::*;
