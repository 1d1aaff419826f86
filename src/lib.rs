// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod bundle;
pub mod club_directory;
pub mod extract;
pub mod fields;
pub mod metrics;
pub mod synthesize;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::bundle::RawSourceBundle;
pub use crate::extract::{extract, extract_and_describe, ExtractError};
pub use crate::fields::{ExtractedRunFields, RunType, ALL_PACES_WELCOME};
pub use crate::synthesize::synthesize;
