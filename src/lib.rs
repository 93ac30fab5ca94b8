pub mod core;
pub mod logging;
pub mod security;

pub use crate::core::*;
pub use security::{CredentialScrubber, FallbackRule, ScrubOutcome, ScrubResult};
