pub mod credential_scrubber;

pub use credential_scrubber::{CredentialScrubber, FallbackRule, ScrubOutcome, ScrubResult};
