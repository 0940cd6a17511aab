#![deny(missing_docs)]
#![doc = "Minimum clique cover search: validates annealed assignments and deepens the clique count until a cover is found."]

mod config;
mod driver;
mod observer;
mod report;
mod validate;

pub use config::{SearchConfig, SeedPolicy};
pub use driver::{find_minimum_cover, CoverSearch};
pub use observer::{AttemptLog, AttemptSummary, NoopObserver, SearchObserver};
pub use report::{SearchOutcome, SearchReport};
pub use validate::{validate, CliqueCover, CliqueGroup, LabelledSample, SlotAssignment};
