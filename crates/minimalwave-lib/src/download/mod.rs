mod fetch;
mod orchestrator;
mod types;

pub use fetch::{Fetch, HttpFetcher};
pub use orchestrator::Orchestrator;
pub use types::{PlayOptions, RemoteBody};
