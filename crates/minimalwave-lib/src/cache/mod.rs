mod store;

pub use store::{CACHE_EXTENSION, CacheStore, PurgeReport, TEMP_EXTENSION, TEMP_PREFIX};
