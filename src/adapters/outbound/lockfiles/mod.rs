/// Lockfile extractors producing inventory for conversion
mod pipfile_lock;

pub use pipfile_lock::{DepGroupMetadata, PipfileLockExtractor};
