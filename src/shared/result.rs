/// Result alias used by config loading and lockfile extraction.
/// The conversion core returns the typed `ConversionError` instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
