/// Data Transfer Objects for application layer
///
/// Conversion settings passed from callers (or the config file) into the
/// conversion use cases.
mod cdx_config;
mod spdx_config;

pub use cdx_config::CdxConfig;
pub use spdx_config::SpdxConfig;
