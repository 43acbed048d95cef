/// Use cases module containing conversion orchestration
mod convert_to_cyclonedx;
mod convert_to_spdx;

pub use convert_to_cyclonedx::ConvertToCycloneDxUseCase;
pub use convert_to_spdx::ConvertToSpdxUseCase;

/// Name the converter reports itself as in generated documents
pub const TOOL_NAME: &str = "SCALIBR";

pub const TOOL_HOMEPAGE: &str = "https://github.com/google/osv-scalibr";
