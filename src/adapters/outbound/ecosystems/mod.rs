/// Ecosystem capabilities - implementations of the Capability port
mod python;
mod spdx_sbom;
mod windows_patch;

pub use python::PythonPackageCapability;
pub use spdx_sbom::{SpdxSbomCapability, SpdxSbomMetadata};
pub use windows_patch::{WindowsPatchCapability, WindowsPatchMetadata};
