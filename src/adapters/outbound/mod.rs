/// Outbound adapters - Ecosystem implementations of outbound ports
pub mod ecosystems;
pub mod lockfiles;
