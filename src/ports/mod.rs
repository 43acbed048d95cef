/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound (driven) ports implemented by ecosystem
/// plugins and consumed by the conversion core.
pub mod outbound;
