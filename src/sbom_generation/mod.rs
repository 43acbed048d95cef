/// Domain layer - document models and conversion services
///
/// Pure logic with no I/O: inventory and document value objects, identifier
/// synthesis and sanitization, PURL and CPE resolution.
pub mod domain;
pub mod services;
