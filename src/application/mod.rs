/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services into whole-document
/// conversions and exposes the standalone identifier queries.
pub mod converter;
pub mod dto;
pub mod use_cases;
