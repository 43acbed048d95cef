/// Adapters layer - Collaborator implementations
///
/// Concrete ecosystem capabilities and a reference lockfile extractor that
/// produce and describe inventory items.
pub mod outbound;
