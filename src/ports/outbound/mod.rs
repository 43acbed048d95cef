/// Outbound ports (Driven ports) - Collaborator interfaces
///
/// These ports define the interfaces the conversion core uses to query the
/// ecosystem plugins that produced the inventory.
pub mod capability;

pub use capability::Capability;
