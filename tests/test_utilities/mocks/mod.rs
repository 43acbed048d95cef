/// Mock implementations for testing
mod mock_capability;
mod mock_rng;

pub use mock_capability::MockCapability;
pub use mock_rng::ExhaustibleRng;
