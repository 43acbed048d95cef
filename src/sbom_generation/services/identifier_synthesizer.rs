use crate::shared::ConversionError;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex};
use uuid::{Builder, Uuid};

/// Source of fresh document identifiers
///
/// Builders take the source explicitly so that conversion stays a pure
/// function of (inventory, configuration, identifier source).
pub trait IdentifierSource {
    /// Produces the next identifier in the sequence
    ///
    /// # Errors
    /// Returns `ConversionError::FatalInitialization` if the underlying
    /// randomness cannot produce bytes
    fn next_uuid(&mut self) -> Result<Uuid, ConversionError>;
}

impl<S: IdentifierSource + ?Sized> IdentifierSource for &mut S {
    fn next_uuid(&mut self) -> Result<Uuid, ConversionError> {
        (**self).next_uuid()
    }
}

/// IdentifierSynthesizer service generating v4 UUIDs from an injected RNG
///
/// The same seed and the same call sequence always yield the same UUIDs,
/// which is what makes document output reproducible in tests.
#[derive(Debug)]
pub struct IdentifierSynthesizer<R = StdRng> {
    rng: R,
}

impl IdentifierSynthesizer<StdRng> {
    /// Creates a synthesizer seeded from the operating system's entropy source
    pub fn from_entropy() -> Result<Self, ConversionError> {
        let rng = StdRng::from_rng(OsRng).map_err(|e| ConversionError::FatalInitialization {
            details: format!("failed to seed from OS entropy: {}", e),
        })?;
        Ok(Self::new(rng))
    }

    /// Creates a synthesizer with a pinned seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> IdentifierSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IdentifierSource for IdentifierSynthesizer<R> {
    fn next_uuid(&mut self) -> Result<Uuid, ConversionError> {
        let mut bytes = [0u8; 16];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| ConversionError::FatalInitialization {
                details: e.to_string(),
            })?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// Thread-safe handle to one synthesizer shared by several conversions
///
/// A conversion holds the lock for its whole run, so every document consumes
/// a contiguous run of identifiers from the shared sequence.
#[derive(Debug)]
pub struct SharedIdentifierSynthesizer<R = StdRng> {
    inner: Arc<Mutex<IdentifierSynthesizer<R>>>,
}

impl<R> Clone for SharedIdentifierSynthesizer<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RngCore> SharedIdentifierSynthesizer<R> {
    pub fn new(synthesizer: IdentifierSynthesizer<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(synthesizer)),
        }
    }

    /// Runs `f` with exclusive access to the underlying synthesizer
    ///
    /// # Errors
    /// Returns `FatalInitialization` if a previous holder panicked, otherwise
    /// whatever `f` returns
    pub fn with_exclusive<T>(
        &self,
        f: impl FnOnce(&mut IdentifierSynthesizer<R>) -> Result<T, ConversionError>,
    ) -> Result<T, ConversionError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ConversionError::FatalInitialization {
                details: "identifier source lock poisoned by a panicked conversion".to_string(),
            })?;
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = IdentifierSynthesizer::seeded(1);
        let mut second = IdentifierSynthesizer::seeded(1);

        for _ in 0..5 {
            assert_eq!(first.next_uuid().unwrap(), second.next_uuid().unwrap());
        }
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let mut first = IdentifierSynthesizer::seeded(1);
        let mut second = IdentifierSynthesizer::seeded(2);
        assert_ne!(first.next_uuid().unwrap(), second.next_uuid().unwrap());
    }

    #[test]
    fn test_consecutive_identifiers_are_unique() {
        let mut ids = IdentifierSynthesizer::seeded(7);
        let a = ids.next_uuid().unwrap();
        let b = ids.next_uuid().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generates_v4_uuids() {
        let mut ids = IdentifierSynthesizer::seeded(1);
        let uuid = ids.next_uuid().unwrap();

        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
        assert_eq!(uuid.to_string().len(), 36);
    }

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("no entropy"))
        }
    }

    #[test]
    fn test_failing_rng_is_fatal() {
        let mut ids = IdentifierSynthesizer::new(FailingRng);
        assert!(matches!(
            ids.next_uuid(),
            Err(ConversionError::FatalInitialization { ref details })
                if details.contains("no entropy")
        ));
    }

    #[test]
    fn test_from_entropy() {
        let mut ids = IdentifierSynthesizer::from_entropy().unwrap();
        assert!(ids.next_uuid().is_ok());
    }

    #[test]
    fn test_mut_reference_is_a_source() {
        fn draw<S: IdentifierSource>(mut source: S) -> Uuid {
            source.next_uuid().unwrap()
        }

        let mut ids = IdentifierSynthesizer::seeded(3);
        let mut expected = IdentifierSynthesizer::seeded(3);
        assert_eq!(draw(&mut ids), expected.next_uuid().unwrap());
        // the borrowed synthesizer advanced
        assert_eq!(ids.next_uuid().unwrap(), expected.next_uuid().unwrap());
    }

    #[test]
    fn test_shared_synthesizer_hands_out_contiguous_runs() {
        let shared = SharedIdentifierSynthesizer::new(IdentifierSynthesizer::seeded(11));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .with_exclusive(|ids| {
                            (0..3)
                                .map(|_| ids.next_uuid())
                                .collect::<Result<Vec<_>, _>>()
                        })
                        .unwrap()
                })
            })
            .collect();

        let mut runs: Vec<Vec<Uuid>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let mut reference = IdentifierSynthesizer::seeded(11);
        let mut expected_runs: Vec<Vec<Uuid>> = (0..4)
            .map(|_| (0..3).map(|_| reference.next_uuid().unwrap()).collect())
            .collect();

        runs.sort();
        expected_runs.sort();
        assert_eq!(runs, expected_runs);
    }
}
