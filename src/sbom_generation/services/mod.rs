mod cpe_resolver;
mod creation_timestamp;
mod identifier_sanitizer;
mod identifier_synthesizer;
mod purl_resolver;

pub use cpe_resolver::CpeResolver;
pub use creation_timestamp::creation_timestamp;
pub use identifier_sanitizer::IdentifierSanitizer;
pub use identifier_synthesizer::{
    IdentifierSource, IdentifierSynthesizer, SharedIdentifierSynthesizer,
};
pub use purl_resolver::PurlResolver;
