//! Reversible replacement of multi-byte tokens with ASCII placeholders.
//!
//! [`Converter`] turns each token that contains non-ASCII text into a
//! deterministic, collision-free placeholder (`テスト` → `JaWordTesuto`) and
//! records the pair. The recorded [`Mapping`] is written out as a mapping
//! file, which a [`Restorer`] later loads to put the original text back.

#[cfg(feature = "cli")]
pub mod commands;
pub mod converter;
pub mod mapping;
pub mod restorer;
pub mod settings;
pub mod text;
pub mod trace_init;
pub mod translit;
pub mod unicode;
pub mod width;


pub use converter::{Converter, Resolution, DEFAULT_PREFIX};
pub use mapping::{Mapping, MappingError, MAPPING_DELIMITER};
pub use restorer::Restorer;
pub use translit::{KanaTransliterator, Transliterator};
