//! Registry of maker note parsers

use log::debug;

use crate::tiff::errors::TiffResult;
use crate::tiff::tag::Tag;
use super::fujifilm::FujifilmParser;
use super::handler::{MakerNote, MakerNoteParser};
use super::nikon::NikonV3Parser;

/// Ordered list of vendor parsers
///
/// Parsers are probed in registration order and the first one whose
/// predicate accepts the tag's bytes wins.
#[derive(Default)]
pub struct MakerNoteRegistry {
    parsers: Vec<Box<dyn MakerNoteParser>>,
}

impl MakerNoteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in vendor parser
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NikonV3Parser));
        registry.register(Box::new(FujifilmParser));
        registry
    }

    /// Append a parser to the lookup list
    pub fn register(&mut self, parser: Box<dyn MakerNoteParser>) {
        debug!("Registering maker note parser: {}", parser.name());
        self.parsers.push(parser);
    }

    /// Find the first parser that claims the tag
    pub fn find(&self, tag: &Tag) -> Option<&dyn MakerNoteParser> {
        self.parsers.iter()
            .map(|p| &**p)
            .find(|p| p.is_valid(tag.raw()))
    }

    /// Decode the tag with the first parser that claims it
    ///
    /// Returns `None` when no registered vendor recognizes the payload.
    pub fn parse(&self, tag: &Tag) -> Option<TiffResult<MakerNote>> {
        let parser = self.find(tag)?;
        debug!("Maker note claimed by {}", parser.name());

        Some(parser.parse(tag).map(|tiff| MakerNote {
            vendor: parser.name(),
            tiff,
        }))
    }

    /// Names of the registered parsers, in probe order
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::byte_order::ByteOrder;
    use crate::tiff::constants::tags;
    use crate::tiff::errors::TiffError;
    use crate::tiff::field_type::DataType;
    use crate::tiff::types::Tiff;

    struct Prefix(&'static str, &'static [u8]);

    impl MakerNoteParser for Prefix {
        fn name(&self) -> &'static str {
            self.0
        }

        fn is_valid(&self, value: &[u8]) -> bool {
            value.starts_with(self.1)
        }

        fn parse(&self, _tag: &Tag) -> TiffResult<Tiff> {
            Ok(Tiff::new(ByteOrder::LittleEndian, false))
        }
    }

    struct Failing;

    impl MakerNoteParser for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn is_valid(&self, _value: &[u8]) -> bool {
            true
        }

        fn parse(&self, _tag: &Tag) -> TiffResult<Tiff> {
            Err(TiffError::structural("broken note"))
        }
    }

    fn maker_note(bytes: &[u8]) -> Tag {
        Tag::new(tags::MAKER_NOTE, DataType::Undefined, bytes.len() as u64,
                 ByteOrder::LittleEndian, bytes.to_vec())
    }

    #[test]
    fn first_registered_match_wins() {
        let mut registry = MakerNoteRegistry::new();
        registry.register(Box::new(Prefix("short", b"AB")));
        registry.register(Box::new(Prefix("long", b"ABC")));

        let note = registry.parse(&maker_note(b"ABCD")).unwrap().unwrap();
        assert_eq!(note.vendor, "short");
        assert_eq!(registry.names(), vec!["short", "long"]);
    }

    #[test]
    fn no_match_returns_none() {
        let registry = MakerNoteRegistry::with_defaults();
        assert!(registry.find(&maker_note(b"Canon\0")).is_none());
        assert!(registry.parse(&maker_note(&[])).is_none());
    }

    #[test]
    fn registrations_accumulate() {
        let mut registry = MakerNoteRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        registry.register(Box::new(Failing));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["Nikon", "Fujifilm", "failing"]);

        // Unclaimed by the built-ins, so the catch-all parser runs and its error surfaces.
        let result = registry.parse(&maker_note(b"whatever")).unwrap();
        assert!(matches!(result, Err(TiffError::Structural { .. })));
    }

    #[test]
    fn empty_registry_claims_nothing() {
        let registry = MakerNoteRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.parse(&maker_note(b"Nikon\0")).is_none());
    }
}
