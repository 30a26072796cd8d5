//! Document decoding interface.
//!
//! Decoding .docx/.pdf byte streams is an external concern: real
//! decoders implement [`DocumentDecoder`] and register with a
//! [`DecoderRegistry`], which dispatches on file extension. The crate
//! itself ships no binary parsers — it consumes the [`DocumentModel`]s
//! decoders produce.
//!
//! # Example
//!
//! ```no_run
//! use propeval::decode::{DecoderRegistry, DocumentDecoder};
//! use std::sync::Arc;
//!
//! fn register(decoder: Arc<dyn DocumentDecoder>) -> propeval::Result<()> {
//!     let mut registry = DecoderRegistry::new();
//!     registry.register(decoder);
//!     let doc = registry.decode_bytes(b"...", "docx")?;
//!     println!("{} paragraphs", doc.paragraphs.len());
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::DocumentModel;

/// Extensions the evaluation pipeline accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["docx", "pdf"];

/// Trait for document decoders.
///
/// Implement this trait to supply a decoder for a document format. A
/// decoder that cannot parse its input must return
/// [`Error::InvalidDocument`], never panic.
pub trait DocumentDecoder: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Name of this decoder.
    fn name(&self) -> &str;

    /// Decode a byte stream into a document model.
    fn decode(&self, bytes: &[u8]) -> Result<DocumentModel>;

    /// Check if this decoder supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to decoders.
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: HashMap<String, Arc<dyn DocumentDecoder>>,
}

impl DecoderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder for all its supported extensions.
    pub fn register(&mut self, decoder: Arc<dyn DocumentDecoder>) {
        for ext in decoder.supported_extensions() {
            self.decoders.insert(ext.to_lowercase(), decoder.clone());
        }
    }

    /// Get a decoder by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentDecoder>> {
        self.decoders.get(&ext.to_lowercase()).cloned()
    }

    /// Check if an extension is registered.
    pub fn supports(&self, ext: &str) -> bool {
        self.decoders.contains_key(&ext.to_lowercase())
    }

    /// All registered extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.decoders.keys().map(|s| s.as_str()).collect()
    }

    /// Decode bytes using the decoder registered for `ext`.
    ///
    /// Unregistered extensions fail with [`Error::UnsupportedFormat`];
    /// there is no retry — decoding failures are not transient in this
    /// domain.
    pub fn decode_bytes(&self, bytes: &[u8], ext: &str) -> Result<DocumentModel> {
        let decoder = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_lowercase()))?;
        decoder.decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentKind, Paragraph};

    struct FixedDecoder {
        extensions: Vec<&'static str>,
        name: &'static str,
    }

    impl DocumentDecoder for FixedDecoder {
        fn supported_extensions(&self) -> &[&str] {
            &self.extensions
        }

        fn name(&self) -> &str {
            self.name
        }

        fn decode(&self, bytes: &[u8]) -> Result<DocumentModel> {
            if bytes.is_empty() {
                return Err(Error::InvalidDocument("empty stream".to_string()));
            }
            let mut doc = DocumentModel::new(DocumentKind::Docx);
            doc.add_paragraph(Paragraph::with_text("decoded"));
            Ok(doc)
        }
    }

    #[test]
    fn test_empty_registry_supports_nothing() {
        let registry = DecoderRegistry::new();
        assert!(!registry.supports("docx"));
        assert!(!registry.supports("pdf"));
    }

    #[test]
    fn test_register_and_dispatch() {
        let mut registry = DecoderRegistry::new();
        registry.register(Arc::new(FixedDecoder {
            extensions: vec!["docx"],
            name: "word",
        }));

        assert!(registry.supports("docx"));
        assert!(registry.supports("DOCX")); // Case insensitive
        assert!(!registry.supports("pdf"));

        let doc = registry.decode_bytes(b"content", "docx").unwrap();
        assert_eq!(doc.paragraphs.len(), 1);
    }

    #[test]
    fn test_unknown_extension_is_unsupported_format() {
        let registry = DecoderRegistry::new();
        let result = registry.decode_bytes(b"content", "txt");
        assert!(matches!(result, Err(Error::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_decoder_failure_propagates() {
        let mut registry = DecoderRegistry::new();
        registry.register(Arc::new(FixedDecoder {
            extensions: vec!["pdf"],
            name: "pdf",
        }));

        let result = registry.decode_bytes(b"", "pdf");
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_decoder_supports_extension() {
        let decoder = FixedDecoder {
            extensions: vec!["docx"],
            name: "word",
        };
        assert!(decoder.supports_extension("docx"));
        assert!(decoder.supports_extension("DOCX"));
        assert!(!decoder.supports_extension("pdf"));
    }
}
