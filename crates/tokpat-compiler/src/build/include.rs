use crate::StructuralError;
use crate::document::DocumentId;

/// What an include points at inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Key(String),
    /// The document's top-level `patterns`.
    Root,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Include {
    Local(Target),
    External { document: DocumentId, target: Target },
}

impl Include {
    /// Parse `#key`, `$self`, `$base`, `source.x` or `source.x#key`.
    ///
    /// A document id equal to `current` is a local include.
    pub fn parse(include: &str, current: &DocumentId) -> Result<Self, StructuralError> {
        let unrecognized = || StructuralError::UnrecognizedInclude(include.to_string());

        if let Some(key) = include.strip_prefix('#') {
            return match key {
                "" => Err(unrecognized()),
                key => Ok(Self::Local(Target::Key(key.to_string()))),
            };
        }

        if include == "$self" || include == "$base" {
            return Ok(Self::Local(Target::Root));
        }

        if !include.starts_with("source.") {
            return Err(unrecognized());
        }

        let (document, target) = match include.split_once('#') {
            Some((_, "")) => return Err(unrecognized()),
            Some((document, key)) => (document, Target::Key(key.to_string())),
            None => (include, Target::Root),
        };
        let document = DocumentId::new(document);

        if document == *current {
            Ok(Self::Local(target))
        } else {
            Ok(Self::External { document, target })
        }
    }
}
