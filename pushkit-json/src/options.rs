//! Encode and decode option bundles

/// Deepest array/object nesting accepted by both encode and decode.
///
/// The root collection is level 1. Scalars do not add a level.
pub const MAX_DEPTH: usize = 100;

/// Output formatting flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WritingOptions {
    /// Newlines and two-space indentation
    pub pretty_print: bool,
    /// Emit object keys in lexicographic order, at every depth
    pub sorted_keys: bool,
}

impl WritingOptions {
    /// Compact output, insertion-order keys
    pub const COMPACT: WritingOptions = WritingOptions {
        pretty_print: false,
        sorted_keys: false,
    };

    /// Enable pretty printing
    pub fn pretty(mut self) -> Self {
        self.pretty_print = true;
        self
    }

    /// Enable sorted keys
    pub fn sorted(mut self) -> Self {
        self.sorted_keys = true;
        self
    }
}

/// Options for [`encode`](crate::encode)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Allow a scalar (string, number, boolean, null) as the whole document
    pub accept_fragments: bool,
    /// Formatting flags
    pub writing: WritingOptions,
}

impl EncodeOptions {
    /// Fragments accepted, default formatting
    pub fn fragments() -> Self {
        Self {
            accept_fragments: true,
            writing: WritingOptions::COMPACT,
        }
    }

    /// Fragments rejected, with the given formatting
    pub fn with_writing(writing: WritingOptions) -> Self {
        Self {
            accept_fragments: false,
            writing,
        }
    }
}

/// Options for [`decode`](crate::decode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingOptions {
    /// Request containers the caller can mutate in place.
    ///
    /// Decoded trees are always owned, so arrays and objects are mutable
    /// whichever way this is set; the parsed value is identical.
    pub mutable_containers: bool,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            mutable_containers: true,
        }
    }
}
