use crate::map::KeyCase;

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Key normalization applied to section names and keys
    pub key_case: KeyCase,
    /// Reject unrecognized lines instead of skipping them
    pub strict: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn case_insensitive() -> Self {
        Self {
            key_case: KeyCase::Insensitive,
            ..Self::default()
        }
    }
}
