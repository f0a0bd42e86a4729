#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accepts a trailing `%` with no zone name after it and reads it as "no zone".
    ///
    /// Off by default, so `::1%` is rejected instead of meaning `::1`.
    pub allow_empty_zone: bool,
}

impl ParseOptions {
    /// Options matching the lenient historical parser.
    pub fn lenient() -> Self {
        Self {
            allow_empty_zone: true,
        }
    }
}
