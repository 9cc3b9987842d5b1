use std::fmt;

/// Outcome of classifying one saved search page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultPageKind {
    /// The query matched nothing
    Empty,
    /// The page lists one or more patent applications
    HasResults,
    /// Neither sentinel phrase was found
    Unrecognized,
}

impl ResultPageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::HasResults => "has_results",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ResultPageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
