use std::fmt;

/// Host operating system identity as reported by the OS-info capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OsType {
    MacOs,
    Windows,
    /// Any other label (linux, freebsd, ...), kept verbatim.
    Other(String),
}

impl OsType {
    /// Parse a label such as `"macos"` or `"windows"`.
    ///
    /// Matching ignores surrounding whitespace and ASCII case. Anything
    /// unrecognized becomes [`OsType::Other`].
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("macos") {
            OsType::MacOs
        } else if trimmed.eq_ignore_ascii_case("windows") {
            OsType::Windows
        } else {
            OsType::Other(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            OsType::MacOs => "macos",
            OsType::Windows => "windows",
            OsType::Other(label) => label,
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
