use std::fmt;
use std::str::FromStr;

/// How source bytes are turned into text before substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputEncoding {
    /// Single-byte legacy codepage; never fails.
    #[default]
    Windows1252,
    /// Strict UTF-8; invalid input is a read failure.
    Utf8,
    /// UTF-8 when the bytes are valid UTF-8, windows-1252 otherwise.
    Auto,
}

impl InputEncoding {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Windows1252 => "windows-1252",
            Self::Utf8 => "utf-8",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows-1252" | "cp1252" | "win1252" => Ok(Self::Windows1252),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "auto" => Ok(Self::Auto),
            other => Err(format!("Unknown input encoding: {other}")),
        }
    }
}
