use clap::ValueEnum;
use html_reencode_engine::options::InputEncoding;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CliInputEncoding {
    /// Legacy single-byte codepage (default)
    #[default]
    #[value(name = "windows-1252", alias = "cp1252")]
    Windows1252,
    /// Strict UTF-8; invalid bytes abort the run
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-8 when valid, windows-1252 otherwise
    Auto,
}

impl From<CliInputEncoding> for InputEncoding {
    fn from(value: CliInputEncoding) -> Self {
        match value {
            CliInputEncoding::Windows1252 => Self::Windows1252,
            CliInputEncoding::Utf8 => Self::Utf8,
            CliInputEncoding::Auto => Self::Auto,
        }
    }
}
