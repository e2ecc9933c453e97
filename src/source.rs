use std::fs;
use std::path::Path;

/// How the bytes of a source file were turned into characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    /// Every byte is the code point of the same value. Used for files that are not valid UTF-8,
    /// which keeps them lossless.
    Latin1,
}

impl Encoding {
    /// Encodes `text` back into the bytes it was decoded from.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }
}

/// The characters of one map script, with random access for lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
    encoding: Encoding,
    file_name: String,
}

impl SourceBuffer {
    pub fn new(text: &str) -> Self {
        Self::with_name(text, "<input>")
    }

    pub fn with_name(text: &str, file_name: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            encoding: Encoding::Utf8,
            file_name: String::from(file_name),
        }
    }

    // Does not reject any input: bytes that are not valid UTF-8 are read as Latin-1.
    pub fn from_bytes(bytes: &[u8], file_name: &str) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::with_name(text, file_name),
            Err(_) => Self {
                chars: bytes.iter().map(|&b| char::from(b)).collect(),
                encoding: Encoding::Latin1,
                file_name: String::from(file_name),
            },
        }
    }

    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(&bytes, &path.display().to_string()))
    }

    pub fn at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
