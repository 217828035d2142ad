//! Uploaded image data.

/// Raw bytes of an uploaded file plus enough metadata to download results
/// under a sensible name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    /// Original file name as reported by the browser.
    pub name: String,
    /// MIME type reported by the browser (may be empty).
    pub mime: String,
    /// Entire file contents.
    pub bytes: Vec<u8>,
}

impl LoadedImage {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// File name stem used when naming encrypted/decrypted downloads.
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.name)
    }
}
