/// A document as handed over by a [`crate::io::DocumentProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    /// Plain text using `==Heading==` markers for structure.
    pub extract: String,
    pub is_disambiguation: bool,
    pub was_redirected: bool,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        extract: impl Into<String>,
    ) -> Self {
        Document {
            title: title.into(),
            extract: extract.into(),
            is_disambiguation: false,
            was_redirected: false,
        }
    }

    pub fn disambiguation(mut self) -> Self {
        self.is_disambiguation = true;
        self
    }

    pub fn redirected(mut self) -> Self {
        self.was_redirected = true;
        self
    }
}
