use vodca::{AsRefln, Fromln};

/// International standard book number, kept as written (dashes included).
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookIsbn(String);

impl BookIsbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}
