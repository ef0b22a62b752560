use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}
