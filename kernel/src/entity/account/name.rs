use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct LastName(String);

impl LastName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
