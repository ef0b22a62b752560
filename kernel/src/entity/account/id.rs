use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Fromln, AsRefln)]
pub struct AccountId(i32);

impl AccountId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
