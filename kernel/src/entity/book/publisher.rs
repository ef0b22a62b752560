use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPublishingHouse(String);

impl BookPublishingHouse {
    pub fn new(house: impl Into<String>) -> Self {
        Self(house.into())
    }
}

#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPublishingYear(i32);

impl BookPublishingYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
