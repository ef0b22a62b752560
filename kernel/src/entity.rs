mod account;
mod book;

pub use self::{account::*, book::*};

use std::fmt::Display;

/// Value object that can be kept in a list service.
///
/// Duplicate detection relies on `Eq`, so two entities with identical fields
/// are considered the same entry.
pub trait Entity: Clone + Eq + Display {
    const NAME: &'static str;
}
