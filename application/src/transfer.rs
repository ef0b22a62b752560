mod account;
mod book;

pub use self::{account::*, book::*};
