mod account;
mod book;
mod list;

pub use self::{account::*, book::*, list::*};
