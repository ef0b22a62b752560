mod account;
mod binary;
mod book;

pub use self::{account::*, book::*};
