pub use crate::error::*;

mod compare;
mod entity;
mod error;
mod logger;
mod predicate;
mod storage;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod compare {
        pub use crate::compare::*;
    }
    pub mod logger {
        pub use crate::logger::*;
    }
    pub mod predicate {
        pub use crate::predicate::*;
    }
    pub mod storage {
        pub use crate::storage::*;
    }
}
