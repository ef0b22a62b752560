use std::fmt::{Display, Formatter};

/// Per-kind bonus constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountValues {
    pub balance_value: i32,
    pub replenish_value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Base,
    Gold,
    Platinum,
}

const KIND_TABLE: [(AccountKind, &str, AccountValues); 3] = [
    (
        AccountKind::Base,
        "Base",
        AccountValues {
            balance_value: 5,
            replenish_value: 2,
        },
    ),
    (
        AccountKind::Gold,
        "Gold",
        AccountValues {
            balance_value: 15,
            replenish_value: 5,
        },
    ),
    (
        AccountKind::Platinum,
        "Platinum",
        AccountValues {
            balance_value: 25,
            replenish_value: 10,
        },
    ),
];

impl AccountKind {
    pub const ALL: [AccountKind; 3] = [AccountKind::Base, AccountKind::Gold, AccountKind::Platinum];

    fn entry(&self) -> &'static (AccountKind, &'static str, AccountValues) {
        match self {
            AccountKind::Base => &KIND_TABLE[0],
            AccountKind::Gold => &KIND_TABLE[1],
            AccountKind::Platinum => &KIND_TABLE[2],
        }
    }

    pub fn values(&self) -> AccountValues {
        self.entry().2
    }

    pub fn balance_value(&self) -> i32 {
        self.values().balance_value
    }

    pub fn replenish_value(&self) -> i32 {
        self.values().replenish_value
    }

    /// Stable tag written by storage adapters.
    pub fn tag(&self) -> &'static str {
        self.entry().1
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        KIND_TABLE
            .iter()
            .find(|(_, name, _)| *name == tag)
            .map(|(kind, _, _)| *kind)
    }
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
