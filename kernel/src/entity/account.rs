mod balance;
mod id;
mod kind;
mod name;

pub use self::{balance::*, id::*, kind::*, name::*};

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use destructure::{Destructure, Mutation};
use error_stack::Report;
use rust_decimal::Decimal;
use vodca::References;

use crate::entity::Entity;
use crate::KernelError;

const REPLENISH_BONUS_BALANCE_COEFF: i64 = 3;
const REPLENISH_BONUS_REPLENISH_COEFF: i64 = 5;
const WITHDRAW_PENALTY_BALANCE_COEFF: i64 = 2;
const WITHDRAW_PENALTY_REPLENISH_COEFF: i64 = 3;

#[derive(Debug, Clone, References, Destructure, Mutation)]
pub struct BankAccount {
    id: AccountId,
    kind: AccountKind,
    first_name: FirstName,
    last_name: LastName,
    balance: AccountBalance,
    bonus_points: BonusPoints,
    is_closed: IsClosed,
}

impl BankAccount {
    /// Opens an account with zero balance and bonus points.
    pub fn new(id: AccountId, kind: AccountKind, first_name: FirstName, last_name: LastName) -> Self {
        Self {
            id,
            kind,
            first_name,
            last_name,
            balance: AccountBalance::default(),
            bonus_points: BonusPoints::default(),
            is_closed: IsClosed::default(),
        }
    }

    /// Rebuilds an account with previously stored state.
    pub fn restore(
        id: AccountId,
        kind: AccountKind,
        first_name: FirstName,
        last_name: LastName,
        balance: AccountBalance,
        bonus_points: BonusPoints,
        is_closed: IsClosed,
    ) -> Self {
        Self {
            id,
            kind,
            first_name,
            last_name,
            balance,
            bonus_points,
            is_closed,
        }
    }

    pub fn replenish_bonus(&self) -> i64 {
        let values = self.kind.values();
        REPLENISH_BONUS_BALANCE_COEFF * i64::from(values.balance_value)
            + REPLENISH_BONUS_REPLENISH_COEFF * i64::from(values.replenish_value)
    }

    pub fn withdraw_penalty(&self) -> i64 {
        let values = self.kind.values();
        WITHDRAW_PENALTY_BALANCE_COEFF * i64::from(values.balance_value)
            + WITHDRAW_PENALTY_REPLENISH_COEFF * i64::from(values.replenish_value)
    }

    pub fn closed(&self) -> bool {
        *self.is_closed.as_ref()
    }

    pub fn replenish(&mut self, amount: Decimal) -> error_stack::Result<(), KernelError> {
        self.ensure_open("replenish")?;
        ensure_not_negative(amount)?;

        let current: &Decimal = self.balance.as_ref();
        let balance = current.checked_add(amount).ok_or_else(|| {
            Report::new(KernelError::Validation)
                .attach_printable(format!("Balance overflow while adding {amount}"))
        })?;
        let balance = AccountBalance::new(balance)?;
        let bonus_points = self.bonus_points.credit(self.replenish_bonus());

        self.substitute(|account| {
            *account.balance = balance;
            *account.bonus_points = bonus_points;
        });
        Ok(())
    }

    /// Takes `amount` from the balance. Fails without touching the account
    /// if the balance would become negative.
    pub fn withdraw(&mut self, amount: Decimal) -> error_stack::Result<(), KernelError> {
        self.ensure_open("withdraw")?;
        ensure_not_negative(amount)?;

        let current: &Decimal = self.balance.as_ref();
        let remaining = *current - amount;
        if remaining.is_sign_negative() && !remaining.is_zero() {
            return Err(Report::new(KernelError::InsufficientFunds).attach_printable(format!(
                "Cannot withdraw {amount} from account {} with balance {current}",
                self.id.as_ref()
            )));
        }
        let balance = AccountBalance::new(remaining)?;
        let bonus_points = self.bonus_points.debit(self.withdraw_penalty());

        self.substitute(|account| {
            *account.balance = balance;
            *account.bonus_points = bonus_points;
        });
        Ok(())
    }

    /// Closing is permanent; closing twice is a no-op.
    pub fn close(&mut self) {
        self.is_closed = IsClosed::new(true);
    }

    fn ensure_open(&self, operation: &str) -> error_stack::Result<(), KernelError> {
        if self.closed() {
            return Err(Report::new(KernelError::AccountClosed).attach_printable(format!(
                "Cannot {operation} closed account {}",
                self.id.as_ref()
            )));
        }
        Ok(())
    }
}

fn ensure_not_negative(amount: Decimal) -> error_stack::Result<(), KernelError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("Amount cannot be less than zero: {amount}")));
    }
    Ok(())
}

// The closed flag takes no part in equality, and hashing follows equality.
impl PartialEq for BankAccount {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.balance == other.balance
            && self.bonus_points == other.bonus_points
    }
}

impl Eq for BankAccount {}

impl Hash for BankAccount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.balance.hash(state);
        self.bonus_points.hash(state);
    }
}

impl Display for BankAccount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let first_name: &String = self.first_name.as_ref();
        let last_name: &String = self.last_name.as_ref();
        let balance: &Decimal = self.balance.as_ref();
        let bonus_points: &i64 = self.bonus_points.as_ref();
        write!(
            f,
            "Id: {}; First name: {first_name}; Last name: {last_name}; Account type: {}; \
             Balance: {balance}; Bonus points: {bonus_points}; Closed: {}.",
            self.id.as_ref(),
            self.kind,
            self.closed()
        )
    }
}

impl Entity for BankAccount {
    const NAME: &'static str = "bank account";
}

#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use rust_decimal::Decimal;

    use crate::entity::{
        AccountBalance, AccountId, AccountKind, BankAccount, BonusPoints, FirstName, IsClosed,
        LastName,
    };
    use crate::KernelError;

    fn account(kind: AccountKind) -> BankAccount {
        BankAccount::new(
            AccountId::new(1),
            kind,
            FirstName::new("Alexander"),
            LastName::new("Yakusik"),
        )
    }

    fn hash_of(account: &BankAccount) -> u64 {
        let mut hasher = DefaultHasher::new();
        account.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn bonus_and_penalty_per_kind() {
        assert_eq!(account(AccountKind::Base).replenish_bonus(), 25);
        assert_eq!(account(AccountKind::Base).withdraw_penalty(), 16);
        assert_eq!(account(AccountKind::Gold).replenish_bonus(), 70);
        assert_eq!(account(AccountKind::Gold).withdraw_penalty(), 45);
        assert_eq!(account(AccountKind::Platinum).replenish_bonus(), 125);
        assert_eq!(account(AccountKind::Platinum).withdraw_penalty(), 80);
    }

    #[test]
    fn overdraw_leaves_account_untouched() {
        let mut base = account(AccountKind::Base);
        base.replenish(Decimal::from(2000)).unwrap();
        assert_eq!(base.balance().as_ref(), &Decimal::from(2000));
        assert_eq!(base.bonus_points().as_ref(), &25);

        let report = base.withdraw(Decimal::from(3000)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InsufficientFunds);
        assert_eq!(base.balance().as_ref(), &Decimal::from(2000));
        assert_eq!(base.bonus_points().as_ref(), &25);
    }

    #[test]
    fn withdraw_floors_bonus_points() {
        let mut platinum = account(AccountKind::Platinum);
        platinum.replenish(Decimal::from(2000)).unwrap();
        platinum.withdraw(Decimal::from(1500)).unwrap();
        assert_eq!(platinum.balance().as_ref(), &Decimal::from(500));
        assert_eq!(platinum.bonus_points().as_ref(), &45);

        platinum.withdraw(Decimal::from(500)).unwrap();
        assert_eq!(platinum.balance().as_ref(), &Decimal::ZERO);
        assert_eq!(platinum.bonus_points().as_ref(), &0);
    }

    #[test]
    fn closed_account_rejects_money_operations() {
        let mut gold = account(AccountKind::Gold);
        gold.replenish(Decimal::from(100)).unwrap();
        gold.close();
        gold.close();
        assert!(gold.closed());

        let report = gold.replenish(Decimal::from(100)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::AccountClosed);
        let report = gold.withdraw(Decimal::from(10)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::AccountClosed);
        assert_eq!(gold.balance().as_ref(), &Decimal::from(100));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut base = account(AccountKind::Base);
        let report = base.replenish(Decimal::from(-5)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
        let report = base.withdraw(Decimal::from(-5)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
        assert_eq!(base.bonus_points().as_ref(), &0);
    }

    #[test]
    fn equality_ignores_closed_flag() {
        let open = account(AccountKind::Gold);
        let mut closed = account(AccountKind::Gold);
        closed.close();
        assert_eq!(open, closed);
        assert_eq!(hash_of(&open), hash_of(&closed));

        assert_ne!(open, account(AccountKind::Base));

        let restored = BankAccount::restore(
            AccountId::new(1),
            AccountKind::Gold,
            FirstName::new("Alexander"),
            LastName::new("Yakusik"),
            AccountBalance::new(Decimal::from(10)).unwrap(),
            BonusPoints::new(0),
            IsClosed::new(false),
        );
        assert_ne!(open, restored);
    }

    #[test]
    fn display() {
        let mut gold = account(AccountKind::Gold);
        gold.replenish(Decimal::new(25050, 2)).unwrap();
        assert_eq!(
            gold.to_string(),
            "Id: 1; First name: Alexander; Last name: Yakusik; Account type: Gold; \
             Balance: 250.50; Bonus points: 70; Closed: false."
        );
    }
}
