use error_stack::Report;
use rust_decimal::Decimal;

use kernel::interface::logger::Logger;
use kernel::interface::predicate::AccountHasId;
use kernel::prelude::entity::BankAccount;
use kernel::KernelError;

use crate::service::ListService;
use crate::transfer::CreateBankAccountDto;

pub type BankAccountListService<L> = ListService<BankAccount, L>;

impl<L: Logger> ListService<BankAccount, L> {
    pub fn open_account(
        &mut self,
        dto: CreateBankAccountDto,
    ) -> error_stack::Result<BankAccount, KernelError> {
        let account = BankAccount::from(dto);
        self.add(account.clone())?;
        Ok(account)
    }

    pub fn replenish(&mut self, id: i32, amount: Decimal) -> error_stack::Result<(), KernelError> {
        self.account_mut(id)?.replenish(amount)?;
        self.logger()
            .info(&format!("Replenished account {id} with {amount}"));
        Ok(())
    }

    pub fn withdraw(&mut self, id: i32, amount: Decimal) -> error_stack::Result<(), KernelError> {
        self.account_mut(id)?.withdraw(amount)?;
        self.logger()
            .info(&format!("Withdrew {amount} from account {id}"));
        Ok(())
    }

    pub fn close(&mut self, id: i32) -> error_stack::Result<(), KernelError> {
        self.account_mut(id)?.close();
        self.logger().info(&format!("Closed account {id}"));
        Ok(())
    }

    fn account_mut(&mut self, id: i32) -> error_stack::Result<&mut BankAccount, KernelError> {
        self.find_mut(&AccountHasId(id)).ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("No bank account with id {id}"))
        })
    }
}
