use rust_decimal::Decimal;

use application::service::BankAccountListService;
use application::transfer::CreateBankAccountDto;
use driver::config::StorageConfig;
use driver::logger::TracingLogger;
use driver::storage::BinaryBankAccountStorage;
use kernel::interface::predicate::AccountHasId;
use kernel::prelude::entity::{AccountKind, BankAccount};
use kernel::KernelError;

use crate::error::expect_failure;

pub fn run(config: &StorageConfig) -> error_stack::Result<(), KernelError> {
    let mut first = BankAccount::from(CreateBankAccountDto {
        id: 1,
        kind: AccountKind::Platinum,
        first_name: String::from("Alexander"),
        last_name: String::from("Yakusik"),
    });
    let mut second = BankAccount::from(CreateBankAccountDto {
        id: 2,
        kind: AccountKind::Gold,
        first_name: String::from("Daniil"),
        last_name: String::from("Gasyul"),
    });

    println!("\n\nFirst account: {first}");
    println!("\nSecond account: {second}");

    println!(
        "\nFirst account replenish bonus: {}, withdraw penalty: {}",
        first.replenish_bonus(),
        first.withdraw_penalty()
    );
    println!(
        "Second account replenish bonus: {}, withdraw penalty: {}",
        second.replenish_bonus(),
        second.withdraw_penalty()
    );

    println!("\nReplenishing each account with 2000.");
    first.replenish(Decimal::from(2000))?;
    second.replenish(Decimal::from(2000))?;

    println!("\nFirst account bonus points: {}", first.bonus_points().as_ref());
    println!("Second account bonus points: {}", second.bonus_points().as_ref());

    println!("\nTrying to withdraw more money than there actually is.");
    if expect_failure(first.withdraw(Decimal::from(3000)), KernelError::InsufficientFunds)? {
        println!("Successfully withdrawn 3000.");
    } else {
        println!("Unable to withdraw 3000.");
    }

    println!("\nWithdrawing 1500 from each account.");
    first.withdraw(Decimal::from(1500))?;
    second.withdraw(Decimal::from(1500))?;

    println!("\nFirst account bonus points: {}", first.bonus_points().as_ref());
    println!("Second account bonus points: {}", second.bonus_points().as_ref());

    println!("\nClosing first account");
    first.close();

    println!("\nTrying to replenish closed account with 100.");
    if expect_failure(first.replenish(Decimal::from(100)), KernelError::AccountClosed)? {
        println!("Replenished account successfully.");
    } else {
        println!("Couldn't replenish closed account.");
    }

    let storage = BinaryBankAccountStorage::new(config.account_path());
    let mut service = BankAccountListService::new(TracingLogger::new("accounts"));

    println!("\n\nAdding first account to the list.");
    service.add(first.clone())?;

    println!("\nTrying to add first account once again.");
    if expect_failure(service.add(first), KernelError::AlreadyExists)? {
        println!("Successfully added first account once again.");
    } else {
        println!("Cannot add existing account.");
    }
    service.add(second)?;
    service.replenish(2, Decimal::from(250))?;
    if let Some(account) = service.find(&AccountHasId(2)) {
        println!("\nSecond account after replenishing in the list: {account}");
    }

    println!("\nSaving all accounts to storage.");
    service.save_to_storage(&storage)?;

    println!("Removing all accounts from the list.");
    service.remove_all();

    println!("Loading accounts from storage.");
    service.load_from_storage(&storage)?;

    println!("Loaded accounts:");
    for account in service.get_all() {
        println!("\n{account}");
    }

    Ok(())
}
