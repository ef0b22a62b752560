use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use rust_decimal::Decimal;
use tracing::debug;

use kernel::interface::storage::Storage;
use kernel::prelude::entity::{
    AccountBalance, AccountId, AccountKind, BankAccount, BonusPoints, FirstName, IsClosed,
    LastName,
};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};
use crate::storage::binary::{read_records, write_records, BinaryReader, BinaryWriter};

/// Stores bank accounts as consecutive records, each led by the account kind tag.
///
/// Record layout: kind tag, id, first name, last name, balance,
/// bonus points, closed flag.
#[derive(Debug, Clone)]
pub struct BinaryBankAccountStorage {
    path: PathBuf,
}

impl BinaryBankAccountStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage<BankAccount> for BinaryBankAccountStorage {
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> error_stack::Result<Vec<BankAccount>, KernelError> {
        if !self.path.is_file() {
            return Err(Report::new(KernelError::NotFound).attach_printable(format!(
                "Bank account storage file does not exist: {}",
                self.path.display()
            )));
        }

        let records = read_records(&self.path, AccountRecord::read)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {}", self.path.display()))?;
        let accounts = records
            .into_iter()
            .map(BankAccount::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} bank accounts", accounts.len());
        Ok(accounts)
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, items: &[BankAccount]) -> error_stack::Result<(), KernelError> {
        write_records(&self.path, items, AccountRecord::write)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to write {}", self.path.display()))?;

        debug!("Saved {} bank accounts", items.len());
        Ok(())
    }
}

#[derive(Debug)]
struct AccountRecord {
    kind: String,
    id: i32,
    first_name: String,
    last_name: String,
    balance: Decimal,
    bonus_points: i64,
    is_closed: bool,
}

impl AccountRecord {
    fn read<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, DriverError> {
        Ok(Self {
            kind: reader.read_string()?,
            id: reader.read_i32()?,
            first_name: reader.read_string()?,
            last_name: reader.read_string()?,
            balance: reader.read_decimal()?,
            bonus_points: reader.read_i64()?,
            is_closed: reader.read_bool()?,
        })
    }

    fn write<W: Write>(
        writer: &mut BinaryWriter<W>,
        account: &BankAccount,
    ) -> Result<(), DriverError> {
        let first_name: &String = account.first_name().as_ref();
        let last_name: &String = account.last_name().as_ref();

        writer.write_string(account.kind().tag())?;
        writer.write_i32(*account.id().as_ref())?;
        writer.write_string(first_name)?;
        writer.write_string(last_name)?;
        writer.write_decimal(account.balance().as_ref())?;
        writer.write_i64(*account.bonus_points().as_ref())?;
        writer.write_bool(account.closed())?;
        Ok(())
    }
}

impl TryFrom<AccountRecord> for BankAccount {
    type Error = Report<KernelError>;
    fn try_from(value: AccountRecord) -> Result<Self, Self::Error> {
        let kind = AccountKind::from_tag(&value.kind).ok_or_else(|| {
            Report::new(KernelError::Storage)
                .attach_printable(format!("Unknown bank account kind: {}", value.kind))
        })?;
        Ok(BankAccount::restore(
            AccountId::new(value.id),
            kind,
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
            AccountBalance::new(value.balance)?,
            BonusPoints::new(value.bonus_points),
            IsClosed::new(value.is_closed),
        ))
    }
}
