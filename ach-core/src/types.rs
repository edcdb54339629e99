//! Domain codes and identifiers
//!
//! The code sets NACHA assigns to transactions, batches, and addenda, plus
//! the routing-number newtype and the file-scoped entry sequence counter.
//! All enums carry their wire code; amounts and totals live elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction code carried by an entry detail record.
///
/// Deposits and debits move money; pre-notification and remittance codes are
/// zero-dollar memos and count toward neither control total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionCode {
    /// 22: deposit to a checking account
    CheckingDeposit,
    /// 23: pre-notification of a checking credit
    PrenoteCheckingCredit,
    /// 24: remittance checking credit
    RemittanceCheckingCredit,
    /// 27: debit from a checking account
    CheckingDebit,
    /// 28: pre-notification of a checking debit
    PrenoteCheckingDebit,
    /// 29: remittance checking debit
    RemittanceCheckingDebit,
    /// 32: deposit to a savings account
    SavingsDeposit,
    /// 33: pre-notification of a savings credit
    PrenoteSavingsCredit,
    /// 34: remittance savings credit
    RemittanceSavingsCredit,
    /// 37: debit from a savings account
    SavingsDebit,
    /// 38: pre-notification of a savings debit
    PrenoteSavingsDebit,
    /// 39: remittance savings debit
    RemittanceSavingsDebit,
}

impl TransactionCode {
    /// Two-digit wire code.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionCode::CheckingDeposit => "22",
            TransactionCode::PrenoteCheckingCredit => "23",
            TransactionCode::RemittanceCheckingCredit => "24",
            TransactionCode::CheckingDebit => "27",
            TransactionCode::PrenoteCheckingDebit => "28",
            TransactionCode::RemittanceCheckingDebit => "29",
            TransactionCode::SavingsDeposit => "32",
            TransactionCode::PrenoteSavingsCredit => "33",
            TransactionCode::RemittanceSavingsCredit => "34",
            TransactionCode::SavingsDebit => "37",
            TransactionCode::PrenoteSavingsDebit => "38",
            TransactionCode::RemittanceSavingsDebit => "39",
        }
    }

    /// Parse from the two-digit wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "22" => Some(TransactionCode::CheckingDeposit),
            "23" => Some(TransactionCode::PrenoteCheckingCredit),
            "24" => Some(TransactionCode::RemittanceCheckingCredit),
            "27" => Some(TransactionCode::CheckingDebit),
            "28" => Some(TransactionCode::PrenoteCheckingDebit),
            "29" => Some(TransactionCode::RemittanceCheckingDebit),
            "32" => Some(TransactionCode::SavingsDeposit),
            "33" => Some(TransactionCode::PrenoteSavingsCredit),
            "34" => Some(TransactionCode::RemittanceSavingsCredit),
            "37" => Some(TransactionCode::SavingsDebit),
            "38" => Some(TransactionCode::PrenoteSavingsDebit),
            "39" => Some(TransactionCode::RemittanceSavingsDebit),
            _ => None,
        }
    }

    /// True for the codes that count toward the total debit amount.
    pub fn is_debit(&self) -> bool {
        matches!(
            self,
            TransactionCode::CheckingDebit | TransactionCode::SavingsDebit
        )
    }

    /// True for the codes that count toward the total credit amount.
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            TransactionCode::CheckingDeposit | TransactionCode::SavingsDeposit
        )
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Service class code of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceClass {
    /// 200: mixed debits and credits
    #[default]
    Mixed,
    /// 220: credits only
    Credit,
    /// 225: debits only
    Debit,
}

impl ServiceClass {
    /// Three-digit wire code.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceClass::Mixed => "200",
            ServiceClass::Credit => "220",
            ServiceClass::Debit => "225",
        }
    }

    /// Parse from the three-digit wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "200" => Some(ServiceClass::Mixed),
            "220" => Some(ServiceClass::Credit),
            "225" => Some(ServiceClass::Debit),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Standard entry class code of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum EntryClassCode {
    /// Prearranged payment and deposit
    #[default]
    Ppd,
    /// Corporate credit or debit
    Ccd,
    /// Corporate trade exchange
    Ctx,
    /// Internet-initiated entry
    Web,
    /// Point of sale
    Pos,
    /// Machine transfer entry
    Mte,
    /// Shared network transaction
    Shr,
    /// Telephone-initiated entry
    Tel,
}

impl EntryClassCode {
    /// Three-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            EntryClassCode::Ppd => "PPD",
            EntryClassCode::Ccd => "CCD",
            EntryClassCode::Ctx => "CTX",
            EntryClassCode::Web => "WEB",
            EntryClassCode::Pos => "POS",
            EntryClassCode::Mte => "MTE",
            EntryClassCode::Shr => "SHR",
            EntryClassCode::Tel => "TEL",
        }
    }
}

impl fmt::Display for EntryClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Addenda type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddendaType {
    /// 02: point of sale
    Pos,
    /// 02: machine transfer entry
    Mte,
    /// 02: shared network transaction
    Shr,
    /// 05: corporate credit or debit
    Ccd,
    /// 05: corporate trade exchange
    Ctx,
    /// 05: prearranged payment and deposit
    Ppd,
    /// 98: notification of change
    Change,
    /// 99: return
    Return,
}

impl AddendaType {
    /// Two-digit wire code.
    pub fn code(&self) -> &'static str {
        match self {
            AddendaType::Pos | AddendaType::Mte | AddendaType::Shr => "02",
            AddendaType::Ccd | AddendaType::Ctx | AddendaType::Ppd => "05",
            AddendaType::Change => "98",
            AddendaType::Return => "99",
        }
    }
}

/// Payment type code for single-entry vs. recurring payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    /// S: single entry
    SingleEntry,
    /// R: recurring
    Recurring,
}

impl PaymentType {
    /// One-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentType::SingleEntry => "S",
            PaymentType::Recurring => "R",
        }
    }
}

/// Nine-digit ABA routing number, check digit embedded.
///
/// The producer does not validate routing numbers before emission; callers
/// that want the checksum gate call [`RoutingNumber::is_valid`] themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RoutingNumber(String);

/// Checksum weights applied to the first eight routing digits.
const CHECK_DIGIT_WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];

impl RoutingNumber {
    /// Create from the full nine-digit number.
    pub fn new(routing: impl Into<String>) -> Self {
        Self(routing.into())
    }

    /// Get as string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check digit implied by the first eight digits, or `None` when the
    /// prefix is not eight decimal digits.
    pub fn check_digit(&self) -> Option<u32> {
        let prefix: Vec<u32> = self.0.chars().take(8).filter_map(|c| c.to_digit(10)).collect();
        if prefix.len() != 8 {
            return None;
        }
        let sum: u32 = prefix
            .iter()
            .zip(CHECK_DIGIT_WEIGHTS.iter())
            .map(|(d, w)| d * w)
            .sum();
        Some((10 - sum % 10) % 10)
    }

    /// True when the embedded ninth digit matches the computed checksum.
    pub fn is_valid(&self) -> bool {
        match (self.check_digit(), self.0.chars().nth(8)) {
            (Some(expected), Some(actual)) => {
                self.0.chars().count() == 9 && actual.to_digit(10) == Some(expected)
            }
            _ => false,
        }
    }

    /// Eight-digit prefix as an integer, the unit of entry-hash arithmetic.
    /// A non-numeric prefix contributes zero.
    pub fn hash_prefix(&self) -> u64 {
        self.0
            .chars()
            .take(8)
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

impl fmt::Display for RoutingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing entry sequence, scoped to one file.
///
/// Owned by the file aggregate and threaded into entry creation, so sequence
/// numbers stay unique and strictly increasing across every batch.
#[derive(Debug, Default)]
pub struct EntrySequence {
    last: u32,
}

impl EntrySequence {
    /// Create a sequence starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next sequence number.
    pub fn next_id(&mut self) -> u32 {
        self.last += 1;
        self.last
    }
}
