//! ACH Core
//!
//! Producer of NACHA-formatted ACH payment files: fixed-width, line-oriented
//! interchange files built from a strict record hierarchy (file header,
//! batches, entries, addenda, batch control, file control).
//!
//! # Architecture
//!
//! - **Fixed-width discipline**: every field of every record passes through
//!   one encoder; every emitted line is exactly 94 characters
//! - **Derived totals**: counts, entry hashes, and debit/credit sums are
//!   computed from the detail records at finalize time and frozen into
//!   immutable control snapshots
//! - **Block padding**: output is padded with filler lines to a whole number
//!   of 10-line blocks
//! - **Write-only pipeline**: build, finalize, emit; nothing reads files back
//!
//! # Invariants
//!
//! - Entry sequence numbers are unique and strictly increasing file-wide
//! - Batch numbers are dense from 1 in creation order
//! - Control totals reconcile exactly with the entries they summarize
//! - Total emitted line count is always a multiple of 10
//!
//! # Example
//!
//! ```no_run
//! use ach_core::{AchFile, BatchSpec, EntrySpec, FileSpec, RoutingNumber, TransactionCode};
//! use rust_decimal::Decimal;
//!
//! fn main() -> ach_core::Result<()> {
//!     let mut file = AchFile::new(FileSpec {
//!         immediate_destination: "123456789".to_string(),
//!         immediate_origin: "1232789456".to_string(),
//!         destination_name: "FIRST NATIONAL".to_string(),
//!         origin_name: "ACME PAYROLL".to_string(),
//!         ..FileSpec::default()
//!     });
//!
//!     let batch = file.new_batch(BatchSpec {
//!         company_name: "ACME".to_string(),
//!         originating_dfi: "19283746".to_string(),
//!         ..BatchSpec::default()
//!     })?;
//!
//!     file.add_entry(batch, EntrySpec {
//!         transaction_code: TransactionCode::CheckingDeposit,
//!         routing_number: RoutingNumber::new("021000021"),
//!         account_number: "918273645".to_string(),
//!         amount: Decimal::new(142389, 2),
//!         identification: "EMP-0042".to_string(),
//!         receiver_name: "JON ARRYN".to_string(),
//!         discretionary_data: String::new(),
//!     })?;
//!
//!     file.save("out/ach/payroll.ach")?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod batch;
pub mod config;
pub mod entry;
pub mod error;
pub mod fields;
pub mod file;
pub mod layout;
pub mod records;
pub mod schedule;
pub mod types;

// Re-exports
pub use batch::{Batch, BatchSpec};
pub use config::OriginatorConfig;
pub use entry::{Addenda, Entry, EntrySpec};
pub use error::{Error, Result};
pub use fields::{encode_field, Justify, Sanitize};
pub use file::{AchFile, BatchId, FileSpec};
pub use records::{BatchControl, FileControl, FileHeader};
pub use schedule::{
    effective_entry_date, format_yymmdd, next_banking_day, HolidayCalendar, HolidaySet, NoHolidays,
};
pub use types::{
    AddendaType, EntryClassCode, EntrySequence, PaymentType, RoutingNumber, ServiceClass,
    TransactionCode,
};
