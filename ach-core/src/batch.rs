//! Batch aggregate
//!
//! A [`Batch`] groups entries that share company identification, entry class,
//! service class, and an effective entry date computed once at creation.
//! Totals are pure functions over the entry list; `finalize` freezes them
//! into an immutable [`BatchControl`] snapshot, after which the batch is
//! sealed against further appends.

use crate::entry::{Entry, EntrySpec};
use crate::error::{Error, Result};
use crate::fields::{encode_field, Justify, Sanitize};
use crate::layout;
use crate::records::BatchControl;
use crate::schedule::{self, HolidayCalendar};
use crate::types::{EntryClassCode, ServiceClass};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields of a new batch. `None` fields fall back to the
/// file-level defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSpec {
    /// Company (batch) name
    pub company_name: String,

    /// Originating DFI identification (8 digits)
    pub originating_dfi: String,

    /// Company discretionary data
    #[serde(default)]
    pub discretionary_data: String,

    /// Company identification; file default when absent
    #[serde(default)]
    pub company_identification: Option<String>,

    /// Standard entry class code; file default when absent
    #[serde(default)]
    pub entry_class: Option<EntryClassCode>,

    /// Company entry description; file default when absent
    #[serde(default)]
    pub entry_description: Option<String>,

    /// Service class code
    #[serde(default)]
    pub service_class: ServiceClass,

    /// Settlement delay in business days
    #[serde(default = "default_settlement_delay")]
    pub settlement_delay: u32,
}

fn default_settlement_delay() -> u32 {
    1
}

impl Default for BatchSpec {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            originating_dfi: String::new(),
            discretionary_data: String::new(),
            company_identification: None,
            entry_class: None,
            entry_description: None,
            service_class: ServiceClass::Mixed,
            settlement_delay: 1,
        }
    }
}

/// File-level fallbacks applied to batch specs.
#[derive(Debug, Clone)]
pub(crate) struct BatchDefaults {
    pub company_identification: String,
    pub entry_class: EntryClassCode,
    pub entry_description: String,
}

/// A service-class-homogeneous group of entries.
#[derive(Debug, Clone)]
pub struct Batch {
    company_name: String,
    discretionary_data: String,
    company_identification: String,
    entry_class: EntryClassCode,
    service_class: ServiceClass,
    entry_description: String,
    descriptive_date: String,
    effective_entry_date: NaiveDate,
    originating_dfi: String,
    batch_number: u32,
    entries: Vec<Entry>,
    control: Option<BatchControl>,
}

impl Batch {
    pub(crate) fn new(
        spec: BatchSpec,
        defaults: &BatchDefaults,
        batch_number: u32,
        today: NaiveDate,
        calendar: &dyn HolidayCalendar,
    ) -> Self {
        let effective_entry_date =
            schedule::effective_entry_date(today, spec.settlement_delay, calendar);
        Self {
            company_name: spec.company_name,
            discretionary_data: spec.discretionary_data,
            company_identification: spec
                .company_identification
                .unwrap_or_else(|| defaults.company_identification.clone()),
            entry_class: spec.entry_class.unwrap_or(defaults.entry_class),
            service_class: spec.service_class,
            entry_description: spec
                .entry_description
                .unwrap_or_else(|| defaults.entry_description.clone()),
            descriptive_date: schedule::format_yymmdd(today),
            effective_entry_date,
            originating_dfi: spec.originating_dfi,
            batch_number,
            entries: Vec::new(),
            control: None,
        }
    }

    /// Batch number, dense from 1 in file creation order.
    pub fn batch_number(&self) -> u32 {
        self.batch_number
    }

    /// Effective entry date computed at batch creation.
    pub fn effective_entry_date(&self) -> NaiveDate {
        self.effective_entry_date
    }

    /// Entries in sequence-number order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Detail count: entries plus their addenda.
    pub fn entry_count(&self) -> usize {
        self.entries.len() + self.entries.iter().map(Entry::addenda_count).sum::<usize>()
    }

    /// Entry hash: sum of the entries' 8-digit routing prefixes.
    pub fn entry_hash(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.routing_number.hash_prefix())
            .sum()
    }

    /// Sum of the amounts of debit-classified entries.
    pub fn total_debit_amount(&self) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| entry.transaction_code.is_debit())
            .map(|entry| entry.amount)
            .sum()
    }

    /// Sum of the amounts of credit-classified entries.
    pub fn total_credit_amount(&self) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| entry.transaction_code.is_credit())
            .map(|entry| entry.amount)
            .sum()
    }

    /// True once `finalize` has frozen the control record.
    pub fn is_finalized(&self) -> bool {
        self.control.is_some()
    }

    /// Append an entry created with the given file-scoped sequence number.
    pub(crate) fn push_entry(&mut self, spec: EntrySpec, sequence_number: u32) -> Result<&mut Entry> {
        if self.is_finalized() {
            return Err(Error::BatchSealed(self.batch_number));
        }
        self.entries
            .push(Entry::new(spec, &self.originating_dfi, sequence_number));
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    /// Compute the control totals and freeze them into the batch control
    /// record. Idempotent; the batch accepts no entries afterwards.
    pub fn finalize(&mut self) {
        if self.control.is_some() {
            return;
        }
        self.control = Some(BatchControl {
            service_class: self.service_class,
            entry_count: self.entry_count(),
            entry_hash: self.entry_hash(),
            total_debit_amount: self.total_debit_amount(),
            total_credit_amount: self.total_credit_amount(),
            company_identification: self.company_identification.clone(),
            originating_dfi: self.originating_dfi.clone(),
            batch_number: self.batch_number,
        });
        tracing::debug!(
            "Finalized batch {} ({} entries, {} detail records)",
            self.batch_number,
            self.entries.len(),
            self.entry_count()
        );
    }

    /// Frozen control record; an error before `finalize` has run.
    pub fn control(&self) -> Result<&BatchControl> {
        self.control
            .as_ref()
            .ok_or(Error::NotFinalized(self.batch_number))
    }

    /// Emit the 94-character batch header line.
    pub fn generate_header(&self) -> String {
        use layout::batch_header as widths;

        let mut line = String::with_capacity(layout::RECORD_WIDTH);
        line.push_str(&encode_field(
            "5",
            widths::RECORD_TYPE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            self.service_class.code(),
            widths::SERVICE_CLASS_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.company_name,
            widths::COMPANY_NAME,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.discretionary_data,
            widths::DISCRETIONARY_DATA,
            Justify::Left,
            Sanitize::Keep,
        ));
        line.push_str(&encode_field(
            &self.company_identification,
            widths::COMPANY_IDENTIFICATION,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            self.entry_class.code(),
            widths::ENTRY_CLASS_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.entry_description,
            widths::ENTRY_DESCRIPTION,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.descriptive_date,
            widths::DESCRIPTIVE_DATE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &schedule::format_yymmdd(self.effective_entry_date),
            widths::EFFECTIVE_ENTRY_DATE,
            Justify::Left,
            Sanitize::Strip,
        ));
        // Settlement date is filled in by the receiving bank.
        line.push_str(&encode_field(
            "",
            widths::SETTLEMENT_DATE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            "1",
            widths::ORIGINATOR_STATUS_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.originating_dfi,
            widths::ORIGINATING_DFI_IDENTIFICATION,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.batch_number.to_string(),
            widths::BATCH_NUMBER,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line
    }

    /// Emit the 94-character batch control line. An error before `finalize`.
    pub fn generate_control(&self) -> Result<String> {
        Ok(self.control()?.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::NoHolidays;
    use crate::types::{RoutingNumber, TransactionCode};

    fn defaults() -> BatchDefaults {
        BatchDefaults {
            company_identification: "1232789456".to_string(),
            entry_class: EntryClassCode::Ppd,
            entry_description: "TestPay".to_string(),
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 6, 20).unwrap()
    }

    fn sample_batch() -> Batch {
        Batch::new(
            BatchSpec {
                company_name: "TESTBATCH".to_string(),
                originating_dfi: "19283746".to_string(),
                discretionary_data: "Valar Morghulis".to_string(),
                ..BatchSpec::default()
            },
            &defaults(),
            1,
            monday(),
            &NoHolidays,
        )
    }

    fn entry_spec(code: TransactionCode, amount: Decimal) -> EntrySpec {
        EntrySpec {
            transaction_code: code,
            routing_number: RoutingNumber::new("123456789"),
            account_number: "918273645".to_string(),
            amount,
            identification: "675849302123".to_string(),
            receiver_name: "jaqen h'ghar".to_string(),
            discretionary_data: String::new(),
        }
    }

    #[test]
    fn test_batch_header_line_layout() {
        let line = sample_batch().generate_header();
        assert_eq!(line.len(), 94);
        assert_eq!(&line[0..1], "5");
        assert_eq!(&line[1..4], "200");
        assert_eq!(line[4..20].trim(), "TESTBATCH");
        assert_eq!(line[20..40].trim(), "Valar Morghulis");
        assert_eq!(&line[40..50], "1232789456");
        assert_eq!(&line[50..53], "PPD");
        assert_eq!(line[53..63].trim(), "TestPay");
        assert_eq!(&line[63..69], "160620");
        assert_eq!(&line[69..75], "160621");
        assert_eq!(&line[75..78], "   ");
        assert_eq!(&line[78..79], "1");
        assert_eq!(&line[79..87], "19283746");
        assert_eq!(&line[87..94], "0000001");
    }

    #[test]
    fn test_totals_classify_by_transaction_code() {
        let mut batch = sample_batch();
        batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDeposit, Decimal::new(142389, 2)),
                1,
            )
            .unwrap();
        batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDebit, Decimal::new(4_440_300, 2)),
                2,
            )
            .unwrap();
        batch
            .push_entry(
                entry_spec(TransactionCode::PrenoteCheckingCredit, Decimal::ZERO),
                3,
            )
            .unwrap();

        assert_eq!(batch.total_credit_amount(), Decimal::new(142389, 2));
        assert_eq!(batch.total_debit_amount(), Decimal::new(4_440_300, 2));
    }

    #[test]
    fn test_entry_count_includes_addenda() {
        let mut batch = sample_batch();
        let entry = batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDeposit, Decimal::new(100, 2)),
                1,
            )
            .unwrap();
        entry.push_addenda("test", crate::types::AddendaType::Ppd);
        batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDebit, Decimal::new(100, 2)),
                2,
            )
            .unwrap();

        assert_eq!(batch.entry_count(), 3);
    }

    #[test]
    fn test_entry_hash_sums_routing_prefixes() {
        let mut batch = sample_batch();
        batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDeposit, Decimal::new(100, 2)),
                1,
            )
            .unwrap();
        let mut spec = entry_spec(TransactionCode::CheckingDebit, Decimal::new(100, 2));
        spec.routing_number = RoutingNumber::new("987654321");
        batch.push_entry(spec, 2).unwrap();

        assert_eq!(batch.entry_hash(), 12_345_678 + 98_765_432);
    }

    #[test]
    fn test_finalize_seals_the_batch() {
        let mut batch = sample_batch();
        batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDeposit, Decimal::new(100, 2)),
                1,
            )
            .unwrap();

        assert!(batch.control().is_err());
        batch.finalize();
        assert!(batch.is_finalized());
        assert!(batch.control().is_ok());

        let result = batch.push_entry(
            entry_spec(TransactionCode::CheckingDebit, Decimal::new(100, 2)),
            2,
        );
        assert!(matches!(result, Err(Error::BatchSealed(1))));
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut batch = sample_batch();
        batch
            .push_entry(
                entry_spec(TransactionCode::CheckingDeposit, Decimal::new(100, 2)),
                1,
            )
            .unwrap();
        batch.finalize();
        let first = batch.generate_control().unwrap();
        batch.finalize();
        assert_eq!(batch.generate_control().unwrap(), first);
    }
}
