//! Entry detail and addenda records
//!
//! An [`Entry`] is one payment instruction. It is created by its batch with
//! a file-scoped sequence number, owns its [`Addenda`] records, and is
//! immutable once generated except for appended addenda.

use crate::fields::{encode_amount, encode_field, Justify, Sanitize};
use crate::layout;
use crate::types::{AddendaType, RoutingNumber, TransactionCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields of a new entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySpec {
    /// Transaction code
    pub transaction_code: TransactionCode,

    /// Receiving routing number, check digit embedded
    pub routing_number: RoutingNumber,

    /// Receiving account number
    pub account_number: String,

    /// Payment amount (exact decimal)
    pub amount: Decimal,

    /// Individual identification number
    pub identification: String,

    /// Receiver name
    pub receiver_name: String,

    /// Discretionary data
    #[serde(default)]
    pub discretionary_data: String,
}

/// One payment instruction within a batch.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Transaction code
    pub transaction_code: TransactionCode,

    /// Receiving routing number, check digit embedded
    pub routing_number: RoutingNumber,

    /// Receiving account number
    pub account_number: String,

    /// Payment amount (exact decimal)
    pub amount: Decimal,

    /// Individual identification number
    pub identification: String,

    /// Receiver name
    pub receiver_name: String,

    /// Discretionary data
    pub discretionary_data: String,

    /// File-scoped sequence number, assigned at creation
    sequence_number: u32,

    /// Originating DFI identification, the trace-number prefix
    originating_dfi: String,

    /// Owned addenda records
    addenda: Vec<Addenda>,
}

impl Entry {
    pub(crate) fn new(spec: EntrySpec, originating_dfi: &str, sequence_number: u32) -> Self {
        Self {
            transaction_code: spec.transaction_code,
            routing_number: spec.routing_number,
            account_number: spec.account_number,
            amount: spec.amount,
            identification: spec.identification,
            receiver_name: spec.receiver_name,
            discretionary_data: spec.discretionary_data,
            sequence_number,
            originating_dfi: originating_dfi.to_string(),
            addenda: Vec::new(),
        }
    }

    /// File-scoped sequence number.
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// Trace number: originating DFI id followed by the zero-padded
    /// sequence number.
    pub fn trace_number(&self) -> String {
        let digits = layout::entry::TRACE_NUMBER.saturating_sub(self.originating_dfi.chars().count());
        format!(
            "{}{:0>width$}",
            self.originating_dfi,
            self.sequence_number,
            width = digits
        )
    }

    /// True when the entry carries at least one addenda record.
    pub fn has_addenda(&self) -> bool {
        !self.addenda.is_empty()
    }

    /// Number of owned addenda records.
    pub fn addenda_count(&self) -> usize {
        self.addenda.len()
    }

    /// Owned addenda records, in sequence order.
    pub fn addenda(&self) -> &[Addenda] {
        &self.addenda
    }

    /// Append an addenda record. The addenda sequence is 1-based and scoped
    /// to this entry.
    pub fn push_addenda(&mut self, payment_information: impl Into<String>, type_code: AddendaType) {
        let entry_reference = format!(
            "{:0>width$}",
            self.sequence_number,
            width = layout::addenda::ENTRY_RECORD_ID
        );
        let addenda = Addenda {
            type_code,
            payment_information: payment_information.into(),
            sequence: self.addenda.len() + 1,
            entry_reference,
        };
        self.addenda.push(addenda);
    }

    /// Emit the 94-character entry detail line.
    pub fn generate(&self) -> String {
        use layout::entry as widths;

        let mut line = String::with_capacity(layout::RECORD_WIDTH);
        line.push_str(&encode_field(
            "6",
            widths::RECORD_TYPE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            self.transaction_code.code(),
            widths::TRANSACTION_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            self.routing_number.as_str(),
            widths::RECEIVING_DFI_ID,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.account_number,
            widths::DFI_ACCOUNT_NUMBER,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_amount(self.amount, widths::DOLLAR_AMOUNT));
        line.push_str(&encode_field(
            &self.identification,
            widths::INDIVIDUAL_IDENTIFICATION,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.receiver_name,
            widths::INDIVIDUAL_NAME,
            Justify::Left,
            Sanitize::Keep,
        ));
        line.push_str(&encode_field(
            &self.discretionary_data,
            widths::DISCRETIONARY_DATA,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            if self.has_addenda() { "1" } else { "0" },
            widths::ADDENDA_INDICATOR,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.trace_number(),
            widths::TRACE_NUMBER,
            Justify::Left,
            Sanitize::Strip,
        ));
        line
    }
}

/// Supplemental free-text record owned by exactly one entry.
#[derive(Debug, Clone)]
pub struct Addenda {
    /// Addenda type code
    pub type_code: AddendaType,

    /// Payment related information, up to 80 characters
    pub payment_information: String,

    /// 1-based sequence number, unique within the parent entry
    pub sequence: usize,

    /// Zero-padded sequence number of the parent entry
    pub entry_reference: String,
}

impl Addenda {
    /// Emit the 94-character addenda line.
    pub fn generate(&self) -> String {
        use layout::addenda as widths;

        let mut line = String::with_capacity(layout::RECORD_WIDTH);
        line.push_str(&encode_field(
            "7",
            widths::RECORD_TYPE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            self.type_code.code(),
            widths::TYPE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.payment_information,
            widths::PAYMENT_INFORMATION,
            Justify::Left,
            Sanitize::Keep,
        ));
        line.push_str(&encode_field(
            &self.sequence.to_string(),
            widths::SEQUENCE,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.entry_reference,
            widths::ENTRY_RECORD_ID,
            Justify::Left,
            Sanitize::Strip,
        ));
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(sequence: u32) -> Entry {
        Entry::new(
            EntrySpec {
                transaction_code: TransactionCode::CheckingDeposit,
                routing_number: RoutingNumber::new("123456789"),
                account_number: "918273645".to_string(),
                amount: Decimal::new(123456789, 2),
                identification: "675849302123".to_string(),
                receiver_name: "jaqen h'ghar".to_string(),
                discretionary_data: String::new(),
            },
            "19283746",
            sequence,
        )
    }

    #[test]
    fn test_trace_number_pads_sequence_to_field_width() {
        assert_eq!(sample_entry(1).trace_number(), "192837460000001");
        assert_eq!(sample_entry(42).trace_number(), "192837460000042");
    }

    #[test]
    fn test_entry_line_layout() {
        let entry = sample_entry(1);
        let line = entry.generate();
        assert_eq!(line.len(), 94);
        assert_eq!(&line[0..1], "6");
        assert_eq!(&line[1..3], "22");
        assert_eq!(&line[3..12], "123456789");
        assert_eq!(line[12..29].trim(), "918273645");
        assert_eq!(&line[29..39], "0123456789");
        assert_eq!(line[39..54].trim(), "675849302123");
        assert_eq!(line[54..76].trim(), "jaqen h'ghar");
        assert_eq!(&line[76..78], "  ");
        assert_eq!(&line[78..79], "0");
        assert_eq!(&line[79..94], "192837460000001");
    }

    #[test]
    fn test_addenda_flips_indicator() {
        let mut entry = sample_entry(1);
        assert!(!entry.has_addenda());

        entry.push_addenda("INVOICE 1001", AddendaType::Ppd);
        assert!(entry.has_addenda());
        assert_eq!(entry.addenda_count(), 1);
        assert_eq!(&entry.generate()[78..79], "1");
    }

    #[test]
    fn test_addenda_line_layout() {
        let mut entry = sample_entry(3);
        entry.push_addenda("test", AddendaType::Ccd);

        let line = entry.addenda()[0].generate();
        assert_eq!(line.len(), 94);
        assert_eq!(&line[0..1], "7");
        assert_eq!(&line[1..3], "05");
        assert_eq!(line[3..83].trim(), "test");
        assert_eq!(&line[83..87], "0001");
        assert_eq!(&line[87..94], "0000003");
    }

    #[test]
    fn test_addenda_sequence_is_per_entry() {
        let mut entry = sample_entry(1);
        entry.push_addenda("first", AddendaType::Ppd);
        entry.push_addenda("second", AddendaType::Ppd);

        assert_eq!(entry.addenda()[0].sequence, 1);
        assert_eq!(entry.addenda()[1].sequence, 2);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let entry = sample_entry(7);
        assert_eq!(entry.generate(), entry.generate());
    }
}
