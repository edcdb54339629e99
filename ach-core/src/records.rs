//! File header and control records
//!
//! The header/footer record types that frame a file: type 1 (file header),
//! type 8 (batch control), and type 9 (file control). Control records are
//! materialized by `finalize`/`save` from derived totals and are immutable
//! snapshots; `generate` serializes them without touching state.

use crate::fields::{encode_amount, encode_field, Justify, Sanitize};
use crate::layout;
use crate::types::ServiceClass;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Last ten decimal digits of an entry-hash sum, the wire form of the hash.
pub(crate) fn hash_field(sum: u64) -> String {
    let digits = sum.to_string();
    let width = layout::batch_control::ENTRY_HASH;
    if digits.len() > width {
        digits[digits.len() - width..].to_string()
    } else {
        digits
    }
}

/// File header record (type 1).
#[derive(Debug, Clone)]
pub struct FileHeader {
    /// Immediate destination routing number
    pub immediate_destination: String,

    /// Immediate origin identification
    pub immediate_origin: String,

    /// Immediate destination name
    pub destination_name: String,

    /// Immediate origin name
    pub origin_name: String,

    /// Reference code
    pub reference_code: String,

    /// File creation timestamp, fixed at construction
    pub creation: NaiveDateTime,

    /// File ID modifier letter, A for the first file of the day
    pub file_id_modifier: char,
}

impl FileHeader {
    /// Emit the 94-character file header line.
    pub fn generate(&self) -> String {
        use layout::file_header as widths;

        let mut line = String::with_capacity(layout::RECORD_WIDTH);
        line.push_str(&encode_field(
            "1",
            widths::RECORD_TYPE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        // 01 is the only priority code NACHA supports.
        line.push_str(&encode_field(
            "01",
            widths::PRIORITY_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.immediate_destination,
            widths::IMMEDIATE_DESTINATION,
            Justify::Right,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.immediate_origin,
            widths::IMMEDIATE_ORIGIN,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.creation.format("%y%m%d").to_string(),
            widths::FILE_CREATION_DATE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.creation.format("%H%M").to_string(),
            widths::FILE_CREATION_TIME,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.file_id_modifier.to_string(),
            widths::FILE_ID_MODIFIER,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            "094",
            widths::RECORD_SIZE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            "10",
            widths::BLOCKING_FACTOR,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            "1",
            widths::FORMAT_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.destination_name,
            widths::IMMEDIATE_DESTINATION_NAME,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.origin_name,
            widths::IMMEDIATE_ORIGIN_NAME,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.reference_code,
            widths::REFERENCE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line
    }
}

/// Batch control record (type 8), frozen by `Batch::finalize`.
#[derive(Debug, Clone)]
pub struct BatchControl {
    /// Service class code
    pub service_class: ServiceClass,

    /// Entry and addenda count
    pub entry_count: usize,

    /// Entry hash: sum of the 8-digit routing prefixes of the entries
    pub entry_hash: u64,

    /// Total debit amount
    pub total_debit_amount: Decimal,

    /// Total credit amount
    pub total_credit_amount: Decimal,

    /// Company identification
    pub company_identification: String,

    /// Originating DFI identification
    pub originating_dfi: String,

    /// Batch number
    pub batch_number: u32,
}

impl BatchControl {
    /// Emit the 94-character batch control line.
    pub fn generate(&self) -> String {
        use layout::batch_control as widths;

        let mut line = String::with_capacity(layout::RECORD_WIDTH);
        line.push_str(&encode_field(
            "8",
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
            &self.entry_count.to_string(),
            widths::DETAIL_COUNT,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &hash_field(self.entry_hash),
            widths::ENTRY_HASH,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_amount(
            self.total_debit_amount,
            widths::TOTAL_DEBIT_AMOUNT,
        ));
        line.push_str(&encode_amount(
            self.total_credit_amount,
            widths::TOTAL_CREDIT_AMOUNT,
        ));
        line.push_str(&encode_field(
            &self.company_identification,
            widths::COMPANY_IDENTIFICATION,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        // Authentication code and reserved stay blank.
        line.push_str(&encode_field(
            "",
            widths::AUTHENTICATION_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            "",
            widths::RESERVED,
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
}

/// File control record (type 9), materialized at save time.
#[derive(Debug, Clone)]
pub struct FileControl {
    /// Batch count
    pub batch_count: usize,

    /// Block count
    pub block_count: usize,

    /// Entry and addenda count across all batches
    pub entry_count: usize,

    /// Entry hash: sum of the batch entry hashes
    pub entry_hash: u64,

    /// Total debit amount across all batches
    pub total_debit_amount: Decimal,

    /// Total credit amount across all batches
    pub total_credit_amount: Decimal,
}

impl FileControl {
    /// Emit the 94-character file control line.
    pub fn generate(&self) -> String {
        use layout::file_control as widths;

        let mut line = String::with_capacity(layout::RECORD_WIDTH);
        line.push_str(&encode_field(
            "9",
            widths::RECORD_TYPE_CODE,
            Justify::Left,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.batch_count.to_string(),
            widths::BATCH_COUNT,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.block_count.to_string(),
            widths::BLOCK_COUNT,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &self.entry_count.to_string(),
            widths::DETAIL_COUNT,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_field(
            &hash_field(self.entry_hash),
            widths::ENTRY_HASH,
            Justify::RightZero,
            Sanitize::Strip,
        ));
        line.push_str(&encode_amount(
            self.total_debit_amount,
            widths::TOTAL_DEBIT_AMOUNT,
        ));
        line.push_str(&encode_amount(
            self.total_credit_amount,
            widths::TOTAL_CREDIT_AMOUNT,
        ));
        line.push_str(&encode_field(
            "",
            widths::RESERVED,
            Justify::Left,
            Sanitize::Strip,
        ));
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_header() -> FileHeader {
        FileHeader {
            immediate_destination: "123456789".to_string(),
            immediate_origin: "1232789456".to_string(),
            destination_name: "TheIronBankOfBravos".to_string(),
            origin_name: "AryaStark".to_string(),
            reference_code: "ETOOREAL".to_string(),
            creation: NaiveDate::from_ymd_opt(2016, 5, 17)
                .unwrap()
                .and_hms_opt(11, 8, 0)
                .unwrap(),
            file_id_modifier: 'A',
        }
    }

    #[test]
    fn test_file_header_line_layout() {
        let line = sample_header().generate();
        assert_eq!(line.len(), 94);
        assert_eq!(&line[0..1], "1");
        assert_eq!(&line[1..3], "01");
        assert_eq!(&line[3..13], " 123456789");
        assert_eq!(&line[13..23], "1232789456");
        assert_eq!(&line[23..29], "160517");
        assert_eq!(&line[29..33], "1108");
        assert_eq!(&line[33..34], "A");
        assert_eq!(&line[34..37], "094");
        assert_eq!(&line[37..39], "10");
        assert_eq!(&line[39..40], "1");
        assert_eq!(line[40..63].trim(), "TheIronBankOfBravos");
        assert_eq!(line[63..86].trim(), "AryaStark");
        assert_eq!(line[86..94].trim(), "ETOOREAL");
    }

    #[test]
    fn test_file_header_generate_does_not_advance_modifier() {
        let header = sample_header();
        let first = header.generate();
        let second = header.generate();
        assert_eq!(first, second);
        assert_eq!(header.file_id_modifier, 'A');
    }

    #[test]
    fn test_hash_field_keeps_last_ten_digits() {
        assert_eq!(hash_field(111_111_110), "111111110");
        assert_eq!(hash_field(123_456_789_012), "3456789012");
    }

    #[test]
    fn test_batch_control_line_layout() {
        let control = BatchControl {
            service_class: ServiceClass::Mixed,
            entry_count: 15,
            entry_hash: 123_456_780,
            total_debit_amount: Decimal::new(99_493_403, 2),
            total_credit_amount: Decimal::new(99_493_403, 2),
            company_identification: "1232789456".to_string(),
            originating_dfi: "19283746".to_string(),
            batch_number: 1,
        };

        let line = control.generate();
        assert_eq!(line.len(), 94);
        assert_eq!(&line[0..1], "8");
        assert_eq!(&line[1..4], "200");
        assert_eq!(&line[4..10], "000015");
        assert_eq!(&line[10..20], "0123456780");
        assert_eq!(&line[20..32], "000099493403");
        assert_eq!(&line[32..44], "000099493403");
        assert_eq!(&line[44..54], "1232789456");
        assert_eq!(&line[54..73], " ".repeat(19));
        assert_eq!(&line[73..79], " ".repeat(6));
        assert_eq!(&line[79..87], "19283746");
        assert_eq!(&line[87..94], "0000001");
    }

    #[test]
    fn test_file_control_line_layout() {
        let control = FileControl {
            batch_count: 1,
            block_count: 2,
            entry_count: 15,
            entry_hash: 123_456_780,
            total_debit_amount: Decimal::new(99_493_403, 2),
            total_credit_amount: Decimal::new(99_493_403, 2),
        };

        let line = control.generate();
        assert_eq!(line.len(), 94);
        assert_eq!(&line[0..1], "9");
        assert_eq!(&line[1..7], "000001");
        assert_eq!(&line[7..13], "000002");
        assert_eq!(&line[13..21], "00000015");
        assert_eq!(&line[21..31], "0123456780");
        assert_eq!(&line[31..43], "000099493403");
        assert_eq!(&line[43..55], "000099493403");
        assert_eq!(line[55..94].trim(), "");
    }
}
