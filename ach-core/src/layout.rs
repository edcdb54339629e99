//! Fixed-width record layouts
//!
//! Field widths for every NACHA record type, in emission order. Each record
//! concatenates to exactly [`RECORD_WIDTH`] characters before the line
//! terminator. These tables are the single source of truth for the encoder;
//! nothing else hardcodes a width.

/// Payload width of every record line, excluding the terminator.
pub const RECORD_WIDTH: usize = 94;

/// Lines per block; files are padded to a whole number of blocks.
pub const BLOCKING_FACTOR: usize = 10;

/// Character used for block-padding filler lines.
pub const FILLER_CHAR: char = '9';

/// File header (record type 1) field widths.
pub mod file_header {
    /// Record type code
    pub const RECORD_TYPE_CODE: usize = 1;
    /// Priority code
    pub const PRIORITY_CODE: usize = 2;
    /// Immediate destination routing number
    pub const IMMEDIATE_DESTINATION: usize = 10;
    /// Immediate origin identification
    pub const IMMEDIATE_ORIGIN: usize = 10;
    /// File creation date (YYMMDD)
    pub const FILE_CREATION_DATE: usize = 6;
    /// File creation time (HHMM)
    pub const FILE_CREATION_TIME: usize = 4;
    /// File ID modifier letter
    pub const FILE_ID_MODIFIER: usize = 1;
    /// Record size, always "094"
    pub const RECORD_SIZE: usize = 3;
    /// Blocking factor, always "10"
    pub const BLOCKING_FACTOR: usize = 2;
    /// Format code, always "1"
    pub const FORMAT_CODE: usize = 1;
    /// Immediate destination name
    pub const IMMEDIATE_DESTINATION_NAME: usize = 23;
    /// Immediate origin name
    pub const IMMEDIATE_ORIGIN_NAME: usize = 23;
    /// Reference code
    pub const REFERENCE_CODE: usize = 8;
}

/// File control (record type 9) field widths.
pub mod file_control {
    /// Record type code
    pub const RECORD_TYPE_CODE: usize = 1;
    /// Batch count
    pub const BATCH_COUNT: usize = 6;
    /// Block count
    pub const BLOCK_COUNT: usize = 6;
    /// Entry and addenda count
    pub const DETAIL_COUNT: usize = 8;
    /// Entry hash, last ten digits
    pub const ENTRY_HASH: usize = 10;
    /// Total debit amount
    pub const TOTAL_DEBIT_AMOUNT: usize = 12;
    /// Total credit amount
    pub const TOTAL_CREDIT_AMOUNT: usize = 12;
    /// Reserved, blank
    pub const RESERVED: usize = 39;
}

/// Batch header (record type 5) field widths.
pub mod batch_header {
    /// Record type code
    pub const RECORD_TYPE_CODE: usize = 1;
    /// Service class code
    pub const SERVICE_CLASS_CODE: usize = 3;
    /// Company name
    pub const COMPANY_NAME: usize = 16;
    /// Company discretionary data
    pub const DISCRETIONARY_DATA: usize = 20;
    /// Company identification
    pub const COMPANY_IDENTIFICATION: usize = 10;
    /// Standard entry class code
    pub const ENTRY_CLASS_CODE: usize = 3;
    /// Company entry description
    pub const ENTRY_DESCRIPTION: usize = 10;
    /// Company descriptive date
    pub const DESCRIPTIVE_DATE: usize = 6;
    /// Effective entry date (YYMMDD)
    pub const EFFECTIVE_ENTRY_DATE: usize = 6;
    /// Settlement date, blank (filled by the receiving bank)
    pub const SETTLEMENT_DATE: usize = 3;
    /// Originator status code
    pub const ORIGINATOR_STATUS_CODE: usize = 1;
    /// Originating DFI identification
    pub const ORIGINATING_DFI_IDENTIFICATION: usize = 8;
    /// Batch number
    pub const BATCH_NUMBER: usize = 7;
}

/// Batch control (record type 8) field widths.
pub mod batch_control {
    /// Record type code
    pub const RECORD_TYPE_CODE: usize = 1;
    /// Service class code
    pub const SERVICE_CLASS_CODE: usize = 3;
    /// Entry and addenda count
    pub const DETAIL_COUNT: usize = 6;
    /// Entry hash, last ten digits
    pub const ENTRY_HASH: usize = 10;
    /// Total debit amount
    pub const TOTAL_DEBIT_AMOUNT: usize = 12;
    /// Total credit amount
    pub const TOTAL_CREDIT_AMOUNT: usize = 12;
    /// Company identification
    pub const COMPANY_IDENTIFICATION: usize = 10;
    /// Message authentication code, blank
    pub const AUTHENTICATION_CODE: usize = 19;
    /// Reserved, blank
    pub const RESERVED: usize = 6;
    /// Originating DFI identification
    pub const ORIGINATING_DFI_IDENTIFICATION: usize = 8;
    /// Batch number
    pub const BATCH_NUMBER: usize = 7;
}

/// Entry detail (record type 6) field widths.
pub mod entry {
    /// Record type code
    pub const RECORD_TYPE_CODE: usize = 1;
    /// Transaction code
    pub const TRANSACTION_CODE: usize = 2;
    /// Receiving DFI identification, check digit included
    pub const RECEIVING_DFI_ID: usize = 9;
    /// Receiving DFI account number
    pub const DFI_ACCOUNT_NUMBER: usize = 17;
    /// Amount, decimal point removed
    pub const DOLLAR_AMOUNT: usize = 10;
    /// Individual identification number
    pub const INDIVIDUAL_IDENTIFICATION: usize = 15;
    /// Individual name
    pub const INDIVIDUAL_NAME: usize = 22;
    /// Discretionary data
    pub const DISCRETIONARY_DATA: usize = 2;
    /// Addenda record indicator
    pub const ADDENDA_INDICATOR: usize = 1;
    /// Trace number
    pub const TRACE_NUMBER: usize = 15;
}

/// Addenda (record type 7) field widths.
pub mod addenda {
    /// Record type code
    pub const RECORD_TYPE_CODE: usize = 1;
    /// Addenda type code
    pub const TYPE_CODE: usize = 2;
    /// Payment related information
    pub const PAYMENT_INFORMATION: usize = 80;
    /// Addenda sequence number, scoped to the parent entry
    pub const SEQUENCE: usize = 4;
    /// Entry detail sequence number of the parent entry
    pub const ENTRY_RECORD_ID: usize = 7;
}
