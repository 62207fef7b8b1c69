//! Document assembly: header, one data record per transfer, trailer, end.

use tracing::{debug, trace};

use crate::{
    error::{ZenginError, ZenginResult},
    model::{Sender, Transfer},
    record::{self, Record},
    transcode,
};

/// A complete, internally consistent Zengin document.
///
/// Only [`Document::assemble`] creates one, so the trailer always matches the
/// data records it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
    transfer_count: usize,
    total_amount: u64,
}

impl Document {
    /// Builds every record in file order.
    ///
    /// Stops at the first failing field: header fields are checked before any
    /// transfer, and a transfer's amount is added to the total only after its
    /// record was built.
    pub fn assemble(sender: &Sender, date: &str, transfers: &[Transfer]) -> ZenginResult<Self> {
        debug!(transfers = transfers.len(), "assembling zengin document");

        let mut records = Vec::with_capacity(transfers.len() + 3);
        records.push(record::header(sender, date).inspect_err(log_failure)?);

        let mut total_amount: u64 = 0;
        for (idx, transfer) in transfers.iter().enumerate() {
            let line = record::data(transfer).inspect_err(|err| {
                debug!(transfer = idx + 1, field = err.field(), "data record rejected");
            })?;
            trace!(transfer = idx + 1, line = line.as_str(), "data record");
            records.push(line);

            total_amount = total_amount
                .checked_add(transfer.amount)
                .ok_or(ZenginError::TotalOverflow { index: idx + 1 })?;
        }

        let transfer_count = transfers.len();
        records.push(record::trailer(transfer_count, total_amount).inspect_err(log_failure)?);
        records.push(record::end()?);

        debug!(transfer_count, total_amount, "zengin document assembled");
        Ok(Self { records, transfer_count, total_amount })
    }

    /// Records in file order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data records.
    #[must_use]
    pub fn transfer_count(&self) -> usize {
        self.transfer_count
    }

    /// Sum of all transfer amounts.
    #[must_use]
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    /// Record lines in file order, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(|r| r.as_str().to_string()).collect()
    }

    /// Consumes the document and returns its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.records.into_iter().map(Record::into_line).collect()
    }

    /// Encodes the document as Shift_JIS with CR LF between records.
    pub fn to_bytes(&self) -> ZenginResult<Vec<u8>> {
        transcode::encode(&self.records)
    }
}

fn log_failure(err: &ZenginError) {
    debug!(field = err.field(), %err, "zengin document rejected");
}

/// Builds the record lines of a document, before transcoding.
pub fn build_lines(
    sender: &Sender,
    date: &str,
    transfers: &[Transfer],
) -> ZenginResult<Vec<String>> {
    Document::assemble(sender, date, transfers).map(Document::into_lines)
}

/// Builds a complete Zengin file as Shift_JIS bytes.
pub fn build(sender: &Sender, date: &str, transfers: &[Transfer]) -> ZenginResult<Vec<u8>> {
    Document::assemble(sender, date, transfers)?.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::AccountType,
        record::{RECORD_WIDTH, RecordKind},
    };

    fn make_sender() -> Sender {
        Sender {
            client_code: "1234567890".to_string(),
            client_name: "ジッケン（カ".to_string(),
            bank_code: "0001".to_string(),
            bank_name: "ミズホ".to_string(),
            branch_code: "211".to_string(),
            branch_name: "アオヤマ".to_string(),
            account_type: AccountType::Ordinary,
            account_number: "0000001".to_string(),
        }
    }

    fn make_transfer(amount: u64) -> Transfer {
        Transfer {
            bank_code: "0001".to_string(),
            bank_name: "ミズホ".to_string(),
            branch_code: "211".to_string(),
            branch_name: "アオヤマ".to_string(),
            account_type: AccountType::Ordinary,
            account_number: "0000001".to_string(),
            account_owner_name: "テストコウザ".to_string(),
            amount,
        }
    }

    fn trailer_fields(line: &str) -> (usize, u64) {
        let chars: Vec<char> = line.chars().collect();
        let count: String = chars[1..7].iter().collect();
        let amount: String = chars[7..19].iter().collect();
        (count.parse().unwrap(), amount.parse().unwrap())
    }

    #[test]
    fn single_transfer_document() {
        let lines = build_lines(&make_sender(), "0701", &[make_transfer(100)]).unwrap();

        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == RECORD_WIDTH));
        assert!(lines[0].starts_with("12101234567890ｼﾞﾂｹﾝ(ｶ"));
        assert!(lines[1].starts_with("20001ﾐｽﾞﾎ"));
        assert_eq!(lines[2], format!("8000001000000000100{}", " ".repeat(101)));
        assert_eq!(lines[3], format!("9{}", " ".repeat(119)));
        assert_eq!(trailer_fields(&lines[2]), (1, 100));
    }

    #[test]
    fn mixed_width_transfers() {
        let second = Transfer {
            bank_code: "0005".to_string(),
            bank_name: "ﾐﾂﾋﾞｼﾕｰｴﾌｼﾞｪｲ".to_string(),
            branch_code: "191".to_string(),
            branch_name: "ｱｲﾁｹﾝﾁｮｳ".to_string(),
            account_type: AccountType::Current,
            account_number: "0000001".to_string(),
            account_owner_name: "ﾊﾝｶｸｺﾓｼﾞﾃｽﾄ".to_string(),
            amount: 100,
        };
        let lines = build_lines(&make_sender(), "0701", &[make_transfer(100), second]).unwrap();

        assert_eq!(lines.len(), 5);
        let expected = format!(
            "20005{:<15}191{:<15}    20000001{:<30}00000001001{}",
            "ﾐﾂﾋﾞｼﾕｰｴﾌｼﾞｴｲ",
            "ｱｲﾁｹﾝﾁﾖｳ",
            "ﾊﾝｶｸｺﾓｼﾞﾃｽﾄ",
            " ".repeat(29)
        );
        assert_eq!(lines[2], expected);
        assert_eq!(lines[3], format!("8000002000000000200{}", " ".repeat(101)));
    }

    #[test]
    fn empty_batch_still_has_header_trailer_and_end() {
        let doc = Document::assemble(&make_sender(), "0701", &[]).unwrap();

        let kinds: Vec<RecordKind> = doc.records().iter().map(Record::kind).collect();
        assert_eq!(kinds, [RecordKind::Header, RecordKind::Trailer, RecordKind::End]);
        assert_eq!(doc.transfer_count(), 0);
        assert_eq!(doc.total_amount(), 0);
        assert_eq!(trailer_fields(doc.records()[1].as_str()), (0, 0));
    }

    #[test]
    fn trailer_matches_count_and_sum() {
        for n in [0usize, 1, 2, 7, 25] {
            let transfers: Vec<Transfer> =
                (0..n).map(|i| make_transfer(1_000 * i as u64 + 7)).collect();
            let expected_total: u64 = transfers.iter().map(|t| t.amount).sum();

            let doc = Document::assemble(&make_sender(), "0701", &transfers).unwrap();
            let lines = doc.lines();

            assert_eq!(lines.len(), n + 3);
            assert!(lines.iter().all(|l| l.chars().count() == RECORD_WIDTH));
            assert_eq!(trailer_fields(&lines[n + 1]), (n, expected_total));
            assert_eq!(doc.transfer_count(), n);
            assert_eq!(doc.total_amount(), expected_total);
        }
    }

    #[test]
    fn data_records_keep_input_order() {
        let transfers: Vec<Transfer> = [300, 100, 200].into_iter().map(make_transfer).collect();
        let lines = build_lines(&make_sender(), "0701", &transfers).unwrap();

        let amounts: Vec<String> =
            lines[1..4].iter().map(|l| l.chars().skip(80).take(10).collect()).collect();
        assert_eq!(amounts, ["0000000300", "0000000100", "0000000200"]);
    }

    #[test]
    fn header_error_wins_over_data_errors() {
        let sender = Sender { bank_code: "00001".to_string(), ..make_sender() };
        let bad_transfer = Transfer { account_number: "x".to_string(), ..make_transfer(1) };

        let err = build_lines(&sender, "0701", &[bad_transfer]).unwrap_err();
        assert!(matches!(err, ZenginError::FieldTooLong { ref field, .. } if field == "bank_code"));
    }

    #[test]
    fn first_failing_transfer_aborts_the_document() {
        let transfers = vec![
            make_transfer(1),
            Transfer { account_owner_name: "ｱ".repeat(31), ..make_transfer(2) },
            Transfer { bank_code: "bad".to_string(), ..make_transfer(3) },
        ];

        let err = build_lines(&make_sender(), "0701", &transfers).unwrap_err();
        assert!(matches!(
            err,
            ZenginError::FieldTooLong { ref field, max_width: 30, .. } if field == "account_owner_name"
        ));
    }

    #[test]
    fn invalid_date_fails_before_transfers() {
        let err = build_lines(&make_sender(), "07-01", &[make_transfer(1)]).unwrap_err();
        assert!(matches!(err, ZenginError::InvalidCharacter { ref field, .. } if field == "date"));
    }

    #[test]
    fn total_that_exceeds_trailer_width_is_rejected() {
        let transfers: Vec<Transfer> = (0..101).map(|_| make_transfer(9_999_999_999)).collect();
        let err = build_lines(&make_sender(), "0701", &transfers).unwrap_err();
        assert!(matches!(
            err,
            ZenginError::FieldTooLong { ref field, max_width: 12, .. } if field == "total_amount"
        ));
    }

    #[test]
    fn build_produces_crlf_joined_shift_jis() {
        let bytes = build(&make_sender(), "0701", &[make_transfer(100)]).unwrap();

        // 4 records of 120 single-byte characters, 3 separators.
        assert_eq!(bytes.len(), 120 * 4 + 2 * 3);
        assert_eq!(&bytes[120..122], b"\r\n");
        assert!(!bytes.ends_with(b"\r\n"));
    }
}
