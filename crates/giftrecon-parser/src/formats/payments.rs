use csv::StringRecord;

use crate::errors::LoadError;
use crate::model::{PaymentBatch, PaymentRecord};

use super::HeaderMap;

/// Loader for the settlement export. Unlike the CRM sources, the raw file is
/// a printable batch report: banner and footer lines surround tabular data
/// whose cells carry leading padding. The final row is an overall-totals
/// summary that must never enter the join.
pub struct PaymentLoader;

impl PaymentLoader {
    const NAME: &'static str = "CONVERGE";

    /// Lines containing any of these are report chrome, not data.
    const SKIP_PATTERNS: [&'static str; 3] = ["Detail report", "Created on", "Overall Totals"];

    pub fn load(content: &str) -> Result<PaymentBatch, LoadError> {
        let overall_totals = Self::read_overall_totals(content)?;
        let cleaned_rows = Self::clean_rows(content)?;

        let Some((header, data_rows)) = cleaned_rows.split_first() else {
            return Err(LoadError::MissingHeader { loader: Self::NAME });
        };

        let header_record: StringRecord = header.iter().collect();
        let columns = HeaderMap::new(&header_record);

        let mut records = Vec::with_capacity(data_rows.len());
        for (idx, row) in data_rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(LoadError::Row {
                    loader: Self::NAME,
                    line_index: idx + 2,
                    expected: header.len(),
                    found: row.len(),
                });
            }
            let record: StringRecord = row.iter().collect();
            records.push(PaymentRecord {
                transaction_id: columns.field(&record, "Transaction"),
                settle_date: columns.field(&record, "Settle Date"),
                user_id: columns.field(&record, "User ID"),
                card_description: columns.field(&record, "Card Description"),
                gift_description: columns.field(&record, "Description"),
                first_name: columns.field(&record, "First Name"),
                last_name: columns.field(&record, "Last Name"),
                donor_id: columns.field(&record, "Donor ID"),
                address_1: columns.field(&record, "Address1"),
                address_2: columns.field(&record, "Address2"),
                city: columns.field(&record, "City"),
                state: columns.field(&record, "State/Province"),
                zip: columns.field(&record, "Postal code"),
                phone_number: columns.field(&record, "Phone"),
                email: columns.field(&record, "Email Address"),
                gift_designation: columns.field(&record, "Gift Designation"),
                gift_designation2: columns.field(&record, "Gift Designation 2"),
                comments: columns.field(&record, "Comments"),
                mem_in_honor: columns.field(&record, "Memorial In Honor Of"),
                next_of_kin: columns.field(&record, "Next of Kin"),
                pledge_number: columns.field(&record, "Pledge Number"),
                total_gift_amount: columns.field(&record, "Amount"),
                gift_amount: columns.field(&record, "Gift Amount"),
                gift_amount2: columns.field(&record, "Gift Amount 2"),
                solicitation_code: columns.field(&record, "Solicitation Code"),
                tran_type: columns.field(&record, "Tran Type"),
                batch_num: columns.field(&record, "Batch Number"),
            });
        }

        Ok(PaymentBatch {
            records,
            cleaned_rows,
            overall_totals,
        })
    }

    /// The last row of the raw file, verbatim, before any banner stripping.
    fn read_overall_totals(content: &str) -> Result<Vec<String>, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut last = None;
        for record in reader.records() {
            let record = record.map_err(|err| LoadError::Csv {
                loader: Self::NAME,
                source: err,
            })?;
            last = Some(record.iter().map(str::to_string).collect());
        }
        last.ok_or(LoadError::EmptyFile { loader: Self::NAME })
    }

    /// Drop blank and banner/footer lines, then parse what remains with
    /// every cell left-trimmed. The result keeps the source column order.
    fn clean_rows(content: &str) -> Result<Vec<Vec<String>>, LoadError> {
        let kept: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| !Self::SKIP_PATTERNS.iter().any(|p| line.contains(p)))
            .collect();

        let joined = kept.join("\n");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(joined.as_bytes());

        let mut rows = Vec::with_capacity(kept.len());
        for record in reader.records() {
            let record = record.map_err(|err| LoadError::Csv {
                loader: Self::NAME,
                source: err,
            })?;
            rows.push(record.iter().map(|cell| cell.trim_start().to_string()).collect());
        }
        Ok(rows)
    }
}
