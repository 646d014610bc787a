use crate::errors::LoadError;
use crate::model::DesignationRecord;

use super::{read_header, HeaderMap};

/// Loader for the CRM designations export.
pub struct DesignationLoader;

impl DesignationLoader {
    const NAME: &'static str = "DESIGNATIONS";

    pub fn load(content: &str) -> Result<Vec<DesignationRecord>, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(content.as_bytes());
        let mut records = reader.records();

        let header = read_header(Self::NAME, &mut records)?;
        let columns = HeaderMap::new(&header);

        let mut out = Vec::new();
        for record in records {
            let record = record.map_err(|err| LoadError::Csv {
                loader: Self::NAME,
                source: err,
            })?;
            out.push(DesignationRecord {
                gift_id: columns.field(&record, "ID"),
                last_name: columns.field(&record, "Last Name"),
                first_name: columns.field(&record, "First Name"),
                banner_id: columns.field(&record, "Banner_ID"),
                date_stamp: columns.field(&record, "Date Stamp"),
                transaction_id: columns.field(&record, "Transaction ID"),
                designation_amount: columns.field(&record, "Designation Amount"),
                desg_code: columns.field(&record, "ADBDESG_DESG"),
            });
        }
        Ok(out)
    }
}
