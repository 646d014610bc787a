use crate::errors::LoadError;
use crate::model::ExportRecord;

use super::{read_header, HeaderMap};

/// Loader for the CRM contact export.
pub struct ExportLoader;

impl ExportLoader {
    const NAME: &'static str = "IMOD_EXPORT";

    pub fn load(content: &str) -> Result<Vec<ExportRecord>, LoadError> {
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
            out.push(ExportRecord {
                transaction_id: columns.field(&record, "Transaction ID"),
                last_name: columns.field(&record, "Last Name"),
                first_name: columns.field(&record, "First Name"),
                address_1: columns.field(&record, "Address_1"),
                address_2: columns.field(&record, "Address_2"),
                city: columns.field(&record, "City"),
                state: columns.field(&record, "State"),
                zip: columns.field(&record, "Zip"),
                phone_type: columns.field(&record, "imod_phone_type"),
                area: columns.field(&record, "Area"),
                phone_number: columns.field(&record, "Phone_Number"),
                email: columns.field(&record, "Primary E-mail"),
                anonymous: columns.field(&record, "MAG12 - Is Anonymous"),
                other_designation: columns.field(&record, "MAG12 - OtherDesignation"),
                solicitation_code: columns.field(&record, "Giving - Solicitation Type"),
                gift_matching: columns.field(&record, "Make a Gift - MAG12 - Gift Matching"),
                tribute_type: columns.field(&record, "MAG12 - TributeType"),
                tribute_full_name: columns.field(&record, "MAG12 - TributeFullName"),
                tribute_occasion: columns.field(&record, "MAG12 - TributeOccasion"),
                tribute_notification_name: columns.field(&record, "MAG12 - TributeNotificationName"),
                tribute_notification_address: columns
                    .field(&record, "MAG12 - TributeNotificationAddress"),
                tribute_comments: columns.field(&record, "MAG12 - TributeComments"),
                date_submitted: columns.field(&record, "date_submitted"),
                trans_number: columns.field(&record, "Customer Trans Number"),
            });
        }
        Ok(out)
    }
}
