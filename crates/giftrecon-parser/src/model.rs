/// One gift-designation line from the CRM designations export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignationRecord {
    pub gift_id: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub banner_id: Option<String>,
    pub date_stamp: Option<String>,
    pub transaction_id: Option<String>,
    pub designation_amount: Option<String>,
    pub desg_code: Option<String>,
}

/// One constituent/contact line from the CRM export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRecord {
    pub transaction_id: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone_type: Option<String>,
    pub area: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub anonymous: Option<String>,
    pub other_designation: Option<String>,
    pub solicitation_code: Option<String>,
    pub gift_matching: Option<String>,
    pub tribute_type: Option<String>,
    pub tribute_full_name: Option<String>,
    pub tribute_occasion: Option<String>,
    pub tribute_notification_name: Option<String>,
    pub tribute_notification_address: Option<String>,
    pub tribute_comments: Option<String>,
    pub date_submitted: Option<String>,
    pub trans_number: Option<String>,
}

/// One settled payment line from the settlement export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRecord {
    pub transaction_id: Option<String>,
    pub settle_date: Option<String>,
    pub user_id: Option<String>,
    pub card_description: Option<String>,
    pub gift_description: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub donor_id: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub gift_designation: Option<String>,
    pub gift_designation2: Option<String>,
    pub comments: Option<String>,
    pub mem_in_honor: Option<String>,
    pub next_of_kin: Option<String>,
    pub pledge_number: Option<String>,
    pub total_gift_amount: Option<String>,
    pub gift_amount: Option<String>,
    pub gift_amount2: Option<String>,
    pub solicitation_code: Option<String>,
    pub tran_type: Option<String>,
    pub batch_num: Option<String>,
}

/// Everything the settlement export yields in one pass: the parsed payment
/// records, the cleaned rows (banner/footer lines removed, cells
/// left-trimmed, original column order) for the `new_<source>` copy, and the
/// raw file's final row, carried verbatim to the tail of the ledger report.
#[derive(Debug, Clone)]
pub struct PaymentBatch {
    pub records: Vec<PaymentRecord>,
    pub cleaned_rows: Vec<Vec<String>>,
    pub overall_totals: Vec<String>,
}
