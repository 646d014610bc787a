//! Derived row shapes produced by the two staging-store joins.

/// One row of the CRM-side join: a contact-export record widened with the
/// amount and fund code of a matched designation record. `trans_id` is
/// guaranteed present (contact rows without a transaction id never enter the
/// view); the two designation fields are `None` when no designation matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportView {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub banner_id: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub area: Option<String>,
    pub phone_type: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub designation_amount: Option<String>,
    pub desg_code: Option<String>,
    pub other_designation: Option<String>,
    pub solicitation_code: Option<String>,
    pub trans_id: String,
    pub trans_number: Option<String>,
    pub anonymous: Option<String>,
    pub gift_matching: Option<String>,
    pub tribute_type: Option<String>,
    pub tribute_occasion: Option<String>,
    pub tribute_notification_name: Option<String>,
    pub tribute_notification_address: Option<String>,
    pub tribute_comments: Option<String>,
}

/// One reconciled gift: a settled payment widened with its matched
/// ExportView row. Payer contact fields carry the `c_` prefix; the
/// unprefixed contact fields come from the CRM side and are `None` when the
/// payment matched no CRM row. `settle_date` is always present; payments
/// without one never enter the join. Mutable only while the derivation
/// rules run; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedGift {
    pub settle_date: String,
    pub user_id: Option<String>,
    pub card_description: Option<String>,
    pub gift_description: Option<String>,
    pub donor_id: Option<String>,
    pub c_first_name: Option<String>,
    pub c_last_name: Option<String>,
    pub c_address_1: Option<String>,
    pub c_address_2: Option<String>,
    pub c_city: Option<String>,
    pub c_state: Option<String>,
    pub c_zip: Option<String>,
    pub c_phone_number: Option<String>,
    pub c_email: Option<String>,
    pub c_solicitation_code: Option<String>,
    pub gift_designation: Option<String>,
    pub gift_designation2: Option<String>,
    pub comments: Option<String>,
    pub mem_in_honor: Option<String>,
    pub next_of_kin: Option<String>,
    pub pledge_number: Option<String>,
    pub total_gift_amount: Option<String>,
    pub gift_amount: Option<String>,
    pub gift_amount2: Option<String>,
    pub tran_type: Option<String>,
    pub batch_num: Option<String>,

    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub banner_id: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub area: Option<String>,
    pub phone_type: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub designation_amount: Option<String>,
    pub desg_code: Option<String>,
    pub other_designation: Option<String>,
    pub solicitation_code: Option<String>,
    pub anonymous: Option<String>,
    pub gift_matching: Option<String>,
    pub tribute_type: Option<String>,
    pub tribute_occasion: Option<String>,
    pub tribute_notification_name: Option<String>,
    pub tribute_notification_address: Option<String>,
    pub tribute_comments: Option<String>,

    pub match_received: Option<String>,
}

/// A fully derived gift and, when the payment carried a second designation
/// pair, the synthesized split row. The split is emitted immediately before
/// its parent, so adjacency in the ledger is by construction rather than by
/// sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedGift {
    pub gift: MergedGift,
    pub split: Option<MergedGift>,
}
