use std::collections::HashMap;

use giftrecon_parser::{DesignationRecord, ExportRecord, PaymentRecord};

use crate::types::{ExportView, MergedGift};

/// Holds the three loaded relations and exposes the only two joins the
/// pipeline performs. Both are left outer hash joins on exact string
/// equality; identifiers are never case-folded or reformatted, matching
/// what the two upstream systems emit.
pub struct StagingStore {
    designations: Vec<DesignationRecord>,
    exports: Vec<ExportRecord>,
    payments: Vec<PaymentRecord>,
}

impl StagingStore {
    pub fn new(
        designations: Vec<DesignationRecord>,
        exports: Vec<ExportRecord>,
        payments: Vec<PaymentRecord>,
    ) -> Self {
        Self {
            designations,
            exports,
            payments,
        }
    }

    /// ExportRecord ⟕ DesignationRecord on transaction id. Contact rows
    /// without a transaction id never enter the view; a contact row with
    /// several matching designations yields one view row per match, in
    /// designation load order.
    pub fn export_view(&self) -> Vec<ExportView> {
        let mut by_transaction: HashMap<&str, Vec<&DesignationRecord>> = HashMap::new();
        for designation in &self.designations {
            if let Some(key) = designation.transaction_id.as_deref() {
                by_transaction.entry(key).or_default().push(designation);
            }
        }

        let mut rows = Vec::with_capacity(self.exports.len());
        for export in &self.exports {
            let Some(trans_id) = export.transaction_id.as_deref() else {
                continue;
            };
            match by_transaction.get(trans_id) {
                Some(matches) => {
                    for designation in matches {
                        rows.push(Self::view_row(export, trans_id, Some(designation)));
                    }
                }
                None => rows.push(Self::view_row(export, trans_id, None)),
            }
        }
        rows
    }

    /// PaymentRecord ⟕ ExportView on the payment's transaction id against
    /// the CRM customer transaction number. Payments without a settle date
    /// never enter the join; duplicate transaction numbers on the CRM side
    /// fan out one merged gift per match, never deduplicated.
    pub fn merged_gifts(&self, export_view: &[ExportView]) -> Vec<MergedGift> {
        let mut by_trans_number: HashMap<&str, Vec<&ExportView>> = HashMap::new();
        for view in export_view {
            if let Some(key) = view.trans_number.as_deref() {
                by_trans_number.entry(key).or_default().push(view);
            }
        }

        let mut gifts = Vec::with_capacity(self.payments.len());
        for payment in &self.payments {
            let Some(settle_date) = payment.settle_date.as_deref() else {
                continue;
            };
            let matches = payment
                .transaction_id
                .as_deref()
                .and_then(|key| by_trans_number.get(key));
            match matches {
                Some(views) => {
                    for view in views {
                        gifts.push(Self::merged_row(payment, settle_date, Some(view)));
                    }
                }
                None => gifts.push(Self::merged_row(payment, settle_date, None)),
            }
        }
        gifts
    }

    fn view_row(
        export: &ExportRecord,
        trans_id: &str,
        designation: Option<&DesignationRecord>,
    ) -> ExportView {
        ExportView {
            first_name: export.first_name.clone(),
            last_name: export.last_name.clone(),
            banner_id: designation.and_then(|d| d.banner_id.clone()),
            address_1: export.address_1.clone(),
            address_2: export.address_2.clone(),
            city: export.city.clone(),
            state: export.state.clone(),
            zip: export.zip.clone(),
            area: export.area.clone(),
            phone_type: export.phone_type.clone(),
            phone_number: export.phone_number.clone(),
            email: export.email.clone(),
            designation_amount: designation.and_then(|d| d.designation_amount.clone()),
            desg_code: designation.and_then(|d| d.desg_code.clone()),
            other_designation: export.other_designation.clone(),
            solicitation_code: export.solicitation_code.clone(),
            trans_id: trans_id.to_string(),
            trans_number: export.trans_number.clone(),
            anonymous: export.anonymous.clone(),
            gift_matching: export.gift_matching.clone(),
            tribute_type: export.tribute_type.clone(),
            tribute_occasion: export.tribute_occasion.clone(),
            tribute_notification_name: export.tribute_notification_name.clone(),
            tribute_notification_address: export.tribute_notification_address.clone(),
            tribute_comments: export.tribute_comments.clone(),
        }
    }

    fn merged_row(
        payment: &PaymentRecord,
        settle_date: &str,
        view: Option<&ExportView>,
    ) -> MergedGift {
        let mut gift = MergedGift {
            settle_date: settle_date.to_string(),
            user_id: payment.user_id.clone(),
            card_description: payment.card_description.clone(),
            gift_description: payment.gift_description.clone(),
            donor_id: payment.donor_id.clone(),
            c_first_name: payment.first_name.clone(),
            c_last_name: payment.last_name.clone(),
            c_address_1: payment.address_1.clone(),
            c_address_2: payment.address_2.clone(),
            c_city: payment.city.clone(),
            c_state: payment.state.clone(),
            c_zip: payment.zip.clone(),
            c_phone_number: payment.phone_number.clone(),
            c_email: payment.email.clone(),
            c_solicitation_code: payment.solicitation_code.clone(),
            gift_designation: payment.gift_designation.clone(),
            gift_designation2: payment.gift_designation2.clone(),
            comments: payment.comments.clone(),
            mem_in_honor: payment.mem_in_honor.clone(),
            next_of_kin: payment.next_of_kin.clone(),
            pledge_number: payment.pledge_number.clone(),
            total_gift_amount: payment.total_gift_amount.clone(),
            gift_amount: payment.gift_amount.clone(),
            gift_amount2: payment.gift_amount2.clone(),
            tran_type: payment.tran_type.clone(),
            batch_num: payment.batch_num.clone(),
            ..MergedGift::default()
        };

        if let Some(view) = view {
            gift.last_name = view.last_name.clone();
            gift.first_name = view.first_name.clone();
            gift.banner_id = view.banner_id.clone();
            gift.address_1 = view.address_1.clone();
            gift.address_2 = view.address_2.clone();
            gift.city = view.city.clone();
            gift.state = view.state.clone();
            gift.zip = view.zip.clone();
            gift.area = view.area.clone();
            gift.phone_type = view.phone_type.clone();
            gift.phone_number = view.phone_number.clone();
            gift.email = view.email.clone();
            gift.designation_amount = view.designation_amount.clone();
            gift.desg_code = view.desg_code.clone();
            gift.other_designation = view.other_designation.clone();
            gift.solicitation_code = view.solicitation_code.clone();
            gift.anonymous = view.anonymous.clone();
            gift.gift_matching = view.gift_matching.clone();
            gift.tribute_type = view.tribute_type.clone();
            gift.tribute_occasion = view.tribute_occasion.clone();
            gift.tribute_notification_name = view.tribute_notification_name.clone();
            gift.tribute_notification_address = view.tribute_notification_address.clone();
            gift.tribute_comments = view.tribute_comments.clone();
        }

        gift
    }
}
