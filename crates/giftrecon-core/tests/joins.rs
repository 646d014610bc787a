use giftrecon_core::store::StagingStore;
use giftrecon_parser::{DesignationRecord, ExportRecord, PaymentRecord};

fn designation(transaction_id: &str, amount: &str, code: &str) -> DesignationRecord {
    DesignationRecord {
        transaction_id: Some(transaction_id.to_string()),
        banner_id: Some("B0000001".to_string()),
        designation_amount: Some(amount.to_string()),
        desg_code: Some(code.to_string()),
        ..DesignationRecord::default()
    }
}

fn export(transaction_id: &str, trans_number: &str) -> ExportRecord {
    ExportRecord {
        transaction_id: Some(transaction_id.to_string()),
        trans_number: Some(trans_number.to_string()),
        last_name: Some("Alvarez".to_string()),
        first_name: Some("Maria".to_string()),
        ..ExportRecord::default()
    }
}

fn payment(transaction_id: &str, settle_date: Option<&str>) -> PaymentRecord {
    PaymentRecord {
        transaction_id: Some(transaction_id.to_string()),
        settle_date: settle_date.map(str::to_string),
        donor_id: Some("D100".to_string()),
        last_name: Some("Payer".to_string()),
        ..PaymentRecord::default()
    }
}

#[test]
fn unmatched_export_appears_exactly_once_with_null_designation() {
    let store = StagingStore::new(
        vec![designation("TX9", "10.00", "ANNUAL")],
        vec![export("TX1", "CV-1")],
        Vec::new(),
    );

    let view = store.export_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].trans_id, "TX1");
    assert_eq!(view[0].designation_amount, None);
    assert_eq!(view[0].desg_code, None);
    assert_eq!(view[0].banner_id, None);
    assert_eq!(view[0].last_name.as_deref(), Some("Alvarez"));
}

#[test]
fn duplicate_designations_fan_out_in_load_order() {
    let store = StagingStore::new(
        vec![
            designation("TX1", "100.00", "LIBRARY"),
            designation("TX1", "50.00", "ATHLETICS"),
        ],
        vec![export("TX1", "CV-1")],
        Vec::new(),
    );

    let view = store.export_view();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].desg_code.as_deref(), Some("LIBRARY"));
    assert_eq!(view[1].desg_code.as_deref(), Some("ATHLETICS"));
    assert_eq!(view[1].banner_id.as_deref(), Some("B0000001"));
}

#[test]
fn export_without_transaction_id_is_excluded() {
    let mut keyless = export("TX1", "CV-1");
    keyless.transaction_id = None;

    let store = StagingStore::new(Vec::new(), vec![keyless, export("TX2", "CV-2")], Vec::new());

    let view = store.export_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].trans_id, "TX2");
}

#[test]
fn join_keys_compare_exactly() {
    let store = StagingStore::new(
        vec![designation("tx1", "10.00", "ANNUAL")],
        vec![export("TX1", "CV-1")],
        Vec::new(),
    );

    let view = store.export_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].desg_code, None, "keys must not be case-folded");
}

#[test]
fn unmatched_payment_yields_single_gift_with_crm_side_absent() {
    let store = StagingStore::new(
        Vec::new(),
        vec![export("TX1", "CV-1")],
        vec![payment("CV-999", Some("11/03/2024"))],
    );

    let view = store.export_view();
    let gifts = store.merged_gifts(&view);

    assert_eq!(gifts.len(), 1);
    assert_eq!(gifts[0].settle_date, "11/03/2024");
    assert_eq!(gifts[0].c_last_name.as_deref(), Some("Payer"));
    assert_eq!(gifts[0].last_name, None);
    assert_eq!(gifts[0].banner_id, None);
    assert_eq!(gifts[0].solicitation_code, None);
}

#[test]
fn payments_without_settle_date_are_excluded() {
    let store = StagingStore::new(
        Vec::new(),
        Vec::new(),
        vec![
            payment("CV-1", None),
            payment("CV-2", Some("11/03/2024")),
        ],
    );

    let gifts = store.merged_gifts(&[]);
    assert_eq!(gifts.len(), 1);
    assert_eq!(gifts[0].settle_date, "11/03/2024");
}

#[test]
fn duplicate_trans_numbers_fan_out_merged_gifts() {
    let store = StagingStore::new(
        vec![
            designation("TX1", "100.00", "LIBRARY"),
            designation("TX1", "50.00", "ATHLETICS"),
        ],
        vec![export("TX1", "CV-1")],
        vec![payment("CV-1", Some("11/03/2024"))],
    );

    let view = store.export_view();
    let gifts = store.merged_gifts(&view);

    // One payment, two matching view rows, two gifts, no deduplication.
    assert_eq!(gifts.len(), 2);
    assert_eq!(gifts[0].designation_amount.as_deref(), Some("100.00"));
    assert_eq!(gifts[0].desg_code.as_deref(), Some("LIBRARY"));
    assert_eq!(gifts[1].designation_amount.as_deref(), Some("50.00"));
    assert_eq!(gifts[1].desg_code.as_deref(), Some("ATHLETICS"));
}

#[test]
fn merged_gift_carries_both_sides() {
    let mut contact = export("TX1", "CV-1");
    contact.area = Some("555".to_string());
    contact.phone_number = Some("1234567".to_string());
    contact.solicitation_code = Some("AN24".to_string());

    let mut settled = payment("CV-1", Some("11/03/2024"));
    settled.address_1 = Some("12 Elm St".to_string());
    settled.solicitation_code = Some("WEB24".to_string());

    let store = StagingStore::new(
        vec![designation("TX1", "25.00", "ANNUAL")],
        vec![contact],
        vec![settled],
    );

    let view = store.export_view();
    let gifts = store.merged_gifts(&view);

    assert_eq!(gifts.len(), 1);
    let gift = &gifts[0];
    assert_eq!(gift.last_name.as_deref(), Some("Alvarez"));
    assert_eq!(gift.c_last_name.as_deref(), Some("Payer"));
    assert_eq!(gift.c_address_1.as_deref(), Some("12 Elm St"));
    assert_eq!(gift.banner_id.as_deref(), Some("B0000001"));
    assert_eq!(gift.area.as_deref(), Some("555"));
    assert_eq!(gift.solicitation_code.as_deref(), Some("AN24"));
    assert_eq!(gift.c_solicitation_code.as_deref(), Some("WEB24"));
    assert_eq!(gift.designation_amount.as_deref(), Some("25.00"));
}
