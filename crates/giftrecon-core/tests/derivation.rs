use giftrecon_core::derive::{derive_gift, derive_gifts, split_gift};
use giftrecon_core::phone;
use giftrecon_core::types::MergedGift;

fn gift() -> MergedGift {
    MergedGift {
        settle_date: "11/03/2024".to_string(),
        ..MergedGift::default()
    }
}

fn card_gift(brand: &str, user_id: &str) -> MergedGift {
    MergedGift {
        card_description: Some(brand.to_string()),
        user_id: Some(user_id.to_string()),
        ..gift()
    }
}

#[test]
fn card_remap_follows_brand_and_channel() {
    let cases = [
        ("VISA", "Webpage", "WM"),
        ("VISA", "counter1", "MC"),
        ("MC", "Webpage", "WM"),
        ("MC", "counter1", "MC"),
        ("AMEX", "Webpage", "WA"),
        ("AMEX", "counter1", "AX"),
        ("DISC", "Webpage", "WD"),
        ("DISC", "counter1", "DS"),
    ];
    for (brand, user, expected) in cases {
        let mut g = card_gift(brand, user);
        derive_gift(&mut g);
        assert_eq!(
            g.card_description.as_deref(),
            Some(expected),
            "brand {brand} via {user}"
        );
    }
}

#[test]
fn unknown_brand_passes_through() {
    let mut g = card_gift("GIFTCARD", "Webpage");
    derive_gift(&mut g);
    assert_eq!(g.card_description.as_deref(), Some("GIFTCARD"));
}

#[test]
fn anonymity_is_a_strict_equality_check() {
    let mut anonymous = gift();
    anonymous.anonymous = Some("True".to_string());
    derive_gift(&mut anonymous);
    assert_eq!(anonymous.anonymous.as_deref(), Some("ANON"));

    let mut shouting = gift();
    shouting.anonymous = Some("TRUE".to_string());
    derive_gift(&mut shouting);
    assert_eq!(shouting.anonymous, None);

    let mut absent = gift();
    derive_gift(&mut absent);
    assert_eq!(absent.anonymous, None);
}

#[test]
fn tribute_types_are_coded() {
    let mut memorial = gift();
    memorial.tribute_type = Some("In Memory".to_string());
    derive_gift(&mut memorial);
    assert_eq!(memorial.tribute_type.as_deref(), Some("MEMR"));

    let mut honor = gift();
    honor.tribute_type = Some("In Honor".to_string());
    derive_gift(&mut honor);
    assert_eq!(honor.tribute_type.as_deref(), Some("HONR"));

    let mut other = gift();
    other.tribute_type = Some("in memory".to_string());
    derive_gift(&mut other);
    assert_eq!(other.tribute_type.as_deref(), Some("in memory"));
}

#[test]
fn match_received_follows_gift_matching() {
    let mut matched = gift();
    matched.gift_matching = Some("Acme Corp".to_string());
    derive_gift(&mut matched);
    assert_eq!(matched.match_received.as_deref(), Some("Y"));

    let mut unmatched = gift();
    derive_gift(&mut unmatched);
    assert_eq!(unmatched.match_received, None);
}

#[test]
fn banner_id_falls_back_to_payer_donor_id() {
    let mut g = gift();
    g.donor_id = Some("D4401".to_string());
    derive_gift(&mut g);
    assert_eq!(g.banner_id.as_deref(), Some("D4401"));

    let mut resolved = gift();
    resolved.banner_id = Some("B0001234".to_string());
    resolved.donor_id = Some("D4401".to_string());
    derive_gift(&mut resolved);
    assert_eq!(resolved.banner_id.as_deref(), Some("B0001234"));
}

#[test]
fn designation_amount_fallback_chain() {
    let mut from_crm = gift();
    from_crm.designation_amount = Some("25.00".to_string());
    from_crm.gift_amount = Some("10.00".to_string());
    derive_gift(&mut from_crm);
    assert_eq!(from_crm.designation_amount.as_deref(), Some("25.00"));

    let mut from_itemized = gift();
    from_itemized.gift_amount = Some("10.00".to_string());
    from_itemized.total_gift_amount = Some("15.00".to_string());
    derive_gift(&mut from_itemized);
    assert_eq!(from_itemized.designation_amount.as_deref(), Some("10.00"));

    let mut from_total = gift();
    from_total.total_gift_amount = Some("15.00".to_string());
    derive_gift(&mut from_total);
    assert_eq!(from_total.designation_amount.as_deref(), Some("15.00"));
}

#[test]
fn code_fallbacks_fill_only_absent_targets() {
    let mut g = gift();
    g.gift_designation = Some("GENERAL".to_string());
    g.c_solicitation_code = Some("WEB24".to_string());
    derive_gift(&mut g);
    assert_eq!(g.desg_code.as_deref(), Some("GENERAL"));
    assert_eq!(g.solicitation_code.as_deref(), Some("WEB24"));

    let mut kept = gift();
    kept.desg_code = Some("ANNUAL".to_string());
    kept.gift_designation = Some("GENERAL".to_string());
    kept.solicitation_code = Some("AN24".to_string());
    kept.c_solicitation_code = Some("WEB24".to_string());
    derive_gift(&mut kept);
    assert_eq!(kept.desg_code.as_deref(), Some("ANNUAL"));
    assert_eq!(kept.solicitation_code.as_deref(), Some("AN24"));
}

#[test]
fn phone_normalization_properties() {
    assert_eq!(phone::normalize("555", "1234567"), "555-123-4567");
    assert_eq!(phone::normalize("919", "(555) 123-4567"), "555-123-4567");
    assert_eq!(phone::normalize("", "(555) 123-4567"), "555-123-4567");
    assert_eq!(phone::normalize("", "12345"), "12345");
    assert_eq!(phone::normalize("", "1-2.3"), "123");
    assert_eq!(phone::normalize("", ""), "");
}

#[test]
fn derive_cleans_both_phone_fields() {
    let mut g = gift();
    g.area = Some("555".to_string());
    g.phone_number = Some("1234567".to_string());
    g.c_phone_number = Some("(775) 555 0110".to_string());
    derive_gift(&mut g);
    assert_eq!(g.phone_number.as_deref(), Some("555-123-4567"));
    assert_eq!(g.c_phone_number.as_deref(), Some("775-555-0110"));
}

#[test]
fn fallback_rules_are_idempotent() {
    let mut g = gift();
    g.donor_id = Some("D4401".to_string());
    g.gift_amount = Some("10.00".to_string());
    g.total_gift_amount = Some("15.00".to_string());
    g.gift_designation = Some("GENERAL".to_string());
    g.c_solicitation_code = Some("WEB24".to_string());
    g.card_description = Some("VISA".to_string());
    g.user_id = Some("counter1".to_string());
    g.tribute_type = Some("In Honor".to_string());
    g.gift_matching = Some("Acme Corp".to_string());
    g.area = Some("555".to_string());
    g.phone_number = Some("1234567".to_string());

    derive_gift(&mut g);
    let once = g.clone();
    derive_gift(&mut g);
    assert_eq!(g, once);
}

#[test]
fn second_designation_pair_splits_the_gift() {
    let mut g = gift();
    g.designation_amount = Some("10.00".to_string());
    g.desg_code = Some("A".to_string());
    g.gift_amount2 = Some("5.00".to_string());
    g.gift_designation2 = Some("B".to_string());

    let derived = derive_gifts(vec![g]);
    assert_eq!(derived.len(), 1);

    let split = derived[0].split.as_ref().expect("split row missing");
    assert_eq!(split.designation_amount.as_deref(), Some("5.00"));
    assert_eq!(split.desg_code.as_deref(), Some("B"));
    assert_eq!(derived[0].gift.designation_amount.as_deref(), Some("10.00"));
    assert_eq!(derived[0].gift.desg_code.as_deref(), Some("A"));

    // Apart from the replaced pair, the split mirrors its parent.
    let mut normalized = split.clone();
    normalized.designation_amount = derived[0].gift.designation_amount.clone();
    normalized.desg_code = derived[0].gift.desg_code.clone();
    assert_eq!(normalized, derived[0].gift);
}

#[test]
fn no_second_amount_means_no_split() {
    let mut g = gift();
    g.gift_designation2 = Some("B".to_string());
    assert!(split_gift(&g).is_none());
}
