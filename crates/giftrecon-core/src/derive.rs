//! Per-gift derivation rules, applied in fixed order after the payment join.

use crate::phone;
use crate::types::{DerivedGift, MergedGift};

/// Operator id the payment processor stamps on web-channel transactions.
const WEB_CHANNEL_USER: &str = "Webpage";

/// Runs the full rule set over every merged gift and fans each one out into
/// its ledger rows. Rules 1-9 are pure per-record transforms; the
/// multi-designation split is structural and stays bound to its parent.
pub fn derive_gifts(gifts: Vec<MergedGift>) -> Vec<DerivedGift> {
    gifts
        .into_iter()
        .map(|mut gift| {
            derive_gift(&mut gift);
            let split = split_gift(&gift);
            DerivedGift { gift, split }
        })
        .collect()
}

/// Rules 1-9. The fallback fills (banner id, designation amount, fund code,
/// solicitation code) only fire on absent targets and are idempotent.
pub fn derive_gift(gift: &mut MergedGift) {
    resolve_banner_id(gift);
    remap_card_description(gift);
    flag_match_received(gift);
    code_tribute_type(gift);
    code_anonymous(gift);
    fill_designation_amount(gift);
    fill_desg_code(gift);
    fill_solicitation_code(gift);
    clean_phones(gift);
}

/// Rule 10: a second itemized amount yields a second ledger row carrying the
/// second designation pair. Derived from the already-transformed parent, so
/// the split inherits every prior derivation except the two replaced fields.
pub fn split_gift(gift: &MergedGift) -> Option<MergedGift> {
    let amount2 = gift.gift_amount2.as_ref()?;
    let mut split = gift.clone();
    split.designation_amount = Some(amount2.clone());
    split.desg_code = gift.gift_designation2.clone();
    Some(split)
}

fn resolve_banner_id(gift: &mut MergedGift) {
    if gift.banner_id.is_none() {
        gift.banner_id = gift.donor_id.clone();
    }
}

fn remap_card_description(gift: &mut MergedGift) {
    let web = gift.user_id.as_deref() == Some(WEB_CHANNEL_USER);
    let code = match gift.card_description.as_deref() {
        Some("VISA") | Some("MC") => {
            if web {
                "WM"
            } else {
                "MC"
            }
        }
        Some("AMEX") => {
            if web {
                "WA"
            } else {
                "AX"
            }
        }
        Some("DISC") => {
            if web {
                "WD"
            } else {
                "DS"
            }
        }
        // Brands outside the remap set pass through unchanged.
        _ => return,
    };
    gift.card_description = Some(code.to_string());
}

fn flag_match_received(gift: &mut MergedGift) {
    if gift.gift_matching.is_some() {
        gift.match_received = Some("Y".to_string());
    }
}

fn code_tribute_type(gift: &mut MergedGift) {
    let code = match gift.tribute_type.as_deref() {
        Some("In Memory") => "MEMR",
        Some("In Honor") => "HONR",
        _ => return,
    };
    gift.tribute_type = Some(code.to_string());
}

fn code_anonymous(gift: &mut MergedGift) {
    // Strict equality with the literal "True"; anything else, including
    // "TRUE" and absent values, renders as an empty cell.
    gift.anonymous = match gift.anonymous.as_deref() {
        Some("True") => Some("ANON".to_string()),
        _ => None,
    };
}

fn fill_designation_amount(gift: &mut MergedGift) {
    if gift.designation_amount.is_none() {
        gift.designation_amount = gift
            .gift_amount
            .clone()
            .or_else(|| gift.total_gift_amount.clone());
    }
}

fn fill_desg_code(gift: &mut MergedGift) {
    if gift.desg_code.is_none() {
        gift.desg_code = gift.gift_designation.clone();
    }
}

fn fill_solicitation_code(gift: &mut MergedGift) {
    if gift.solicitation_code.is_none() {
        gift.solicitation_code = gift.c_solicitation_code.clone();
    }
}

fn clean_phones(gift: &mut MergedGift) {
    if gift.area.is_some() || gift.phone_number.is_some() {
        gift.phone_number = Some(phone::normalize(
            gift.area.as_deref().unwrap_or(""),
            gift.phone_number.as_deref().unwrap_or(""),
        ));
    }
    if gift.c_phone_number.is_some() {
        gift.c_phone_number = Some(phone::normalize(
            "",
            gift.c_phone_number.as_deref().unwrap_or(""),
        ));
    }
}
