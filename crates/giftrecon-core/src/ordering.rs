use crate::types::DerivedGift;

/// Composite ledger order: resolved donor id, settle date, payer last name,
/// payer first name. Comparison is lexical on the raw strings, so donor ids
/// and dates sort as text, with absent values reading as empty. The sort is
/// stable: rows with equal keys keep join order, and every split stays
/// adjacent to (and ahead of) its parent.
pub fn sort_gifts(gifts: &mut [DerivedGift]) {
    gifts.sort_by_cached_key(sort_key);
}

pub fn sort_key(derived: &DerivedGift) -> (String, String, String, String) {
    let gift = &derived.gift;
    (
        gift.banner_id.clone().unwrap_or_default(),
        gift.settle_date.clone(),
        gift.c_last_name.clone().unwrap_or_default(),
        gift.c_first_name.clone().unwrap_or_default(),
    )
}
