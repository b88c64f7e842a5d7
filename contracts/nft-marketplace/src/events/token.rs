use near_sdk::AccountId;

use super::TOKEN;
use super::builder::EventBuilder;

pub fn emit_token_minted(
    owner_id: &AccountId,
    token_id: u64,
    royalty_recipient: Option<&AccountId>,
    royalty_bps: u16,
) {
    EventBuilder::new(TOKEN, "mint", owner_id)
        .field("owner_id", owner_id)
        .field("token_id", token_id)
        .field_opt("royalty_recipient", royalty_recipient)
        .field("royalty_bps", royalty_bps as u32)
        .emit();
}

pub fn emit_token_transferred(old_owner_id: &AccountId, new_owner_id: &AccountId, token_id: u64) {
    EventBuilder::new(TOKEN, "transfer", old_owner_id)
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_id", token_id)
        .emit();
}
