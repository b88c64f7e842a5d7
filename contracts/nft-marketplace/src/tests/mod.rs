
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod errors_test;
    pub mod guards_test;
    pub mod ledger_test;
    pub mod listing_test;
    pub mod purchase_test;
    pub mod registry_test;
    pub mod upgrade_test;

    // --- View coverage ---
    pub mod listing_views_test;
}
