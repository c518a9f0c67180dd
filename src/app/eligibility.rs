use crate::app::core::App;
use crate::app::session::WalletSession;
use crate::constants::whitelist_ticket_type;
use crate::wallet::OwnedObjectRecord;

/// Result of the most recent whitelist ownership query.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnershipState {
    NotQueried,
    Loaded(Vec<OwnedObjectRecord>),
    Failed(String),
}

/// Pure derivation of the whitelist flag. True only for a connected
/// session whose loaded ownership result contains the ticket type; a
/// failed or missing query degrades to false rather than erroring.
pub fn derive_is_whitelisted(
    session: &WalletSession,
    ownership: &OwnershipState,
    ticket_type: &str,
) -> bool {
    if !session.is_connected() {
        return false;
    }
    match ownership {
        OwnershipState::Loaded(records) => {
            records.iter().any(|record| record.struct_type == ticket_type)
        }
        OwnershipState::NotQueried | OwnershipState::Failed(_) => false,
    }
}

impl App {
    /// Rerun the derivation. Called on every session or ownership change.
    pub fn recompute_eligibility(&mut self) {
        let ticket_type =
            whitelist_ticket_type(self.network_state.get_current_package_ids().suinft_package_id);
        self.is_whitelisted = derive_is_whitelisted(&self.session, &self.ownership, &ticket_type);
    }

    /// Store a query result (or its error) and rederive eligibility.
    pub fn apply_ownership(&mut self, result: Result<Vec<OwnedObjectRecord>, String>) {
        self.ownership = match result {
            Ok(records) => OwnershipState::Loaded(records),
            Err(reason) => OwnershipState::Failed(reason),
        };
        self.recompute_eligibility();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sui_sdk::types::base_types::SuiAddress;
    use crate::utils::NetworkState;

    fn ticket_record(ticket_type: &str) -> OwnedObjectRecord {
        OwnedObjectRecord {
            object_id: "0x7bd1".to_string(),
            struct_type: ticket_type.to_string(),
        }
    }

    fn connected_app() -> App {
        let mut app = App::new(NetworkState::new());
        app.apply_session(WalletSession::established(SuiAddress::ZERO, 1_000_000_000));
        app
    }

    fn current_ticket_type(app: &App) -> String {
        whitelist_ticket_type(app.network_state.get_current_package_ids().suinft_package_id)
    }

    #[test]
    fn test_whitelisted_when_ticket_owned() {
        let mut app = connected_app();
        let ticket_type = current_ticket_type(&app);
        app.apply_ownership(Ok(vec![ticket_record(&ticket_type)]));
        assert!(app.is_whitelisted);
    }

    #[test]
    fn test_not_whitelisted_without_matching_type() {
        let mut app = connected_app();
        app.apply_ownership(Ok(vec![ticket_record("0x2::coin::Coin")]));
        assert!(!app.is_whitelisted);
    }

    #[test]
    fn test_not_whitelisted_on_empty_result() {
        let mut app = connected_app();
        app.apply_ownership(Ok(vec![]));
        assert!(!app.is_whitelisted);
    }

    #[test]
    fn test_query_error_degrades_to_false() {
        let mut app = connected_app();
        let ticket_type = current_ticket_type(&app);
        app.apply_ownership(Ok(vec![ticket_record(&ticket_type)]));
        assert!(app.is_whitelisted);

        app.apply_ownership(Err("rpc timeout".to_string()));
        assert!(!app.is_whitelisted);
        assert!(matches!(app.ownership, OwnershipState::Failed(_)));
    }

    #[test]
    fn test_disconnected_session_is_never_whitelisted() {
        let mut app = App::new(NetworkState::new());
        let ticket_type = current_ticket_type(&app);
        // a stale loaded result must not grant eligibility without a session
        app.ownership = OwnershipState::Loaded(vec![ticket_record(&ticket_type)]);
        app.recompute_eligibility();
        assert!(!app.is_whitelisted);
    }

    #[test]
    fn test_disconnect_resets_eligibility_before_next_query() {
        let mut app = connected_app();
        let ticket_type = current_ticket_type(&app);
        app.apply_ownership(Ok(vec![ticket_record(&ticket_type)]));
        assert!(app.is_whitelisted);

        app.apply_session(WalletSession::disconnected());
        assert!(!app.is_whitelisted);
        assert_eq!(app.ownership, OwnershipState::NotQueried);
    }
}
