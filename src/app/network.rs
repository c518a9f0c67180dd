use crate::app::core::{App, MessageType};
use crate::app::session::WalletSession;
use crate::constants::NETWORKS;

impl App {
    pub fn start_network_switch(&mut self) {
        self.is_switching_network = true;
    }

    pub fn cancel_network_switch(&mut self) {
        self.is_switching_network = false;
    }

    /// Addresses, balances and whitelist tickets are all network-scoped,
    /// so switching tears the session down.
    pub fn switch_to_network(&mut self, network_index: usize) {
        if network_index < NETWORKS.len() {
            self.network_state.current_network = network_index;
        }
        self.is_switching_network = false;

        self.wallet = None;
        self.apply_session(WalletSession::disconnected());
        self.set_message(
            MessageType::Info,
            format!(
                "Switched to {}. Reconnect your wallet to continue.",
                self.network_state.get_current_network().to_uppercase()
            ),
        );
    }

    pub fn get_network_options(&self) -> String {
        format!("1) {}  2) {}  3) {}",
            NETWORKS[0].0.to_uppercase(),
            NETWORKS[1].0.to_uppercase(),
            NETWORKS[2].0.to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sui_sdk::types::base_types::SuiAddress;
    use crate::utils::NetworkState;

    #[test]
    fn test_network_switch_clears_session() {
        let mut app = App::new(NetworkState::new());
        app.apply_session(WalletSession::established(SuiAddress::ZERO, 42));
        assert!(app.session.is_connected());

        app.switch_to_network(0);
        assert_eq!(app.network_state.get_current_network(), "devnet");
        assert!(!app.session.is_connected());
        assert!(!app.is_whitelisted);
    }

    #[test]
    fn test_out_of_range_index_keeps_current_network() {
        let mut app = App::new(NetworkState::new());
        let before = app.network_state.current_network;
        app.switch_to_network(99);
        assert_eq!(app.network_state.current_network, before);
    }
}
