use std::sync::Arc;
use anyhow::Result;
use sui_sdk::types::base_types::SuiAddress;
use crate::app::core::{App, MessageType};
use crate::app::eligibility::OwnershipState;
use crate::utils::{setup_for_read, shorten_id};
use crate::wallet::Wallet;

/// Connection state of the user's wallet. Address and balance exist only
/// while connected; the fields are private so the pairing cannot be
/// broken from outside the connect/disconnect operations.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSession {
    connected: bool,
    address: Option<SuiAddress>,
    balance: Option<u128>,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        WalletSession {
            connected: false,
            address: None,
            balance: None,
        }
    }

    pub fn established(address: SuiAddress, balance: u128) -> Self {
        WalletSession {
            connected: true,
            address: Some(address),
            balance: Some(balance),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn address(&self) -> Option<SuiAddress> {
        self.address
    }

    pub fn balance(&self) -> Option<u128> {
        self.balance
    }

    pub fn short_address(&self) -> Option<String> {
        self.address.map(|address| shorten_id(&address.to_string()))
    }
}

impl App {
    /// Connect through the local Sui client config and pull the session
    /// basics. Provider failures surface as a notification; the session
    /// stays disconnected.
    pub async fn connect(&mut self) {
        if self.session.is_connected() {
            return;
        }

        self.set_message(MessageType::Info, "Connecting wallet...".to_string());

        let (client, address) = match setup_for_read(&self.network_state).await {
            Ok(pair) => pair,
            Err(e) => {
                self.set_message(MessageType::Error, format!("Failed to connect wallet: {}", e));
                return;
            }
        };

        let wallet = Wallet::new(&self.network_state, Arc::new(client), address);
        let balance = match wallet.get_sui_balance(wallet.active_address()).await {
            Ok(balance) => balance,
            Err(e) => {
                self.set_message(MessageType::Error, format!("Failed to connect wallet: {}", e));
                return;
            }
        };

        self.wallet = Some(wallet);
        self.apply_session(WalletSession::established(address, balance));
        self.set_message(
            MessageType::Success,
            "Successfully connected to Sui wallet".to_string(),
        );
        self.push_activity(format!(
            "Wallet connected: {}",
            self.session.short_address().unwrap_or_default()
        ));

        self.run_ownership_query().await;
    }

    /// Always succeeds; clears address, balance and eligibility.
    pub fn disconnect(&mut self) {
        if !self.session.is_connected() {
            return;
        }
        self.wallet = None;
        self.apply_session(WalletSession::disconnected());
        self.set_message(MessageType::Info, "Wallet has been disconnected".to_string());
        self.push_activity("Wallet disconnected".to_string());
    }

    /// Replace the session and rederive everything hanging off it. A
    /// disconnect resets eligibility before any new query resolves.
    pub fn apply_session(&mut self, session: WalletSession) {
        self.session = session;
        if !self.session.is_connected() {
            self.ownership = OwnershipState::NotQueried;
        }
        self.recompute_eligibility();
    }

    /// Re-fetch balance and re-run the ownership query for the connected
    /// address.
    pub async fn refresh(&mut self) {
        let Some(address) = self.session.address() else {
            return;
        };
        if let Err(e) = self.refresh_balance(address).await {
            self.set_message(MessageType::Error, format!("Failed to refresh balance: {}", e));
        }
        self.run_ownership_query().await;
    }

    async fn refresh_balance(&mut self, address: SuiAddress) -> Result<()> {
        let Some(wallet) = &self.wallet else {
            return Ok(());
        };
        let balance = wallet.get_sui_balance(address).await?;
        self.apply_session(WalletSession::established(address, balance));
        Ok(())
    }

    /// Execute the whitelist ownership query. Without an address the
    /// query does not run at all; errors degrade to a failed state whose
    /// only effect is a false eligibility flag.
    pub async fn run_ownership_query(&mut self) {
        let (Some(address), Some(wallet)) = (self.session.address(), self.wallet.clone()) else {
            self.ownership = OwnershipState::NotQueried;
            self.recompute_eligibility();
            return;
        };

        match wallet.get_whitelist_tickets(address).await {
            Ok(tickets) => self.apply_ownership(Ok(tickets)),
            Err(e) => self.apply_ownership(Err(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_session_has_no_address_or_balance() {
        let session = WalletSession::disconnected();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
        assert!(session.balance().is_none());
        assert!(session.short_address().is_none());
    }

    #[test]
    fn test_established_session_has_address_and_balance() {
        let session = WalletSession::established(SuiAddress::ZERO, 1_500_000_000);
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(SuiAddress::ZERO));
        assert_eq!(session.balance(), Some(1_500_000_000));
        assert!(session.short_address().is_some());
    }

    #[test]
    fn test_apply_disconnected_session_resets_ownership() {
        let mut app = App::new(crate::utils::NetworkState::new());
        app.apply_session(WalletSession::established(SuiAddress::ZERO, 0));
        app.apply_ownership(Ok(vec![]));
        app.apply_session(WalletSession::disconnected());
        assert_eq!(app.ownership, OwnershipState::NotQueried);
        assert!(!app.is_whitelisted);
    }
}
