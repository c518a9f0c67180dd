use std::sync::Arc;
use anyhow::Result;
use sui_sdk::{
    types::base_types::SuiAddress,
    SuiClient,
};
use crate::utils::NetworkState;

#[derive(Clone)]
pub struct Wallet {
    pub client: Arc<SuiClient>,
    pub address: SuiAddress,
    pub network_state: NetworkState,
}

impl Wallet {
    pub fn new(network_state: &NetworkState, client: Arc<SuiClient>, address: SuiAddress) -> Self {
        Wallet {
            client,
            address,
            network_state: network_state.clone(),
        }
    }

    pub fn active_address(&self) -> SuiAddress {
        self.address
    }

    pub async fn get_sui_balance(&self, address: SuiAddress) -> Result<u128> {
        let balance = self.client.coin_read_api()
            .get_balance(address, None)
            .await?;
        Ok(balance.total_balance)
    }
}
