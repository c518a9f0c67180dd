use anyhow::Result;
use sui_sdk::{
    rpc_types::{
        SuiObjectDataFilter,
        SuiObjectDataOptions,
        SuiObjectResponseQuery,
    },
    types::base_types::SuiAddress,
};
use super::client::Wallet;
use super::types::OwnedObjectRecord;
use crate::constants::whitelist_ticket_type;

impl Wallet {
    /// Struct tag of the whitelist marker on the current network.
    pub fn whitelist_ticket_type(&self) -> String {
        whitelist_ticket_type(self.network_state.get_current_package_ids().suinft_package_id)
    }

    // Whitelist tickets owned by the address. The query is filtered to the
    // exact ticket type, so anything that comes back counts as a marker.
    pub async fn get_whitelist_tickets(&self, address: SuiAddress) -> Result<Vec<OwnedObjectRecord>> {
        let ticket_type = self.whitelist_ticket_type();

        let mut options = SuiObjectDataOptions::new();
        options.show_type = true;

        let filter = SuiObjectDataFilter::StructType(
            sui_sdk::types::parse_sui_struct_tag(&ticket_type)?
        );

        let response = self.client.read_api()
            .get_owned_objects(
                address,
                Some(SuiObjectResponseQuery::new(Some(filter), Some(options))),
                None,
                None
            )
            .await?;

        let tickets: Vec<OwnedObjectRecord> = response.data.iter()
            .filter_map(|obj| {
                let data = obj.data.as_ref()?;
                let struct_type = data.type_.as_ref()
                    .map(|object_type| object_type.to_string())
                    .unwrap_or_else(|| ticket_type.clone());
                Some(OwnedObjectRecord {
                    object_id: data.object_id.to_string(),
                    struct_type,
                })
            })
            .collect();

        Ok(tickets)
    }
}
