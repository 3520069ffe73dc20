use crate::server::service::esi::EsiApi;

#[derive(Clone)]
pub struct AppState {
    /// EVE SSO and public ESI client
    pub esi_client: eve_esi::Client,
    /// Authenticated fleet, wallet and name lookups
    pub esi: EsiApi,
}

/// Builds state from an ESI client and the base URL authenticated ESI requests go to.
impl From<(eve_esi::Client, String)> for AppState {
    fn from((esi_client, esi_url): (eve_esi::Client, String)) -> Self {
        Self {
            esi_client,
            esi: EsiApi::new(reqwest::Client::new(), esi_url),
        }
    }
}
