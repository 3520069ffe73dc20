use eve_esi::model::oauth2::AuthenticationData;

use crate::server::{error::Error, service::auth::LOGIN_SCOPES};

/// Creates the EVE SSO login URL along with the CSRF state to check on callback.
pub fn login_service(esi_client: &eve_esi::Client) -> Result<AuthenticationData, Error> {
    let scopes: Vec<String> = LOGIN_SCOPES.iter().map(|scope| scope.to_string()).collect();

    let login = esi_client.oauth2().login_url(scopes)?;

    Ok(login)
}
