use crate::server::error::config::ConfigError;

/// ESI base URL used when `ESI_URL` is not set.
pub const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";

/// Server configuration read from the environment.
pub struct Config {
    pub contact_email: String,
    pub esi_client_id: String,
    pub esi_client_secret: String,
    pub esi_callback_url: String,
    pub esi_url: String,
    pub user_agent: String,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but empty
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            let Some(value) = lookup(var) else {
                return Err(ConfigError::MissingEnvVar(var.to_string()));
            };

            if value.trim().is_empty() {
                return Err(ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: "value is empty".to_string(),
                });
            }

            Ok(value)
        };

        let contact_email = required("CONTACT_EMAIL")?;
        let esi_url = match lookup("ESI_URL") {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_ESI_URL.to_string(),
        };

        let user_agent = format!(
            "{}/{} ({}; +https://github.com/autumn-order/pochven-payout)",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email
        );

        Ok(Self {
            esi_client_id: required("ESI_CLIENT_ID")?,
            esi_client_secret: required("ESI_CLIENT_SECRET")?,
            esi_callback_url: required("ESI_CALLBACK_URL")?,
            contact_email,
            esi_url,
            user_agent,
        })
    }
}
