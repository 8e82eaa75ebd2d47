use tracing::debug;

use crate::{config::non_empty_env, constants};

pub struct LocalAuthData;

/// an env-provided key wins, the keyring is only asked when there is none
fn pick_api_key<F>(env_api_key: Option<String>, from_keyring: F) -> anyhow::Result<Option<String>>
where
    F: FnOnce() -> anyhow::Result<Option<String>>,
{
    match env_api_key {
        Some(api_key) => {
            debug!("using api key from {}", constants::ENV_API_KEY);
            Ok(Some(api_key))
        }
        None => from_keyring(),
    }
}

impl LocalAuthData {
    fn entry() -> anyhow::Result<keyring::Entry> {
        Ok(keyring::Entry::new(
            env!("CARGO_PKG_NAME"),
            constants::API_KEY_KEYRING_TAG,
        )?)
    }

    pub fn save(api_key: &str) -> anyhow::Result<()> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(anyhow::anyhow!("API key cannot be empty!"));
        }

        Self::entry()?.set_password(api_key)?;

        Ok(())
    }

    fn from_keyring() -> anyhow::Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(api_key) => Ok(Some(api_key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err)),
        }
    }

    pub fn get() -> anyhow::Result<Option<String>> {
        pick_api_key(non_empty_env(constants::ENV_API_KEY), Self::from_keyring)
    }

    pub fn delete() -> anyhow::Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(anyhow::Error::new(err)),
        }
    }
}
