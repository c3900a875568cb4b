use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

/// A provider as listed by the connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    /// Usable in the current environment
    pub present: bool,
}

/// Public key as handed back by a provider
///
/// Some providers return the base58 text, others an address value.
/// The connector normalises both through [`PublicKeyRepr::canonical`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyRepr {
    Text(String),
    Address(Pubkey),
}

impl PublicKeyRepr {
    /// Canonical base58 string form
    pub fn canonical(&self) -> anyhow::Result<String> {
        match self {
            PublicKeyRepr::Text(text) => {
                let pubkey = Pubkey::from_str(text.trim())
                    .map_err(|e| anyhow::anyhow!("Provider returned invalid public key {}: {}", text, e))?;
                Ok(pubkey.to_string())
            }
            PublicKeyRepr::Address(pubkey) => Ok(pubkey.to_string()),
        }
    }
}

/// Successful provider connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectResponse {
    pub public_key: PublicKeyRepr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_address_forms_agree() {
        let pubkey = Pubkey::new_unique();
        let text = PublicKeyRepr::Text(format!(" {} ", pubkey));
        let address = PublicKeyRepr::Address(pubkey);
        assert_eq!(text.canonical().unwrap(), address.canonical().unwrap());
    }

    #[test]
    fn garbage_text_is_rejected() {
        assert!(PublicKeyRepr::Text("not-base58!!".to_string()).canonical().is_err());
    }
}
