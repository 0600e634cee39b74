/// The account that publishes chains and coordinates campaigns.
pub trait AccountResolver: Send + Sync {
    /// Keyring name, used by the broadcaster as signer identity.
    fn name(&self) -> &str;

    /// Bech32 address of the account for the network with the given prefix.
    fn address(&self, prefix: &str) -> String;
}
