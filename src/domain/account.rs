/// Wallet context: an opaque identifier plus a network-type tag
///
/// The network tag is consumed only to pick a block explorer; nothing else in
/// the history pipeline inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub network: String,
}

impl Account {
    /// Create a new account handle
    pub fn new(id: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            network: network.into(),
        }
    }

    /// Block-explorer URL for one of this account's transactions
    ///
    /// Any network tag containing "testnet" routes to the BlockCypher testnet
    /// explorer; everything else goes to blockchain.info.
    pub fn explorer_url(&self, txid: &str) -> String {
        if self.network.contains("testnet") {
            format!("https://live.blockcypher.com/btc-testnet/tx/{txid}")
        } else {
            format!("https://blockchain.info/tx/{txid}")
        }
    }
}
