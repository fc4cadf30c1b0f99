use serde::{Deserialize, Serialize};

/// Descriptor of the trading pair pinned to the exchange feed.
///
/// The exchange feed serves exactly one pair; everything the listing
/// needs to display it beyond live prices (name, logo, stable id) comes
/// from this descriptor rather than the feed itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpotPair {
    /// Exchange ticker symbol, e.g. `VANRYUSDT`.
    pub pair_symbol: String,

    /// Base asset symbol, lowercase, e.g. `vanry`. Used to drop the
    /// general feed's duplicate of the same asset.
    pub base_symbol: String,

    /// Display name of the base asset.
    pub display_name: String,

    /// Stable asset id, `<base>-binance`, distinct from any general
    /// feed id.
    pub asset_id: String,

    /// Logo URL for the base asset.
    pub image_url: String,
}

impl SpotPair {
    pub fn new(pair_symbol: &str, base_symbol: &str, display_name: &str, image_url: &str) -> Self {
        let base_symbol = base_symbol.to_lowercase();
        Self {
            pair_symbol: pair_symbol.to_uppercase(),
            asset_id: format!("{}-binance", base_symbol),
            base_symbol,
            display_name: display_name.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

impl Default for SpotPair {
    /// The VANRY/USDT pair the board ships with.
    fn default() -> Self {
        Self::new(
            "VANRYUSDT",
            "vanry",
            "Vanry",
            "https://cryptologos.cc/logos/thumbs/vanry.png?v=029",
        )
    }
}
