use tripsplit_domain::Money;

/// Formats amounts with a currency symbol and two decimals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, amount: Money) -> String {
        if amount.to_cents().is_negative() {
            format!("-{}{}", self.symbol, amount.abs())
        } else {
            format!("{}{}", self.symbol, amount.abs())
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("₹")
    }
}
