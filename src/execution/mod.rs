use crate::engines::generation::chromosome::{Chromosome, SignalAction, SignalDomain};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Venue an order request targets. Transmission is the caller's concern;
/// the core only builds the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Oanda,
    Coinbase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Abstract trade-execution request derived from an evolved strategy,
/// handed to an external order-execution collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOrder {
    pub symbol: String,
    pub side: OrderSide,
    pub platform: Platform,
    pub amount: f64,
}

impl TradeOrder {
    /// Build an order from the most recent signal of an evolved strategy.
    /// A hold signal produces no order.
    pub fn from_strategy(
        symbol: &str,
        chromosome: &Chromosome,
        domain: SignalDomain,
        platform: Platform,
        amount: f64,
    ) -> Option<Self> {
        let side = match domain.interpret(*chromosome.last()?) {
            SignalAction::Enter => OrderSide::Buy,
            SignalAction::Exit => OrderSide::Sell,
            SignalAction::Hold => return None,
        };

        Some(Self {
            symbol: symbol.to_string(),
            side,
            platform,
            amount,
        })
    }

    /// Wire body for the target venue.
    pub fn to_payload(&self) -> serde_json::Value {
        match self.platform {
            Platform::Oanda => {
                let units = match self.side {
                    OrderSide::Buy => self.amount,
                    OrderSide::Sell => -self.amount,
                };
                json!({
                    "order": {
                        "instrument": self.symbol,
                        "units": units,
                        "type": "MARKET",
                    }
                })
            }
            Platform::Coinbase => {
                let side = match self.side {
                    OrderSide::Buy => "buy",
                    OrderSide::Sell => "sell",
                };
                json!({
                    "product_id": self.symbol,
                    "side": side,
                    "funds": format!("{}", self.amount),
                })
            }
        }
    }
}

/// Seam to the external order-transmission collaborator.
pub trait OrderExecutor {
    fn execute(&self, order: &TradeOrder) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_buy_gene_maps_to_buy_order() {
        let chromosome = vec![0.0, 0.0, 1.0];
        let order = TradeOrder::from_strategy(
            "BTC-USD",
            &chromosome,
            SignalDomain::Binary,
            Platform::Coinbase,
            100.0,
        )
        .unwrap();

        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.symbol, "BTC-USD");
    }

    #[test]
    fn test_ternary_hold_produces_no_order() {
        let chromosome = vec![1.0, 0.0];
        let order = TradeOrder::from_strategy(
            "EUR_USD",
            &chromosome,
            SignalDomain::Ternary,
            Platform::Oanda,
            100.0,
        );
        assert!(order.is_none());
    }

    #[test]
    fn test_oanda_payload_negates_units_on_sell() {
        let order = TradeOrder {
            symbol: "EUR_USD".to_string(),
            side: OrderSide::Sell,
            platform: Platform::Oanda,
            amount: 100.0,
        };

        let payload = order.to_payload();
        assert_eq!(payload["order"]["units"], -100.0);
        assert_eq!(payload["order"]["type"], "MARKET");
    }

    #[test]
    fn test_coinbase_payload_fields() {
        let order = TradeOrder {
            symbol: "BTC-USD".to_string(),
            side: OrderSide::Buy,
            platform: Platform::Coinbase,
            amount: 100.0,
        };

        let payload = order.to_payload();
        assert_eq!(payload["product_id"], "BTC-USD");
        assert_eq!(payload["side"], "buy");
        assert_eq!(payload["funds"], "100");
    }
}
