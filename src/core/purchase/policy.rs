// Immutable purchase configuration.
//
// Purpose
// - Hold the per-transaction ticket limit and the price table as one
//   injectable value instead of literals scattered through the decider.
//
// Testing guidance
// - Tests override individual fields with struct update syntax, e.g.
//   `PurchasePolicy { max_tickets_per_purchase: 5, ..Default::default() }`.

use crate::core::purchase::category::TicketCategory;

pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl PriceTable {
    pub fn price_of(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: 100,
            child: 50,
            infant: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasePolicy {
    pub max_tickets_per_purchase: u32,
    pub prices: PriceTable,
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
            prices: PriceTable::default(),
        }
    }
}
