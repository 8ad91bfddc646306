use async_trait::async_trait;
use vendo_core::hash::stable_hash;

use crate::StationError;

/// Per-call reservation ceiling for the simulated stock table.
const MAX_UNITS_PER_CALL: u32 = 10;

/// Stock queries and reservation. `check_stock` must stay pure and
/// idempotent; `reserve` and `commit` may have side effects.
#[async_trait]
pub trait InventoryStation: Send + Sync {
    /// Whether the requested quantity can be served. No side effects.
    async fn check_stock(&self, product_id: &str, quantity: u32) -> Result<bool, StationError>;

    /// Reserves the requested quantity. There is no reservation ledger in
    /// the simulated implementation, so a reservation is not distinguishable
    /// from a check and double-reservation is not prevented.
    async fn reserve(&self, product_id: &str, quantity: u32) -> Result<bool, StationError>;

    /// Decrements stock after a sale. Best-effort; the caller never
    /// consults an outcome.
    async fn commit(&self, product_id: &str, quantity: u32) -> Result<(), StationError>;
}

/// Deterministic stand-in for a real stock table: a product is available
/// iff its identifier hashes even and the quantity fits the per-call
/// ceiling.
#[derive(Debug, Default)]
pub struct SimulatedInventory;

impl SimulatedInventory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InventoryStation for SimulatedInventory {
    async fn check_stock(&self, product_id: &str, quantity: u32) -> Result<bool, StationError> {
        let in_stock = stable_hash(product_id) % 2 == 0 && quantity <= MAX_UNITS_PER_CALL;
        tracing::debug!(
            product_id,
            quantity,
            in_stock,
            "inventory: stock check"
        );
        Ok(in_stock)
    }

    async fn reserve(&self, product_id: &str, quantity: u32) -> Result<bool, StationError> {
        let reserved = self.check_stock(product_id, quantity).await?;
        if reserved {
            tracing::info!(product_id, quantity, "inventory: items reserved");
        } else {
            tracing::info!(product_id, quantity, "inventory: reservation refused");
        }
        Ok(reserved)
    }

    async fn commit(&self, product_id: &str, quantity: u32) -> Result<(), StationError> {
        tracing::info!(product_id, quantity, "inventory: stock decremented");
        Ok(())
    }
}
