use std::sync::Arc;

use crate::delivery::{DeliveryStation, SimulatedDelivery};
use crate::inventory::{InventoryStation, SimulatedInventory};
use crate::models::{Availability, OrderOutcome, OrderRequest, ShippingQuote};
use crate::payment::{PaymentStation, SimulatedPayment};
use crate::StationError;

/// Composes the three stations into one multi-step order operation, and
/// exposes simplified read paths that each touch a single station.
pub struct OrderPipeline {
    inventory: Arc<dyn InventoryStation>,
    payment: Arc<dyn PaymentStation>,
    delivery: Arc<dyn DeliveryStation>,
}

impl OrderPipeline {
    /// Wires the simulated stations.
    pub fn new() -> Self {
        Self {
            inventory: Arc::new(SimulatedInventory::new()),
            payment: Arc::new(SimulatedPayment::new()),
            delivery: Arc::new(SimulatedDelivery::new()),
        }
    }

    /// Injects station implementations, mainly for tests.
    pub fn with_stations(
        inventory: Arc<dyn InventoryStation>,
        payment: Arc<dyn PaymentStation>,
        delivery: Arc<dyn DeliveryStation>,
    ) -> Self {
        Self {
            inventory,
            payment,
            delivery,
        }
    }

    /// Runs a purchase through stock reservation, payment, and delivery
    /// scheduling. The first failing step ends the run with a declined
    /// outcome; station faults are absorbed here and never reach the
    /// caller as errors.
    ///
    /// There is no compensation: stock reserved before a later decline is
    /// not released.
    pub async fn process_order(&self, request: &OrderRequest) -> OrderOutcome {
        tracing::info!(
            product_id = %request.product_id,
            quantity = request.quantity,
            "processing order"
        );

        match self.run_steps(request).await {
            Ok(outcome) => outcome,
            Err(fault) => {
                tracing::error!(%fault, "order processing fault absorbed");
                OrderOutcome::declined("internal processing error")
            }
        }
    }

    async fn run_steps(&self, request: &OrderRequest) -> Result<OrderOutcome, StationError> {
        // Stock
        if !self
            .inventory
            .check_stock(&request.product_id, request.quantity)
            .await?
        {
            tracing::info!(product_id = %request.product_id, "declined: insufficient stock");
            return Ok(OrderOutcome::declined("insufficient stock"));
        }

        if !self
            .inventory
            .reserve(&request.product_id, request.quantity)
            .await?
        {
            tracing::info!(product_id = %request.product_id, "declined: reservation failed");
            return Ok(OrderOutcome::declined("reservation failed"));
        }

        // Payment
        if !self
            .payment
            .validate_card(&request.card_number, &request.cvv, &request.card_expiry)
            .await?
        {
            tracing::info!("declined: invalid card data");
            return Ok(OrderOutcome::declined("invalid card data"));
        }

        let shipping_cost = self.delivery.shipping_cost(&request.destination_code).await?;
        let total = request.amount + shipping_cost;

        let Some(payment_reference) = self.payment.authorize(total, &request.card_number).await?
        else {
            tracing::info!(%total, "declined: payment declined");
            return Ok(OrderOutcome::declined("payment declined"));
        };

        // Delivery
        let order_id = format!("ORD-{}", chrono::Utc::now().timestamp_millis());
        let tracking_code = self
            .delivery
            .schedule(&order_id, &request.address, &request.destination_code)
            .await?;

        // Stock decrement is best-effort; nothing to consult.
        self.inventory
            .commit(&request.product_id, request.quantity)
            .await?;

        tracing::info!(%order_id, %tracking_code, "order processed");
        Ok(OrderOutcome::completed(
            order_id,
            payment_reference,
            tracking_code,
        ))
    }

    /// Stock-availability view; touches only the inventory station.
    pub async fn check_availability(
        &self,
        product_id: &str,
        quantity: u32,
    ) -> Result<Availability, StationError> {
        let available = self.inventory.check_stock(product_id, quantity).await?;
        Ok(Availability {
            product_id: product_id.to_string(),
            requested_quantity: quantity,
            available,
        })
    }

    /// Shipping cost and lead-time view; touches only the delivery station.
    pub async fn shipping_quote(
        &self,
        destination_code: &str,
    ) -> Result<ShippingQuote, StationError> {
        let cost = self.delivery.shipping_cost(destination_code).await?;
        let estimated_days = self.delivery.estimate_days(destination_code).await?;
        Ok(ShippingQuote {
            destination_code: destination_code.to_string(),
            cost,
            estimated_days,
        })
    }

    /// Aggregated status line over the payment and delivery oracles.
    pub async fn order_status(
        &self,
        order_id: &str,
        payment_reference: &str,
        tracking_code: &str,
    ) -> Result<String, StationError> {
        let payment_status = self.payment.transaction_status(payment_reference).await?;
        let delivery_status = self.delivery.delivery_status(tracking_code).await?;

        Ok(format!(
            "Order {} | Payment: {} | Delivery: {}",
            order_id, payment_status, delivery_status
        ))
    }
}

impl Default for OrderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::delivery::DeliveryStatus;
    use crate::payment::PaymentStatus;

    // Byte sum of "SKU-1001" is even, so the simulated inventory stocks it.
    const IN_STOCK_PRODUCT: &str = "SKU-1001";

    fn valid_request() -> OrderRequest {
        OrderRequest {
            product_id: IN_STOCK_PRODUCT.to_string(),
            quantity: 2,
            amount: dec!(100.00),
            card_number: "4111111111111111".to_string(),
            cvv: "123".to_string(),
            card_expiry: "12/30".to_string(),
            address: "123 Main St".to_string(),
            destination_code: "01310-100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_order_completes() {
        let pipeline = OrderPipeline::new();

        let outcome = pipeline.process_order(&valid_request()).await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "order processed successfully");
        assert!(outcome.order_id.unwrap().starts_with("ORD-"));
        assert!(outcome.payment_reference.unwrap().starts_with("TXN-"));
        assert!(outcome.tracking_code.unwrap().starts_with("TRK-"));
    }

    #[tokio::test]
    async fn test_amount_at_ceiling_is_declined() {
        let pipeline = OrderPipeline::new();
        let mut request = valid_request();
        request.amount = dec!(1000);

        let outcome = pipeline.process_order(&request).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "payment declined");
        assert!(outcome.tracking_code.is_none());
    }

    #[tokio::test]
    async fn test_invalid_card_is_declined() {
        let pipeline = OrderPipeline::new();
        let mut request = valid_request();
        request.cvv = "12".to_string();

        let outcome = pipeline.process_order(&request).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "invalid card data");
    }

    struct ProbePayment {
        touched: AtomicBool,
    }

    #[async_trait]
    impl PaymentStation for ProbePayment {
        async fn validate_card(
            &self,
            _card_number: &str,
            _cvv: &str,
            _expiry: &str,
        ) -> Result<bool, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(true)
        }

        async fn authorize(
            &self,
            _amount: Decimal,
            _card_number: &str,
        ) -> Result<Option<String>, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(Some("TXN-test".to_string()))
        }

        async fn transaction_status(
            &self,
            _reference: &str,
        ) -> Result<PaymentStatus, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(PaymentStatus::Approved)
        }
    }

    struct ProbeDelivery {
        touched: AtomicBool,
    }

    #[async_trait]
    impl DeliveryStation for ProbeDelivery {
        async fn shipping_cost(&self, _destination_code: &str) -> Result<Decimal, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(dec!(15.50))
        }

        async fn estimate_days(&self, _destination_code: &str) -> Result<u32, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(2)
        }

        async fn schedule(
            &self,
            _order_id: &str,
            _address: &str,
            _destination_code: &str,
        ) -> Result<String, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok("TRK-test".to_string())
        }

        async fn delivery_status(
            &self,
            _tracking_code: &str,
        ) -> Result<DeliveryStatus, StationError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(DeliveryStatus::InTransit)
        }
    }

    #[tokio::test]
    async fn test_stock_failure_exits_before_payment_and_delivery() {
        let payment = Arc::new(ProbePayment {
            touched: AtomicBool::new(false),
        });
        let delivery = Arc::new(ProbeDelivery {
            touched: AtomicBool::new(false),
        });
        let pipeline = OrderPipeline::with_stations(
            Arc::new(SimulatedInventory::new()),
            payment.clone(),
            delivery.clone(),
        );

        let mut request = valid_request();
        request.quantity = 11;
        let outcome = pipeline.process_order(&request).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "insufficient stock");
        assert!(!payment.touched.load(Ordering::SeqCst));
        assert!(!delivery.touched.load(Ordering::SeqCst));
    }

    struct FaultyInventory;

    #[async_trait]
    impl InventoryStation for FaultyInventory {
        async fn check_stock(
            &self,
            _product_id: &str,
            _quantity: u32,
        ) -> Result<bool, StationError> {
            Err(StationError::Inventory("backend offline".to_string()))
        }

        async fn reserve(&self, _product_id: &str, _quantity: u32) -> Result<bool, StationError> {
            Err(StationError::Inventory("backend offline".to_string()))
        }

        async fn commit(&self, _product_id: &str, _quantity: u32) -> Result<(), StationError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_station_fault_is_absorbed() {
        let pipeline = OrderPipeline::with_stations(
            Arc::new(FaultyInventory),
            Arc::new(SimulatedPayment::new()),
            Arc::new(SimulatedDelivery::new()),
        );

        let outcome = pipeline.process_order(&valid_request()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "internal processing error");
    }

    #[tokio::test]
    async fn test_availability_view_is_idempotent() {
        let pipeline = OrderPipeline::new();

        let first = pipeline.check_availability(IN_STOCK_PRODUCT, 3).await.unwrap();
        let second = pipeline.check_availability(IN_STOCK_PRODUCT, 3).await.unwrap();

        assert_eq!(first.available, second.available);
        assert!(first.available);
        assert_eq!(first.product_id, IN_STOCK_PRODUCT);
        assert_eq!(first.requested_quantity, 3);
    }

    #[tokio::test]
    async fn test_shipping_quote_view() {
        let pipeline = OrderPipeline::new();

        let quote = pipeline.shipping_quote("13015-904").await.unwrap();

        assert_eq!(quote.cost, dec!(25.00));
        assert_eq!(quote.estimated_days, 5);
        assert_eq!(quote.destination_code, "13015-904");
    }

    #[tokio::test]
    async fn test_order_status_aggregates_both_oracles() {
        let pipeline = OrderPipeline::new();

        let line = pipeline
            .order_status("ORD-1", "TXN-1-ABCD", "TRK-ORD-1-42")
            .await
            .unwrap();

        assert!(line.starts_with("Order ORD-1 | Payment: APPROVED | Delivery: "));
    }

    #[tokio::test]
    async fn test_order_status_flags_malformed_tokens() {
        let pipeline = OrderPipeline::new();

        let line = pipeline.order_status("ORD-1", "bogus", "bogus").await.unwrap();

        assert_eq!(line, "Order ORD-1 | Payment: NOT_FOUND | Delivery: INVALID_CODE");
    }
}
