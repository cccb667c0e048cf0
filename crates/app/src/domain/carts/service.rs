//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::carts::{errors::CartsServiceError, models::ProductDescriptor};

/// The shop's single cart, held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartsService {
    items: Arc<RwLock<Vec<ProductDescriptor>>>,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn get_cart(&self) -> Vec<ProductDescriptor> {
        self.items.read().await.clone()
    }

    async fn add_item(
        &self,
        product: Option<Value>,
    ) -> Result<Vec<ProductDescriptor>, CartsServiceError> {
        let product = ProductDescriptor::new(product)?;

        let mut items = self.items.write().await;

        info!(product = %product, "adding product to cart");

        items.push(product);

        Ok(items.clone())
    }

    async fn clear_cart(&self) {
        let mut items = self.items.write().await;

        info!(items = items.len(), "clearing cart");

        items.clear();
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Returns the cart's contents in insertion order.
    async fn get_cart(&self) -> Vec<ProductDescriptor>;

    /// Appends a product and returns the updated cart.
    async fn add_item(
        &self,
        product: Option<Value>,
    ) -> Result<Vec<ProductDescriptor>, CartsServiceError>;

    /// Empties the cart.
    async fn clear_cart(&self);
}
