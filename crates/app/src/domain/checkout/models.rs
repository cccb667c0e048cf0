//! Checkout Models

use crate::domain::checkout::errors::CheckoutServiceError;

/// Number of units requested on a purchase line.
///
/// Requests are lenient: a missing or zero amount means one unit and the
/// sign of the amount is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u64);

impl Quantity {
    #[must_use]
    pub fn from_requested(requested: Option<i64>) -> Self {
        match requested {
            None | Some(0) => Self(1),
            Some(amount) => Self(amount.unsigned_abs()),
        }
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A single car and amount within a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseLine {
    pub name: String,
    pub quantity: Quantity,
}

impl PurchaseLine {
    #[must_use]
    pub fn new(name: impl Into<String>, requested: Option<i64>) -> Self {
        Self {
            name: name.into(),
            quantity: Quantity::from_requested(requested),
        }
    }
}

/// Buyer Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buyer {
    pub name: String,
    pub email: String,
}

/// New Purchase Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchase {
    pub buyer: Buyer,
    pub lines: Vec<PurchaseLine>,
}

impl NewPurchase {
    /// Assembles a purchase from submitted fields.
    ///
    /// An empty list of lines is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutServiceError::MissingRequiredData`] when the name or
    /// email is absent or empty, or when no lines were submitted at all.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        lines: Option<Vec<PurchaseLine>>,
    ) -> Result<Self, CheckoutServiceError> {
        let (Some(name), Some(email), Some(lines)) = (
            name.filter(|n| !n.is_empty()),
            email.filter(|e| !e.is_empty()),
            lines,
        ) else {
            return Err(CheckoutServiceError::MissingRequiredData);
        };

        Ok(Self {
            buyer: Buyer { name, email },
            lines,
        })
    }
}

/// Stock movement applied for one purchase line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub name: String,
    pub quantity: u64,
    pub remaining: u64,
}

/// Purchase Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub buyer: Buyer,
    pub changes: Vec<StockChange>,
}
