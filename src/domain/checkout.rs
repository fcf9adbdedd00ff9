use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PlaceOrder;

/// Card form submitted at checkout. Only the shape is checked; no card
/// network is contacted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_number: String,
    /// `MM/YY`
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CardError {
    #[error("Please enter a valid 16-digit card number")]
    InvalidNumber,
    #[error("Please enter a valid expiry date (MM/YY)")]
    InvalidExpiry,
    #[error("Please enter a valid 3-digit CVV")]
    InvalidCvv,
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

impl CardDetails {
    pub fn validate(&self) -> Result<(), CardError> {
        let number: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !all_digits(&number, 16) {
            return Err(CardError::InvalidNumber);
        }

        match self.expiry_date.split_once('/') {
            Some((mm, yy)) if all_digits(mm, 2) && all_digits(yy, 2) => {}
            _ => return Err(CardError::InvalidExpiry),
        }

        if !all_digits(&self.cvv, 3) {
            return Err(CardError::InvalidCvv);
        }
        Ok(())
    }
}

/// Body of `POST /checkout`: one order payload per seller plus the card form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub orders: Vec<PlaceOrder>,
    pub card: CardDetails,
}

/// Body of `POST /carts/{buyer_id}/checkout`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartCheckout {
    pub card: CardDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub order_ids: Vec<String>,
    pub transaction_ids: Vec<String>,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str, expiry: &str, cvv: &str) -> CardDetails {
        CardDetails {
            card_number: number.into(),
            expiry_date: expiry.into(),
            cvv: cvv.into(),
        }
    }

    #[test]
    fn test_valid_card_with_spaces() {
        assert_eq!(card("4242 4242 4242 4242", "12/29", "123").validate(), Ok(()));
        assert_eq!(card("4242424242424242", "01/30", "000").validate(), Ok(()));
    }

    #[test]
    fn test_card_number_must_have_sixteen_digits() {
        assert_eq!(
            card("4242 4242 4242 424", "12/29", "123").validate(),
            Err(CardError::InvalidNumber)
        );
        assert_eq!(
            card("4242 4242 4242 42424", "12/29", "123").validate(),
            Err(CardError::InvalidNumber)
        );
        assert_eq!(
            card("4242-4242-4242-4242", "12/29", "123").validate(),
            Err(CardError::InvalidNumber)
        );
    }

    #[test]
    fn test_expiry_format() {
        for bad in ["1229", "1/29", "12/2029", "ab/cd", ""] {
            assert_eq!(
                card("4242424242424242", bad, "123").validate(),
                Err(CardError::InvalidExpiry),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_cvv_length() {
        assert_eq!(
            card("4242424242424242", "12/29", "12").validate(),
            Err(CardError::InvalidCvv)
        );
        assert_eq!(
            card("4242424242424242", "12/29", "1234").validate(),
            Err(CardError::InvalidCvv)
        );
    }
}
