//! Read models for seller dashboards and reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Category, Division, OrderStatus, Transaction, TransactionStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRow {
    pub order_id: String,
    pub buyer_name: String,
    /// `"Name (qty)"` per line, joined by `", "`.
    pub products: String,
    pub total_price: f64,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub rows: Vec<SalesRow>,
    pub total_orders: usize,
    /// Cancelled orders are listed but not counted.
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub total_transactions: usize,
    pub total_amount: f64,
    pub successful_transactions: usize,
}

impl TransactionSummary {
    pub fn of(transactions: &[Transaction]) -> Self {
        Self {
            total_transactions: transactions.len(),
            total_amount: transactions.iter().map(|t| t.amount).sum(),
            successful_transactions: transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Success)
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionReport {
    pub transactions: Vec<Transaction>,
    pub summary: TransactionSummary,
}

impl From<Vec<Transaction>> for TransactionReport {
    fn from(transactions: Vec<Transaction>) -> Self {
        let summary = TransactionSummary::of(&transactions);
        Self {
            transactions,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerOverview {
    pub revenue_by_division: BTreeMap<Division, f64>,
    pub products_by_division: BTreeMap<Division, usize>,
    pub stock_by_category: BTreeMap<Category, u32>,
}

impl Default for SellerOverview {
    fn default() -> Self {
        Self {
            revenue_by_division: Division::ALL.iter().map(|d| (*d, 0.0)).collect(),
            products_by_division: Division::ALL.iter().map(|d| (*d, 0)).collect(),
            stock_by_category: BTreeMap::new(),
        }
    }
}
