//! Commerce rules for the vitrine storefront: catalog filtering and ordering,
//! quick search, cart pricing and stock bookkeeping.
//!
//! Everything here is synchronous and deterministic except the search
//! [`Debouncer`], which needs a Tokio runtime.

pub mod cart;
pub mod catalog;
pub mod collation;
pub mod debounce;
pub mod filter;
pub mod index;
pub mod ledger;
pub mod money;
pub mod paginate;
pub mod pricing;
pub mod search;
pub mod sort;
pub mod store;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use cart::Cart;
pub use catalog::{admin_products, browse, filter_options, FilterOptions};
pub use debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};
pub use index::ProductIndex;
pub use ledger::{search_stock, stock_summary, Adjustment, StockLedger, StockSummary};
pub use money::{format_brl, installment_amount, INSTALLMENT_COUNT};
pub use paginate::{paginate, Page};
pub use store::SessionStore;
pub use summary::order_summary;
