//! Fixed client configuration: endpoint base, merchants, example queries.

/// Base path of the backend API as seen from the browser.
///
/// Defaults to the host binary's forwarding routes; override at build time
/// with `POS_API_BASE`.
pub const API_BASE: &str = match option_env!("POS_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Currency symbol used for menu-item prices in agent action summaries.
pub const MENU_CURRENCY_SYMBOL: &str = "€";

/// A merchant the assistant can act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Merchant {
    pub id: &'static str,
    pub name: &'static str,
}

/// Merchants offered in the selector; the first is selected initially.
pub const MERCHANTS: &[Merchant] = &[
    Merchant { id: "1", name: "Downtown Café" },
    Merchant { id: "2", name: "Harbour Pizzeria" },
    Merchant { id: "3", name: "Market Street Bakery" },
];

/// Canned queries shown as one-click buttons.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "What were my total sales last week?",
    "Show me the top 5 selling items this month",
    "Add a Margherita pizza to the Pizza category for 12.50, available for takeaway and delivery",
    "Which hours of the day are busiest?",
];

#[must_use]
pub fn default_merchant_id() -> &'static str {
    MERCHANTS.first().map_or("", |m| m.id)
}
