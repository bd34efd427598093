use std::env;

/// Switches that turn the permissive defaults into strict behavior.
///
/// Every flag defaults to `false`, which keeps the lenient behavior existing
/// storefront clients rely on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Recompute order totals and unit prices from the current catalog.
    pub recompute_order_total: bool,
    /// Reject unknown order statuses and out-of-order transitions.
    pub enforce_status_transitions: bool,
    /// Hide orders owned by other users on lookup and status update.
    pub enforce_order_ownership: bool,
    /// Require a bearer token for product create/update/delete.
    pub product_writes_require_auth: bool,
}

impl PolicyConfig {
    fn flag(key: &str) -> bool {
        env::var(key)
            .map(|v| Self::parse_flag(&v))
            .unwrap_or(false)
    }

    fn parse_flag(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

    pub fn from_env() -> Self {
        Self {
            recompute_order_total: Self::flag("ORDER_RECOMPUTE_TOTAL"),
            enforce_status_transitions: Self::flag("ORDER_ENFORCE_STATUS_TRANSITIONS"),
            enforce_order_ownership: Self::flag("ORDER_ENFORCE_OWNERSHIP"),
            product_writes_require_auth: Self::flag("PRODUCT_WRITES_REQUIRE_AUTH"),
        }
    }
}

#[cfg(test)]
impl PolicyConfig {
    pub fn strict() -> Self {
        Self {
            recompute_order_total: true,
            enforce_status_transitions: true,
            enforce_order_ownership: true,
            product_writes_require_auth: true,
        }
    }
}
