use crate::shared::policy::PolicyConfig;

/// The subset of [`PolicyConfig`] the order services act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderPolicy {
    pub recompute_total: bool,
    pub enforce_status_transitions: bool,
    pub enforce_ownership: bool,
}

impl From<&PolicyConfig> for OrderPolicy {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            recompute_total: config.recompute_order_total,
            enforce_status_transitions: config.enforce_status_transitions,
            enforce_ownership: config.enforce_order_ownership,
        }
    }
}
