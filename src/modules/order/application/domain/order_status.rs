use std::fmt;
use std::str::FromStr;

use super::order::OrderValidationError;

pub const INITIAL_STATUS: &str = "created";

/// Recognized fulfilment states, checked only when transitions are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Created,
    Confirmed,
    Processing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Created => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == OrderStatus::Cancelled || self.next() == Some(target)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(OrderStatus::Created),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Checks a requested status change. Free-form unless `enforce` is set.
pub fn validate_status_change(
    current: &str,
    requested: &str,
    enforce: bool,
) -> Result<String, OrderValidationError> {
    if requested.trim().is_empty() {
        return Err(OrderValidationError::EmptyStatus);
    }

    if !enforce {
        return Ok(requested.to_string());
    }

    let target: OrderStatus = requested.parse()?;
    // Rows written before enforcement was switched on may carry free-form values.
    let from: OrderStatus = current.parse()?;

    if !from.can_transition_to(target) {
        return Err(OrderValidationError::InvalidTransition {
            from: from.to_string(),
            to: target.to_string(),
        });
    }

    Ok(target.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_form_status_is_accepted_verbatim() {
        assert_eq!(
            validate_status_change("delivered", "Left at the door", false).unwrap(),
            "Left at the door"
        );
        assert_eq!(
            validate_status_change("cancelled", "created", false).unwrap(),
            "created"
        );
    }

    #[test]
    fn test_blank_status_is_always_rejected() {
        assert_eq!(
            validate_status_change("created", "  ", false),
            Err(OrderValidationError::EmptyStatus)
        );
        assert_eq!(
            validate_status_change("created", "", true),
            Err(OrderValidationError::EmptyStatus)
        );
    }

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            "created",
            "confirmed",
            "processing",
            "out_for_delivery",
            "delivered",
        ];
        for pair in path.windows(2) {
            assert!(
                validate_status_change(pair[0], pair[1], true).is_ok(),
                "{} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_cancel_from_any_non_terminal_state() {
        for from in ["created", "confirmed", "processing", "out_for_delivery"] {
            assert!(validate_status_change(from, "cancelled", true).is_ok());
        }
        assert!(validate_status_change("delivered", "cancelled", true).is_err());
    }

    #[test]
    fn test_backwards_and_skipping_transitions_are_rejected() {
        assert_eq!(
            validate_status_change("delivered", "created", true),
            Err(OrderValidationError::InvalidTransition {
                from: "delivered".to_string(),
                to: "created".to_string(),
            })
        );
        assert!(validate_status_change("created", "delivered", true).is_err());
        assert!(validate_status_change("cancelled", "processing", true).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected_when_enforced() {
        assert_eq!(
            validate_status_change("created", "shipped", true),
            Err(OrderValidationError::UnknownStatus("shipped".to_string()))
        );
    }

    #[test]
    fn test_initial_status_is_recognized() {
        assert_eq!(
            INITIAL_STATUS.parse::<OrderStatus>().unwrap(),
            OrderStatus::Created
        );
    }
}
