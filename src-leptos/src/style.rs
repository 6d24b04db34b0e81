//! Palette and status pill styling.

use project_cards_types::PaymentStatus;

/// Dark ink used for text on light controls and for the paid pill.
pub const INK: &str = "#272D41";
/// Light grey behind category pills and unpaid status pills.
pub const PILL_BACKGROUND: &str = "#D4DADB";
pub const TOGGLE_BACKGROUND: &str = "#D5D9DD";
pub const TOGGLE_HOVER_BACKGROUND: &str = "#C1C7CD";

/// Visual variant of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Modifier class carrying text color and shadow
    pub class: &'static str,
    pub background: &'static str,
}

impl StatusStyle {
    pub fn style_attr(&self) -> String {
        format!("background-color: {}", self.background)
    }
}

/// Status pill style, a pure function of the status.
pub const fn status_style(status: PaymentStatus) -> StatusStyle {
    match status {
        PaymentStatus::Paid => StatusStyle { class: "status-pill--paid", background: INK },
        PaymentStatus::NotPaid => StatusStyle { class: "status-pill--unpaid", background: PILL_BACKGROUND },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_style_pairs() {
        assert_eq!(
            status_style(PaymentStatus::Paid),
            StatusStyle { class: "status-pill--paid", background: "#272D41" }
        );
        assert_eq!(
            status_style(PaymentStatus::NotPaid),
            StatusStyle { class: "status-pill--unpaid", background: "#D4DADB" }
        );
    }

    #[test]
    fn test_status_style_is_deterministic() {
        for status in [PaymentStatus::Paid, PaymentStatus::NotPaid] {
            assert_eq!(status_style(status), status_style(status));
        }
        assert_ne!(status_style(PaymentStatus::Paid), status_style(PaymentStatus::NotPaid));
    }

    #[test]
    fn test_style_attr() {
        assert_eq!(status_style(PaymentStatus::Paid).style_attr(), "background-color: #272D41");
    }
}
