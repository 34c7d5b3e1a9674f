use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::pii::Masked;

/// One audit entry per submitted order, as written by audit sinks.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderAuditRecord {
    pub order_id: Uuid,
    pub customer_name: Masked<String>,
    pub item_count: usize,
    pub total_price: Decimal,
    pub success: bool,
    /// `None` when the submission never produced a payment result.
    pub payment_success: Option<bool>,
    pub shipping_success: Option<bool>,
    pub recorded_at: DateTime<Utc>,
}

impl OrderAuditRecord {
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_newline_terminated_and_unmasked() {
        let record = OrderAuditRecord {
            order_id: Uuid::new_v4(),
            customer_name: Masked("Alice Smith".to_string()),
            item_count: 2,
            total_price: Decimal::new(4999, 2),
            success: true,
            payment_success: Some(true),
            shipping_success: Some(true),
            recorded_at: Utc::now(),
        };

        let line = record.to_json_line().unwrap();
        assert!(line.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["customer_name"], "Alice Smith");
        assert_eq!(parsed["item_count"], 2);
        assert_eq!(parsed["shipping_success"], true);
    }
}
