//! Rupee formatting and GST arithmetic for presentation layers.

pub const RUPEE_SIGN: char = '₹';

/// Groups digits the Indian way: the last three together, then pairs.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn format_rupees(amount: u64) -> String {
    format!("{}{}", RUPEE_SIGN, format_inr(amount))
}

/// Tax on `subtotal` at `rate_percent`, rounded half up to whole Rupees.
pub fn gst_amount(subtotal: u64, rate_percent: u64) -> u64 {
    (subtotal * rate_percent + 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(1_000), "1,000");
        assert_eq!(format_inr(30_000), "30,000");
        assert_eq!(format_inr(273_000), "2,73,000");
        assert_eq!(format_inr(12_345_678), "1,23,45,678");
    }

    #[test]
    fn test_rupee_prefix() {
        assert_eq!(format_rupees(50_000), "₹50,000");
    }

    #[test]
    fn test_gst_rounds_half_up() {
        assert_eq!(gst_amount(273_000, 18), 49_140);
        assert_eq!(gst_amount(25, 18), 5); // 4.5
        assert_eq!(gst_amount(27, 18), 5); // 4.86
        assert_eq!(gst_amount(0, 18), 0);
    }
}
