//! Display formatting helpers shared across panels.

/// Format a currency amount in rupees, as the backend sends it.
///
/// Whole amounts render without decimals ("₹150"); fractional amounts
/// keep two places ("₹150.50"). The value itself is never recomputed.
pub fn rupees(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{:.2}", amount)
    }
}

/// Truncate a string to a maximum length.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 2 {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees_whole_amounts() {
        assert_eq!(rupees(150.0), "₹150");
        assert_eq!(rupees(5000.0), "₹5000");
        assert_eq!(rupees(0.0), "₹0");
    }

    #[test]
    fn test_rupees_fractional_amounts() {
        assert_eq!(rupees(150.5), "₹150.50");
        assert_eq!(rupees(1200.25), "₹1200.25");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 5), "hell…");
        assert_eq!(truncate_string("ab", 2), "ab");
    }
}
