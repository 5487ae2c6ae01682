//! Formatting utilities for prices, ratings and counts.

/// Format a price with its currency (e.g., "$24.99", "€9.50", "120.00 CAD").
///
/// Zero means the platform did not give a usable price.
pub fn format_price(price: f64, currency: &str) -> String {
    if price <= 0.0 || !price.is_finite() {
        return "See price".to_string();
    }

    match currency.trim().to_ascii_uppercase().as_str() {
        "USD" | "" => format!("${:.2}", price),
        "EUR" => format!("€{:.2}", price),
        "GBP" => format!("£{:.2}", price),
        "JPY" => format!("¥{:.0}", price),
        other => format!("{:.2} {}", price, other),
    }
}

/// Format a star rating (e.g., "★ 4.6").
pub fn format_rating(rating: Option<f64>) -> Option<String> {
    rating
        .filter(|r| *r > 0.0 && r.is_finite())
        .map(|r| format!("★ {:.1}", r))
}

/// Format a review count compactly (e.g., "312 reviews", "1.2K reviews").
pub fn format_reviews(reviews: Option<u64>) -> Option<String> {
    match reviews? {
        0 => None,
        1 => Some("1 review".to_string()),
        n if n >= 1_000 => Some(format!("{:.1}K reviews", n as f64 / 1_000.0)),
        n => Some(format!("{} reviews", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(24.99, "USD"), "$24.99");
        assert_eq!(format_price(9.5, "eur"), "€9.50");
        assert_eq!(format_price(1200.0, "JPY"), "¥1200");
        assert_eq!(format_price(120.0, "CAD"), "120.00 CAD");
        assert_eq!(format_price(0.0, "USD"), "See price");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(4.56)).as_deref(), Some("★ 4.6"));
        assert_eq!(format_rating(Some(0.0)), None);
        assert_eq!(format_rating(None), None);
    }

    #[test]
    fn test_format_reviews() {
        assert_eq!(format_reviews(Some(1)).as_deref(), Some("1 review"));
        assert_eq!(format_reviews(Some(312)).as_deref(), Some("312 reviews"));
        assert_eq!(format_reviews(Some(1_240)).as_deref(), Some("1.2K reviews"));
        assert_eq!(format_reviews(Some(0)), None);
        assert_eq!(format_reviews(None), None);
    }
}
