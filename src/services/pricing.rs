//! Pricing for the two collection plans.
//!
//! The commercial plan charges a flat rate per kilogram over a
//! user-entered decimal weight. The residential plan charges a flat
//! price per bag-count tier; the seeded collection history is priced
//! from that table. The two models never mix within one flow.

/// Commercial plan rate in AOA per kilogram
pub const PRICE_PER_KG: f64 = 1300.0;

/// Smallest weight the commercial form accepts
pub const MIN_WEIGHT_KG: f64 = 0.1;

/// Largest weight the commercial form accepts
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Largest bag count the residential form accepts
pub const MAX_BAGS: u8 = 10;

/// One row of the residential tier table
#[derive(Debug, Clone, Copy)]
pub struct BagTier {
    pub min_bags: u8,
    pub max_bags: u8,
    pub price_kz: u32,
}

/// Residential flat prices by bag-count range
pub const BAG_TIERS: [BagTier; 3] = [
    BagTier {
        min_bags: 1,
        max_bags: 3,
        price_kz: 1000,
    },
    BagTier {
        min_bags: 4,
        max_bags: 7,
        price_kz: 1800,
    },
    BagTier {
        min_bags: 8,
        max_bags: 10,
        price_kz: 2000,
    },
];

/// Commercial plan cost for a weight in kilograms
///
/// Pure function of the quantity; callers recompute on every change
/// rather than caching.
pub fn cost_for_weight(weight_kg: f64) -> f64 {
    weight_kg * PRICE_PER_KG
}

/// True when the weight is inside the commercial form bounds
pub fn weight_in_bounds(weight_kg: f64) -> bool {
    weight_kg.is_finite() && (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
}

/// Residential tier price for a bag count, `None` outside 1..=10
pub fn price_for_bag_count(bags: u8) -> Option<u32> {
    BAG_TIERS
        .iter()
        .find(|tier| (tier.min_bags..=tier.max_bags).contains(&bags))
        .map(|tier| tier.price_kz)
}

/// Format an AOA amount the way the product displays it,
/// e.g. `7.150,00 Kz`
pub fn format_kz(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();

    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{},{:02} Kz", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commercial_cost_is_weight_times_rate() {
        assert_eq!(cost_for_weight(5.5), 7150.0);
        assert_eq!(cost_for_weight(1.0), 1300.0);
        assert_eq!(cost_for_weight(0.1), 130.0);
    }

    #[test]
    fn commercial_cost_is_monotone_in_weight() {
        let weights = [0.1, 0.5, 1.0, 5.5, 42.0, 999.9, 1000.0];
        for pair in weights.windows(2) {
            assert!(cost_for_weight(pair[0]) <= cost_for_weight(pair[1]));
        }
    }

    #[test]
    fn weight_bounds_follow_the_form_limits() {
        assert!(weight_in_bounds(0.1));
        assert!(weight_in_bounds(1000.0));
        assert!(!weight_in_bounds(0.05));
        assert!(!weight_in_bounds(1000.1));
        assert!(!weight_in_bounds(f64::NAN));
    }

    #[test]
    fn bag_tiers_match_the_price_table() {
        for bags in 1..=3 {
            assert_eq!(price_for_bag_count(bags), Some(1000));
        }
        for bags in 4..=7 {
            assert_eq!(price_for_bag_count(bags), Some(1800));
        }
        for bags in 8..=10 {
            assert_eq!(price_for_bag_count(bags), Some(2000));
        }
        assert_eq!(price_for_bag_count(6), Some(1800));
        assert_eq!(price_for_bag_count(9), Some(2000));
    }

    #[test]
    fn bag_counts_outside_bounds_are_rejected() {
        assert_eq!(price_for_bag_count(0), None);
        assert_eq!(price_for_bag_count(11), None);
    }

    #[test]
    fn kz_formatting_groups_thousands() {
        assert_eq!(format_kz(7150.0), "7.150,00 Kz");
        assert_eq!(format_kz(1300.0), "1.300,00 Kz");
        assert_eq!(format_kz(130.0), "130,00 Kz");
        assert_eq!(format_kz(1_300_000.0), "1.300.000,00 Kz");
        assert_eq!(format_kz(715.5), "715,50 Kz");
    }
}
