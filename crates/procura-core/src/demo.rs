//! Sampled figures for the placeholder dashboards.
//!
//! The buyer and seller dashboards ship before the transactional
//! backend does, so their numbers are drawn from realistic ranges at
//! render time rather than hard-coded to obviously fake round values.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Headline figures for the buyer dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyerSnapshot {
    pub open_orders: u32,
    pub pending_deliveries: u32,
    pub open_rfqs: u32,
    pub active_suppliers: u32,
    pub monthly_spend_eur: u32,
    pub savings_percent: u32,
}

pub fn buyer_snapshot() -> BuyerSnapshot {
    let mut rng = rand::rng();
    BuyerSnapshot {
        open_orders: rng.random_range(6..=24),
        pending_deliveries: rng.random_range(2..=9),
        open_rfqs: rng.random_range(1..=6),
        active_suppliers: rng.random_range(12..=40),
        monthly_spend_eur: rng.random_range(18_000..=92_000),
        savings_percent: rng.random_range(4..=12),
    }
}

/// Headline figures for the seller dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerSnapshot {
    pub new_rfqs: u32,
    pub quotes_awaiting_reply: u32,
    pub orders_to_fulfil: u32,
    pub active_buyers: u32,
    pub monthly_revenue_eur: u32,
    pub otif_percent: u32,
}

pub fn seller_snapshot() -> SellerSnapshot {
    let mut rng = rand::rng();
    SellerSnapshot {
        new_rfqs: rng.random_range(2..=11),
        quotes_awaiting_reply: rng.random_range(3..=14),
        orders_to_fulfil: rng.random_range(5..=28),
        active_buyers: rng.random_range(8..=55),
        monthly_revenue_eur: rng.random_range(25_000..=140_000),
        otif_percent: rng.random_range(92..=99),
    }
}

/// One line of the dashboard activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub label: &'static str,
    pub detail: &'static str,
    pub minutes_ago: u32,
}

const BUYER_ACTIVITY_POOL: &[(&str, &str)] = &[
    ("Order confirmed", "Atlantic Fresh confirmed PO-2218 for Friday 06:30"),
    ("Quote received", "3 of 4 suppliers have quoted RFQ \"Autumn linen refresh\""),
    ("Delivery exception", "Short delivery logged on dairy order, credit requested"),
    ("Price alert", "Olive oil invoice price drifted 4% above quoted"),
    ("New supplier", "Verde Produce completed onboarding for your group"),
    ("Approval pending", "Housekeeping order awaiting GM approval"),
];

const SELLER_ACTIVITY_POOL: &[(&str, &str)] = &[
    ("New RFQ", "Hotel Mar Azul requested quotes for breakfast dry goods"),
    ("Quote viewed", "Grand Vista opened your linen quote twice today"),
    ("Order placed", "Costa Group placed a standing order from your catalogue"),
    ("Profile view", "4 buyers viewed your vendor profile this week"),
    ("Credit resolved", "Credit note for PO-1984 accepted by the buyer"),
    ("Catalogue tip", "Add allergen sheets to your top 10 SKUs to rank higher"),
];

fn sample_activity(pool: &'static [(&'static str, &'static str)], count: usize) -> Vec<ActivityItem> {
    let mut rng = rand::rng();
    let mut minutes = 0;
    pool.choose_multiple(&mut rng, count)
        .map(|&(label, detail)| {
            minutes += rng.random_range(4..=90);
            ActivityItem { label, detail, minutes_ago: minutes }
        })
        .collect()
}

pub fn buyer_activity() -> Vec<ActivityItem> {
    sample_activity(BUYER_ACTIVITY_POOL, 4)
}

pub fn seller_activity() -> Vec<ActivityItem> {
    sample_activity(SELLER_ACTIVITY_POOL, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buyer_snapshot_within_ranges() {
        for _ in 0..50 {
            let s = buyer_snapshot();
            assert!((6..=24).contains(&s.open_orders));
            assert!((18_000..=92_000).contains(&s.monthly_spend_eur));
            assert!((4..=12).contains(&s.savings_percent));
        }
    }

    #[test]
    fn test_seller_snapshot_within_ranges() {
        for _ in 0..50 {
            let s = seller_snapshot();
            assert!((92..=99).contains(&s.otif_percent));
            assert!((2..=11).contains(&s.new_rfqs));
        }
    }

    #[test]
    fn test_activity_feeds_are_distinct_and_ordered() {
        for feed in [buyer_activity(), seller_activity()] {
            assert_eq!(feed.len(), 4);
            for pair in feed.windows(2) {
                assert!(pair[0].minutes_ago < pair[1].minutes_ago);
            }
            for (i, a) in feed.iter().enumerate() {
                for b in &feed[i + 1..] {
                    assert_ne!(a.label, b.label, "duplicate activity line");
                }
            }
        }
    }
}
