use crate::faq::Faq;
use serde::Serialize;
use std::collections::HashMap;

/// Label used for records without a category.
const UNCATEGORIZED: &str = "General";

/// Corpus-level aggregates for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_faqs: usize,
    pub category_distribution: HashMap<String, u64>,
    pub top_viewed: Vec<Faq>,
    pub recent_updates: Vec<Faq>,
}

/// Aggregate a corpus snapshot: total count, per-category distribution, the
/// 10 most-viewed records and the 5 most recently updated ones. Records
/// without `updated_at` sort last among the recent updates.
pub fn dashboard_stats(faqs: &[Faq]) -> DashboardStats {
    let mut category_distribution: HashMap<String, u64> = HashMap::new();
    for faq in faqs {
        let label = faq
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        *category_distribution.entry(label).or_insert(0) += 1;
    }

    let mut top_viewed: Vec<Faq> = faqs.to_vec();
    top_viewed.sort_by(|a, b| b.views.cmp(&a.views));
    top_viewed.truncate(10);

    let mut recent_updates: Vec<Faq> = faqs.to_vec();
    recent_updates.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recent_updates.truncate(5);

    DashboardStats {
        total_faqs: faqs.len(),
        category_distribution,
        top_viewed,
        recent_updates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn uncategorized_records_count_under_general() {
        let mut a = Faq::new("1", "Shipping times", "Two days");
        a.category = Some("Shipping".to_string());
        let b = Faq::new("2", "Returns", "Thirty days");

        let stats = dashboard_stats(&[a, b]);
        assert_eq!(stats.total_faqs, 2);
        assert_eq!(stats.category_distribution["Shipping"], 1);
        assert_eq!(stats.category_distribution["General"], 1);
    }

    #[test]
    fn top_viewed_sorts_descending() {
        let mut a = Faq::new("1", "First", "a");
        a.views = 5;
        let mut b = Faq::new("2", "Second", "b");
        b.views = 50;

        let stats = dashboard_stats(&[a, b]);
        assert_eq!(stats.top_viewed[0].id, "2");
        assert_eq!(stats.top_viewed[1].id, "1");
    }

    #[test]
    fn records_without_update_timestamp_sort_last() {
        let mut a = Faq::new("1", "Dated", "a");
        a.updated_at = Some(datetime!(2024-03-01 12:00 UTC));
        let b = Faq::new("2", "Undated", "b");

        let stats = dashboard_stats(&[b, a]);
        assert_eq!(stats.recent_updates[0].id, "1");
        assert_eq!(stats.recent_updates[1].id, "2");
    }
}
