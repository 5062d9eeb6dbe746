use indexmap::IndexSet;

use crate::models::JobPosting;

/// Collapse postings that are equal on every field.
///
/// First occurrence wins, so the result keeps document order.
pub fn dedupe(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    postings
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, link: &str) -> JobPosting {
        JobPosting::new(title, "All India", "N/A", link)
    }

    #[test]
    fn test_identical_postings_collapse() {
        let postings = vec![
            posting("CRP Clerks", "https://www.ibps.in/a.pdf"),
            posting("CRP Clerks", "https://www.ibps.in/a.pdf"),
        ];
        assert_eq!(dedupe(postings).len(), 1);
    }

    #[test]
    fn test_trailing_slash_is_distinct() {
        let postings = vec![
            posting("Recruitment", "https://www.ibps.in/recruitment"),
            posting("Recruitment", "https://www.ibps.in/recruitment/"),
        ];
        assert_eq!(dedupe(postings).len(), 2);
    }

    #[test]
    fn test_first_seen_order_kept() {
        let postings = vec![
            posting("B", "https://www.ibps.in/b"),
            posting("A", "https://www.ibps.in/a"),
            posting("B", "https://www.ibps.in/b"),
        ];
        let titles: Vec<_> = dedupe(postings).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
