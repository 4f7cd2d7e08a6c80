//! Similarity scoring and risk ranking
//!
//! The scoring engine is pure: no I/O, no retries, no async. Given a query
//! brand and a catalog it produces one `ScoredListing` per listing and ranks
//! the whole catalog by descending risk.
//!
//! The similarity measure is a positional character-match ratio, not an edit
//! distance. Strings that differ by a single inserted character shift every
//! following position and score near zero; that weakness is part of the
//! heuristic's contract and is kept as-is.

use crate::catalog::AppListing;
use serde::Serialize;

/// An app listing extended with per-field similarity scores and a risk score
///
/// Serialized flat: the listing's own fields (including passthrough fields)
/// and the score fields appear side by side, scores in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredListing {
    /// The underlying catalog listing
    #[serde(flatten)]
    pub listing: AppListing,

    /// Similarity of the brand to the listing's app name (0-100)
    pub name_score: u32,

    /// Similarity of `com.<brand>` to the listing's package (0-100)
    pub pkg_score: u32,

    /// Similarity of the brand to the listing's publisher (0-100)
    pub pub_score: u32,

    /// Floor-averaged mean of the three field scores (0-100)
    pub avg: u32,

    /// Risk score: `100 - avg`, clamped at 0. Higher means less similar
    pub risk: u32,
}

/// Positional character-match similarity between two strings, 0-100
///
/// Both inputs are lowercased, then compared character by character up to
/// the shorter length; no shifting or alignment. The match count is divided
/// by the longer length and floored to an integer percentage. Empty input
/// on either side scores 0.
pub fn similarity(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let matches = a
        .chars()
        .zip(b.chars())
        .filter(|(x, y)| x == y)
        .count() as u32;
    let longest = a.chars().count().max(b.chars().count()) as u32;
    matches * 100 / longest
}

/// Score every listing in the catalog against a brand and rank by risk
///
/// The result has the same length as the input catalog (no filtering); the
/// sort is stable, so listings with equal risk keep their catalog order.
pub fn score_catalog(brand: &str, catalog: Vec<AppListing>) -> Vec<ScoredListing> {
    let pkg_query = format!("com.{}", brand.to_lowercase());
    let mut results: Vec<ScoredListing> = catalog
        .into_iter()
        .map(|listing| {
            let name_score = similarity(brand, &listing.app_name);
            let pkg_score = similarity(&pkg_query, &listing.package);
            let pub_score = similarity(brand, &listing.publisher);
            let avg = (name_score + pkg_score + pub_score) / 3;
            let risk = 100u32.saturating_sub(avg);
            ScoredListing {
                listing,
                name_score,
                pkg_score,
                pub_score,
                avg,
                risk,
            }
        })
        .collect();

    results.sort_by(|a, b| b.risk.cmp(&a.risk));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("phonepe", "phonepe"), 100);
    }

    #[test]
    fn test_similarity_case_insensitive() {
        assert_eq!(similarity("PhonePe", "phonepe"), 100);
    }

    #[test]
    fn test_similarity_empty_inputs() {
        assert_eq!(similarity("", "anything"), 0);
        assert_eq!(similarity("anything", ""), 0);
        assert_eq!(similarity("", ""), 0);
    }

    #[test]
    fn test_similarity_trailing_character() {
        // 7 matching positions over the longer length of 8
        assert_eq!(similarity("phonepe", "phonepe2"), 87);
    }

    #[test]
    fn test_similarity_length_roles_symmetric() {
        assert_eq!(similarity("ab", "abc"), 66);
        assert_eq!(similarity("abc", "ab"), 66);
    }

    #[test]
    fn test_similarity_offset_collapses_score() {
        // One inserted leading character misaligns every later position
        assert_eq!(similarity("phonepe", "pphonepe"), 12);
    }

    #[test]
    fn test_similarity_range() {
        let samples = ["", "a", "phonepe", "com.phonepe.app", "Pay Apps Ltd", "ümläut"];
        for a in samples {
            for b in samples {
                assert!(similarity(a, b) <= 100, "similarity({:?}, {:?}) > 100", a, b);
            }
        }
    }

    #[test]
    fn test_score_catalog_builtin_sample() {
        let results = score_catalog("PhonePe", builtin_catalog());
        assert_eq!(results.len(), 3);
        for r in &results {
            assert!(r.name_score <= 100);
            assert!(r.pkg_score <= 100);
            assert!(r.pub_score <= 100);
            assert!(r.avg <= 100);
            assert!(r.risk <= 100);
        }
        // Descending by risk
        for pair in results.windows(2) {
            assert!(pair[0].risk >= pair[1].risk);
        }
        // The genuine listing is the least risky, the lookalike the most
        assert_eq!(results[0].listing.app_name, "Phone Pay Wallet");
        assert_eq!(results[0].risk, 70);
        assert_eq!(results[1].listing.app_name, "PhonePe UPI Update");
        assert_eq!(results[1].risk, 61);
        assert_eq!(results[2].listing.app_name, "PhonePe");
        assert_eq!(results[2].risk, 27);
    }

    #[test]
    fn test_score_catalog_exact_listing_scores() {
        let results = score_catalog("PhonePe", builtin_catalog());
        let genuine = results.iter().find(|r| r.listing.app_name == "PhonePe").unwrap();
        assert_eq!(genuine.name_score, 100);
        assert_eq!(genuine.pkg_score, 73); // com.phonepe vs com.phonepe.app
        assert_eq!(genuine.pub_score, 46); // phonepe vs phonepe pvt ltd
        assert_eq!(genuine.avg, 73);
        assert_eq!(genuine.risk, 27);
    }

    #[test]
    fn test_score_catalog_stable_on_ties() {
        let mut first = AppListing::new("Same App", "com.same.app", "Same Ltd");
        first.extra.insert("order".into(), 1.into());
        let mut second = first.clone();
        second.extra.insert("order".into(), 2.into());

        let results = score_catalog("PhonePe", vec![first, second]);
        assert_eq!(results[0].risk, results[1].risk);
        assert_eq!(results[0].listing.extra["order"], 1);
        assert_eq!(results[1].listing.extra["order"], 2);
    }

    #[test]
    fn test_score_catalog_missing_fields_score_zero() {
        let listing = AppListing::new("OnlyName", "", "");
        let results = score_catalog("OnlyName", vec![listing]);
        assert_eq!(results[0].name_score, 100);
        assert_eq!(results[0].pkg_score, 0);
        assert_eq!(results[0].pub_score, 0);
        assert_eq!(results[0].avg, 33);
        assert_eq!(results[0].risk, 67);
    }

    #[test]
    fn test_score_catalog_deterministic() {
        let a = score_catalog("PhonePe", builtin_catalog());
        let b = score_catalog("PhonePe", builtin_catalog());
        assert_eq!(a, b);
    }

    #[test]
    fn test_scored_listing_serializes_flat_camel_case() {
        let mut listing = AppListing::new("PhonePe", "com.phonepe.app", "PhonePe Pvt Ltd");
        listing.extra.insert("store".into(), "play".into());
        let scored = score_catalog("PhonePe", vec![listing]).remove(0);

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["app_name"], "PhonePe");
        assert_eq!(value["store"], "play");
        assert_eq!(value["nameScore"], 100);
        assert!(value.get("pkgScore").is_some());
        assert!(value.get("pubScore").is_some());
        assert!(value.get("avg").is_some());
        assert!(value.get("risk").is_some());
    }
}
