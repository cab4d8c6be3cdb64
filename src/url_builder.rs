//! Builds the externally navigable marketplace query URL for a saved
//! search. Pure string construction, no network access.

use crate::catalog::ALL_CATEGORIES;
use crate::entities::searches;

/// Public search endpoint the generated links point at.
pub const BASE_URL: &str = "https://www.leboncoin.fr/recherche";

/// Upper price bound substituted when only a minimum is set.
const OPEN_ENDED_MAX: &str = "999999999";

/// Maps a saved search to a marketplace URL. Parameters appear in a fixed
/// order (category, text, locations, price, donation) and are query-encoded;
/// empty or absent criteria are simply omitted.
pub fn build_search_url(search: &searches::Model) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if search.category != ALL_CATEGORIES {
        params.push(("category", search.category.to_string()));
    }

    if !search.keywords.is_empty() {
        params.push(("text", search.keywords.clone()));
    }

    if !search.zipcodes.is_empty() {
        let zipcodes: Vec<&str> = search.zipcodes.split(',').map(str::trim).collect();
        params.push(("locations", zipcodes.join(",")));
    }

    // A zero bound counts as unset, matching the search form semantics.
    let price_min = search.price_min.filter(|min| *min > 0);
    let price_max = search.price_max.filter(|max| *max > 0);
    match (price_min, price_max) {
        (Some(min), Some(max)) => params.push(("price", format!("{min}-{max}"))),
        (Some(min), None) => params.push(("price", format!("{min}-{OPEN_ENDED_MAX}"))),
        (None, Some(max)) => params.push(("price", format!("0-{max}"))),
        (None, None) => {}
    }

    if search.is_donation {
        params.push(("donation", "1".to_string()));
    }

    if params.is_empty() {
        return BASE_URL.to_string();
    }

    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();

    format!("{BASE_URL}?{}", query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> searches::Model {
        searches::Model {
            id: 1,
            name: "Test".to_string(),
            zipcodes: String::new(),
            price_min: None,
            price_max: None,
            keywords: String::new(),
            category: 0,
            is_donation: false,
            excluded_categories: None,
            is_active: true,
            created_at: "2026-01-01 00:00:00".to_string(),
            last_checked: None,
        }
    }

    #[test]
    fn test_full_criteria_keeps_parameter_order() {
        let mut s = search();
        s.category = 9;
        s.keywords = "velo".to_string();
        s.zipcodes = "75001, 75002".to_string();
        s.price_min = Some(100);
        s.price_max = Some(500);
        s.is_donation = true;

        assert_eq!(
            build_search_url(&s),
            format!("{BASE_URL}?category=9&text=velo&locations=75001%2C75002&price=100-500&donation=1")
        );
    }

    #[test]
    fn test_all_categories_alone_yields_bare_base_url() {
        let s = search();
        assert_eq!(build_search_url(&s), BASE_URL);
    }

    #[test]
    fn test_price_min_only_is_open_ended() {
        let mut s = search();
        s.price_min = Some(50);
        assert_eq!(build_search_url(&s), format!("{BASE_URL}?price=50-999999999"));
    }

    #[test]
    fn test_price_max_only_starts_at_zero() {
        let mut s = search();
        s.price_max = Some(300);
        assert_eq!(build_search_url(&s), format!("{BASE_URL}?price=0-300"));
    }

    #[test]
    fn test_zero_price_bound_is_treated_as_unset() {
        let mut s = search();
        s.price_min = Some(0);
        s.price_max = Some(300);
        assert_eq!(build_search_url(&s), format!("{BASE_URL}?price=0-300"));

        s.price_max = Some(0);
        s.price_min = Some(0);
        assert_eq!(build_search_url(&s), BASE_URL);
    }

    #[test]
    fn test_zipcodes_are_trimmed_not_validated() {
        let mut s = search();
        s.zipcodes = " 31000 ,  31400,abc ".to_string();
        assert_eq!(
            build_search_url(&s),
            format!("{BASE_URL}?locations=31000%2C31400%2Cabc")
        );
    }

    #[test]
    fn test_keywords_are_query_encoded() {
        let mut s = search();
        s.keywords = "vélo électrique".to_string();
        assert_eq!(
            build_search_url(&s),
            format!("{BASE_URL}?text=v%C3%A9lo%20%C3%A9lectrique")
        );
    }
}
