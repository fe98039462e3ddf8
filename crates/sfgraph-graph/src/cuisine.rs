//! Cuisine vocabulary extraction.
//!
//! Food-items text is free-form and separated by `:` or `,` (often both,
//! often with stray counts). Tokens are trimmed; empty and purely numeric
//! tokens are dropped; the rest are de-duplicated in first-seen order.

use std::collections::{HashMap, HashSet};

use sfgraph_core::CoreError;
use sfgraph_core::entities::{CuisineEntity, Restaurant};
use sfgraph_core::ids::IdSource;

/// Split one food-items field into cuisine tokens.
#[must_use]
pub fn parse_cuisine_types(fooditems: Option<&str>) -> Vec<String> {
    let Some(text) = fooditems else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    text.split([':', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty() && !is_all_digits(token))
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

/// Every distinct cuisine across `restaurants`, in first-seen order.
#[must_use]
pub fn extract_cuisine_types(restaurants: &[Restaurant]) -> Vec<String> {
    let mut seen = HashSet::new();
    restaurants
        .iter()
        .flat_map(|r| parse_cuisine_types(Some(r.fooditems.as_str())))
        .filter(|cuisine| seen.insert(cuisine.clone()))
        .collect()
}

fn is_all_digits(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Cuisine name → identifier, fixed for one formatting run.
///
/// Built once from the full vocabulary and then only read, so every
/// relation to a given cuisine points at the same entity.
#[derive(Debug, Clone, Default)]
pub struct CuisineMap {
    entries: Vec<CuisineEntity>,
    by_name: HashMap<String, usize>,
}

impl CuisineMap {
    /// Assign one identifier per name. Repeated names keep their first id.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError`] from the identifier source.
    pub fn assign<I, S>(names: I, ids: &mut impl IdSource) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::default();
        for name in names {
            let name = name.into();
            if map.by_name.contains_key(&name) {
                continue;
            }
            let id = ids.next_id()?;
            map.by_name.insert(name.clone(), map.entries.len());
            map.entries.push(CuisineEntity { id, name });
        }
        Ok(map)
    }

    /// Identifier of `name`, if it is part of the vocabulary.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .map(|&index| self.entries[index].id.as_str())
    }

    /// Cuisine entities in assignment order.
    pub fn entities(&self) -> impl Iterator<Item = &CuisineEntity> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sfgraph_core::entities::Location;
    use sfgraph_core::ids::SequenceIds;

    use super::*;

    #[rstest]
    #[case(Some("Pizza:Pasta"), &["Pizza", "Pasta"])]
    #[case(Some("Tacos, Burritos: Tacos"), &["Tacos", "Burritos"])]
    #[case(Some(" Hot dogs :: 12 : Sodas ,"), &["Hot dogs", "Sodas"])]
    #[case(Some("7UP: 2 tacos"), &["7UP", "2 tacos"])]
    #[case(Some("123:456"), &[])]
    #[case(Some(""), &[])]
    #[case(Some(" : , "), &[])]
    #[case(None, &[])]
    fn parses_cuisine_tokens(#[case] input: Option<&str>, #[case] expected: &[&str]) {
        assert_eq!(parse_cuisine_types(input), expected);
    }

    #[test]
    fn never_returns_numeric_or_duplicate_tokens() {
        let inputs = [
            "Coffee: Tea: Coffee: 3: Pastries, Tea",
            "1,2,3",
            "Everything except for hot dogs: 100: 100 items",
        ];
        for input in inputs {
            let tokens = parse_cuisine_types(Some(input));
            let unique: HashSet<_> = tokens.iter().collect();
            assert_eq!(unique.len(), tokens.len(), "duplicates in {tokens:?}");
            assert!(tokens.iter().all(|t| !is_all_digits(t)), "numeric in {tokens:?}");
        }
    }

    fn restaurant(fooditems: &str) -> Restaurant {
        Restaurant {
            business_name: "R".into(),
            address: "A".into(),
            location: Location::default(),
            fooditems: fooditems.into(),
            status: None,
            zipcode: String::new(),
            neighborhood: "Unknown".into(),
        }
    }

    #[test]
    fn vocabulary_is_global_and_ordered() {
        let restaurants = [
            restaurant("Pizza:Pasta"),
            restaurant(""),
            restaurant("Pasta, Salad: Pizza"),
        ];
        assert_eq!(
            extract_cuisine_types(&restaurants),
            ["Pizza", "Pasta", "Salad"]
        );
    }

    #[test]
    fn cuisine_map_resolves_consistently() {
        let mut ids = SequenceIds::new("c");
        let map = CuisineMap::assign(["Pizza", "Pasta", "Pizza"], &mut ids).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Pizza"), Some("c1"));
        assert_eq!(map.get("Pasta"), Some("c2"));
        assert_eq!(map.get("Pizza"), map.get("Pizza"));
        assert_eq!(map.get("Sushi"), None);

        let names: Vec<_> = map.entities().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Pasta"]);
    }

    #[test]
    fn empty_vocabulary_gives_empty_map() {
        let mut ids = SequenceIds::new("c");
        let map = CuisineMap::assign(Vec::<String>::new(), &mut ids).unwrap();
        assert!(map.is_empty());
    }
}
