use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::db::models::QuestionModel;
use crate::names;

/// Which categories a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i32),
}

impl CategoryFilter {
    pub fn from_id(id: i32) -> Self {
        if id == names::ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    pub fn matches(&self, category: i32) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => *id == category,
        }
    }
}

/// Picks the next quiz question uniformly among the questions that were not
/// served yet and that belong to the requested category.
///
/// `None` means the quiz is over.
pub fn next_question<'a, R: Rng + ?Sized>(
    questions: &'a [QuestionModel],
    filter: CategoryFilter,
    previously_served: &HashSet<i32>,
    rng: &mut R,
) -> Option<&'a QuestionModel> {
    let candidates: Vec<&QuestionModel> = questions
        .iter()
        .filter(|q| !previously_served.contains(&q.id) && filter.matches(q.category))
        .collect();

    candidates.choose(rng).copied()
}

// Accepts `0`, `"3"`, `"all"` and the `{"id": 3, "type": "Art"}` objects the
// quiz frontend posts.
impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct Vis;

        impl<'de> Visitor<'de> for Vis {
            type Value = CategoryFilter;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a category id, \"all\" or an object with an id")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CategoryFilter, E> {
                i32::try_from(v)
                    .map(CategoryFilter::from_id)
                    .map_err(|_| E::custom(format!("category id {v} is out of range")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CategoryFilter, E> {
                i32::try_from(v)
                    .map(CategoryFilter::from_id)
                    .map_err(|_| E::custom(format!("category id {v} is out of range")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CategoryFilter, E> {
                if v.eq_ignore_ascii_case(names::ALL_CATEGORIES_TOKEN) {
                    return Ok(CategoryFilter::All);
                }
                v.trim()
                    .parse::<i32>()
                    .map(CategoryFilter::from_id)
                    .map_err(E::custom)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CategoryFilter, A::Error> {
                let mut filter = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "id" {
                        filter = Some(map.next_value::<CategoryFilter>()?);
                    } else {
                        map.next_value::<de::IgnoredAny>()?;
                    }
                }
                filter.ok_or_else(|| de::Error::missing_field("id"))
            }
        }

        d.deserialize_any(Vis)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn question(id: i32, category: i32) -> QuestionModel {
        QuestionModel {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category,
            difficulty: 1,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn exhausted_quiz_yields_nothing() {
        let questions = vec![question(1, 1), question(2, 2), question(3, 3)];
        let served: HashSet<i32> = [1, 2, 3].into();

        assert!(next_question(&questions, CategoryFilter::All, &served, &mut rng()).is_none());
    }

    #[test]
    fn empty_bank_yields_nothing() {
        assert!(next_question(&[], CategoryFilter::All, &HashSet::new(), &mut rng()).is_none());
    }

    #[test]
    fn category_filter_restricts_candidates() {
        let questions = vec![question(1, 1), question(2, 2), question(3, 1), question(4, 3)];
        let mut rng = rng();

        for _ in 0..50 {
            let picked =
                next_question(&questions, CategoryFilter::Only(1), &HashSet::new(), &mut rng)
                    .unwrap();
            assert_eq!(picked.category, 1);
        }
    }

    #[test]
    fn served_questions_are_never_repeated() {
        let questions: Vec<_> = (1..=10).map(|id| question(id, 1)).collect();
        let mut served = HashSet::new();
        let mut rng = rng();

        while let Some(q) = next_question(&questions, CategoryFilter::All, &served, &mut rng) {
            assert!(served.insert(q.id), "question {} served twice", q.id);
        }
        assert_eq!(served.len(), 10);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let questions = vec![question(1, 1), question(2, 2)];
        let picked =
            next_question(&questions, CategoryFilter::Only(9), &HashSet::new(), &mut rng());
        assert!(picked.is_none());
    }

    #[test]
    fn every_candidate_is_eventually_drawn() {
        let questions: Vec<_> = (1..=5).map(|id| question(id, id % 2)).collect();
        let served: HashSet<i32> = [5].into();
        let mut rng = rng();
        let mut seen: HashMap<i32, usize> = HashMap::new();

        for _ in 0..2000 {
            let q = next_question(&questions, CategoryFilter::All, &served, &mut rng).unwrap();
            *seen.entry(q.id).or_default() += 1;
        }

        assert_eq!(seen.len(), 4);
        assert!(!seen.contains_key(&5));
        assert!(seen.values().all(|&n| n > 300), "skewed draw: {seen:?}");
    }

    #[test]
    fn zero_means_all_categories() {
        assert_eq!(CategoryFilter::from_id(0), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_id(4), CategoryFilter::Only(4));
        assert!(CategoryFilter::All.matches(42));
        assert!(!CategoryFilter::Only(1).matches(2));
    }

    #[test]
    fn filter_deserializes_from_wire_shapes() {
        let parse = |s: &str| serde_json::from_str::<CategoryFilter>(s);

        assert_eq!(parse("0").unwrap(), CategoryFilter::All);
        assert_eq!(parse("3").unwrap(), CategoryFilter::Only(3));
        assert_eq!(parse("\"3\"").unwrap(), CategoryFilter::Only(3));
        assert_eq!(parse("\"all\"").unwrap(), CategoryFilter::All);
        assert_eq!(
            parse(r#"{"type": "Art", "id": "2"}"#).unwrap(),
            CategoryFilter::Only(2)
        );
        assert_eq!(
            parse(r#"{"type": "click", "id": 0}"#).unwrap(),
            CategoryFilter::All
        );
        assert!(parse("\"abcde\"").is_err());
        assert!(parse(r#"{"type": "Art"}"#).is_err());
        assert!(parse("null").is_err());
    }
}
