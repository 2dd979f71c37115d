use serde::Deserialize;

use crate::quiz::CategoryFilter;

/// Deserialize an optional value that may be either a JSON number or a string
/// containing a number. Form-driven frontends often send numbers as strings.
fn deserialize_optional_i32<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<i32>, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = Option<i32>;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number, numeric string or null")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            i32::try_from(v).map(Some).map_err(E::custom)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i32::try_from(v).map(Some).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse().map(Some).map_err(E::custom)
        }
        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }
    d.deserialize_any(Vis)
}

/// Body of a question creation request. Every field is optional here so that
/// a missing field is reported as bad input rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub difficulty: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuestions {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NextQuizQuestion {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<CategoryFilter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}
