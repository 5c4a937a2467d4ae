/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// ICO summary as listed by `icos/all` and `icos/trending`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ico {
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub id: u64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub url: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub logo: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub desc: String,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating: f64,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub premium: i64,
    #[serde(deserialize_with = "serde_helpers::object_or_default")]
    pub dates: IcoDates,
}

/// Pre-sale and sale windows, `YYYY-MM-DD HH:MM:SS` strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IcoDates {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub pre_ico_start: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub pre_ico_end: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub ico_start: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub ico_end: String,
}

impl IcoDates {
    pub fn pre_ico_start_at(&self) -> Option<NaiveDateTime> {
        parse_ico_date(&self.pre_ico_start)
    }

    pub fn pre_ico_end_at(&self) -> Option<NaiveDateTime> {
        parse_ico_date(&self.pre_ico_end)
    }

    pub fn ico_start_at(&self) -> Option<NaiveDateTime> {
        parse_ico_date(&self.ico_start)
    }

    pub fn ico_end_at(&self) -> Option<NaiveDateTime> {
        parse_ico_date(&self.ico_end)
    }
}

/// Parse a service date. Empty strings and the `0000-00-00` placeholder yield `None`.
pub fn parse_ico_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub title: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restriction {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub country: String,
}

/// Project links; an empty string means the link is not published
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub twitter: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub slack: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub telegram: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub facebook: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub medium: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub bitcointalk: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub github: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub reddit: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub discord: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub youtube: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub www: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub bounty: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub whitepaper: String,
}

/// Token sale terms. Price and caps are free text such as `"0.10 USD"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finance {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub token: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub price: String,
    #[serde(deserialize_with = "serde_helpers::bool_lenient")]
    pub bonus: bool,
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub tokens: u64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub tokentype: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub hardcap: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub softcap: String,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub raised: f64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub platform: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub distributed: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub minimum: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub accepting: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub site: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub title: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub links: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub url: String,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub socials: Vec<Social>,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub group: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub photo: String,
    /// ICO success score
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub iss: String,
}

/// Expert rating attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertRating {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub date: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub url: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub title: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub photo: String,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub team: i64,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub vision: i64,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub product: i64,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub profile: f64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub review: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub weight: String,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub agree: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub id: u64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
}

/// Exchange listing with the last known token price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exchange {
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub id: u64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub logo: String,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub price: f64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub roi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KycInvite {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kyc {
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub invited: Vec<KycInvite>,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub succeed: i64,
    #[serde(deserialize_with = "serde_helpers::i64_lenient")]
    pub failed: i64,
}

/// Filter vocabulary entry (platform, currency or country)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedEntry {
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
}

/// ICO with a profile or expert rating, as listed by `icos/ratings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatedIco {
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub id: u64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub url: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub logo: String,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating: f64,
}

/// Deserializers for the loosely typed JSON the service emits: numbers may
/// arrive as strings, and any field may be `null` or `""`.
pub(crate) mod serde_helpers {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(raw) => Ok(raw),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(D::Error::custom(format!("expected string, got {other}"))),
        }
    }

    pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0.0),
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| D::Error::custom("number out of range")),
            Value::String(raw) if raw.trim().is_empty() => Ok(0.0),
            Value::String(raw) => raw.trim().parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!("expected number, got {other}"))),
        }
    }

    pub fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("expected integer, got {number}"))),
            Value::String(raw) if raw.trim().is_empty() => Ok(0),
            Value::String(raw) => raw.trim().parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!("expected integer, got {other}"))),
        }
    }

    pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(0),
            Value::Number(number) => number
                .as_u64()
                .ok_or_else(|| D::Error::custom(format!("expected unsigned integer, got {number}"))),
            Value::String(raw) if raw.trim().is_empty() => Ok(0),
            Value::String(raw) => raw.trim().parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!("expected unsigned integer, got {other}"))),
        }
    }

    pub fn bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(flag) => Ok(flag),
            Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
            Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" => Ok(false),
                "1" | "true" | "yes" => Ok(true),
                _ => Err(D::Error::custom(format!("expected boolean, got {raw:?}"))),
            },
            other => Err(D::Error::custom(format!("expected boolean, got {other}"))),
        }
    }

    /// `null`, `false` and `""` become an empty list
    pub fn vec_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(Vec::new()),
            Value::String(raw) if raw.is_empty() => Ok(Vec::new()),
            value => serde_json::from_value(value).map_err(D::Error::custom),
        }
    }

    /// `null`, `false`, `""` and `[]` (an empty PHP array) become `T::default()`
    pub fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(T::default()),
            Value::String(raw) if raw.is_empty() => Ok(T::default()),
            Value::Array(items) if items.is_empty() => Ok(T::default()),
            value => serde_json::from_value(value).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ico_deserializes_stringly_numbers() {
        let value = json!({
            "id": "1015",
            "name": "Example",
            "url": "https://icobench.com/ico/example",
            "logo": "https://icobench.com/images/example.jpg",
            "desc": "Example project",
            "rating": "4.1",
            "premium": null,
            "dates": {
                "preIcoStart": "2018-01-01 00:00:00",
                "preIcoEnd": "",
                "icoStart": "2018-02-01",
                "icoEnd": "0000-00-00 00:00:00"
            }
        });

        let ico: Ico = serde_json::from_value(value).expect("ico should deserialize");

        assert_eq!(ico.id, 1015);
        assert_eq!(ico.rating, 4.1);
        assert_eq!(ico.premium, 0);
        assert_eq!(
            ico.dates.pre_ico_start_at(),
            NaiveDate::from_ymd_opt(2018, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(ico.dates.pre_ico_end_at(), None);
        assert_eq!(
            ico.dates.ico_start_at(),
            NaiveDate::from_ymd_opt(2018, 2, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(ico.dates.ico_end_at(), None);
    }

    #[test]
    fn ico_deserializes_with_missing_fields() {
        let ico: Ico = serde_json::from_value(json!({"id": 7})).expect("ico should deserialize");
        assert_eq!(ico.id, 7);
        assert!(ico.name.is_empty());
        assert_eq!(ico.dates, IcoDates::default());
    }

    #[test]
    fn finance_accepts_loose_flags() {
        let finance: Finance = serde_json::from_value(json!({
            "token": "EXM",
            "bonus": "1",
            "tokens": 1000000,
            "raised": "2500000.5"
        }))
        .expect("finance should deserialize");

        assert!(finance.bonus);
        assert_eq!(finance.tokens, 1_000_000);
        assert_eq!(finance.raised, 2_500_000.5);
    }

    #[test]
    fn invalid_number_is_rejected() {
        let result = serde_json::from_value::<Ico>(json!({"rating": "high"}));
        assert!(result.is_err());
    }

    #[test]
    fn team_member_socials_tolerate_false() {
        let member: TeamMember =
            serde_json::from_value(json!({"name": "Ada", "socials": false})).expect("member");
        assert!(member.socials.is_empty());
    }
}
