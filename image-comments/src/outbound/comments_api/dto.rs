//! DTOs for decoding comments API responses.
//!
//! The mapper decodes into these transport DTOs first, then maps into domain
//! comments in one pass. Field names follow the wire format.

use chrono::{DateTime, Utc};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::domain::{CommentAuthor, ImageComment};

/// Length of the canonical `8-4-4-4-12` UUID rendering.
const HYPHENATED_UUID_LEN: usize = 36;
/// Internet date-time without fractional seconds and with a colon offset.
const INTERNET_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%:z";

#[derive(Debug, Deserialize)]
pub(super) struct CommentsRootDto {
    pub(super) items: Vec<CommentItemDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentItemDto {
    #[serde(deserialize_with = "deserialize_hyphenated_uuid")]
    pub(super) id: Uuid,
    pub(super) message: String,
    #[serde(deserialize_with = "deserialize_internet_date_time")]
    pub(super) created_at: DateTime<Utc>,
    pub(super) author: CommentAuthorDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentAuthorDto {
    pub(super) username: String,
}

impl CommentsRootDto {
    pub(super) fn into_domain_comments(self) -> Vec<ImageComment> {
        self.items
            .into_iter()
            .map(CommentItemDto::into_domain_comment)
            .collect()
    }
}

impl CommentItemDto {
    fn into_domain_comment(self) -> ImageComment {
        ImageComment {
            id: self.id,
            message: self.message,
            created_at: self.created_at,
            author: CommentAuthor {
                username: self.author.username,
            },
        }
    }
}

/// Accept only the hyphenated UUID form; simple, braced and URN renderings
/// are rejected.
fn deserialize_hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(D::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a hyphenated UUID",
        ));
    }
    Uuid::parse_str(&raw)
        .map_err(|_| D::Error::invalid_value(Unexpected::Str(&raw), &"a hyphenated UUID"))
}

/// Accept `YYYY-MM-DDTHH:MM:SS` followed by `Z` or `±HH:MM`.
fn deserialize_internet_date_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_internet_date_time(&raw).ok_or_else(|| {
        D::Error::invalid_value(Unexpected::Str(&raw), &"an internet date-time")
    })
}

fn parse_internet_date_time(raw: &str) -> Option<DateTime<Utc>> {
    let normalized = match raw.strip_suffix('Z') {
        Some(local) => format!("{local}+00:00"),
        None => raw.to_owned(),
    };
    DateTime::parse_from_str(&normalized, INTERNET_DATE_TIME)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    //! Strictness checks for wire identifiers and timestamps.

    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case::utc_designator("2020-05-20T11:24:59Z", 11)]
    #[case::zero_offset("2020-05-20T11:24:59+00:00", 11)]
    #[case::positive_offset("2020-05-20T13:24:59+02:00", 11)]
    #[case::negative_offset("2020-05-20T08:24:59-03:00", 11)]
    fn parses_internet_date_times(#[case] raw: &str, #[case] utc_hour: u32) {
        let expected = Utc
            .with_ymd_and_hms(2020, 5, 20, utc_hour, 24, 59)
            .single()
            .expect("valid time");
        assert_eq!(parse_internet_date_time(raw), Some(expected));
    }

    #[rstest]
    #[case::space_separator("2020-05-20 11:24:59Z")]
    #[case::fractional_seconds("2020-05-20T11:24:59.123Z")]
    #[case::missing_offset("2020-05-20T11:24:59")]
    #[case::date_only("2020-05-20")]
    #[case::trailing_text("2020-05-20T11:24:59Zjunk")]
    fn rejects_relaxed_date_times(#[case] raw: &str) {
        assert_eq!(parse_internet_date_time(raw), None);
    }
}
