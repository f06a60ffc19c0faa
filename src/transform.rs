//! Turning a journal entry into a note.
//!
//! Everything here is pure: photo uploads happen beforehand and their
//! resource ids are passed in.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use time::OffsetDateTime;
use tracing::warn;

use crate::models::{JournalEntry, Location, NewNote};
use crate::uploader::PhotoResources;

/// Inline photo reference in an entry body: `![](dayone-moment://<identifier>)`.
static PHOTO_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[\]\(dayone-moment://([^)\s]+)\)").expect("placeholder pattern is valid")
});

/// Splits entry text into a title and a body.
///
/// The title is the first line with a leading `# ` heading marker and any
/// trailing `\r` removed.
/// The body is every following line, joined with `\n`.
///
/// # Examples
///
/// ```
/// use journal_migrate::transform::split_title_and_body;
///
/// let (title, body) = split_title_and_body("# My Title\nline two\nline three");
/// assert_eq!(title, "My Title");
/// assert_eq!(body, "line two\nline three");
/// ```
pub fn split_title_and_body(text: &str) -> (String, String) {
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let first = first.trim_end_matches('\r');
    let title = first.strip_prefix("# ").unwrap_or(first);
    (title.to_string(), rest.to_string())
}

/// Formats the creation date as `YYYY-MM-DD`, in the entry's own offset.
pub fn date_prefix(date: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Replaces every photo placeholder with a reference to its uploaded resource.
///
/// Matching is exact on the photo identifier. Placeholders whose identifier
/// has no uploaded resource are left as they are.
///
/// # Examples
///
/// ```
/// use journal_migrate::models::ResourceId;
/// use journal_migrate::transform::replace_photo_placeholders;
/// use journal_migrate::uploader::PhotoResources;
///
/// let mut resources = PhotoResources::new();
/// resources.insert("ABC".to_string(), ResourceId::new("f00d"));
///
/// let body = replace_photo_placeholders("see ![](dayone-moment://ABC)", &resources);
/// assert_eq!(body, "see ![](:/f00d)");
/// ```
pub fn replace_photo_placeholders(body: &str, resources: &PhotoResources) -> String {
    PHOTO_PLACEHOLDER
        .replace_all(body, |caps: &Captures| match resources.get(&caps[1]) {
            Some(id) => format!("![](:/{})", id),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Returns identifiers of photo placeholders still present in `body`.
pub fn unresolved_placeholders(body: &str) -> Vec<String> {
    PHOTO_PLACEHOLDER
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Builds the note for `entry`.
///
/// The title is prefixed with the creation date so notes sort chronologically
/// next to others that follow the same convention. Entries without a location
/// get the (0, 0) sentinel. Both timestamps are the creation instant in epoch
/// milliseconds.
pub fn transform(entry: &JournalEntry, resources: &PhotoResources, notebook: &str) -> NewNote {
    let (title, body) = split_title_and_body(&entry.text);
    let body = replace_photo_placeholders(&body, resources);

    let leftover = unresolved_placeholders(&body);
    if !leftover.is_empty() {
        warn!(entry = %entry.uuid, photos = ?leftover, "placeholders reference unknown photos");
    }

    let (latitude, longitude) = entry
        .location
        .clone()
        .unwrap_or_else(Location::unknown)
        .coordinates();
    let timestamp = entry.creation_date.unix_timestamp() * 1000;

    NewNote {
        parent_id: notebook.to_string(),
        title: format!("{} {}", date_prefix(entry.creation_date), title),
        body,
        user_created_time: timestamp,
        user_updated_time: timestamp,
        latitude,
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Center, Photo, Region, ResourceId};
    use time::macros::datetime;

    fn entry(text: &str) -> JournalEntry {
        JournalEntry {
            uuid: "E1".to_string(),
            text: text.to_string(),
            creation_date: datetime!(2023-03-05 18:30:15 UTC),
            time_zone: "UTC".to_string(),
            location: None,
            weather: None,
            photos: Vec::new(),
            tags: Vec::new(),
            starred: false,
            audios: Vec::new(),
        }
    }

    fn photo(identifier: &str) -> Photo {
        Photo {
            identifier: identifier.to_string(),
            md5: identifier.to_lowercase(),
            file_type: "jpeg".to_string(),
            width: 0.0,
            height: 0.0,
            order_in_entry: 0.0,
            exposure_bias_value: 0.0,
        }
    }

    #[test]
    fn title_and_body_split_on_first_line() {
        let (title, body) = split_title_and_body("# My Title\nline two\nline three");

        assert_eq!(title, "My Title");
        assert_eq!(body, "line two\nline three");
    }

    #[test]
    fn single_line_text_has_empty_body() {
        let (title, body) = split_title_and_body("Just a title");

        assert_eq!(title, "Just a title");
        assert_eq!(body, "");
    }

    #[test]
    fn crlf_line_ending_is_not_part_of_title() {
        let (title, body) = split_title_and_body("# Windows Title\r\nsecond line");

        assert_eq!(title, "Windows Title");
        assert_eq!(body, "second line");

        let note = transform(&entry("Plain\r\nx"), &PhotoResources::new(), "nb");
        assert_eq!(note.title, "2023-03-05 Plain");
    }

    #[test]
    fn only_leading_heading_marker_is_stripped() {
        let (title, _) = split_title_and_body("Issue # 5");
        assert_eq!(title, "Issue # 5");
    }

    #[test]
    fn date_prefix_is_zero_padded() {
        assert_eq!(date_prefix(datetime!(2023-03-05 00:00 UTC)), "2023-03-05");
    }

    #[test]
    fn date_prefix_uses_entry_offset() {
        assert_eq!(date_prefix(datetime!(2023-03-05 23:30 -05:00)), "2023-03-05");
    }

    #[test]
    fn replaces_each_placeholder_with_its_resource() {
        let mut resources = PhotoResources::new();
        resources.insert("A".to_string(), ResourceId::new("res-a"));
        resources.insert("B".to_string(), ResourceId::new("res-b"));

        let body = replace_photo_placeholders(
            "first ![](dayone-moment://B)\nsecond ![](dayone-moment://A)",
            &resources,
        );

        assert!(!body.contains("dayone-moment://"));
        assert_eq!(body.matches("![](:/res-a)").count(), 1);
        assert_eq!(body.matches("![](:/res-b)").count(), 1);
        assert_eq!(body, "first ![](:/res-b)\nsecond ![](:/res-a)");
    }

    #[test]
    fn identifier_match_is_exact() {
        let mut resources = PhotoResources::new();
        resources.insert("A".to_string(), ResourceId::new("res-a"));

        let body = replace_photo_placeholders("![](dayone-moment://AB)", &resources);

        assert_eq!(body, "![](dayone-moment://AB)");
        assert_eq!(unresolved_placeholders(&body), vec!["AB"]);
    }

    #[test]
    fn transform_builds_dated_note() {
        let note = transform(&entry("# Hello\nworld"), &PhotoResources::new(), "nb1");

        assert_eq!(note.parent_id, "nb1");
        assert_eq!(note.title, "2023-03-05 Hello");
        assert_eq!(note.body, "world");
    }

    #[test]
    fn transform_without_location_writes_origin() {
        let note = transform(&entry("x"), &PhotoResources::new(), "nb");

        assert_eq!(note.latitude, 0.0);
        assert_eq!(note.longitude, 0.0);
    }

    #[test]
    fn transform_uses_region_center_coordinates() {
        let mut e = entry("x");
        e.location = Some(Location {
            latitude: 99.0,
            longitude: 99.0,
            region: Region {
                center: Center {
                    latitude: 12.34,
                    longitude: 56.78,
                },
            },
            ..Location::default()
        });

        let note = transform(&e, &PhotoResources::new(), "nb");

        assert_eq!(note.latitude, 12.34);
        assert_eq!(note.longitude, 56.78);
    }

    #[test]
    fn transform_sets_both_timestamps_to_creation_millis() {
        let e = entry("x");
        let note = transform(&e, &PhotoResources::new(), "nb");

        let expected = e.creation_date.unix_timestamp() * 1000;
        assert_eq!(note.user_created_time, expected);
        assert_eq!(note.user_updated_time, expected);
    }

    #[test]
    fn transform_substitutes_all_entry_photos() {
        let mut e = entry("Title\n![](dayone-moment://A) and ![](dayone-moment://B)");
        e.photos = vec![photo("A"), photo("B")];
        let mut resources = PhotoResources::new();
        resources.insert("A".to_string(), ResourceId::new("r1"));
        resources.insert("B".to_string(), ResourceId::new("r2"));

        let note = transform(&e, &resources, "nb");

        assert_eq!(note.body, "![](:/r1) and ![](:/r2)");
    }
}
