use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The decoded `AllEntries.json` export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalExport {
    pub entries: Vec<JournalEntry>,
    #[serde(default)]
    pub metadata: ExportMetadata,
}

/// Export-level metadata. The version is informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    #[serde(default)]
    pub version: String,
}

/// One journal record from the export.
///
/// Each entry becomes exactly one note in the target store. The first line of
/// `text` is conventionally the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub uuid: String,
    #[serde(default)]
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_date: OffsetDateTime,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub audios: Vec<String>,
}

/// A photo attached to an entry.
///
/// The binary asset lives at `photos/<md5>.<type>` inside the export folder,
/// and `identifier` is what the entry body uses to reference it inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub identifier: String,
    pub md5: String,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub order_in_entry: f64,
    #[serde(default)]
    pub exposure_bias_value: f64,
}

/// Where an entry was written.
///
/// The coordinate used for the note is `region.center`; the flat
/// `latitude`/`longitude` fields are carried but not consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub place_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locality_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub administrative_area: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub region: Region,
}

impl Location {
    /// The (0, 0) sentinel written for entries without a location.
    ///
    /// The note schema has no "no location" value, so this loses information:
    /// (0, 0) is also a real coordinate.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Returns `(latitude, longitude)` of the region center.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.region.center.latitude, self.region.center.longitude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub latitude: f64,
    pub longitude: f64,
}

/// Weather snapshot recorded with an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weather {
    #[serde(rename = "conditionsDescription")]
    pub conditions_description: String,
    #[serde(rename = "pressureMB")]
    pub pressure_mb: f64,
    #[serde(rename = "relativeHumidity")]
    pub relative_humidity: f64,
    #[serde(rename = "temperatureCelsius")]
    pub temperature_celsius: f64,
    #[serde(rename = "visibilityKM")]
    pub visibility_km: f64,
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    #[serde(rename = "weatherServiceName")]
    pub weather_service_name: String,
    #[serde(rename = "windBearing")]
    pub wind_bearing: f64,
    #[serde(rename = "windChillCelsius")]
    pub wind_chill_celsius: f64,
    #[serde(rename = "windSpeedKPH")]
    pub wind_speed_kph: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "uuid": "5F2A",
        "text": "Hello\nworld ![](dayone-moment://P1)",
        "creationDate": "2023-03-05T18:30:00Z",
        "timeZone": "Europe/Berlin",
        "location": {
            "address": "1 Main St",
            "placeName": "Cafe",
            "latitude": 1.0,
            "longitude": 2.0,
            "region": { "center": { "latitude": 12.34, "longitude": 56.78 }, "radius": 75 }
        },
        "weather": {
            "conditionsDescription": "Sunny",
            "temperatureCelsius": 21.5,
            "pressureMB": 1012
        },
        "photos": [
            {
                "identifier": "P1", "md5": "abc123", "type": "jpeg",
                "width": 640, "height": 480, "orderInEntry": 0
            }
        ],
        "tags": ["Work", "travel"],
        "starred": true
    }"#;

    #[test]
    fn entry_decodes_day_one_field_names() {
        let entry: JournalEntry = serde_json::from_str(ENTRY).unwrap();

        assert_eq!(entry.uuid, "5F2A");
        assert_eq!(entry.time_zone, "Europe/Berlin");
        assert_eq!(entry.photos[0].file_type, "jpeg");
        assert_eq!(entry.photos[0].md5, "abc123");
        assert_eq!(entry.photos[0].width, 640.0);
        assert_eq!(entry.tags, vec!["Work", "travel"]);
        assert!(entry.starred);
        assert!(entry.audios.is_empty());
        assert_eq!(entry.weather.unwrap().pressure_mb, 1012.0);
    }

    #[test]
    fn photo_dimensions_accept_fractional_numbers() {
        let json = r#"{
            "identifier": "P2", "md5": "def", "type": "heic",
            "width": 640.0, "height": 480.5, "orderInEntry": 1.0
        }"#;

        let photo: Photo = serde_json::from_str(json).unwrap();

        assert_eq!(photo.width, 640.0);
        assert_eq!(photo.height, 480.5);
        assert_eq!(photo.order_in_entry, 1.0);
    }

    #[test]
    fn location_coordinates_come_from_region_center() {
        let entry: JournalEntry = serde_json::from_str(ENTRY).unwrap();
        let location = entry.location.unwrap();

        assert_eq!(location.coordinates(), (12.34, 56.78));
    }

    #[test]
    fn location_without_region_is_rejected() {
        let json = r#"{ "address": "x", "latitude": 1.0, "longitude": 2.0 }"#;
        assert!(serde_json::from_str::<Location>(json).is_err());
    }

    #[test]
    fn entry_without_creation_date_is_rejected() {
        let json = r#"{ "uuid": "1", "text": "hi" }"#;
        assert!(serde_json::from_str::<JournalEntry>(json).is_err());
    }

    #[test]
    fn unknown_location_is_origin() {
        assert_eq!(Location::unknown().coordinates(), (0.0, 0.0));
    }
}
