//! Domain types shared across the showtrend crates
//!
//! The serde field names follow the compact JSON encoding the episode data
//! arrives in (`pt` = primary title, `sn` = season number, and so on), so
//! these types deserialize the render-request payload directly.

use serde::{Deserialize, Serialize};

/// Audience rating for one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Mean rating on the 0-10 scale
    #[serde(rename = "a")]
    pub average: f64,
    /// Number of votes behind the average
    #[serde(rename = "c")]
    pub count: u32,
}

/// One episode of a show, with its rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(rename = "pt")]
    pub primary_title: String,
    #[serde(rename = "sn")]
    pub season_number: u32,
    #[serde(rename = "en")]
    pub episode_number: u32,
    #[serde(rename = "r")]
    pub rating: Rating,
}

/// A show and its episodes, in original air order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(rename = "pt")]
    pub primary_title: String,
    #[serde(rename = "es")]
    pub episodes: Vec<Episode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_compact_encoding_roundtrip() {
        let json = r#"{
            "pt": "Test Show",
            "es": [
                {"pt": "Pilot", "sn": 1, "en": 1, "r": {"a": 7.8, "c": 1200}},
                {"pt": "Fallout", "sn": 1, "en": 2, "r": {"a": 8.1, "c": 950}}
            ]
        }"#;

        let show: Show = serde_json::from_str(json).unwrap();
        assert_eq!(show.primary_title, "Test Show");
        assert_eq!(show.episodes.len(), 2);
        assert_eq!(show.episodes[0].primary_title, "Pilot");
        assert_eq!(show.episodes[0].season_number, 1);
        assert_eq!(show.episodes[1].rating.average, 8.1);
        assert_eq!(show.episodes[1].rating.count, 950);

        let encoded = serde_json::to_value(&show).unwrap();
        assert_eq!(encoded["es"][0]["sn"], 1);
        assert_eq!(encoded["es"][1]["r"]["a"], 8.1);
    }
}
