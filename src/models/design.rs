use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{
    display_id, lenient_id, lenient_list, lenient_string, lenient_text, non_empty, record_list,
    RecordId,
};
use crate::links::DEFAULT_CATEGORY;

/// One gallery entry. Fields of the wrong JSON type are coerced or dropped
/// one at a time; a single odd field never rejects the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Design {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
}

/// Body of `gallery.json`. A bare array is read as the design list.
#[derive(Debug, Clone, Default)]
pub struct GalleryDocument {
    pub designs: Vec<Design>,
    pub last_updated: Option<String>,
}

#[derive(Deserialize)]
struct GalleryFields {
    #[serde(default, deserialize_with = "lenient_list")]
    designs: Vec<Design>,
    #[serde(default, rename = "lastUpdated", deserialize_with = "lenient_text")]
    last_updated: Option<String>,
}

impl<'de> Deserialize<'de> for GalleryDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            list @ Value::Array(_) => Ok(GalleryDocument {
                designs: record_list(list),
                last_updated: None,
            }),
            object @ Value::Object(_) => {
                let fields: GalleryFields =
                    serde_json::from_value(object).map_err(<D::Error as de::Error>::custom)?;
                Ok(GalleryDocument {
                    designs: fields.designs,
                    last_updated: fields.last_updated,
                })
            }
            _ => Ok(GalleryDocument::default()),
        }
    }
}

impl Design {
    pub fn display_id(&self, index: usize) -> String {
        display_id(self.id.as_ref(), index)
    }

    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn category_or_default(&self) -> &str {
        self.category().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Built-in designs shown when the gallery document can't be fetched.
    pub fn fallback() -> Vec<Design> {
        let item = |id: i64, title: &str, image: &str, description: &str| Design {
            id: Some(RecordId::Number(id)),
            title: title.to_string(),
            image: format!(
                "https://raw.githubusercontent.com/AdieleSolomon/Image-Gallery/main/images/{}",
                image
            ),
            description: Some(description.to_string()),
            category: Some("Interior Decoration".to_string()),
            date: Some("2024-01-15".to_string()),
        };
        vec![
            item(
                1,
                "Window Blind & Curtain",
                "design1.jpg",
                "Luxury window blind and curtain design for modern interiors.",
            ),
            item(
                2,
                "Window Treatment Solution",
                "design2.jpg",
                "Professional window treatment solution combining blinds and curtains.",
            ),
            item(
                3,
                "Modern Curtain Installation",
                "design3.jpg",
                "Modern curtain installation with custom tracks and premium fabric.",
            ),
        ]
    }
}
