use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{display_id, lenient_id, lenient_list, lenient_text, non_empty, record_list, RecordId};

pub const DEFAULT_VIDEO_TITLE: &str = "Design Video";
pub const DEFAULT_VIDEO_DESCRIPTION: &str = "Watch our design process and finished projects.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
}

/// Body of `videos.json`. A bare array is read as the video list.
#[derive(Debug, Clone, Default)]
pub struct VideosDocument {
    pub videos: Vec<Video>,
}

#[derive(Deserialize)]
struct VideosFields {
    #[serde(default, deserialize_with = "lenient_list")]
    videos: Vec<Video>,
}

impl<'de> Deserialize<'de> for VideosDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            list @ Value::Array(_) => Ok(VideosDocument {
                videos: record_list(list),
            }),
            object @ Value::Object(_) => {
                let fields: VideosFields =
                    serde_json::from_value(object).map_err(<D::Error as de::Error>::custom)?;
                Ok(VideosDocument {
                    videos: fields.videos,
                })
            }
            _ => Ok(VideosDocument::default()),
        }
    }
}

impl Video {
    pub fn display_id(&self, index: usize) -> String {
        display_id(self.id.as_ref(), index)
    }

    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(DEFAULT_VIDEO_TITLE)
    }

    pub fn description(&self) -> &str {
        non_empty(&self.description).unwrap_or(DEFAULT_VIDEO_DESCRIPTION)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn youtube_id(&self) -> Option<String> {
        self.url
            .as_deref()
            .and_then(crate::youtube::extract_video_id)
    }

    /// Built-in videos shown when the videos document can't be fetched.
    pub fn fallback() -> Vec<Video> {
        let item = |id: i64, title: &str, description: &str| Video {
            id: Some(RecordId::Number(id)),
            title: Some(title.to_string()),
            url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()),
            description: Some(description.to_string()),
            date: Some("2024-01-15".to_string()),
        };
        vec![
            item(
                1,
                "Interior Design Process",
                "Watch how we transform spaces from concept to completion.",
            ),
            item(
                2,
                "Modern Window Treatments",
                "Learn about the latest window treatment solutions for modern homes.",
            ),
            item(
                3,
                "Space Planning Techniques",
                "Professional techniques for optimizing space in any room.",
            ),
        ]
    }
}
