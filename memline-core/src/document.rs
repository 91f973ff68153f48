//! The serialized timeline document handed to the rendering widget.
//!
//! Wire shape:
//! `{title: {media: {url, caption, credit}, text: {headline, text}},
//!   events: [{media: {url, caption}, start_date: {year, month, day},
//!             text: {headline, text}, tag}]}`

use serde::{Deserialize, Serialize};

use crate::config::MemlineConfig;
use crate::error::{MemlineError, MemlineResult};
use crate::event::{Event, EventDate};

const DEFAULT_TITLE_HEADLINE: &str = "Welcome to<br>Our Lovely Memories!";
const DEFAULT_TITLE_TEXT: &str =
    "<p>Two years of tears and joy, every moment bringing us closer to this beautiful chapter...</p>";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineDocument {
    pub title: TitleBlock,
    pub events: Vec<EventDoc>,
}

/// The static block shown at the head of the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleBlock {
    pub media: TitleMedia,
    pub text: TextBlock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleMedia {
    pub url: String,
    pub caption: String,
    pub credit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    pub headline: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaBlock {
    pub url: String,
    pub caption: String,
}

/// One event in widget wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDoc {
    pub media: MediaBlock,
    pub start_date: EventDate,
    pub text: TextBlock,
    pub tag: String,
}

impl From<&Event> for EventDoc {
    fn from(event: &Event) -> Self {
        EventDoc {
            media: MediaBlock {
                url: event.media_url.clone(),
                caption: event.media_caption.clone(),
            },
            start_date: event.start_date.clone(),
            text: TextBlock {
                headline: event.headline.clone(),
                text: event.description.clone(),
            },
            tag: event.tag.clone(),
        }
    }
}

impl Default for TitleBlock {
    fn default() -> Self {
        TitleBlock {
            media: TitleMedia {
                url: String::new(),
                caption: "<a target='_blank' href=''>credits</a>".to_string(),
                credit: String::new(),
            },
            text: TextBlock {
                headline: DEFAULT_TITLE_HEADLINE.to_string(),
                text: DEFAULT_TITLE_TEXT.to_string(),
            },
        }
    }
}

impl TitleBlock {
    /// Default title block with any configured overrides applied.
    pub fn from_config(config: &MemlineConfig) -> Self {
        let mut block = TitleBlock::default();
        if let Some(headline) = &config.title_headline {
            block.text.headline = headline.clone();
        }
        if let Some(text) = &config.title_text {
            block.text.text = text.clone();
        }
        block
    }
}

impl TimelineDocument {
    /// Build a fresh document for one render cycle.
    pub fn new(title: TitleBlock, events: &[Event]) -> Self {
        TimelineDocument {
            title,
            events: events.iter().map(EventDoc::from).collect(),
        }
    }

    pub fn to_json(&self) -> MemlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MemlineError::Serialization(e.to_string()))
    }
}
