// Payload templates: the JSON object sent for each action. Image actions
// carry the image url plus the server-side action constant, text analysis
// carries the raw text.

use serde::Serialize;

use crate::action::Action;
use crate::error::{DispatchError, Result};

/// Server-facing action constants placed in the `action` field.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    Segmentation,
    ImageToFlashcard,
    FramedFlashcards,
}

/// Request body for one invocation.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Payload {
    Image { url: String, action: ApiAction },
    TextAnalysis { text_for_analysis: String },
}

impl Payload {
    /// Fill the template for `action` with the user's input.
    pub fn for_action(action: Action, input: &str) -> Result<Self> {
        let image = |api_action| Payload::Image {
            url: input.to_string(),
            action: api_action,
        };
        match action {
            Action::Segment => Ok(image(ApiAction::Segmentation)),
            Action::Flashcards => Ok(image(ApiAction::ImageToFlashcard)),
            Action::FramedFlashcards => Ok(image(ApiAction::FramedFlashcards)),
            Action::Analysis => Ok(Payload::TextAnalysis {
                text_for_analysis: input.to_string(),
            }),
            Action::Ocr => Err(DispatchError::MissingTemplate(action)),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
