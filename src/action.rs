// Actions accepted on the command line. The name doubles as the last
// segment of the API path, so `segment` is posted to `/api/segment`.

use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Segment,
    Analysis,
    Ocr,
    Flashcards,
    FramedFlashcards,
}

impl Action {
    /// Every action, in the order the usage text lists them.
    pub const ALL: [Action; 5] = [
        Action::Segment,
        Action::Analysis,
        Action::Ocr,
        Action::Flashcards,
        Action::FramedFlashcards,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Segment => "segment",
            Action::Analysis => "analysis",
            Action::Ocr => "ocr",
            Action::Flashcards => "flashcards",
            Action::FramedFlashcards => "framedflashcards",
        }
    }

    /// Request path on the server, e.g. `/api/flashcards`.
    pub fn path(self) -> String {
        format!("/api/{}", self.name())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = DispatchError;

    // Matching is exact: `Segment` is not `segment`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| DispatchError::UnknownAction(s.to_string()))
    }
}
