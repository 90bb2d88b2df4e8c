//! User-facing notifications.

use serde::Serialize;

/// The only two messages a user ever sees about a load.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    /// The file was not JSON, or its top level was not an array.
    InvalidFile,
    /// At least one element was dropped; the rest were loaded.
    RecordsSkipped,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::InvalidFile => {
                "Invalid or broken .JSON file uploaded. Please try again with a different file."
            }
            Alert::RecordsSkipped => {
                "One or more objects included in the .JSON are invalid, so some objects may be skipped over. Please correct your file."
            }
        }
    }
}

impl core::fmt::Display for Alert {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
