//! Document location (which Reader view a document lives in).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// Where a document lives in Reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    New,
    Later,
    Shortlist,
    Archive,
    Feed,
}

impl Location {
    /// Every location, in the order the API documents them.
    pub const ALL: [Location; 5] = [
        Location::New,
        Location::Later,
        Location::Shortlist,
        Location::Archive,
        Location::Feed,
    ];

    /// Returns the wire name of this location.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::New => "new",
            Location::Later => "later",
            Location::Shortlist => "shortlist",
            Location::Archive => "archive",
            Location::Feed => "feed",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                InvalidInputError::Variant {
                    kind: "location",
                    value: s.to_string(),
                    expected: Location::ALL.map(|l| l.as_str()).join(", "),
                }
                .into()
            })
    }
}
