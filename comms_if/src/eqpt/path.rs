//! # Path Detector Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Path information sent by the path detector to the state machine.
///
/// Serialises to `{"heading": <degrees>}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PathDict {
    /// Angle between straight ahead and the detected road centre.
    ///
    /// Positive values mean the vehicle shall turn counter-clockwise (left), negative values
    /// clockwise (right).
    ///
    /// Units: degrees
    pub heading: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl PathDict {
    /// Serialise into the JSON message sent to the state machine.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a JSON message produced by [`PathDict::to_json`].
    pub fn from_json(msg: &str) -> serde_json::Result<Self> {
        serde_json::from_str(msg)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_path_dict_json() {
        let dict = PathDict { heading: -12.5 };
        assert_eq!(dict.to_json().unwrap(), "{\"heading\":-12.5}");
        assert_eq!(PathDict::from_json("{\"heading\": 3.0}").unwrap(), PathDict { heading: 3.0 });
        assert!(PathDict::from_json("{\"angle\": 3.0}").is_err());
    }
}
