//! Fault types shared by every VI/JSON method.
//!
//! Failed calls return a `MethodFault` subtype as the response body. The
//! `_typeName` field names the concrete fault (`InvalidLogin`,
//! `AlreadyExists`, `NotFound`, ...).

use serde::Deserialize;

/// A localized message attached to a fault.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LocalizableMessage {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a failed VI/JSON call.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MethodFault {
    #[serde(rename = "_typeName", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub fault_message: Vec<LocalizableMessage>,
    /// Present on some faults (e.g. `InvalidArgument`)
    #[serde(default)]
    pub invalid_property: Option<String>,
}

impl MethodFault {
    /// Human-readable summary: the joined fault messages, falling back to
    /// the invalid property or the fault type.
    pub fn summary(&self) -> Option<String> {
        let messages: Vec<&str> = self
            .fault_message
            .iter()
            .filter_map(|m| m.message.as_deref())
            .filter(|m| !m.is_empty())
            .collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
        match (&self.type_name, &self.invalid_property) {
            (Some(fault), Some(property)) => Some(format!("{fault} (property {property})")),
            (Some(fault), None) => Some(fault.clone()),
            (None, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prefers_fault_messages() {
        let json = r#"{
            "_typeName": "AlreadyExists",
            "faultMessage": [
                {"_typeName": "LocalizableMessage", "key": "vim.fault.AlreadyExists", "message": "The specified key, name, or identifier 'auditor' already exists."}
            ],
            "name": "auditor"
        }"#;
        let fault: MethodFault = serde_json::from_str(json).unwrap();
        assert_eq!(fault.type_name.as_deref(), Some("AlreadyExists"));
        assert_eq!(
            fault.summary().unwrap(),
            "The specified key, name, or identifier 'auditor' already exists."
        );
    }

    #[test]
    fn test_summary_falls_back_to_type_and_property() {
        let json = r#"{"_typeName": "InvalidArgument", "invalidProperty": "privIds"}"#;
        let fault: MethodFault = serde_json::from_str(json).unwrap();
        assert_eq!(
            fault.summary().unwrap(),
            "InvalidArgument (property privIds)"
        );
    }

    #[test]
    fn test_summary_empty_fault() {
        let fault: MethodFault = serde_json::from_str("{}").unwrap();
        assert!(fault.summary().is_none());
    }
}
