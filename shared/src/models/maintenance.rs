//! Maintenance Model
//!
//! Column names follow the remote `maintenance` table, which mixes camelCase
//! columns with the server-managed `created_at`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers::lenient_string;

/// Remote table holding maintenance records
pub const MAINTENANCE_TABLE: &str = "maintenance";

/// Maintenance record as stored remotely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    /// Server-assigned id
    pub mid: i64,
    /// Human-facing number, `M-` followed by six digits
    pub maintenance_number: Option<String>,
    pub inspection_number: Option<String>,
    pub inspector_name: Option<String>,
    pub status: Option<String>,
    pub electrical_readings: Option<Value>,
    pub recommended_actions: Option<String>,
    pub additional_remarks: Option<String>,
    #[serde(rename = "created_at", alias = "createdAt")]
    pub created_at: Option<String>,
    /// Extended UI fields, merged rather than replaced on update
    pub details: Option<Value>,
    /// Columns not modelled above; kept so the row re-serializes unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create maintenance payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCreate {
    #[serde(default)]
    pub inspection_number: String,
    pub inspector_name: Option<String>,
    pub status: Option<String>,
    pub electrical_readings: Option<Map<String, Value>>,
    pub recommended_actions: Option<String>,
    pub additional_remarks: Option<String>,
}

impl MaintenanceCreate {
    /// Row sent to the insert endpoint; `created_at` is left to the server default.
    pub fn to_insert<'a>(&'a self, maintenance_number: &'a str) -> MaintenanceInsert<'a> {
        MaintenanceInsert {
            maintenance_number,
            inspection_number: &self.inspection_number,
            inspector_name: self.inspector_name.as_deref(),
            status: self.status.as_deref(),
            electrical_readings: match &self.electrical_readings {
                Some(readings) => Cow::Borrowed(readings),
                None => Cow::Owned(Map::new()),
            },
            recommended_actions: self.recommended_actions.as_deref(),
            additional_remarks: self.additional_remarks.as_deref(),
        }
    }
}

/// Insert body for the `maintenance` table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceInsert<'a> {
    pub maintenance_number: &'a str,
    pub inspection_number: &'a str,
    pub inspector_name: Option<&'a str>,
    pub status: Option<&'a str>,
    pub electrical_readings: Cow<'a, Map<String, Value>>,
    pub recommended_actions: Option<&'a str>,
    pub additional_remarks: Option<&'a str>,
}

/// Flat update payload: only the provided columns are patched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceFieldsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspector_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrical_readings: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_actions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_remarks: Option<String>,
}

/// Legacy top-level details fields sent by older UI builds
///
/// Text fields accept numbers and booleans; structured fields are kept as raw
/// JSON. A loosely typed legacy field never rejects the whole update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceExtras {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub branch: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_details: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_line_imaging_nos: Option<Value>,
    #[serde(
        rename = "lastMonthKVA",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_month_kva: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_month_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_month_time: Option<String>,
    #[serde(
        rename = "currentMonthKVA",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_month_kva: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_line_condition: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub transformer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_inspection_readings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_inspection_readings: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub after_thermal_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub after_thermal_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuse_status: Option<Value>,
}

impl MaintenanceExtras {
    /// The provided fields keyed by their details-document names.
    pub fn to_details(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Structured update payload
///
/// `details` wins when present; otherwise the legacy top-level fields in
/// `extras` are folded into the details document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    pub inspector_name: Option<String>,
    pub status: Option<String>,
    pub recommended_actions: Option<String>,
    pub additional_remarks: Option<String>,
    pub details: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extras: MaintenanceExtras,
}

impl UpdateMaintenanceRequest {
    /// Merge this request into the stored details document (top-level keys only).
    pub fn merge_details(&self, existing: Option<&Value>) -> Map<String, Value> {
        let mut merged = match existing {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        let overlay = match &self.details {
            Some(details) => details.clone(),
            None => self.extras.to_details(),
        };
        merged.extend(overlay);
        merged
    }

    /// PATCH body: provided scalar columns plus the merged details, when non-empty.
    pub fn to_patch(&self, existing_details: Option<&Value>) -> Map<String, Value> {
        let mut patch = Map::new();
        let columns = [
            ("inspectorName", &self.inspector_name),
            ("status", &self.status),
            ("recommendedActions", &self.recommended_actions),
            ("additionalRemarks", &self.additional_remarks),
        ];
        for (column, value) in columns {
            if let Some(value) = value {
                patch.insert(column.to_string(), Value::String(value.clone()));
            }
        }

        let details = self.merge_details(existing_details);
        if !details.is_empty() {
            patch.insert("details".to_string(), Value::Object(details));
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_row_keeps_unknown_columns() {
        let row = json!({
            "mid": 3,
            "maintenanceNumber": "M-000123",
            "inspectionNumber": "I-9",
            "inspectorName": null,
            "status": "Pending",
            "electricalReadings": {},
            "recommendedActions": null,
            "additionalRemarks": null,
            "created_at": "2025-03-01T10:00:00+00:00",
            "details": {"branch": "Kandy"},
            "transformerNumber": "T-77"
        });

        let parsed: Maintenance = serde_json::from_value(row.clone()).unwrap();
        assert_eq!(parsed.mid, 3);
        assert_eq!(parsed.maintenance_number.as_deref(), Some("M-000123"));
        assert_eq!(parsed.extra.get("transformerNumber"), Some(&json!("T-77")));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), row);
    }

    #[test]
    fn test_insert_defaults_electrical_readings() {
        let create = MaintenanceCreate {
            inspection_number: "I-1".into(),
            status: Some("Pending".into()),
            ..Default::default()
        };

        let body = serde_json::to_value(create.to_insert("M-000001")).unwrap();
        assert_eq!(body["maintenanceNumber"], "M-000001");
        assert_eq!(body["inspectionNumber"], "I-1");
        assert_eq!(body["electricalReadings"], json!({}));
        assert_eq!(body["inspectorName"], Value::Null);
        assert!(body.get("created_at").is_none());
    }

    #[test]
    fn test_fields_update_skips_missing() {
        let update = MaintenanceFieldsUpdate {
            status: Some("Completed".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "Completed"})
        );
    }

    #[test]
    fn test_details_object_overrides_matching_keys() {
        let existing = json!({"branch": "X", "kva": "10"});
        let request = UpdateMaintenanceRequest {
            details: Some(object(json!({"kva": "20"}))),
            ..Default::default()
        };

        let merged = request.merge_details(Some(&existing));
        assert_eq!(Value::Object(merged), json!({"branch": "X", "kva": "20"}));
    }

    #[test]
    fn test_details_object_ignores_legacy_fields() {
        let request: UpdateMaintenanceRequest = serde_json::from_value(json!({
            "details": {"branch": "New"},
            "transformerType": "Pole"
        }))
        .unwrap();

        let merged = request.merge_details(Some(&json!({"branch": "Old"})));
        assert_eq!(Value::Object(merged), json!({"branch": "New"}));
    }

    #[test]
    fn test_legacy_fields_overwrite_only_their_keys() {
        let request: UpdateMaintenanceRequest = serde_json::from_value(json!({
            "branch": "Galle",
            "lastMonthKVA": "42",
            "fuseStatus": {"ok": true}
        }))
        .unwrap();

        let existing = json!({"branch": "Kandy", "transformerType": "Bulk", "lastMonthKVA": "40"});
        let merged = request.merge_details(Some(&existing));
        assert_eq!(
            Value::Object(merged),
            json!({
                "branch": "Galle",
                "transformerType": "Bulk",
                "lastMonthKVA": "42",
                "fuseStatus": {"ok": true}
            })
        );
    }

    #[test]
    fn test_numeric_legacy_fields_are_stored_as_text() {
        let request: UpdateMaintenanceRequest = serde_json::from_value(json!({
            "currentMonthKVA": 55,
            "lastMonthKVA": 40.5,
            "workContent": [{"task": "Oil check"}]
        }))
        .unwrap();

        let merged = request.merge_details(None);
        assert_eq!(
            Value::Object(merged),
            json!({
                "currentMonthKVA": "55",
                "lastMonthKVA": "40.5",
                "workContent": [{"task": "Oil check"}]
            })
        );
    }

    #[test]
    fn test_mistyped_legacy_field_does_not_block_details_update() {
        let request: UpdateMaintenanceRequest = serde_json::from_value(json!({
            "details": {"kva": "20"},
            "branch": {"unexpected": true},
            "fuseStatus": "blown"
        }))
        .unwrap();

        let merged = request.merge_details(Some(&json!({"kva": "10", "branch": "X"})));
        assert_eq!(Value::Object(merged), json!({"kva": "20", "branch": "X"}));
    }

    #[test]
    fn test_non_object_details_start_empty() {
        let request = UpdateMaintenanceRequest {
            extras: MaintenanceExtras {
                branch: Some("Matara".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = request.merge_details(Some(&json!("corrupt")));
        assert_eq!(Value::Object(merged), json!({"branch": "Matara"}));
    }

    #[test]
    fn test_patch_omits_empty_details() {
        let request = UpdateMaintenanceRequest {
            status: Some("Completed".into()),
            ..Default::default()
        };

        assert_eq!(
            Value::Object(request.to_patch(None)),
            json!({"status": "Completed"})
        );
        assert_eq!(
            Value::Object(request.to_patch(Some(&json!({"branch": "X"})))),
            json!({"status": "Completed", "details": {"branch": "X"}})
        );
    }
}
