//! Type definitions for the Dropbox Sign SDK.
//!
//! This module contains the request and response types used by the
//! signature request endpoints. Optional request fields left as `None` (or
//! empty) are omitted from the serialized JSON.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// =============================================================================
// REQUESTS
// =============================================================================

/// Request to send a signature request based on one or more templates.
///
/// # Example
///
/// ```rust
/// use dropbox_sign::types::{SendSignatureRequest, TemplateSigner};
///
/// let request = SendSignatureRequest {
///     title: Some("Contract Signature".to_string()),
///     test_mode: Some(true),
///     ..SendSignatureRequest::new(
///         vec![TemplateSigner::new("Signer", "Jane Doe", "jane@example.com")],
///         vec!["template-id".to_string()],
///     )
/// };
/// assert_eq!(request.signers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendSignatureRequest {
    /// Signers who will receive the signature request.
    pub signers: Vec<TemplateSigner>,
    /// Templates to build the signature request from.
    pub template_ids: Vec<String>,
    /// Whether signers may decline to sign (server default: true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_decline: Option<bool>,
    /// Carbon copy recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ccs: Vec<Cc>,
    /// Client ID of the API app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Values used to pre-populate template fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    /// Raw file contents, sent base64-encoded. Alternative to `file_urls`.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "base64_files")]
    pub files: Vec<Vec<u8>>,
    /// URLs of files to sign. Alternative to `files`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_urls: Vec<String>,
    /// Enable eIDAS-compliant signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_eid: Option<bool>,
    /// Custom message included in the request email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Arbitrary key-value data stored with the request.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    /// Signature methods available to signers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_options: Option<SigningOptions>,
    /// Where to send signers after they sign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_redirect_url: Option<String>,
    /// Create the request in test mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    /// Title of the signature request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SendSignatureRequest {
    /// Create a request with the required signers and template IDs.
    pub fn new(signers: Vec<TemplateSigner>, template_ids: Vec<String>) -> Self {
        Self {
            signers,
            template_ids,
            ..Default::default()
        }
    }
}

fn base64_files<S: serde::Serializer>(files: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
    use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
    use serde::ser::SerializeSeq;

    let mut seq = serializer.serialize_seq(Some(files.len()))?;
    for file in files {
        seq.serialize_element(&BASE64.encode(file))?;
    }
    seq.end()
}

/// A signer filling a role defined by the template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateSigner {
    /// Role name; must match a role in the template.
    pub role: String,
    /// Full name of the signer.
    pub name: String,
    /// Address the request is emailed to.
    pub email_address: String,
    /// PIN (4-12 digits) the signer must enter before signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Phone number for SMS authentication or delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_phone_number: Option<String>,
    /// How `sms_phone_number` is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_phone_number_type: Option<SmsPhoneNumberType>,
}

impl TemplateSigner {
    /// Create a signer with the required fields.
    pub fn new(
        role: impl Into<String>,
        name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            email_address: email_address.into(),
            ..Default::default()
        }
    }
}

/// How a signer's SMS phone number is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmsPhoneNumberType {
    /// Two-factor authentication before signing.
    Authentication,
    /// Delivery of the signing link.
    Delivery,
}

/// A carbon copy recipient. Receives notifications but does not sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cc {
    /// Role name; must match a CC role in the template.
    pub role: String,
    /// Recipient email address.
    pub email: String,
}

impl Cc {
    pub fn new(role: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            email: email.into(),
        }
    }
}

/// Pre-populated value for a template's custom field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomField {
    /// Field name; must match the template.
    pub name: String,
    /// Email of the signer allowed to edit the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// Whether the field must be filled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Initial value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CustomField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Signature methods offered to signers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningOptions {
    /// Method pre-selected for the signer.
    pub default_type: SigningMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<bool>,
}

impl SigningOptions {
    /// Create options with only the default method set.
    pub fn new(default_type: SigningMethod) -> Self {
        Self {
            default_type,
            draw: None,
            phone: None,
            type_: None,
            upload: None,
        }
    }
}

/// A way of producing a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningMethod {
    /// Draw with mouse or finger.
    Draw,
    /// Phone-based verification.
    Phone,
    /// Type the name in a signature font.
    Type,
    /// Upload an image of the signature.
    Upload,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// A signature request and its current state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignatureRequest {
    /// Unique identifier.
    pub signature_request_id: String,
    /// Whether the request was created in test mode.
    #[serde(default)]
    pub test_mode: Option<bool>,
    /// Email of the requester.
    #[serde(default)]
    pub requester_email_address: Option<String>,
    /// Current title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Title before any modifications.
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    /// Subject line of the request email.
    #[serde(default)]
    pub subject: Option<String>,
    /// Custom message of the request email.
    #[serde(default)]
    pub message: Option<String>,
    /// Custom metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Creation time (Unix seconds).
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    /// Expiry time (Unix seconds), if any.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// All required signatures have been collected.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_complete: bool,
    /// A signer declined.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_declined: bool,
    /// The request is in an error state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_error: bool,
    /// Download URL for the documents.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files_url: String,
    /// Embedded signing URL.
    #[serde(default)]
    pub signing_url: Option<String>,
    /// URL of the request details page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub details_url: String,
    /// Addresses copied on the request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cc_email_addresses: Vec<String>,
    /// Where signers are sent after signing.
    #[serde(default)]
    pub signing_redirect_url: Option<String>,
    /// URI of the final signed copy.
    #[serde(default)]
    pub final_copy_uri: Option<String>,
    /// Templates the request was built from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub template_ids: Vec<String>,
    /// Custom IDs associated with the request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomFieldValue>,
    /// Signer attachments.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    /// Form field values entered by signers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_data: Vec<ResponseData>,
    /// Per-signer status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub signatures: Vec<Signature>,
    /// Bulk send job this request belongs to.
    #[serde(default)]
    pub bulk_send_job_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A custom field as reported back on a signature request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomFieldValue {
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub name: String,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub api_id: Option<String>,
    #[serde(default)]
    pub editor: Option<String>,
    /// Current value. Checkbox values arrive as booleans.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldType {
    Text,
    Checkbox,
    /// A field type this SDK does not know about.
    #[serde(other)]
    Unknown,
}

/// A file a signer is asked to upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Attachment {
    pub id: String,
    /// Signer the attachment is assigned to.
    pub signer: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default)]
    pub instructions: Option<String>,
    /// Upload time (Unix seconds).
    #[serde(default)]
    pub uploaded_at: Option<i64>,
}

/// A form field value entered by a signer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseData {
    #[serde(default)]
    pub api_id: Option<String>,
    /// Signature the value belongs to.
    #[serde(default)]
    pub signature_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(rename = "type", default)]
    pub field_type: Option<ResponseDataType>,
    /// Entered value. Checkbox values arrive as booleans.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// Kind of form field in [`ResponseData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ResponseDataType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "dropdown")]
    Dropdown,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "signature")]
    Signature,
    #[serde(rename = "date_signed")]
    DateSigned,
    #[serde(rename = "initials")]
    Initials,
    #[serde(rename = "text-merge")]
    TextMerge,
    #[serde(rename = "checkbox-merge")]
    CheckboxMerge,
    /// A field type this SDK does not know about.
    #[serde(other)]
    Unknown,
}

/// One signer's progress on a signature request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Signature {
    pub signature_id: String,
    #[serde(default)]
    pub signer_group_guid: Option<String>,
    pub signer_email_address: String,
    #[serde(default)]
    pub signer_name: Option<String>,
    #[serde(default)]
    pub signer_role: Option<String>,
    /// Position in a sequential signing workflow.
    #[serde(default)]
    pub order: Option<i32>,
    /// Raw status string. See [`Signature::status`].
    pub status_code: String,
    #[serde(default)]
    pub decline_reason: Option<String>,
    #[serde(default)]
    pub signed_at: Option<i64>,
    #[serde(default)]
    pub last_viewed_at: Option<i64>,
    #[serde(default)]
    pub last_reminded_at: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_pin: bool,
    #[serde(default)]
    pub has_sms_auth: Option<bool>,
    #[serde(default)]
    pub has_sms_delivery: Option<bool>,
    #[serde(default)]
    pub sms_phone_number: Option<String>,
    #[serde(default)]
    pub reassigned_by: Option<String>,
    #[serde(default)]
    pub reassignment_reason: Option<String>,
    #[serde(default)]
    pub reassigned_from: Option<String>,
    /// Error message, if this signature failed.
    #[serde(default)]
    pub error: Option<String>,
}

impl Signature {
    /// Parsed status of this signature.
    pub fn status(&self) -> SignerStatus {
        SignerStatus::parse(&self.status_code)
    }
}

/// Status of a signer on a signature request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerStatus {
    Success,
    OnHold,
    Signed,
    AwaitingSignature,
    Declined,
    ErrorUnknown,
    ErrorFile,
    ErrorComponentPosition,
    ErrorTextTag,
    OnHoldByRequester,
    ErrorInvalidEmail,
    Expired,
    /// A status this SDK does not know about.
    Unknown,
}

impl SignerStatus {
    /// Parse a status string. Case and surrounding whitespace are ignored;
    /// unrecognized values map to [`SignerStatus::Unknown`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => SignerStatus::Success,
            "on_hold" => SignerStatus::OnHold,
            "signed" => SignerStatus::Signed,
            "awaiting_signature" => SignerStatus::AwaitingSignature,
            "declined" => SignerStatus::Declined,
            "error_unknown" => SignerStatus::ErrorUnknown,
            "error_file" => SignerStatus::ErrorFile,
            "error_component_position" => SignerStatus::ErrorComponentPosition,
            "error_text_tag" => SignerStatus::ErrorTextTag,
            "on_hold_by_requester" => SignerStatus::OnHoldByRequester,
            "error_invalid_email" => SignerStatus::ErrorInvalidEmail,
            "expired" => SignerStatus::Expired,
            _ => SignerStatus::Unknown,
        }
    }

    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignerStatus::Success => "success",
            SignerStatus::OnHold => "on_hold",
            SignerStatus::Signed => "signed",
            SignerStatus::AwaitingSignature => "awaiting_signature",
            SignerStatus::Declined => "declined",
            SignerStatus::ErrorUnknown => "error_unknown",
            SignerStatus::ErrorFile => "error_file",
            SignerStatus::ErrorComponentPosition => "error_component_position",
            SignerStatus::ErrorTextTag => "error_text_tag",
            SignerStatus::OnHoldByRequester => "on_hold_by_requester",
            SignerStatus::ErrorInvalidEmail => "error_invalid_email",
            SignerStatus::Expired => "expired",
            SignerStatus::Unknown => "unknown_enum",
        }
    }
}

impl<'de> Deserialize<'de> for SignerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SignerStatus::parse(&s))
    }
}

impl Serialize for SignerStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_serialization() {
        let req = SendSignatureRequest::new(
            vec![TemplateSigner::new("Signer", "Jane Doe", "jane@example.com")],
            vec!["tmpl-1".to_string()],
        );

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "signers": [{"role": "Signer", "name": "Jane Doe", "email_address": "jane@example.com"}],
                "template_ids": ["tmpl-1"]
            })
        );
    }

    #[test]
    fn test_optional_fields_serialized_when_set() {
        let req = SendSignatureRequest {
            title: Some("Contract".to_string()),
            test_mode: Some(true),
            ccs: vec![Cc::new("Accounting", "acct@example.com")],
            custom_fields: vec![CustomField {
                value: Some("Acme Corp".to_string()),
                required: Some(true),
                ..CustomField::new("company_name")
            }],
            metadata: HashMap::from([("contract_id".to_string(), "12345".to_string())]),
            signing_options: Some(SigningOptions {
                draw: Some(true),
                type_: Some(false),
                ..SigningOptions::new(SigningMethod::Type)
            }),
            ..SendSignatureRequest::new(
                vec![TemplateSigner {
                    pin: Some("1234".to_string()),
                    sms_phone_number: Some("+15555550100".to_string()),
                    sms_phone_number_type: Some(SmsPhoneNumberType::Authentication),
                    ..TemplateSigner::new("Signer", "Jane Doe", "jane@example.com")
                }],
                vec!["tmpl-1".to_string()],
            )
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["title"], "Contract");
        assert_eq!(json["test_mode"], true);
        assert_eq!(json["ccs"][0]["email"], "acct@example.com");
        assert_eq!(json["custom_fields"][0]["name"], "company_name");
        assert_eq!(json["custom_fields"][0]["required"], true);
        assert!(json["custom_fields"][0].get("editor").is_none());
        assert_eq!(json["metadata"]["contract_id"], "12345");
        assert_eq!(json["signing_options"]["default_type"], "type");
        assert_eq!(json["signing_options"]["type"], false);
        assert!(json["signing_options"].get("upload").is_none());
        assert_eq!(json["signers"][0]["pin"], "1234");
        assert_eq!(json["signers"][0]["sms_phone_number_type"], "authentication");
        assert!(json.get("message").is_none());
        assert!(json.get("files").is_none());
    }

    #[test]
    fn test_files_serialized_as_base64() {
        let req = SendSignatureRequest {
            files: vec![b"hello".to_vec()],
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["files"], serde_json::json!(["aGVsbG8="]));
    }

    #[test]
    fn test_signature_request_deserialization() {
        let json = r#"{
            "signature_request_id": "sr-1",
            "title": "Test Document",
            "original_title": "Test Document",
            "is_complete": false,
            "is_declined": false,
            "has_error": false,
            "files_url": "https://example.com/files",
            "details_url": "https://example.com/details",
            "cc_email_addresses": null,
            "metadata": {"contract_id": "12345"},
            "created_at": 1234567890,
            "custom_ids": ["c1"],
            "custom_fields": [
                {"type": "text", "name": "company_name", "value": "Acme Corp"},
                {"type": "dropdown", "name": "plan"}
            ],
            "response_data": [
                {"api_id": "f1", "name": "Agree", "type": "checkbox", "value": true},
                {"api_id": "f2", "type": "hyperlink"}
            ],
            "signatures": [{
                "signature_id": "sig-1",
                "signer_email_address": "test@example.com",
                "status_code": "awaiting_signature",
                "has_pin": false
            }]
        }"#;

        let sr: SignatureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(sr.signature_request_id, "sr-1");
        assert_eq!(sr.title, "Test Document");
        assert_eq!(sr.created_at, 1234567890);
        assert!(sr.cc_email_addresses.is_empty());
        assert_eq!(sr.custom_ids, vec!["c1".to_string()]);
        assert_eq!(sr.custom_fields[0].field_type, CustomFieldType::Text);
        assert_eq!(sr.custom_fields[1].field_type, CustomFieldType::Unknown);
        assert_eq!(sr.metadata["contract_id"], "12345");
        assert_eq!(sr.response_data[0].field_type, Some(ResponseDataType::Checkbox));
        assert_eq!(sr.response_data[1].field_type, Some(ResponseDataType::Unknown));
        assert_eq!(sr.signatures.len(), 1);
        assert_eq!(sr.signatures[0].status(), SignerStatus::AwaitingSignature);
    }

    #[test]
    fn test_null_scalars_decode_as_defaults() {
        let json = r#"{
            "signature_request_id": "abc",
            "title": null,
            "original_title": null,
            "files_url": null,
            "details_url": null,
            "created_at": null,
            "is_complete": null,
            "is_declined": null,
            "has_error": null,
            "custom_ids": null,
            "attachments": [{"id": "a1", "signer": "1", "name": "ID", "required": null}],
            "signatures": [{
                "signature_id": "sig-1",
                "signer_email_address": "test@example.com",
                "status_code": "signed",
                "has_pin": null
            }]
        }"#;

        let sr: SignatureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(sr.signature_request_id, "abc");
        assert_eq!(sr.title, "");
        assert_eq!(sr.original_title, "");
        assert_eq!(sr.files_url, "");
        assert_eq!(sr.details_url, "");
        assert_eq!(sr.created_at, 0);
        assert!(!sr.is_complete);
        assert!(!sr.is_declined);
        assert!(!sr.has_error);
        assert!(sr.custom_ids.is_empty());
        assert!(!sr.attachments[0].required);
        assert!(!sr.signatures[0].has_pin);
    }

    #[test]
    fn test_custom_ids_survive_reserialization() {
        let json = r#"{"signature_request_id": "abc", "custom_ids": ["c1", "c2"]}"#;
        let sr: SignatureRequest = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&sr).unwrap();
        assert_eq!(value["custom_ids"], serde_json::json!(["c1", "c2"]));
    }

    #[test]
    fn test_signer_status_parse() {
        assert_eq!(SignerStatus::parse("signed"), SignerStatus::Signed);
        assert_eq!(SignerStatus::parse("  DECLINED "), SignerStatus::Declined);
        assert_eq!(
            SignerStatus::parse("on_hold_by_requester"),
            SignerStatus::OnHoldByRequester
        );
        assert_eq!(SignerStatus::parse("something_new"), SignerStatus::Unknown);
        assert_eq!(SignerStatus::parse(""), SignerStatus::Unknown);

        let status: SignerStatus = serde_json::from_str(r#""Expired""#).unwrap();
        assert_eq!(status, SignerStatus::Expired);
    }
}
