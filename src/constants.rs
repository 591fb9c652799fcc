//! Application-wide constants and configuration values.
//!
//! This module defines all static values used throughout personctl,
//! including defaults, wire-level names, file paths, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Defaults ===

/// Endpoint used when neither a flag, the environment, nor the config file names one.
pub const DEFAULT_URL: &str = "http://localhost:8094/soap";
/// Log file written in the working directory unless configured otherwise.
pub const DEFAULT_LOG_FILE: &str = "soapclient.log";
/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// === Environment ===

/// Environment variable overriding the endpoint.
pub const ENV_URL: &str = "PERSONCTL_URL";
/// Environment variable holding an `EnvFilter` directive for the log file.
pub const ENV_LOG: &str = "PERSONCTL_LOG";

// === Path Configuration ===

/// Name of the config file inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === SOAP Wire Format ===

/// Content type sent with every request.
pub const SOAP_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";
/// SOAP 1.2 envelope namespace the server expects.
pub const SOAP_ENVELOPE_NS: &str = "http://www.w3.org/2003/05/soap-envelope";
/// Qualified name of the request envelope element.
pub const TAG_ENVELOPE: &str = "soapenv:Envelope";
/// Qualified name of the request body element.
pub const TAG_BODY: &str = "soapenv:Body";
/// Namespace declaration attribute bound to the `soapenv` prefix.
pub const ATTR_ENVELOPE_NS: &str = "xmlns:soapenv";

/// Local names used when locating the response payload.
pub const LOCAL_ENVELOPE: &str = "Envelope";
pub const LOCAL_BODY: &str = "Body";
pub const LOCAL_FAULT: &str = "Fault";

/// Person and request child elements.
pub const FIELD_ID: &str = "ID";
pub const FIELD_NAME: &str = "Name";
pub const FIELD_SURNAME: &str = "Surname";
pub const FIELD_AGE: &str = "Age";
pub const FIELD_EMAIL: &str = "Email";
pub const FIELD_TELEPHONE: &str = "Telephone";
pub const FIELD_QUERY: &str = "Query";
pub const FIELD_PERSON: &str = "Person";
pub const FIELD_PERSONS: &str = "Persons";
pub const FIELD_STATUS: &str = "Status";

/// Fault child elements.
pub const FAULT_CODE: &str = "faultcode";
pub const FAULT_STRING: &str = "faultstring";
pub const FAULT_DETAIL: &str = "detail";
pub const FAULT_ERROR_CODE: &str = "ErrorCode";
pub const FAULT_ERROR_MESSAGE: &str = "ErrorMessage";

// === Exit Codes ===

pub const EXIT_FAULT: u8 = 1;
pub const EXIT_VALIDATION: u8 = 2;
pub const EXIT_TRANSPORT: u8 = 3;
pub const EXIT_DECODE: u8 = 4;
pub const EXIT_CONFIG: u8 = 5;

// === Messages: CLI Output ===

pub const MSG_ADDED: &str = "Added person with ID: ";
pub const MSG_RETRIEVED: &str = "Retrieved person:";
pub const MSG_NO_PERSONS: &str = "No persons found";
pub const MSG_UNKNOWN_RESPONSE: &str = "Unknown response type: ";
pub const MSG_FAULT_HEADER: &str = "Error:";
pub const MSG_DETAIL_HEADER: &str = " Detail:";

// === Error Messages ===

pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_NETWORK_REQUEST_FAILED: &str = "Network request failed";
pub const ERR_READ_CONTENT_FAILED: &str = "Failed to read response body";
pub const ERR_EMPTY_DOCUMENT: &str = "document has no root element";
