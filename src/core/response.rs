//! Typed decoding of service responses.
//!
//! A response body is either the success element of the invoked operation or
//! a SOAP `Fault`. Both may arrive wrapped in `Envelope/Body` or bare.

use std::str::FromStr;

use crate::constants;
use crate::core::xml::Element;
use crate::error::{ClientError, Result};
use crate::state::{Operation, Person};

/// Successful result of one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationResult {
    Added { id: u64 },
    Updated { status: bool },
    Deleted { status: bool },
    Person(Person),
    AllPersons(Vec<Person>),
    SearchResults(Vec<Person>),
    /// The server answered with the response element of a different operation.
    Unrecognized { element: String },
}

/// Structured SOAP fault.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fault {
    pub code: String,
    pub message: String,
    pub detail: Option<FaultDetail>,
}

/// Application-level error carried in `<detail>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultDetail {
    pub error_code: String,
    pub error_message: String,
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({}: {})", detail.error_code, detail.error_message)?;
        }
        Ok(())
    }
}

/// Outcome of decoding a response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    Success(OperationResult),
    Fault(Fault),
}

/// Decodes a 2xx response body for `operation`.
///
/// Tries the operation's success shape first and falls back to a fault.
///
/// # Errors
///
/// [`ClientError::Decode`] with the raw body when neither shape matches.
pub fn decode(operation: Operation, body: &[u8]) -> Result<Decoded> {
    let root = Element::parse(body).map_err(|reason| ClientError::decode(reason, body))?;
    let payload = payload(&root).map_err(|reason| ClientError::decode(reason, body))?;

    let success_err = match decode_success(operation, payload) {
        Ok(result) => return Ok(Decoded::Success(result)),
        Err(reason) => reason,
    };

    if let Ok(fault) = decode_fault_element(payload) {
        return Ok(Decoded::Fault(fault));
    }

    let other_response = Operation::ALL
        .iter()
        .any(|op| *op != operation && payload.is(op.response_element()));
    if other_response {
        return Ok(Decoded::Success(OperationResult::Unrecognized {
            element: payload.name.clone(),
        }));
    }

    Err(ClientError::decode(success_err, body))
}

/// Decodes a body that is expected to carry only a fault (non-2xx replies).
///
/// # Errors
///
/// [`ClientError::Decode`] with the raw body when no fault can be read.
pub fn decode_fault(body: &[u8]) -> Result<Fault> {
    Element::parse(body)
        .and_then(|root| payload(&root).and_then(decode_fault_element))
        .map_err(|reason| ClientError::decode(reason, body))
}

/// Locates the element carrying the result: the first child of `Envelope/Body`,
/// or the root itself when the server sent a bare payload.
fn payload(root: &Element) -> std::result::Result<&Element, String> {
    if !root.is(constants::LOCAL_ENVELOPE) {
        return Ok(root);
    }
    let body = root
        .child(constants::LOCAL_BODY)
        .ok_or_else(|| "envelope has no Body".to_string())?;
    body.children
        .first()
        .ok_or_else(|| "envelope Body is empty".to_string())
}

fn decode_success(
    operation: Operation,
    payload: &Element,
) -> std::result::Result<OperationResult, String> {
    let expected = operation.response_element();
    if !payload.is(expected) {
        return Err(format!("expected <{expected}>, found <{}>", payload.name));
    }

    match operation {
        Operation::AddPerson => Ok(OperationResult::Added {
            id: required(payload, constants::FIELD_ID)?,
        }),
        Operation::UpdatePerson => Ok(OperationResult::Updated {
            status: status(payload)?,
        }),
        Operation::DeletePerson => Ok(OperationResult::Deleted {
            status: status(payload)?,
        }),
        Operation::GetPerson => {
            let person = payload
                .child(constants::FIELD_PERSON)
                .ok_or_else(|| format!("<{expected}> has no <Person>"))?;
            decode_person(person).map(OperationResult::Person)
        }
        Operation::GetAllPersons => persons(payload).map(OperationResult::AllPersons),
        Operation::SearchPerson => persons(payload).map(OperationResult::SearchResults),
    }
}

fn decode_fault_element(payload: &Element) -> std::result::Result<Fault, String> {
    if !payload.is(constants::LOCAL_FAULT) {
        return Err(format!("expected <Fault>, found <{}>", payload.name));
    }

    let message = payload
        .child_text(constants::FAULT_STRING)
        .ok_or_else(|| "<Fault> has no <faultstring>".to_string())?
        .to_string();
    let code = payload
        .child_text(constants::FAULT_CODE)
        .unwrap_or_default()
        .to_string();
    let detail = payload.child(constants::FAULT_DETAIL).map(|d| FaultDetail {
        error_code: d
            .child_text(constants::FAULT_ERROR_CODE)
            .unwrap_or_default()
            .to_string(),
        error_message: d
            .child_text(constants::FAULT_ERROR_MESSAGE)
            .unwrap_or_default()
            .to_string(),
    });

    Ok(Fault {
        code,
        message,
        detail,
    })
}

/// `<Person>` children, either directly under the payload or inside `<Persons>`.
fn persons(payload: &Element) -> std::result::Result<Vec<Person>, String> {
    let container = payload.child(constants::FIELD_PERSONS).unwrap_or(payload);
    container
        .children_named(constants::FIELD_PERSON)
        .map(decode_person)
        .collect()
}

fn decode_person(element: &Element) -> std::result::Result<Person, String> {
    let text = |name: &str| element.child_text(name).unwrap_or_default().to_string();

    Ok(Person {
        id: required(element, constants::FIELD_ID)?,
        name: text(constants::FIELD_NAME),
        surname: text(constants::FIELD_SURNAME),
        age: optional(element, constants::FIELD_AGE)?.unwrap_or_default(),
        email: text(constants::FIELD_EMAIL),
        telephone: text(constants::FIELD_TELEPHONE),
    })
}

fn status(payload: &Element) -> std::result::Result<bool, String> {
    let raw = payload
        .child_text(constants::FIELD_STATUS)
        .ok_or_else(|| format!("<{}> has no <Status>", payload.name))?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(format!("<Status> is not a boolean: {other:?}")),
    }
}

fn required<T: FromStr>(element: &Element, name: &str) -> std::result::Result<T, String> {
    optional(element, name)?.ok_or_else(|| format!("<{}> has no <{name}>", element.name))
}

fn optional<T: FromStr>(element: &Element, name: &str) -> std::result::Result<Option<T>, String> {
    element
        .child_text(name)
        .map(|raw| {
            raw.parse()
                .map_err(|_| format!("<{name}> is not a valid number: {raw:?}"))
        })
        .transpose()
}
