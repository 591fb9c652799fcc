//! The request pipeline: validate, build, send, decode, present.

use std::io::Write;

use url::Url;

use crate::cli::present;
use crate::constants;
use crate::core::request::{Request, RequestFields};
use crate::core::response::{self, Decoded};
use crate::core::transport::{Reply, Transport};
use crate::error::{ClientError, Result};
use crate::state::Operation;

/// How a completed exchange ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded and its result was printed.
    Completed,
    /// The server answered with a fault, which was printed.
    Fault,
}

impl Outcome {
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::Fault => constants::EXIT_FAULT,
        }
    }
}

/// Runs one operation end to end, writing the result to `out`.
///
/// Validation happens before the transport is touched; an invalid request
/// never reaches the network.
///
/// # Errors
///
/// Validation, transport, and decode failures. Server faults are not errors;
/// they are printed and reported as [`Outcome::Fault`].
pub fn execute(
    transport: &impl Transport,
    url: &Url,
    operation: Operation,
    fields: &RequestFields,
    raw: bool,
    out: &mut impl Write,
) -> Result<Outcome> {
    let request = Request::from_fields(operation, fields).inspect_err(|e| {
        tracing::error!(error = %e, operation = %operation, "invalid arguments");
    })?;
    let envelope = request.to_envelope()?;

    tracing::info!(
        url = %url,
        operation = %operation,
        request = %String::from_utf8_lossy(&envelope),
        "Sending SOAP request"
    );

    let reply = transport.post(url.as_str(), envelope).inspect_err(|e| {
        tracing::error!(error = %e, "Error sending request");
    })?;

    tracing::info!(
        status = reply.status,
        response = %String::from_utf8_lossy(&reply.body),
        "Received SOAP response"
    );

    if raw {
        writeln!(out, "{}", String::from_utf8_lossy(&reply.body))?;
    }

    let decoded = decode_reply(operation, &reply).inspect_err(|e| {
        tracing::error!(error = %e, "Error unmarshalling response");
    })?;

    match decoded {
        Decoded::Success(result) => {
            present::print_result(out, &result)?;
            Ok(Outcome::Completed)
        }
        Decoded::Fault(fault) => {
            tracing::warn!(
                fault_code = %fault.code,
                fault_string = %fault.message,
                error_code = fault.detail.as_ref().map(|d| d.error_code.as_str()),
                error_message = fault.detail.as_ref().map(|d| d.error_message.as_str()),
                "SOAP error response"
            );
            present::print_fault(out, &fault)?;
            Ok(Outcome::Fault)
        }
    }
}

/// 2xx bodies may hold a result or a fault; anything else must be a fault.
fn decode_reply(operation: Operation, reply: &Reply) -> Result<Decoded> {
    if reply.is_success() {
        return response::decode(operation, &reply.body);
    }

    response::decode_fault(&reply.body)
        .map(Decoded::Fault)
        .map_err(|e| match e {
            ClientError::Decode { reason, body } => ClientError::Decode {
                reason: format!("server returned HTTP {}: {reason}", reply.status),
                body,
            },
            other => other,
        })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every request and answers with a canned reply.
    struct FakeTransport {
        reply: Reply,
        sent: RefCell<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                reply: Reply {
                    status,
                    body: body.as_bytes().to_vec(),
                },
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        fn post(&self, url: &str, body: Vec<u8>) -> Result<Reply> {
            self.sent
                .borrow_mut()
                .push((url.to_string(), String::from_utf8(body).unwrap()));
            Ok(self.reply.clone())
        }
    }

    fn url() -> Url {
        Url::parse("http://localhost:8094/soap").unwrap()
    }

    fn run(
        transport: &FakeTransport,
        operation: Operation,
        fields: &RequestFields,
        raw: bool,
    ) -> (Result<Outcome>, String) {
        let mut out = Vec::new();
        let result = execute(transport, &url(), operation, fields, raw, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn ann() -> RequestFields {
        RequestFields {
            name: Some("Ann".into()),
            surname: Some("Lee".into()),
            age: Some(30),
            email: Some("a@x.com".into()),
            telephone: Some("555".into()),
            ..RequestFields::default()
        }
    }

    #[test]
    fn test_add_person_end_to_end() {
        let transport = FakeTransport::new(200, "<AddPersonResponse><ID>7</ID></AddPersonResponse>");
        let (result, output) = run(&transport, Operation::AddPerson, &ann(), false);

        assert_eq!(result.unwrap(), Outcome::Completed);
        assert_eq!(output, "Added person with ID: 7\n");

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "http://localhost:8094/soap");
        assert!(sent[0].1.contains("<AddPerson><Name>Ann</Name>"));
    }

    #[test]
    fn test_missing_field_never_reaches_transport() {
        let transport = FakeTransport::new(200, "<AddPersonResponse><ID>7</ID></AddPersonResponse>");

        for op in [
            Operation::AddPerson,
            Operation::GetPerson,
            Operation::UpdatePerson,
            Operation::DeletePerson,
            Operation::SearchPerson,
        ] {
            let (result, output) = run(&transport, op, &RequestFields::default(), false);
            assert!(matches!(result, Err(ClientError::Validation(_))), "{op}");
            assert!(output.is_empty());
        }
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_fault_in_ok_reply() {
        let transport = FakeTransport::new(
            200,
            "<Envelope><Body><Fault><faultcode>Server</faultcode>\
             <faultstring>Person not found</faultstring></Fault></Body></Envelope>",
        );
        let fields = RequestFields {
            id: Some(9),
            ..RequestFields::default()
        };
        let (result, output) = run(&transport, Operation::GetPerson, &fields, false);

        assert_eq!(result.unwrap(), Outcome::Fault);
        assert_eq!(
            output,
            "Error:\n FaultCode: Server\n FaultString: Person not found\n"
        );
    }

    #[test]
    fn test_fault_in_error_status() {
        let transport = FakeTransport::new(
            500,
            "<Fault><faultcode>Server</faultcode><faultstring>boom</faultstring></Fault>",
        );
        let (result, output) = run(&transport, Operation::GetAllPersons, &RequestFields::default(), false);

        assert_eq!(result.unwrap(), Outcome::Fault);
        assert!(output.contains("FaultString: boom"));
    }

    #[test]
    fn test_error_status_with_garbage_body() {
        let transport = FakeTransport::new(502, "Bad Gateway");
        let (result, output) = run(&transport, Operation::GetAllPersons, &RequestFields::default(), false);

        let Err(ClientError::Decode { reason, body }) = result else {
            panic!("expected decode error");
        };
        assert!(reason.contains("HTTP 502"));
        assert_eq!(body, "Bad Gateway");
        assert!(output.is_empty());
    }

    #[test]
    fn test_error_status_never_decodes_success() {
        let transport = FakeTransport::new(500, "<AddPersonResponse><ID>7</ID></AddPersonResponse>");
        let (result, output) = run(&transport, Operation::AddPerson, &ann(), false);

        assert!(matches!(result, Err(ClientError::Decode { .. })));
        assert!(!output.contains("Added person"));
    }

    #[test]
    fn test_raw_flag_prints_body_first() {
        let body = "<DeletePersonResponse><Status>true</Status></DeletePersonResponse>";
        let transport = FakeTransport::new(200, body);
        let fields = RequestFields {
            id: Some(3),
            ..RequestFields::default()
        };
        let (result, output) = run(&transport, Operation::DeletePerson, &fields, true);

        assert_eq!(result.unwrap(), Outcome::Completed);
        assert_eq!(output, format!("{body}\nDelete status: true\n"));
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Completed.exit_code(), 0);
        assert_eq!(Outcome::Fault.exit_code(), constants::EXIT_FAULT);
    }
}
