//! Request validation and SOAP envelope construction.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::constants;
use crate::error::{ClientError, Result};
use crate::state::{NewPerson, Operation, Person};

/// Raw inputs collected from the command line, before validation.
#[derive(Clone, Debug, Default)]
pub struct RequestFields {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub query: Option<String>,
}

/// A validated request for one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    AddPerson(NewPerson),
    GetPerson { id: u64 },
    GetAllPersons,
    UpdatePerson(Person),
    DeletePerson { id: u64 },
    SearchPerson { query: String },
}

impl Request {
    /// Validates `fields` for `operation` and builds the request.
    ///
    /// Every missing or out-of-range field is reported in a single
    /// [`ClientError::Validation`].
    pub fn from_fields(operation: Operation, fields: &RequestFields) -> Result<Self> {
        let mut problems = Vec::new();

        let request = match operation {
            Operation::AddPerson => collect_person(fields, &mut problems).map(Self::AddPerson),
            Operation::UpdatePerson => {
                let id = collect_id(fields, &mut problems);
                let person = collect_person(fields, &mut problems);
                id.zip(person)
                    .map(|(id, person)| Self::UpdatePerson(person.with_id(id)))
            }
            Operation::GetPerson => {
                collect_id(fields, &mut problems).map(|id| Self::GetPerson { id })
            }
            Operation::DeletePerson => {
                collect_id(fields, &mut problems).map(|id| Self::DeletePerson { id })
            }
            Operation::SearchPerson => required_text(fields.query.as_deref(), "--query", &mut problems)
                .map(|query| Self::SearchPerson { query }),
            Operation::GetAllPersons => Some(Self::GetAllPersons),
        };

        match request {
            Some(request) if problems.is_empty() => Ok(request),
            _ => Err(ClientError::Validation(format!(
                "invalid arguments for {}: {}",
                operation.cli_name(),
                problems.join("; ")
            ))),
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::AddPerson(_) => Operation::AddPerson,
            Self::GetPerson { .. } => Operation::GetPerson,
            Self::GetAllPersons => Operation::GetAllPersons,
            Self::UpdatePerson(_) => Operation::UpdatePerson,
            Self::DeletePerson { .. } => Operation::DeletePerson,
            Self::SearchPerson { .. } => Operation::SearchPerson,
        }
    }

    /// Serializes the request into a complete SOAP envelope.
    pub fn to_envelope(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());

        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        emit(
            &mut writer,
            Event::Start(
                BytesStart::new(constants::TAG_ENVELOPE)
                    .with_attributes([(constants::ATTR_ENVELOPE_NS, constants::SOAP_ENVELOPE_NS)]),
            ),
        )?;
        emit(&mut writer, Event::Start(BytesStart::new(constants::TAG_BODY)))?;

        self.write_operation(&mut writer)?;

        emit(&mut writer, Event::End(BytesEnd::new(constants::TAG_BODY)))?;
        emit(&mut writer, Event::End(BytesEnd::new(constants::TAG_ENVELOPE)))?;

        Ok(writer.into_inner())
    }

    fn write_operation(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let element = self.operation().element();

        if let Self::GetAllPersons = self {
            return emit(writer, Event::Empty(BytesStart::new(element)));
        }

        emit(writer, Event::Start(BytesStart::new(element)))?;
        match self {
            Self::AddPerson(person) => {
                write_field(writer, constants::FIELD_NAME, &person.name)?;
                write_field(writer, constants::FIELD_SURNAME, &person.surname)?;
                write_field(writer, constants::FIELD_AGE, &person.age.to_string())?;
                write_field(writer, constants::FIELD_EMAIL, &person.email)?;
                write_field(writer, constants::FIELD_TELEPHONE, &person.telephone)?;
            }
            Self::UpdatePerson(person) => {
                write_field(writer, constants::FIELD_ID, &person.id.to_string())?;
                write_field(writer, constants::FIELD_NAME, &person.name)?;
                write_field(writer, constants::FIELD_SURNAME, &person.surname)?;
                write_field(writer, constants::FIELD_AGE, &person.age.to_string())?;
                write_field(writer, constants::FIELD_EMAIL, &person.email)?;
                write_field(writer, constants::FIELD_TELEPHONE, &person.telephone)?;
            }
            Self::GetPerson { id } | Self::DeletePerson { id } => {
                write_field(writer, constants::FIELD_ID, &id.to_string())?;
            }
            Self::SearchPerson { query } => {
                write_field(writer, constants::FIELD_QUERY, query)?;
            }
            Self::GetAllPersons => {}
        }
        emit(writer, Event::End(BytesEnd::new(element)))
    }
}

fn write_field(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(value)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ClientError::Encode(e.to_string()))
}

fn collect_person(fields: &RequestFields, problems: &mut Vec<String>) -> Option<NewPerson> {
    let name = required_text(fields.name.as_deref(), "--name", problems);
    let surname = required_text(fields.surname.as_deref(), "--surname", problems);
    let email = required_text(fields.email.as_deref(), "--email", problems);
    let telephone = required_text(fields.telephone.as_deref(), "--telephone", problems);
    let age = positive(fields.age, "--age", problems)
        .and_then(|age| narrow::<u32>(age, "--age", problems));

    Some(NewPerson {
        name: name?,
        surname: surname?,
        age: age?,
        email: email?,
        telephone: telephone?,
    })
}

fn collect_id(fields: &RequestFields, problems: &mut Vec<String>) -> Option<u64> {
    positive(fields.id, "--id", problems).and_then(|id| narrow::<u64>(id, "--id", problems))
}

fn required_text(value: Option<&str>, flag: &str, problems: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => {
            problems.push(format!("{flag} is required"));
            None
        }
    }
}

fn positive(value: Option<i64>, flag: &str, problems: &mut Vec<String>) -> Option<i64> {
    match value {
        Some(v) if v > 0 => Some(v),
        Some(_) => {
            problems.push(format!("{flag} must be greater than 0"));
            None
        }
        None => {
            problems.push(format!("{flag} is required"));
            None
        }
    }
}

fn narrow<T: TryFrom<i64>>(value: i64, flag: &str, problems: &mut Vec<String>) -> Option<T> {
    T::try_from(value)
        .map_err(|_| problems.push(format!("{flag} is out of range")))
        .ok()
}
