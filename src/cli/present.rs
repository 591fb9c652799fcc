//! Human-readable output for decoded responses.

use std::io::{self, Write};

use crate::constants;
use crate::core::response::{Fault, OperationResult};
use crate::state::Person;

/// Writes a successful result.
pub fn print_result(out: &mut impl Write, result: &OperationResult) -> io::Result<()> {
    match result {
        OperationResult::Added { id } => writeln!(out, "{}{id}", constants::MSG_ADDED),
        OperationResult::Updated { status } => writeln!(out, "Update status: {status}"),
        OperationResult::Deleted { status } => writeln!(out, "Delete status: {status}"),
        OperationResult::Person(person) => print_person(out, person),
        OperationResult::AllPersons(persons) | OperationResult::SearchResults(persons) => {
            print_persons(out, persons)
        }
        OperationResult::Unrecognized { element } => {
            writeln!(out, "{}{element}", constants::MSG_UNKNOWN_RESPONSE)
        }
    }
}

/// Writes a server fault as a structured error block.
pub fn print_fault(out: &mut impl Write, fault: &Fault) -> io::Result<()> {
    writeln!(out, "{}", constants::MSG_FAULT_HEADER)?;
    writeln!(out, " FaultCode: {}", fault.code)?;
    writeln!(out, " FaultString: {}", fault.message)?;
    if let Some(detail) = &fault.detail {
        writeln!(out, "{}", constants::MSG_DETAIL_HEADER)?;
        writeln!(out, "  ErrorCode: {}", detail.error_code)?;
        writeln!(out, "  ErrorMessage: {}", detail.error_message)?;
    }
    Ok(())
}

fn print_person(out: &mut impl Write, person: &Person) -> io::Result<()> {
    writeln!(out, "{}", constants::MSG_RETRIEVED)?;
    writeln!(out, " ID: {}", person.id)?;
    writeln!(out, " Name: {}", person.name)?;
    writeln!(out, " Surname: {}", person.surname)?;
    writeln!(out, " Age: {}", person.age)?;
    writeln!(out, " Email: {}", person.email)?;
    writeln!(out, " Telephone: {}", person.telephone)
}

fn print_persons(out: &mut impl Write, persons: &[Person]) -> io::Result<()> {
    if persons.is_empty() {
        return writeln!(out, "{}", constants::MSG_NO_PERSONS);
    }
    for person in persons {
        writeln!(out, "Person: {person}")?;
    }
    Ok(())
}
