//! The six remote operations exposed by the Person service.

use clap::ValueEnum;

/// Remote operation selected with `--method`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Operation {
    /// Create a person; the server answers with the new id.
    #[value(name = "addperson")]
    AddPerson,
    /// Fetch one person by id.
    #[value(name = "getperson")]
    GetPerson,
    /// List every stored person.
    #[value(name = "getallpersons")]
    GetAllPersons,
    /// Replace the fields of an existing person.
    #[value(name = "updateperson")]
    UpdatePerson,
    /// Remove a person by id.
    #[value(name = "deleteperson")]
    DeletePerson,
    /// Free-text search over stored persons.
    #[value(name = "searchperson")]
    SearchPerson,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::AddPerson,
        Operation::GetPerson,
        Operation::GetAllPersons,
        Operation::UpdatePerson,
        Operation::DeletePerson,
        Operation::SearchPerson,
    ];

    /// Element name of the request inside the SOAP body.
    #[must_use]
    pub const fn element(self) -> &'static str {
        match self {
            Self::AddPerson => "AddPerson",
            Self::GetPerson => "GetPerson",
            Self::GetAllPersons => "GetAllPersons",
            Self::UpdatePerson => "UpdatePerson",
            Self::DeletePerson => "DeletePerson",
            Self::SearchPerson => "SearchPerson",
        }
    }

    /// Element name of the matching success response.
    #[must_use]
    pub const fn response_element(self) -> &'static str {
        match self {
            Self::AddPerson => "AddPersonResponse",
            Self::GetPerson => "GetPersonResponse",
            Self::GetAllPersons => "GetAllPersonsResponse",
            Self::UpdatePerson => "UpdatePersonResponse",
            Self::DeletePerson => "DeletePersonResponse",
            Self::SearchPerson => "SearchPersonResponse",
        }
    }

    /// Name accepted by `--method`.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::AddPerson => "addperson",
            Self::GetPerson => "getperson",
            Self::GetAllPersons => "getallpersons",
            Self::UpdatePerson => "updateperson",
            Self::DeletePerson => "deleteperson",
            Self::SearchPerson => "searchperson",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element())
    }
}
