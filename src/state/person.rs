//! Person record types.

/// A person as stored by the service.
///
/// The `id` is always assigned by the server; the client only ever echoes it back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    /// Server-assigned identifier.
    pub id: u64,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Age in years.
    pub age: u32,
    /// Contact e-mail address.
    pub email: String,
    /// Contact telephone number.
    pub telephone: String,
}

/// Fields of a person that does not have an id yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub age: u32,
    pub email: String,
    pub telephone: String,
}

impl NewPerson {
    /// Attaches an existing id, producing the full record used by updates.
    #[must_use]
    pub fn with_id(self, id: u64) -> Person {
        Person {
            id,
            name: self.name,
            surname: self.surname,
            age: self.age,
            email: self.email,
            telephone: self.telephone,
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} Name: {} Surname: {} Age: {} Email: {} Telephone: {}",
            self.id, self.name, self.surname, self.age, self.email, self.telephone
        )
    }
}
