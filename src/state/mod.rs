//! Domain types shared by the request, transport, and presentation layers.

mod operation;
mod person;

pub use operation::Operation;
pub use person::{NewPerson, Person};
