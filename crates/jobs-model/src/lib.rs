pub mod person;
pub mod table;

pub use person::ValidatedPerson;
pub use table::{CellValue, Row, Table};
