//! acsum-core: record, field catalogue, errors and policy for A/C Summary parsing

pub mod error;
pub mod field;
pub mod numeric;
pub mod policy;
pub mod record;

pub use error::ParseError;
pub use field::Field;
pub use numeric::{parse_dotted_date, parse_grouped_amount};
pub use policy::ParsePolicy;
pub use record::StatementRecord;
