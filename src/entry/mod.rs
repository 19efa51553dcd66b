//! Desktop entry records: schema, typed values, applications, and resolved output.
mod application;
mod record;
mod resolved;
mod schema;
mod value;

pub use application::Application;
pub use record::KeyedRecord;
pub use resolved::{ResolvedEntry, DESKTOP_EXTENSION};
pub use schema::{EntryType, Required, ValueKind, DESKTOP_ENTRY};
pub use value::Value;
