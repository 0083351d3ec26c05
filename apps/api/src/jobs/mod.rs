// Job postings are read-only to this service; rows are managed directly in the database.

pub mod handlers;
pub mod store;
