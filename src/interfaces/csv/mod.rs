pub mod drawer_reader;
pub mod tender_reader;
