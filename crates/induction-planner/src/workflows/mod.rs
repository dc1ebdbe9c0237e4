pub mod induction;
pub mod ingest;
