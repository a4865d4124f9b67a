pub mod auditlog;
pub mod backfill;
pub mod backup;
pub mod dayrange;
pub mod generate;
pub mod grouping;
pub mod localday;
