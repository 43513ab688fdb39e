pub mod backup_exchange;
pub mod core;
pub mod member_stats;
pub mod observation;
pub mod reports;
pub mod schedule;
pub mod vocacionados;
