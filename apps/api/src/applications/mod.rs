// Candidate submissions and the master dashboard's grouped view of them.

pub mod grouping;
pub mod handlers;
