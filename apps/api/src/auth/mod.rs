// Master-role authentication: credential check, JWT issue/verify, bearer gate.

pub mod handlers;
pub mod middleware;
pub mod token;
