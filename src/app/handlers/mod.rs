pub mod browsing;
pub mod global;
pub mod login;
pub mod reading;
pub mod results;
pub mod search;

#[cfg(test)]
mod tests;
