//! NS station disruption report.
//!
//! A command-line tool that answers: "what is currently disrupting trains
//! at this station?", with the operator's Dutch notices translated.

pub mod app;
pub mod config;
pub mod domain;
pub mod ns;
pub mod report;
pub mod translate;

#[cfg(test)]
pub(crate) mod test_support;
