//! Askama template for the text report.

use askama::Template;

use crate::domain::StationCode;

use super::view::DisruptionView;

/// Plain-text disruption report (`templates/report.txt`).
#[derive(Template)]
#[template(path = "report.txt", escape = "none")]
pub struct ReportTemplate<'a> {
    pub station: &'a StationCode,
    pub disruptions: Vec<DisruptionView>,
}
