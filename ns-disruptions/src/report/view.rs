//! View models for the report template.
//!
//! All decisions about which lines appear, in which order, and with what
//! text are made here; the template only lays them out.

use crate::domain::{format_report_time, parse_timestamp_lenient};
use crate::ns::{Disruption, Label};
use crate::translate::FieldTranslator;

/// One `Label: value` line of a disruption block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl ReportLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// The printable lines of one disruption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisruptionView {
    pub lines: Vec<ReportLine>,
}

impl DisruptionView {
    /// Build the lines for a disruption, translating human-readable fields.
    ///
    /// Lines appear in a fixed order and only for fields that are present;
    /// a missing key at any depth drops its line and nothing else.
    pub async fn build(disruption: &Disruption, fields: &FieldTranslator) -> Self {
        let mut lines = Vec::new();

        if let Some(kind) = &disruption.kind {
            lines.push(ReportLine::new("Type", kind.as_str()));
        }

        if let Some(title) = &disruption.title {
            lines.push(ReportLine::new("Title", fields.translate_text(title).await));
        }

        if let Some(start) = disruption.start.as_deref().and_then(parse_timestamp_lenient) {
            lines.push(ReportLine::new("Start", format_report_time(&start)));
        }

        if let Some(end) = disruption.end.as_deref().and_then(parse_timestamp_lenient) {
            lines.push(ReportLine::new("End", format_report_time(&end)));
        }

        if let Some(phase) = disruption.phase.as_ref().and_then(|p| p.label.as_deref()) {
            lines.push(ReportLine::new("Phase", fields.translate_text(phase).await));
        }

        if let Some(timespan) = disruption.first_timespan() {
            let labelled = [
                ("Situation", &timespan.situation),
                ("Cause", &timespan.cause),
                ("Travel Time Impact", &timespan.additional_travel_time),
            ];
            for (name, label) in labelled {
                if let Some(text) = label_text(label) {
                    lines.push(ReportLine::new(name, fields.translate_text(text).await));
                }
            }

            if let Some(advices) = timespan.advices.as_deref().filter(|a| !a.is_empty()) {
                let translated = fields.translate_all(advices).await;
                lines.push(ReportLine::new("Advice", translated.join(", ")));
            }
        }

        if let Some(value) = disruption.impact.as_ref().and_then(|i| i.value.as_ref()) {
            lines.push(ReportLine::new("Impact Level", format!("{value}/5")));
        }

        if let Some(description) = disruption
            .expected_duration
            .as_ref()
            .and_then(|d| d.description.as_deref())
        {
            lines.push(ReportLine::new(
                "Expected Duration",
                fields.translate_text(description).await,
            ));
        }

        Self { lines }
    }
}

#[cfg(test)]
impl DisruptionView {
    /// Labels of the lines, in order.
    fn labels(&self) -> Vec<&'static str> {
        self.lines.iter().map(|l| l.label).collect()
    }

    /// Value of the line with `label`, if present.
    fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

fn label_text(label: &Option<Label>) -> Option<&str> {
    label.as_ref().and_then(|l| l.label.as_deref())
}
