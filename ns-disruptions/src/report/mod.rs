//! Human-readable disruption report.
//!
//! The renderer turns the API's disruption list into one text block per
//! disruption, in the order received. Translation and timestamp failures
//! only ever affect the line they belong to.

mod templates;
mod view;

use askama::Template;

use crate::domain::StationCode;
use crate::ns::Disruption;
use crate::translate::FieldTranslator;

pub use templates::ReportTemplate;
pub use view::{DisruptionView, ReportLine};

/// Renders disruption lists as text.
#[derive(Clone)]
pub struct ReportRenderer {
    fields: FieldTranslator,
}

impl ReportRenderer {
    /// Create a renderer that translates through `fields`.
    pub fn new(fields: FieldTranslator) -> Self {
        Self { fields }
    }

    /// Build the view models for a disruption list, keeping its order.
    async fn views(&self, disruptions: &[Disruption]) -> Vec<DisruptionView> {
        let mut views = Vec::with_capacity(disruptions.len());
        for disruption in disruptions {
            views.push(DisruptionView::build(disruption, &self.fields).await);
        }
        views
    }

    /// Render the report for `station`.
    ///
    /// An empty list renders a single "no current disruptions" notice.
    pub async fn render(
        &self,
        station: &StationCode,
        disruptions: &[Disruption],
    ) -> Result<String, askama::Error> {
        let template = ReportTemplate {
            station,
            disruptions: self.views(disruptions).await,
        };
        template.render()
    }
}
