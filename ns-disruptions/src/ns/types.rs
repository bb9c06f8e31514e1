//! NS disruptions API response DTOs.
//!
//! These types map directly to the `/disruptions/v3/station/{code}` JSON
//! response. Every field is an `Option` because NS omits fields (or sends
//! `null`) depending on the kind of disruption, and the schema is not ours
//! to enforce. Unknown fields are ignored.

use serde::Deserialize;

/// One disruption affecting a station.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// Category code, e.g. `DISRUPTION`, `MAINTENANCE` or `CALAMITY`.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Dutch headline.
    pub title: Option<String>,

    /// Start time, `YYYY-MM-DDTHH:MM:SS±HHMM`.
    pub start: Option<String>,

    /// End time, same format as `start`.
    pub end: Option<String>,

    /// Current phase of the disruption.
    pub phase: Option<Phase>,

    /// Time periods with their own situation and advice. Only the first is
    /// shown in the report.
    pub timespans: Option<Vec<Timespan>>,

    /// Severity on a 1-5 scale.
    pub impact: Option<Impact>,

    /// How long NS expects the disruption to last.
    pub expected_duration: Option<ExpectedDuration>,
}

impl Disruption {
    /// The first timespan, if there is one.
    pub fn first_timespan(&self) -> Option<&Timespan> {
        self.timespans.as_deref().and_then(<[Timespan]>::first)
    }
}

/// Phase of a disruption, e.g. "Prognose".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Phase {
    pub label: Option<String>,
}

/// A labelled value inside a timespan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Label {
    pub label: Option<String>,
}

/// A period of a disruption.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timespan {
    pub situation: Option<Label>,
    pub cause: Option<Label>,
    pub additional_travel_time: Option<Label>,
    pub advices: Option<Vec<String>>,
}

/// Severity of a disruption.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Impact {
    /// Kept as a JSON number so it prints exactly as NS sent it.
    pub value: Option<serde_json::Number>,
}

/// Expected duration of a disruption.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpectedDuration {
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_disruption() {
        let json = r#"{
            "id": "7000123",
            "type": "DISRUPTION",
            "title": "Delft - Rotterdam Centraal",
            "isActive": true,
            "start": "2024-11-23T14:20:38+0100",
            "end": "2024-11-23T17:00:00+0100",
            "phase": { "id": "1", "label": "Prognose" },
            "timespans": [
                {
                    "situation": { "label": "Er rijden minder treinen" },
                    "cause": { "label": "een seinstoring" },
                    "additionalTravelTime": { "label": "15 minuten extra reistijd" },
                    "advices": ["Plan uw reis opnieuw", "Neem de bus"]
                },
                { "situation": { "label": "Tweede periode" } }
            ],
            "impact": { "value": 3 },
            "expectedDuration": { "description": "tot ongeveer 17:00" }
        }"#;

        let d: Disruption = serde_json::from_str(json).unwrap();
        assert_eq!(d.kind.as_deref(), Some("DISRUPTION"));
        assert_eq!(d.title.as_deref(), Some("Delft - Rotterdam Centraal"));
        assert_eq!(d.phase.unwrap().label.as_deref(), Some("Prognose"));
        assert_eq!(d.timespans.as_ref().unwrap().len(), 2);
        assert_eq!(d.impact.unwrap().value.unwrap().to_string(), "3");
        assert_eq!(
            d.expected_duration.unwrap().description.as_deref(),
            Some("tot ongeveer 17:00")
        );
    }

    #[test]
    fn parse_empty_object() {
        let d: Disruption = serde_json::from_str("{}").unwrap();
        assert_eq!(d, Disruption::default());
        assert!(d.first_timespan().is_none());
    }

    #[test]
    fn nulls_are_absent() {
        let json = r#"{"title": null, "phase": {"label": null}, "timespans": null}"#;
        let d: Disruption = serde_json::from_str(json).unwrap();
        assert!(d.title.is_none());
        assert!(d.phase.as_ref().unwrap().label.is_none());
        assert!(d.first_timespan().is_none());
    }

    #[test]
    fn first_timespan_of_empty_list() {
        let d: Disruption = serde_json::from_str(r#"{"timespans": []}"#).unwrap();
        assert!(d.first_timespan().is_none());
    }

    #[test]
    fn camel_case_nested_fields() {
        let json = r#"{"timespans": [{"additionalTravelTime": {"label": "5 min"}}]}"#;
        let d: Disruption = serde_json::from_str(json).unwrap();
        let ts = d.first_timespan().unwrap();
        assert_eq!(
            ts.additional_travel_time.as_ref().unwrap().label.as_deref(),
            Some("5 min")
        );
    }

    #[test]
    fn parse_array() {
        let json = r#"[{"type": "MAINTENANCE"}, {"type": "CALAMITY"}]"#;
        let ds: Vec<Disruption> = serde_json::from_str(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds[1].kind.as_deref(), Some("CALAMITY"));
    }
}
