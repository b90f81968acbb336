use serde::Serialize;

use crate::timing::hours_display::HoursLine;

/// Body of /api/status.
#[derive(Serialize, Clone, Debug)]
pub struct StatusResponse {
    pub open: bool,
    /// What the status pill shows.
    pub label: &'static str,
    pub day: &'static str,
    pub minute: u16,
    pub timestamp: String,
}

impl StatusResponse {
    pub fn label_for(open: bool) -> &'static str {
        if open {
            "Open now"
        } else {
            "Closed"
        }
    }
}

/// Body of /api/hours. Days come in display order.
#[derive(Serialize, Clone, Debug)]
pub struct HoursResponse {
    pub days: Vec<HoursLine>,
}

#[derive(Serialize, Clone, Debug)]
pub struct HeadlineResponse {
    pub headline: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
}
