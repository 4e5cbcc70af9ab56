use maud::{html, Markup};

/// Plain listing of the available API routes.
/// Rendered as a bare fragment, not wrapped in a page layout.
pub fn home_page() -> Markup {
    html! {
        "Available Routes:" br;
        "/api/v1.0/precipitation" br;
        "/api/v1.0/stations" br;
        "/api/v1.0/tobs" br;
        br;
        "Search by Start Date Route (Format: /api/v1.0/YYYY-MM-DD):" br;
        "/api/v1.0/<start>" br;
        br;
        "Search by Start Date / End Date Route (Format: /api/v1.0/YYYY-MM-DD/YYYY-MM-DD):" br;
        "/api/v1.0/<start>/<end>"
    }
}
