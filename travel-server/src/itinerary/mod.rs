//! Plain-text itinerary export.
//!
//! Renders one found route as a downloadable text file: totals, one line per
//! leg, layover suggestions where there are any, and what to see at the
//! destination.

use askama::Template;
use chrono::NaiveDateTime;

use crate::domain::{Attraction, CandidatePath, City, PathLeg, Recommendation};
use crate::layover::AttractionCatalog;

/// Format minutes as `"{h}h {m}m"`.
pub fn format_duration(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Itinerary text template.
#[derive(Template)]
#[template(path = "itinerary.txt")]
struct ItineraryTemplate<'a> {
    generated_at: String,
    index: usize,
    route: String,
    total_cost: u64,
    total_duration: String,
    legs: Vec<LegView<'a>>,
    attractions: &'a [Attraction],
}

/// One leg line, plus its layover block when there is something to suggest.
struct LegView<'a> {
    from: &'a City,
    to: &'a City,
    mode: &'static str,
    cost: u64,
    duration: String,
    layover: String,
    recommendations: &'a [Recommendation],
}

impl<'a> LegView<'a> {
    fn from_leg(leg: &'a PathLeg) -> Self {
        // Only real suggestions get a layover block
        let recommendations = leg
            .layover_recommendations
            .as_ref()
            .map(|r| r.suggested())
            .unwrap_or_default();

        Self {
            from: &leg.from,
            to: &leg.to,
            mode: leg.mode.title(),
            cost: leg.cost,
            duration: format_duration(leg.duration),
            layover: format_duration(leg.layover_duration),
            recommendations,
        }
    }
}

/// Render the itinerary for `path`, shown as route number `index` (1-based).
///
/// The destination section lists every catalog attraction of `destination`,
/// unfiltered. Lines are newline-separated with no trailing newline.
pub fn render_itinerary(
    path: &CandidatePath,
    index: usize,
    destination: &str,
    catalog: &AttractionCatalog,
    generated_at: NaiveDateTime,
) -> Result<String, askama::Error> {
    let template = ItineraryTemplate {
        generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        index,
        route: path.route_label(),
        total_cost: path.total_cost(),
        total_duration: format_duration(path.total_duration()),
        legs: path.legs().iter().map(LegView::from_leg).collect(),
        attractions: catalog.attractions(destination),
    };

    let mut text = template.render()?;
    text.truncate(text.trim_end_matches('\n').len());
    Ok(text)
}
