//! Output formatting for CLI display

use crate::place::{Category, Place, links};
use crate::query::PlaceMatch;
use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Category label in its marker color
#[must_use]
pub fn category_badge(category: Category) -> ColoredString {
    let (r, g, b) = category.color();
    category.label().truecolor(r, g, b)
}

/// One result line: id, name, category, distance and favorite marker
#[must_use]
pub fn match_line(m: &PlaceMatch<'_>, quiet: bool) -> String {
    let place = m.place;
    if quiet {
        return place.id().to_string();
    }
    let star = if m.favorite { "★".yellow().to_string() } else { " ".to_string() };
    format!(
        "{star} {:>10}  {} [{}] {}  {}",
        m.distance_label().bold(),
        place.name(),
        category_badge(place.category()),
        place.id().dimmed(),
        place.address().dimmed()
    )
}

/// Multi-line detail block for a selected place
#[must_use]
pub fn place_details(place: &Place, favorite: bool) -> String {
    let mut lines = vec![format!(
        "{}{}",
        place.name().bold(),
        if favorite { " ★".yellow().to_string() } else { String::new() }
    )];
    lines.push(format!("  Category:       {}", category_badge(place.category())));
    lines.push(format!("  Region:         {}", place.region()));
    lines.push(format!("  Address:        {}", place.address()));
    if let Some(rep) = place.representative() {
        lines.push(format!("  Representative: {rep}"));
    }
    if let Some(tel) = place.tel() {
        lines.push(format!("  Tel:            {tel}"));
    }
    if let Some(kind) = place.aggregate_type() {
        lines.push(format!("  Aggregate:      {kind}"));
    }
    let c = place.coord();
    lines.push(format!("  Coordinates:    {:.6}, {:.6}", c.lat, c.lng));
    lines.push(String::new());
    lines.push(format!("  App route:      {}", links::app_route_url(place)));
    lines.push(format!("  Web directions: {}", links::web_directions_url(place)));
    if let Some(dial) = links::dial_url(place) {
        lines.push(format!("  Dial:           {dial}"));
    }
    lines.join("\n")
}

/// JSON view of a match
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJson<'a> {
    #[serde(flatten)]
    pub place: &'a Place,
    /// Meters
    pub distance: f64,
    pub distance_label: String,
    pub favorite: bool,
}

impl<'a> From<&PlaceMatch<'a>> for MatchJson<'a> {
    fn from(m: &PlaceMatch<'a>) -> Self {
        Self {
            place: m.place,
            distance: m.distance,
            distance_label: m.distance_label(),
            favorite: m.favorite,
        }
    }
}
