//! Human-readable distance labels
//!
//! Under 1 km the label is whole meters, between 1 and 10 km it carries one
//! decimal, from 10 km on it is whole kilometers.

/// Format a distance in meters for display
///
/// # Examples
///
/// ```
/// use placefinder::geo::format_distance;
///
/// assert_eq!(format_distance(532.4), "532m");
/// assert_eq!(format_distance(7784.7), "7.8km");
/// assert_eq!(format_distance(31978.5), "32km");
/// ```
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        let km = meters / 1000.0;
        if km < 10.0 {
            format!("{km:.1}km")
        } else {
            format!("{}km", km.round())
        }
    }
}
