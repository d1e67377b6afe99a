//! Outbound links for a place: directions and phone dialing

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::Place;

/// App name passed to the map app's route scheme
pub const APP_NAME: &str = "내 주변 업체 찾기";

/// Zoom level used when centering the web map on the destination
const WEB_ZOOM: u8 = 15;

/// Query-component escape set: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Deep link that opens turn-by-turn directions in the mobile map app
#[must_use]
pub fn app_route_url(place: &Place) -> String {
    let c = place.coord();
    format!(
        "nmap://route/public?dlat={}&dlng={}&dname={}&appname={}",
        c.lat,
        c.lng,
        utf8_percent_encode(place.name(), COMPONENT),
        utf8_percent_encode(APP_NAME, COMPONENT)
    )
}

/// Browser directions URL, the fallback when the app is not installed
#[must_use]
pub fn web_directions_url(place: &Place) -> String {
    let c = place.coord();
    format!(
        "https://map.naver.com/v5/directions/-/-/-/transit?c={},{},{WEB_ZOOM},0,0,0,dh&destination={}",
        c.lng,
        c.lat,
        utf8_percent_encode(place.name(), COMPONENT)
    )
}

/// `tel:` link with dashes removed, if the place has a phone number
#[must_use]
pub fn dial_url(place: &Place) -> Option<String> {
    place.tel().map(|tel| format!("tel:{}", tel.replace('-', "")))
}
