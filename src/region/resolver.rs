//! Address prefix matching against region name variants

use super::Region;

/// Region name variants in priority order
///
/// Full administrative names come first, then city-suffix forms, then the
/// bare short labels. The first variant that prefixes the address wins.
const VARIANTS: &[(&str, Region)] = &[
    ("서울특별시", Region::Seoul),
    ("인천광역시", Region::Incheon),
    ("부산광역시", Region::Busan),
    ("울산광역시", Region::Ulsan),
    ("대구광역시", Region::Daegu),
    ("대전광역시", Region::Daejeon),
    ("광주광역시", Region::Gwangju),
    ("세종특별자치시", Region::Sejong),
    ("제주특별자치도", Region::Jeju),
    ("강원특별자치도", Region::Gangwon),
    ("전북특별자치도", Region::Jeonbuk),
    ("경기도", Region::Gyeonggi),
    ("강원도", Region::Gangwon),
    ("경상남도", Region::Gyeongnam),
    ("경상북도", Region::Gyeongbuk),
    ("충청남도", Region::Chungnam),
    ("충청북도", Region::Chungbuk),
    ("전라남도", Region::Jeonnam),
    ("전라북도", Region::Jeonbuk),
    ("제주도", Region::Jeju),
    ("서울시", Region::Seoul),
    ("인천시", Region::Incheon),
    ("부산시", Region::Busan),
    ("울산시", Region::Ulsan),
    ("대구시", Region::Daegu),
    ("대전시", Region::Daejeon),
    ("광주시", Region::Gwangju),
    ("세종시", Region::Sejong),
    ("서울", Region::Seoul),
    ("인천", Region::Incheon),
    ("경기", Region::Gyeonggi),
    ("강원", Region::Gangwon),
    ("부산", Region::Busan),
    ("울산", Region::Ulsan),
    ("경남", Region::Gyeongnam),
    ("대구", Region::Daegu),
    ("경북", Region::Gyeongbuk),
    ("대전", Region::Daejeon),
    ("세종", Region::Sejong),
    ("충남", Region::Chungnam),
    ("충북", Region::Chungbuk),
    ("광주", Region::Gwangju),
    ("전남", Region::Jeonnam),
    ("전북", Region::Jeonbuk),
    ("제주", Region::Jeju),
];

/// Region assumed when an address names none
pub const DEFAULT_REGION: Region = Region::Seoul;

/// Resolve the region an address belongs to
///
/// Leading whitespace is ignored. Addresses that are empty or start with no
/// known variant fall back to [`DEFAULT_REGION`].
///
/// # Examples
///
/// ```
/// use placefinder::region::{resolve, Region};
///
/// assert_eq!(resolve("경기도 군포시 번영로 504"), Region::Gyeonggi);
/// assert_eq!(resolve("부산광역시 해운대구"), Region::Busan);
/// assert_eq!(resolve(""), Region::Seoul);
/// ```
#[must_use]
pub fn resolve(address: &str) -> Region {
    detect(address).unwrap_or(DEFAULT_REGION)
}

/// Region named by the address prefix, if any
#[must_use]
pub fn detect(address: &str) -> Option<Region> {
    let address = address.trim_start();
    VARIANTS
        .iter()
        .find(|(variant, _)| address.starts_with(variant))
        .map(|&(_, region)| region)
}
