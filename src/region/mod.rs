//! Administrative regions and address-to-region resolution
//!
//! Places carry one of seventeen Korean administrative regions. Filters
//! additionally accept "all regions" through [`RegionFilter::All`], which a
//! place itself can never hold.

mod resolver;

pub use resolver::{detect, resolve};

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string names no known region
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

/// A first-level administrative region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    Seoul,
    Incheon,
    Gyeonggi,
    Gangwon,
    Busan,
    Ulsan,
    Gyeongnam,
    Daegu,
    Gyeongbuk,
    Daejeon,
    Sejong,
    Chungnam,
    Chungbuk,
    Gwangju,
    Jeonnam,
    Jeonbuk,
    Jeju,
}

impl Region {
    /// Every region in display order
    pub const ALL: [Self; 17] = [
        Self::Seoul,
        Self::Incheon,
        Self::Gyeonggi,
        Self::Gangwon,
        Self::Busan,
        Self::Ulsan,
        Self::Gyeongnam,
        Self::Daegu,
        Self::Gyeongbuk,
        Self::Daejeon,
        Self::Sejong,
        Self::Chungnam,
        Self::Chungbuk,
        Self::Gwangju,
        Self::Jeonnam,
        Self::Jeonbuk,
        Self::Jeju,
    ];

    /// Short Korean label, e.g. `서울`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seoul => "서울",
            Self::Incheon => "인천",
            Self::Gyeonggi => "경기",
            Self::Gangwon => "강원",
            Self::Busan => "부산",
            Self::Ulsan => "울산",
            Self::Gyeongnam => "경남",
            Self::Daegu => "대구",
            Self::Gyeongbuk => "경북",
            Self::Daejeon => "대전",
            Self::Sejong => "세종",
            Self::Chungnam => "충남",
            Self::Chungbuk => "충북",
            Self::Gwangju => "광주",
            Self::Jeonnam => "전남",
            Self::Jeonbuk => "전북",
            Self::Jeju => "제주",
        }
    }

    /// Representative coordinate of the region's administrative center
    #[must_use]
    pub const fn center(self) -> Coordinate {
        let (lat, lng) = match self {
            Self::Seoul => (37.5665, 126.9780),
            Self::Incheon => (37.4563, 126.7052),
            Self::Gyeonggi => (37.4138, 127.5183),
            Self::Gangwon => (37.8228, 128.1555),
            Self::Busan => (35.1796, 129.0756),
            Self::Ulsan => (35.5384, 129.3114),
            Self::Gyeongnam => (35.4606, 128.2132),
            Self::Daegu => (35.8714, 128.6014),
            Self::Gyeongbuk => (36.4919, 128.8889),
            Self::Daejeon => (36.3504, 127.3845),
            Self::Sejong => (36.4801, 127.2882),
            Self::Chungnam => (36.6588, 126.6728),
            Self::Chungbuk => (36.6357, 127.4912),
            Self::Gwangju => (35.1595, 126.8526),
            Self::Jeonnam => (34.8679, 126.9910),
            Self::Jeonbuk => (35.8242, 127.1480),
            Self::Jeju => (33.4890, 126.4983),
        };
        Coordinate::new(lat, lng)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label() == trimmed || format!("{r:?}").eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRegion(trimmed.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = UnknownRegion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.label().to_string()
    }
}

/// Region restriction used by place filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RegionFilter {
    /// No restriction (`전체`)
    #[default]
    All,
    /// Only places in this region
    Only(Region),
}

impl RegionFilter {
    /// Label for the "all regions" choice
    pub const ALL_LABEL: &'static str = "전체";

    #[must_use]
    pub fn matches(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(r) => r == region,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_LABEL),
            Self::Only(r) => r.fmt(f),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == Self::ALL_LABEL || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        Self::Only(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.label().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn test_from_str_accepts_english_names() {
        assert_eq!("busan".parse::<Region>(), Ok(Region::Busan));
        assert_eq!("Gyeonggi".parse::<Region>(), Ok(Region::Gyeonggi));
    }

    #[test]
    fn test_from_str_rejects_sentinel() {
        assert_eq!(
            "전체".parse::<Region>(),
            Err(UnknownRegion("전체".to_string()))
        );
    }

    #[test]
    fn test_region_filter_parsing() {
        assert_eq!("전체".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert_eq!("all".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert_eq!(
            "부산".parse::<RegionFilter>(),
            Ok(RegionFilter::Only(Region::Busan))
        );
        assert!("atlantis".parse::<RegionFilter>().is_err());
    }

    #[test]
    fn test_region_filter_matches() {
        assert!(RegionFilter::All.matches(Region::Jeju));
        assert!(RegionFilter::Only(Region::Jeju).matches(Region::Jeju));
        assert!(!RegionFilter::Only(Region::Seoul).matches(Region::Jeju));
    }

    #[test]
    fn test_region_serializes_as_label() {
        let json = serde_json::to_string(&Region::Daegu).unwrap();
        assert_eq!(json, "\"대구\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::Daegu);
    }

    #[test]
    fn test_every_center_is_valid() {
        for region in Region::ALL {
            assert!(region.center().validate().is_ok(), "{region}");
        }
    }
}
