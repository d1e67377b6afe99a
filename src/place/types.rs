//! Place and category types
//!
//! A [`Place`] can only be obtained from a [`PlaceRecord`] through
//! validation, so every place held by the crate has a non-empty id, name and
//! address and finite, in-range coordinates.

use super::error::PlaceValidationError;
use crate::geo::Coordinate;
use crate::region::{self, Region};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business category of a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// 건설자원협회
    ResourceAssociation,
    /// 레미콘공장
    ReadyMixPlant,
    /// 골재생산업체
    AggregateProducer,
}

impl Category {
    pub const ALL: [Self; 3] = [
        Self::ResourceAssociation,
        Self::ReadyMixPlant,
        Self::AggregateProducer,
    ];

    /// Korean display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ResourceAssociation => "건설자원협회",
            Self::ReadyMixPlant => "레미콘공장",
            Self::AggregateProducer => "골재생산업체",
        }
    }

    /// ASCII slug, used for generated ids and CLI arguments
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ResourceAssociation => "assoc",
            Self::ReadyMixPlant => "remicon",
            Self::AggregateProducer => "aggregate",
        }
    }

    /// Marker color associated with the category, as RGB
    #[must_use]
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::ResourceAssociation => (0x4C, 0xAF, 0x50),
            Self::ReadyMixPlant => (0x21, 0x96, 0xF3),
            Self::AggregateProducer => (0xFF, 0xC1, 0x07),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PlaceValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == trimmed || c.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PlaceValidationError::UnknownCategory(trimmed.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = PlaceValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// Unvalidated place data, as produced by seed tables, ingestion or JSON
///
/// When `region` is `None` it is resolved from the address on conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub region: Option<Region>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_type: Option<String>,
}

impl PlaceRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        category: Category,
        coord: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            region: None,
            category,
            representative: None,
            tel: None,
            lat: coord.lat,
            lng: coord.lng,
            aggregate_type: None,
        }
    }

    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    #[must_use]
    pub fn representative(mut self, representative: impl Into<String>) -> Self {
        self.representative = Some(representative.into());
        self
    }

    #[must_use]
    pub fn tel(mut self, tel: impl Into<String>) -> Self {
        self.tel = Some(tel.into());
        self
    }

    #[must_use]
    pub fn aggregate_type(mut self, aggregate_type: impl Into<String>) -> Self {
        self.aggregate_type = Some(aggregate_type.into());
        self
    }

    /// Validate into a [`Place`]
    ///
    /// # Errors
    ///
    /// Returns `PlaceValidationError` if id, name or address is blank, or if
    /// the coordinates are not finite and in range.
    pub fn build(self) -> Result<Place, PlaceValidationError> {
        Place::try_from(self)
    }
}

/// A validated business entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaceRecord", into = "PlaceRecord")]
pub struct Place {
    id: String,
    name: String,
    address: String,
    region: Region,
    category: Category,
    representative: Option<String>,
    tel: Option<String>,
    coord: Coordinate,
    aggregate_type: Option<String>,
}

impl Place {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn representative(&self) -> Option<&str> {
        self.representative.as_deref()
    }

    #[must_use]
    pub fn tel(&self) -> Option<&str> {
        self.tel.as_deref()
    }

    #[must_use]
    pub const fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Aggregate kind (e.g. 모래, 자갈); only ever set for aggregate producers
    #[must_use]
    pub fn aggregate_type(&self) -> Option<&str> {
        self.aggregate_type.as_deref()
    }
}

fn non_blank(id: &str, field: &'static str, value: String) -> Result<String, PlaceValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlaceValidationError::EmptyField {
            id: id.to_string(),
            field,
        });
    }
    Ok(trimmed.to_string())
}

fn non_blank_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<PlaceRecord> for Place {
    type Error = PlaceValidationError;

    fn try_from(record: PlaceRecord) -> Result<Self, Self::Error> {
        let id = non_blank("", "id", record.id)?;
        let name = non_blank(&id, "name", record.name)?;
        let address = non_blank(&id, "address", record.address)?;

        let coord = Coordinate::checked(record.lat, record.lng).map_err(|source| {
            PlaceValidationError::InvalidCoordinate {
                id: id.clone(),
                source,
            }
        })?;

        let region = record.region.unwrap_or_else(|| region::resolve(&address));
        let aggregate_type = if record.category == Category::AggregateProducer {
            non_blank_opt(record.aggregate_type)
        } else {
            None
        };

        Ok(Self {
            id,
            name,
            address,
            region,
            category: record.category,
            representative: non_blank_opt(record.representative),
            tel: non_blank_opt(record.tel),
            coord,
            aggregate_type,
        })
    }
}

impl From<Place> for PlaceRecord {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            name: place.name,
            address: place.address,
            region: Some(place.region),
            category: place.category,
            representative: place.representative,
            tel: place.tel,
            lat: place.coord.lat,
            lng: place.coord.lng,
            aggregate_type: place.aggregate_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoError;

    fn record() -> PlaceRecord {
        PlaceRecord::new(
            "1",
            "강남 건설자원",
            "서울 강남구 역삼동",
            Category::ResourceAssociation,
            Coordinate::new(37.4999, 127.0366),
        )
    }

    #[test]
    fn test_build_resolves_region_from_address() {
        let place = record().build().unwrap();
        assert_eq!(place.region(), Region::Seoul);
        assert_eq!(place.coord(), Coordinate::new(37.4999, 127.0366));
    }

    #[test]
    fn test_explicit_region_wins() {
        let place = record().region(Region::Gyeonggi).build().unwrap();
        assert_eq!(place.region(), Region::Gyeonggi);
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut r = record();
        r.name = "  ".into();
        assert_eq!(
            r.build(),
            Err(PlaceValidationError::EmptyField {
                id: "1".into(),
                field: "name"
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_coordinates() {
        let mut r = record();
        r.lng = f64::INFINITY;
        assert!(matches!(
            r.build(),
            Err(PlaceValidationError::InvalidCoordinate {
                source: GeoError::NotFinite { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_aggregate_type_dropped_for_other_categories() {
        let place = record().aggregate_type("모래").build().unwrap();
        assert_eq!(place.aggregate_type(), None);

        let mut r = record().aggregate_type("모래");
        r.category = Category::AggregateProducer;
        assert_eq!(r.build().unwrap().aggregate_type(), Some("모래"));
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let place = record().representative(" ").tel("").build().unwrap();
        assert_eq!(place.representative(), None);
        assert_eq!(place.tel(), None);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("레미콘공장".parse::<Category>(), Ok(Category::ReadyMixPlant));
        assert_eq!("aggregate".parse::<Category>(), Ok(Category::AggregateProducer));
        assert_eq!("ASSOC".parse::<Category>(), Ok(Category::ResourceAssociation));
        assert!("bakery".parse::<Category>().is_err());
    }

    #[test]
    fn test_json_deserialization_validates() {
        let json = r#"{"id":"9","name":"x","address":"부산 해운대구","category":"골재생산업체","lat":35.1,"lng":129.1,"aggregateType":"자갈"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.region(), Region::Busan);
        assert_eq!(place.aggregate_type(), Some("자갈"));

        let bad = r#"{"id":"9","name":"x","address":"부산","category":"골재생산업체","lat":135.1,"lng":129.1}"#;
        assert!(serde_json::from_str::<Place>(bad).is_err());
    }
}
