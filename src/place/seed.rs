//! Built-in sample directory
//!
//! Seven entries around the capital region plus one in Busan, used when no
//! upload has been imported and as the fixture set for tests.

use super::{Category, Place, PlaceRecord, PlaceValidationError};
use crate::geo::Coordinate;
use crate::region::Region;

/// Seed records in insertion order (ids `1` through `7`)
#[must_use]
pub fn seed_records() -> Vec<PlaceRecord> {
    vec![
        PlaceRecord::new(
            "1",
            "강남 건설자원",
            "서울 강남구 역삼동",
            Category::ResourceAssociation,
            Coordinate::new(37.4999, 127.0366),
        )
        .region(Region::Seoul)
        .representative("홍길동")
        .tel("02-123-4567"),
        PlaceRecord::new(
            "2",
            "삼성 레미콘",
            "서울 강남구 삼성동",
            Category::ReadyMixPlant,
            Coordinate::new(37.5125, 127.0587),
        )
        .region(Region::Seoul)
        .representative("김철수")
        .tel("02-234-5678"),
        PlaceRecord::new(
            "3",
            "논현 골재상사",
            "서울 강남구 논현동",
            Category::AggregateProducer,
            Coordinate::new(37.5080, 127.0265),
        )
        .region(Region::Seoul)
        .representative("이영희")
        .tel("02-345-6789")
        .aggregate_type("모래"),
        PlaceRecord::new(
            "4",
            "경기 건설자원",
            "경기도 성남시 분당구",
            Category::ResourceAssociation,
            Coordinate::new(37.3500, 127.1086),
        )
        .region(Region::Gyeonggi)
        .representative("박지성")
        .tel("031-123-4567"),
        PlaceRecord::new(
            "5",
            "인천 레미콘",
            "인천광역시 연수구",
            Category::ReadyMixPlant,
            Coordinate::new(37.4056, 126.6776),
        )
        .region(Region::Incheon)
        .representative("최민수")
        .tel("032-234-5678"),
        PlaceRecord::new(
            "6",
            "부산 골재상사",
            "부산광역시 해운대구",
            Category::AggregateProducer,
            Coordinate::new(35.1631, 129.1639),
        )
        .region(Region::Busan)
        .representative("이영자")
        .tel("051-345-6789")
        .aggregate_type("자갈"),
        PlaceRecord::new(
            "7",
            "산본역",
            "경기도 군포시 번영로 504",
            Category::ReadyMixPlant,
            Coordinate::new(37.358_019, 126.932_969),
        )
        .region(Region::Gyeonggi)
        .representative("이영자")
        .tel("0507-1370-9844"),
    ]
}

/// Validated seed places
///
/// # Errors
///
/// Returns `PlaceValidationError` if a seed record is malformed.
pub fn seed_places() -> Result<Vec<Place>, PlaceValidationError> {
    seed_records().into_iter().map(PlaceRecord::build).collect()
}
