//! Header recognition

use super::IngestError;
use csv::StringRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Trailing annotations such as `전화번호(대표)` or `name [required]`
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[(\[][^)\]]*[)\]]\s*$").expect("static pattern is valid"));

const NAME: &[&str] = &["업체명", "상호", "공장명", "회사명", "name"];
const ADDRESS: &[&str] = &["주소", "소재지", "address"];
const REPRESENTATIVE: &[&str] = &["대표자", "대표", "representative"];
const TEL: &[&str] = &["전화번호", "연락처", "전화", "tel", "phone"];
const AGGREGATE_TYPE: &[&str] = &["골재원", "골재종류", "aggregate_type"];

/// Canonical form of a header cell
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    ANNOTATION.replace(trimmed, "").trim().to_ascii_lowercase()
}

/// Column positions for the fields ingestion understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    pub name: usize,
    pub address: usize,
    pub representative: Option<usize>,
    pub tel: Option<usize>,
    pub aggregate_type: Option<usize>,
}

impl ColumnMap {
    /// Locate columns in `headers`
    ///
    /// `aggregate_type_field` replaces the built-in aggregate-type synonyms
    /// when given.
    pub(crate) fn from_headers(
        headers: &StringRecord,
        aggregate_type_field: Option<&str>,
    ) -> Result<Self, IngestError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        if normalized.iter().all(String::is_empty) {
            return Err(IngestError::MissingHeader);
        }

        let find = |names: &[&str]| {
            normalized
                .iter()
                .position(|h| names.iter().any(|n| h == &n.to_ascii_lowercase()))
        };

        let aggregate_type = match aggregate_type_field {
            Some(field) => find(&[normalize_header(field).as_str()]),
            None => find(AGGREGATE_TYPE),
        };

        Ok(Self {
            name: find(NAME).ok_or(IngestError::MissingColumn("name"))?,
            address: find(ADDRESS).ok_or(IngestError::MissingColumn("address"))?,
            representative: find(REPRESENTATIVE),
            tel: find(TEL),
            aggregate_type,
        })
    }
}
