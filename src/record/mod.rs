//! The extracted record type

use serde::{Deserialize, Serialize};

/// One entity extracted from a detail page.
///
/// Every field is an opaque display string. Extraction is best-effort: a
/// selector that matches nothing leaves its field empty rather than
/// failing, and no field is parsed or validated further. Records are not
/// modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub year: String,
    pub title: String,
    pub rating: String,
    pub summary: String,
    pub duration: String,
    pub genre: String,
}
