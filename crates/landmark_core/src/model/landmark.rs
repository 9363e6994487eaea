//! Landmark domain record.
//!
//! # Responsibility
//! - Mirror one row of the `landmarks` table.
//!
//! # Invariants
//! - `id` is unique per stored landmark.
//! - Records are read-only snapshots created per query call.

use serde::{Deserialize, Serialize};

/// Primary key of a row in `landmarks`.
pub type LandmarkId = i64;

/// One point-of-interest row from `landmarks`.
///
/// Text columns are nullable at the storage layer and stay optional here.
/// `approval_status` and `order_num` read a stored NULL as `false` and `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    /// Category tag such as `Park` or `Museum`.
    pub venue_type: Option<String>,
    /// Moderation flag: the landmark was vetted for display.
    pub approval_status: bool,
    pub image_url: Option<String>,
    /// External mapping-provider place identifier.
    pub place_id: Option<String>,
    /// Display ordering hint.
    pub order_num: i32,
}
