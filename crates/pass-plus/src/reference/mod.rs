//! Static reference data the eligibility rules query through lookup predicates.

mod regions;
mod schools;

pub use regions::{
    is_known_region, is_target_region, region_by_code, Region, DEFAULT_TARGET_REGION, REGIONS,
};
pub use schools::{is_approved_school, school_by_id, School, APPROVED_SCHOOLS, OTHER_SCHOOL};
