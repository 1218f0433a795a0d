mod common;
mod documents;
mod eligibility;
