//! Version 1 of the accounts management API model.
//!
//! Organizations, quota reservations and quota costs.

mod enums;
mod organization;
mod quota_cost;
mod related_resource;
mod reserved_resource;

pub use enums::BillingModel;
pub use organization::{
    Organization, OrganizationBuilder, OrganizationList, OrganizationListBuilder,
};
pub use quota_cost::{QuotaCost, QuotaCostBuilder};
pub use related_resource::{RelatedResource, RelatedResourceBuilder};
pub use reserved_resource::{ReservedResource, ReservedResourceBuilder};
