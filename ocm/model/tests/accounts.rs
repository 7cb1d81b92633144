//! Integration tests for the accounts management model.

use chrono::{TimeZone, Utc};
use ocm_api_model::accountsmgmt::v1::{
    BillingModel, Organization, OrganizationList, QuotaCost, RelatedResource, ReservedResource,
};
use ocm_api_model::prelude::*;
use serde_json::json;

#[test]
fn organization_is_a_resource() {
    let organization = Organization::builder()
        .id("1MK6ieFXd0eu1hERdENAPvpbi7x")
        .name("Example Corp")
        .created_at(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        .build()
        .unwrap();

    assert_eq!(organization.kind(), "Organization");
    assert_eq!(OrganizationList::kind_of(None), "OrganizationListNil");
    assert_eq!(
        serde_json::to_value(&organization).unwrap(),
        json!({
            "kind": "Organization",
            "id": "1MK6ieFXd0eu1hERdENAPvpbi7x",
            "created_at": "2020-01-01T00:00:00Z",
            "name": "Example Corp",
        })
    );
}

#[test]
fn reserved_resource_round_trips() {
    let text = r#"{
        "availability_zone_type": "multi",
        "billing_marketplace_account": "123456789012",
        "billing_model": "marketplace-aws",
        "byoc": true,
        "count": 3,
        "created_at": "2024-05-01T10:00:00Z",
        "resource_name": "m5.xlarge",
        "resource_type": "compute.node"
    }"#;

    let reserved: ReservedResource = unmarshal(text).unwrap();
    assert_eq!(reserved.billing_marketplace_account(), "123456789012");
    assert_eq!(reserved.billing_model(), BillingModel::MARKETPLACE_AWS);
    assert!(reserved.byoc());
    assert_eq!(reserved.count(), 3);
    assert_eq!(reserved.get_updated_at(), None);

    let again: ReservedResource =
        unmarshal(&ocm_model_core::codec::to_string(&reserved).unwrap()).unwrap();
    assert_eq!(again, reserved);
}

#[test]
fn quota_cost_related_resources() {
    let cost = QuotaCost::builder()
        .quota_id("compute.node|cpu|byoc|moa|marketplace")
        .allowed(100)
        .consumed(12)
        .related_resources([
            RelatedResource::builder()
                .resource_type("compute.node")
                .product("ROSA")
                .cost(4),
            RelatedResource::builder().resource_type("cluster.aws").cost(0),
        ])
        .build()
        .unwrap();

    assert_eq!(cost.related_resources().len(), 2);
    assert_eq!(cost.related_resources()[0].cost(), 4);

    let copied = QuotaCost::builder().copy(&cost).consumed(13).build().unwrap();
    assert_eq!(copied.consumed(), 13);
    assert_eq!(copied.related_resources(), cost.related_resources());
}
