//! Integration tests for list-valued attributes.

use ocm_api_model::clustersmgmt::v1::{
    Cluster, HtpasswdIdentityProvider, HtpasswdUser, HtpasswdUserListBuilder, IdentityProvider,
    IdentityProviderListBuilder, Ingress, IngressList, MachinePool, MachinePoolList,
    MachinePoolListBuilder,
};
use ocm_api_model::prelude::*;
use ocm_model_core::codec::to_string;

fn pools(ids: &[&str]) -> MachinePoolList {
    ids.iter()
        .fold(MachinePoolListBuilder::new(), |list, id| {
            list.push(MachinePool::builder().id(*id))
        })
        .build()
        .unwrap()
}

fn ids(list: &MachinePoolList) -> Vec<&str> {
    list.iter().map(MachinePool::id).collect()
}

#[test]
fn list_attribute_wire_shape() {
    let cluster = Cluster::builder()
        .id("1")
        .machine_pools(
            MachinePoolListBuilder::new()
                .href("/api/clusters_mgmt/v1/clusters/1/machine_pools")
                .push(MachinePool::builder().id("worker")),
        )
        .build()
        .unwrap();

    assert_eq!(
        to_string(&cluster).unwrap(),
        concat!(
            r#"{"kind":"Cluster","id":"1","machine_pools":{"kind":"MachinePoolList","#,
            r#""href":"/api/clusters_mgmt/v1/clusters/1/machine_pools","#,
            r#""items":[{"kind":"MachinePool","id":"worker"}]}}"#
        )
    );
}

#[test]
fn link_list_without_items_omits_them() {
    let list = MachinePoolListBuilder::new()
        .link(true)
        .href("/api/clusters_mgmt/v1/clusters/1/machine_pools")
        .build()
        .unwrap();

    assert!(list.link());
    assert_eq!(list.kind(), "MachinePoolListLink");
    assert_eq!(
        to_string(&list).unwrap(),
        r#"{"kind":"MachinePoolListLink","href":"/api/clusters_mgmt/v1/clusters/1/machine_pools"}"#
    );
}

#[test]
fn empty_list_keeps_its_items_key() {
    let list = MachinePoolListBuilder::new().build().unwrap();
    assert_eq!(to_string(&list).unwrap(), r#"{"kind":"MachinePoolList","items":[]}"#);
}

#[test]
fn paging_keys_are_ignored_when_decoding() {
    let cluster: Cluster = unmarshal(
        r#"{
            "kind": "Cluster",
            "ingresses": {
                "kind": "IngressList",
                "href": "/api/clusters_mgmt/v1/clusters/1/ingresses",
                "page": 1,
                "size": 2,
                "total": 2,
                "items": [
                    {"kind": "Ingress", "id": "a", "default": true, "route_selectors": {"b": "2", "a": "1"}},
                    {"kind": "IngressLink", "id": "b", "href": "/api/clusters_mgmt/v1/clusters/1/ingresses/b"}
                ]
            }
        }"#,
    )
    .unwrap();

    let ingresses = cluster.ingresses().unwrap();
    assert_eq!(ingresses.len(), 2);
    assert_eq!(ingresses.href(), "/api/clusters_mgmt/v1/clusters/1/ingresses");
    assert!(!ingresses.link());

    let first = ingresses.get(0).unwrap();
    assert!(first.is_default());
    assert_eq!(
        first.route_selectors().keys().collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert!(ingresses.get(1).unwrap().link());
}

#[test]
fn link_list_decodes_without_items() {
    let cluster: Cluster = unmarshal(
        r#"{"node_pools":{"kind":"NodePoolListLink","href":"/api/clusters_mgmt/v1/clusters/1/node_pools"}}"#,
    )
    .unwrap();

    let node_pools = cluster.node_pools().unwrap();
    assert!(node_pools.link());
    assert!(node_pools.is_empty());
    assert_eq!(node_pools.kind(), "NodePoolListLink");
}

#[test]
fn get_outside_the_list_is_none() {
    let list = pools(&["a", "b"]);
    assert_eq!(list.get(1).map(MachinePool::id), Some("b"));
    assert!(list.get(2).is_none());
    assert!(list.get(usize::MAX).is_none());
}

#[test]
fn slice_is_independent_of_the_list() {
    let list = pools(&["a", "b"]);
    let mut copy = list.slice();
    copy.truncate(1);
    copy.push(MachinePool::builder().id("z").build().unwrap());

    assert_eq!(ids(&list), vec!["a", "b"]);
    assert_eq!(copy.iter().map(MachinePool::id).collect::<Vec<_>>(), vec!["a", "z"]);
}

#[test]
fn each_and_range_visit_in_order_until_stopped() {
    let list = pools(&["a", "b", "c"]);

    let mut all = Vec::new();
    list.each(|pool| {
        all.push(pool.id().to_string());
        true
    });
    assert_eq!(all, vec!["a", "b", "c"]);

    let mut visited = Vec::new();
    list.range(|index, pool| {
        visited.push((index, pool.id().to_string()));
        index < 1
    });
    assert_eq!(visited, vec![(0, "a".to_string()), (1, "b".to_string())]);
}

#[test]
fn missing_list_attribute_behaves_as_empty() {
    let cluster = Cluster::builder().id("1").build().unwrap();
    let ingresses = cluster.ingresses();

    assert_eq!(ingresses.len(), 0);
    assert!(ingresses.is_empty());
    assert!(ingresses.get(0).is_none());
    assert!(ingresses.slice().is_empty());

    let mut called = false;
    ingresses.each(|_| {
        called = true;
        true
    });
    ingresses.range(|_, _| {
        called = true;
        true
    });
    assert!(!called);

    assert_eq!(IngressList::kind_of(ingresses), "IngressListNil");
    assert_eq!(Ingress::kind_of(ingresses.get(0)), "IngressNil");
}

#[test]
fn nested_lists_build_and_copy() {
    let provider = IdentityProvider::builder()
        .name("htpasswd")
        .htpasswd(HtpasswdIdentityProvider::builder().users(
            HtpasswdUserListBuilder::new()
                .push(HtpasswdUser::builder().username("alice").password("s3cret"))
                .push(HtpasswdUser::builder().username("bob").hashed_password("$2y$05$abc")),
        ))
        .build()
        .unwrap();

    let users = provider
        .htpasswd()
        .and_then(HtpasswdIdentityProvider::users)
        .unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users.get(1).map(HtpasswdUser::hashed_password), Some("$2y$05$abc"));

    let cluster = Cluster::builder()
        .identity_providers(IdentityProviderListBuilder::new().push(
            IdentityProvider::builder().copy(&provider),
        ))
        .build()
        .unwrap();
    assert_eq!(cluster.identity_providers().get(0), Some(&provider));
}
