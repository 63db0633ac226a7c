#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use futures::TryStreamExt;
use golinks::prelude::*;

pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

pub fn make_link(name: &str, rules: &[(&str, &str)]) -> Link {
    let matches = rules
        .iter()
        .map(|&(pattern, template)| Match::new(pattern, template).unwrap())
        .collect();
    Link::new(name, matches, test_time()).unwrap()
}

pub fn simple_link(name: &str) -> Link {
    let pattern = format!("^/{name}/(.*)$");
    let template = format!("https://{name}.com/$1");
    make_link(name, &[(pattern.as_str(), template.as_str())])
}

pub async fn list_all(store: &dyn LinkStore, opts: ListOptions) -> Vec<Link> {
    store.list(opts).await.try_collect().await.unwrap()
}

/// Conformance suite every [`LinkStore`] backend must pass, run against an
/// empty store. Mirrors the contract: put/get isolation, `NotFound` on absent
/// names, and name-ordered listing.
pub async fn assert_store_contract(store: &dyn LinkStore) {
    // Get and Put
    let a = simple_link("a");

    assert!(matches!(
        store.get("a").await.unwrap_err(),
        StoreError::NotFound
    ));

    store.put(a.clone()).await.unwrap();

    let got = store.get("a").await.unwrap();
    assert_eq!(got, a);
    assert_ne!(
        got.name().as_ptr(),
        a.name().as_ptr(),
        "get must return an independent copy"
    );

    // Delete
    store.put(simple_link("victim")).await.unwrap();
    store.delete("victim").await.unwrap();
    assert!(matches!(
        store.get("victim").await.unwrap_err(),
        StoreError::NotFound
    ));
    assert!(matches!(
        store.delete("victim").await.unwrap_err(),
        StoreError::NotFound
    ));

    // List: insert out of order, expect ascending names
    store.put(simple_link("b")).await.unwrap();
    store.put(simple_link("c")).await.unwrap();

    let all = list_all(store, ListOptions::default()).await;
    let names: Vec<&str> = all.iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(all[0], a);

    store.close().await.unwrap();
}
