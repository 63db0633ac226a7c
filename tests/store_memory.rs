mod common;

use std::sync::Arc;

use golinks::prelude::*;

#[tokio::test]
async fn test_memory_store_contract() {
    let store = MemoryLinkStore::new();
    common::assert_store_contract(&store).await;
}

#[tokio::test]
async fn test_put_then_get_is_isolated() {
    let store = MemoryLinkStore::new();
    let link = common::simple_link("docs");

    store.put(link.clone()).await.unwrap();

    // Caller's copy goes away; the stored value must be unaffected.
    drop(link);

    let got = store.get("docs").await.unwrap();
    assert_eq!(got, common::simple_link("docs"));
}

#[tokio::test]
async fn test_list_pagination_walks_the_whole_store() {
    let store = MemoryLinkStore::new();

    for name in ["a", "b", "c", "d", "e"] {
        store.put(common::simple_link(name)).await.unwrap();
    }

    // Page through with a limit of 2, cursoring off the last seen name.
    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let opts = ListOptions {
            start_after: cursor.clone(),
            limit: Some(2),
        };
        let page = common::list_all(&store, opts).await;
        if page.is_empty() {
            break;
        }

        cursor = Some(page.last().unwrap().name().to_string());
        seen.extend(page.into_iter().map(|l| l.name().to_string()));
    }

    assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_resolver_over_memory_store() {
    let store = Arc::new(MemoryLinkStore::new());

    let link = common::make_link(
        "b",
        &[
            ("^(foo)$", "https://b.com/$1"),
            ("^(bar)$", "https://b.com/$1"),
        ],
    );
    store.put(link).await.unwrap();

    let resolver = ResolverService::new(store);

    let resolved = resolver.resolve("/b/bar").await.unwrap().unwrap();
    assert_eq!(resolved.url, "https://b.com/bar");
    assert_eq!(resolved.match_index, 1);
    assert_eq!(resolved.link.name(), "b");

    assert!(resolver.resolve("/b/baz").await.unwrap().is_none());
    assert!(resolver.resolve("/missing/x").await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_opened_from_config() {
    let store = "memory".parse::<StoreConfig>().unwrap().open().unwrap();

    store.put(common::simple_link("a")).await.unwrap();
    assert!(store.get("a").await.is_ok());
    assert!(matches!(
        store.get("b").await.unwrap_err(),
        StoreError::NotFound
    ));
}
