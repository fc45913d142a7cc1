//! The process-wide store must keep working after the runtime that created it is gone.

use kitchen_orders::store;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[test]
fn test_global_store_survives_runtime_shutdown() {
    let first = Runtime::new().unwrap();
    let created = first.block_on(async {
        let store = store::global().await.unwrap();
        store.add("Pizza").await.unwrap();
        store
    });
    drop(first);

    let second = Runtime::new().unwrap();
    let (reacquired, orders) = second.block_on(async {
        let store = store::global().await.unwrap();
        store.add("Pasta").await.unwrap();
        let orders = store.list().await.unwrap();
        (store, orders)
    });

    assert!(Arc::ptr_eq(&created, &reacquired));
    assert_eq!(orders, vec!["Pizza", "Pasta"]);
}
