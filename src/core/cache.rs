use async_trait::async_trait;
use std::hash::Hash;

/// Key-value cache shared between render passes.
#[async_trait]
pub trait Cache<K, V>: Send + Sync
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    async fn get(&self, key: &K) -> Option<V>;

    async fn put(&self, key: K, value: V);

    async fn remove(&self, key: &K);
}
