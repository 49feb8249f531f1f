use crate::core::cache::Cache;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory cache backed by a `HashMap` behind an async mutex
pub struct MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Arc<Mutex<HashMap<K, V>>>,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

impl<K, V> Default for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + Debug + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        let cache = self.inner.lock().await;
        let value = cache.get(key).cloned();
        if value.is_some() {
            debug!("Cache HIT for key: {:?}", key);
        } else {
            debug!("Cache MISS for key: {:?}", key);
        }
        value
    }

    async fn put(&self, key: K, value: V) {
        let mut cache = self.inner.lock().await;
        debug!("Cache PUT for key: {:?}", key);
        cache.insert(key, value);
    }

    async fn remove(&self, key: &K) {
        let mut cache = self.inner.lock().await;
        cache.remove(key);
        debug!("Cache REMOVE for key: {:?}", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_get_put() {
        let cache = MemoryCache::<String, i32>::new();

        assert!(cache.get(&"SENSEX".to_string()).await.is_none());

        cache.put("SENSEX".to_string(), 123).await;
        assert_eq!(cache.get(&"SENSEX".to_string()).await, Some(123));
        assert!(cache.get(&"NIFTY 50".to_string()).await.is_none());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_put_overwrites() {
        let cache = MemoryCache::<String, i32>::new();

        cache.put("Gold".to_string(), 1).await;
        cache.put("Gold".to_string(), 2).await;
        assert_eq!(cache.get(&"Gold".to_string()).await, Some(2));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_remove() {
        let cache = MemoryCache::<String, i32>::new();

        cache.put("DAX".to_string(), 123).await;
        cache.remove(&"DAX".to_string()).await;
        assert!(cache.get(&"DAX".to_string()).await.is_none());
        assert_eq!(cache.len().await, 0);
    }
}
