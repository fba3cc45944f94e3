use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::application::ports::{PortRepository, RepositoryError};
use crate::domain::entities::Port;
use crate::domain::value_objects::PortId;

/// In-memory port repository.
///
/// A single reader/writer lock guards the whole map: `get` calls may run in
/// parallel, `create` and `update` are exclusive. Lookups and writes happen
/// under the same guard, so an existence check can never race its write.
/// Contents live only as long as the process.
#[derive(Default)]
pub struct InMemoryPortRepository {
    ports: RwLock<HashMap<PortId, Port>>,
}

impl InMemoryPortRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ports
    pub fn len(&self) -> usize {
        self.ports.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.read().is_empty()
    }
}

#[async_trait]
impl PortRepository for InMemoryPortRepository {
    async fn create(&self, id: &PortId, port: Port) -> Result<(), RepositoryError> {
        let mut ports = self.ports.write();

        if ports.contains_key(id) {
            return Err(RepositoryError::AlreadyExists(id.to_string()));
        }
        ports.insert(id.clone(), port);
        debug!(port_id = %id, "Port created");

        Ok(())
    }

    async fn get(&self, id: &PortId) -> Result<Port, RepositoryError> {
        self.ports
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &PortId, port: Port) -> Result<(), RepositoryError> {
        let mut ports = self.ports.write();

        match ports.get_mut(id) {
            Some(existing) => {
                *existing = port;
                debug!(port_id = %id, "Port updated");
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn id(s: &str) -> PortId {
        PortId::new(s).unwrap()
    }

    fn ajman() -> Port {
        Port::new("Ajman", "United Arab Emirates", vec![55.5136433, 25.4052165])
            .with_city("Ajman")
            .with_province("Ajman")
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = InMemoryPortRepository::new();

        repo.create(&id("AEAJM"), ajman()).await.unwrap();

        assert_eq!(repo.get(&id("AEAJM")).await.unwrap(), ajman());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_first() {
        let repo = InMemoryPortRepository::new();
        repo.create(&id("AEAJM"), ajman()).await.unwrap();

        let second = Port::new("Other", "Other", vec![0.0, 0.0]);
        let result = repo.create(&id("AEAJM"), second).await;

        assert_eq!(result, Err(RepositoryError::AlreadyExists("AEAJM".to_string())));
        assert_eq!(repo.get(&id("AEAJM")).await.unwrap(), ajman());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryPortRepository::new();

        let result = repo.get(&id("missing")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let repo = InMemoryPortRepository::new();

        let result = repo.update(&id("AEAJM"), ajman()).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert!(repo.is_empty());
        assert!(repo.get(&id("AEAJM")).await.is_err());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let repo = InMemoryPortRepository::new();
        repo.create(&id("AEAJM"), ajman()).await.unwrap();

        // No city/province: the old values must not survive
        let replacement = Port::new("New", "Country", vec![2.0, 2.0]);
        repo.update(&id("AEAJM"), replacement.clone()).await.unwrap();

        let stored = repo.get(&id("AEAJM")).await.unwrap();
        assert_eq!(stored, replacement);
        assert_eq!(stored.city(), "");
        assert_eq!(stored.province(), "");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_are_not_lost() {
        let repo = Arc::new(InMemoryPortRepository::new());

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let port = Port::new(format!("port-{i}"), "country", vec![i as f64, 0.0]);
                    repo.create(&id(&format!("P{i}")), port).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.len(), 200);
        for i in 0..200 {
            let port = repo.get(&id(&format!("P{i}"))).await.unwrap();
            assert_eq!(port.name(), format!("port-{i}"));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_creates_have_one_winner() {
        let repo = Arc::new(InMemoryPortRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let port = Port::new(format!("writer-{i}"), "country", vec![0.0, 0.0]);
                    repo.create(&id("SHARED"), port).await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }
}
