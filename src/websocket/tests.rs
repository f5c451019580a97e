#[cfg(test)]
mod websocket_tests {
    use std::sync::Arc;
    use tokio::sync::mpsc::unbounded_channel;
    use crate::roles::enums::role_kind::RoleKind;
    use crate::websocket::structs::channel_registry::{ChannelMessage, ChannelRegistry};

    #[test]
    fn test_registry_new_is_empty() {
        let registry = ChannelRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_insert_and_remove() {
        let registry = ChannelRegistry::new();
        let (sender, _receiver) = unbounded_channel();
        let id = registry.insert(RoleKind::Cloud, sender);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.count(RoleKind::Cloud), 1);
        assert!(registry.remove(&id));
        assert!(!registry.remove(&id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_broadcast_reaches_both_roles() {
        let registry = ChannelRegistry::new();
        let (cloud_sender, mut cloud_receiver) = unbounded_channel();
        let (node_sender, mut node_receiver) = unbounded_channel();
        registry.insert(RoleKind::Cloud, cloud_sender);
        registry.insert(RoleKind::Node, node_sender);

        assert_eq!(registry.broadcast("hello"), 2);
        assert_eq!(cloud_receiver.try_recv().unwrap(), ChannelMessage("hello".to_string()));
        assert_eq!(node_receiver.try_recv().unwrap(), ChannelMessage("hello".to_string()));
    }

    #[test]
    fn test_broadcast_prunes_closed_channels() {
        let registry = ChannelRegistry::new();
        let (open_sender, _open_receiver) = unbounded_channel();
        let (closed_sender, closed_receiver) = unbounded_channel();
        registry.insert(RoleKind::Cloud, open_sender);
        registry.insert(RoleKind::Node, closed_sender);
        drop(closed_receiver);

        assert_eq!(registry.broadcast("ping"), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.count(RoleKind::Node), 0);
        assert_eq!(registry.count(RoleKind::Cloud), 1);
    }

    #[test]
    fn test_concurrent_inserts() {
        let registry = Arc::new(ChannelRegistry::new());
        let mut receivers = Vec::new();
        let mut threads = Vec::new();
        for index in 0..8 {
            let (sender, receiver) = unbounded_channel();
            receivers.push(receiver);
            let registry = registry.clone();
            let role = if index % 2 == 0 { RoleKind::Cloud } else { RoleKind::Node };
            threads.push(std::thread::spawn(move || {
                registry.insert(role, sender);
            }));
        }
        for thread in threads {
            thread.join().unwrap();
        }
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.count(RoleKind::Cloud), 4);
        assert_eq!(registry.broadcast("all"), 8);
    }
}
