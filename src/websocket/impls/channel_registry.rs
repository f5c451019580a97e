use log::debug;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;
use crate::roles::enums::role_kind::RoleKind;
use crate::websocket::structs::channel_registry::{Channel, ChannelMessage, ChannelRegistry};

impl ChannelRegistry {
    pub fn new() -> ChannelRegistry {
        ChannelRegistry::default()
    }

    pub fn insert(&self, role: RoleKind, sender: UnboundedSender<ChannelMessage>) -> Uuid {
        let id = Uuid::new_v4();
        self.channels.write().insert(id, Channel { role, sender });
        debug!("[CHANNELS] Registered {} channel {}", role, id);
        id
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.channels.write().remove(id).is_some();
        if removed {
            debug!("[CHANNELS] Removed channel {}", id);
        }
        removed
    }

    /// Queues `message` on every channel and returns how many accepted it.
    /// Channels whose receiver is gone are dropped in the same critical section.
    pub fn broadcast(&self, message: &str) -> usize {
        let mut channels = self.channels.write();
        channels.retain(|id, channel| {
            let alive = channel.sender.send(ChannelMessage(message.to_string())).is_ok();
            if !alive {
                debug!("[CHANNELS] Pruned closed channel {}", id);
            }
            alive
        });
        channels.len()
    }

    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }

    pub fn count(&self, role: RoleKind) -> usize {
        self.channels.read().values().filter(|channel| channel.role == role).count()
    }
}
