use std::sync::Arc;
use actix::prelude::*;
use actix_web_actors::ws;
use futures_util::stream;
use log::{debug, error, warn};
use tokio::sync::mpsc::unbounded_channel;
use crate::roles::enums::role_kind::RoleKind;
use crate::websocket::structs::channel_connection::ChannelConnection;
use crate::websocket::structs::channel_registry::{ChannelMessage, ChannelRegistry};

impl ChannelConnection {
    pub fn new(role: RoleKind, registry: Arc<ChannelRegistry>) -> Self {
        Self {
            id: None,
            role,
            registry,
        }
    }
}

impl Actor for ChannelConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let (sender, receiver) = unbounded_channel::<ChannelMessage>();
        let id = self.registry.insert(self.role, sender);
        self.id = Some(id);

        ctx.add_stream(stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|message| (message, receiver))
        }));
        debug!("[WEBSOCKET {}] Channel {} opened", self.role, id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(id) = self.id.take() {
            self.registry.remove(&id);
            debug!("[WEBSOCKET {}] Channel {} closed", self.role, id);
        }
    }
}

impl StreamHandler<ChannelMessage> for ChannelConnection {
    fn handle(&mut self, message: ChannelMessage, ctx: &mut Self::Context) {
        ctx.text(message.0);
    }

    fn finished(&mut self, _ctx: &mut Self::Context) {}
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ChannelConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(text)) => {
                // Text frames are relayed to every channel, the sender included.
                self.registry.broadcast(&text);
            }
            Ok(ws::Message::Binary(_)) => {
                warn!("[WEBSOCKET {}] Unexpected binary message received", self.role);
            }
            Ok(ws::Message::Close(reason)) => {
                debug!("[WEBSOCKET {}] Close received: {:?}", self.role, reason);
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                error!("[WEBSOCKET {}] WebSocket error: {}", self.role, e);
                ctx.stop();
            }
            _ => {}
        }
    }
}
