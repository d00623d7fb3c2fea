// src/controllers/osc.rs
// OSC announcement channel: tells other viewers about route changes and
// listens for theirs.

use nannou_osc as osc;
use std::error::Error;

/// A route change announced over the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    Saved {
        route_id: i32,
        name: String,
        board_id: i32,
    },
    Deleted {
        route_id: i32,
        name: String,
    },
}

pub struct RouteAnnouncer {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl RouteAnnouncer {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    pub fn send_route_saved(&self, route_id: u64, name: &str, board_id: u64) {
        let addr = "/route/saved".to_string();
        let args = vec![
            osc::Type::Int(route_id as i32),
            osc::Type::String(name.to_string()),
            osc::Type::Int(board_id as i32),
        ];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_route_deleted(&self, route_id: u64, name: &str) {
        let addr = "/route/deleted".to_string();
        let args = vec![
            osc::Type::Int(route_id as i32),
            osc::Type::String(name.to_string()),
        ];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }
}

pub struct RouteListener {
    receiver: osc::Receiver,
}

impl RouteListener {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        Ok(Self { receiver })
    }

    /// Drains pending packets into route events; unknown addresses and
    /// malformed argument lists are ignored.
    pub fn poll(&mut self) -> Vec<RouteEvent> {
        let mut events = Vec::new();
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/route/saved" => {
                        if let [osc::Type::Int(route_id), osc::Type::String(name), osc::Type::Int(board_id)] =
                            &message.args[..]
                        {
                            events.push(RouteEvent::Saved {
                                route_id: *route_id,
                                name: name.clone(),
                                board_id: *board_id,
                            });
                        }
                    }
                    "/route/deleted" => {
                        if let [osc::Type::Int(route_id), osc::Type::String(name)] =
                            &message.args[..]
                        {
                            events.push(RouteEvent::Deleted {
                                route_id: *route_id,
                                name: name.clone(),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
        events
    }
}
