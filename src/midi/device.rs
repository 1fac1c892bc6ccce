// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! System MIDI output via midir.
//!
//! A [`DeviceOutput`] starts unbound, becomes bound when it connects to a
//! port, and is closed for good once [`DeviceOutput::close`] is called.
//! Sending is only possible while bound.

use midir::MidiOutputConnection;
use tracing::{info, warn};

use super::MidiOutput;
use crate::error::MidiError;

const CLIENT_NAME: &str = "tonekit";
const PORT_NAME: &str = "tonekit output";

/// An output port the system reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    pub index: usize,
    pub name: String,
}

enum State {
    Unbound,
    Bound {
        name: String,
        connection: MidiOutputConnection,
    },
    Closed,
}

/// Connection to a system MIDI output port.
pub struct DeviceOutput {
    state: State,
}

fn client() -> Result<midir::MidiOutput, MidiError> {
    midir::MidiOutput::new(CLIENT_NAME)
        .map_err(|e| MidiError::System(format!("Failed to create MIDI client: {}", e)))
}

impl DeviceOutput {
    /// An output that isn't connected to anything. Every send fails with
    /// [`MidiError::Unconnected`].
    pub fn unbound() -> Self {
        Self {
            state: State::Unbound,
        }
    }

    /// List all available MIDI output ports
    pub fn discover() -> Result<Vec<PortInfo>, MidiError> {
        let client = client()?;
        let ports = client
            .ports()
            .iter()
            .enumerate()
            .map(|(index, port)| PortInfo {
                index,
                name: client
                    .port_name(port)
                    .unwrap_or_else(|_| format!("Unknown {}", index)),
            })
            .collect();
        Ok(ports)
    }

    /// Number of available output ports, zero if the MIDI system is unavailable
    pub fn count() -> usize {
        match client() {
            Ok(client) => client.port_count(),
            Err(e) => {
                warn!("{}", e);
                0
            }
        }
    }

    /// Connect to the port at `index` in the system's output list
    pub fn connect(index: usize) -> Result<Self, MidiError> {
        let client = client()?;
        let ports = client.ports();
        let port = ports.get(index).ok_or_else(|| {
            MidiError::NotFound(format!(
                "MIDI destination {} not found (only {} available)",
                index,
                ports.len()
            ))
        })?;

        let name = client
            .port_name(port)
            .map_err(|e| MidiError::NotFound(format!("{}: {}", index, e)))?;
        let connection = client
            .connect(port, PORT_NAME)
            .map_err(|e| MidiError::Allocated(format!("{}: {}", name, e)))?;

        info!(index, %name, "connected to MIDI output");
        Ok(Self {
            state: State::Bound { name, connection },
        })
    }

    /// Connect to the first port whose name contains `name`, ignoring case
    pub fn connect_by_name(name: &str) -> Result<Self, MidiError> {
        let needle = name.to_lowercase();
        let port = Self::discover()?
            .into_iter()
            .find(|p| p.name.to_lowercase().contains(&needle))
            .ok_or_else(|| {
                MidiError::NotFound(format!("No MIDI destination matching '{}' found", name))
            })?;

        Self::connect(port.index)
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, State::Bound { .. })
    }

    /// Name of the connected port
    pub fn name(&self) -> Result<&str, MidiError> {
        match &self.state {
            State::Bound { name, .. } => Ok(name),
            State::Unbound | State::Closed => Err(MidiError::Unconnected),
        }
    }

    /// Close the connection. Closing twice, or closing an unbound output,
    /// does nothing beyond marking it closed.
    pub fn close(&mut self) {
        if let State::Bound { name, connection } = std::mem::replace(&mut self.state, State::Closed) {
            connection.close();
            info!(%name, "closed MIDI output");
        }
    }
}

impl MidiOutput for DeviceOutput {
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
        match &mut self.state {
            State::Bound { name, connection } => connection
                .send(message)
                .map_err(|e| MidiError::Disconnected(format!("{}: {}", name, e))),
            State::Unbound | State::Closed => Err(MidiError::Unconnected),
        }
    }
}
