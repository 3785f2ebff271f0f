//! Network page: socket events and the live connection listing.

use hostlens_core::{ActiveConnection, NetworkEvent};

use super::{endpoint, json_cell, json_section, number, text, Inspect, Row};
use crate::context::RenderContext;
use crate::detail::Section;
use crate::View;

impl Row for NetworkEvent {
    const COLUMNS: &'static [&'static str] = &["Time", "Type", "PID", "Process"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            ctx.timestamp(View::Network, self.timestamp.as_deref()),
            text(self.event_type.as_deref()),
            number(self.pid),
            text(self.process_name.as_deref()),
        ]
    }
}

impl Inspect for NetworkEvent {
    fn title(&self) -> String {
        format!("Network event #{}", self.id)
    }

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)> {
        vec![
            ("Time", ctx.timestamp(View::Network, self.timestamp.as_deref())),
            ("Type", text(self.event_type.as_deref())),
            ("PID", number(self.pid)),
            ("Process", text(self.process_name.as_deref())),
            ("Protocol", text(self.protocol.as_deref())),
            ("Local", endpoint(self.laddr_ip.as_deref(), self.laddr_port)),
            ("Remote", endpoint(self.raddr_ip.as_deref(), self.raddr_port)),
            ("Status", text(self.status.as_deref())),
            ("Reason", text(self.reason.as_deref())),
            ("Description", text(self.description.as_deref())),
            ("Ports tried", json_cell(&self.ports_tried)),
            ("Alert", number(self.alert_id)),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        let raw = if self.raw_event.is_null() {
            &self.snapshot_data
        } else {
            &self.raw_event
        };
        json_section("Raw event", raw).into_iter().collect()
    }
}

impl Row for ActiveConnection {
    const COLUMNS: &'static [&'static str] =
        &["PID", "Process", "Protocol", "Local", "Remote", "Status"];

    fn cells(&self, _ctx: &RenderContext) -> Vec<String> {
        vec![
            number(self.pid),
            text(self.process_name.as_deref()),
            text(self.protocol.as_deref()),
            endpoint(self.laddr_ip.as_deref(), self.laddr_port),
            endpoint(self.raddr_ip.as_deref(), self.raddr_port),
            text(self.status.as_deref()),
        ]
    }
}

impl Inspect for ActiveConnection {
    fn title(&self) -> String {
        let process = self.process_name.as_deref().unwrap_or("unknown");
        match self.pid {
            Some(pid) => format!("{process} ({pid})"),
            None => process.to_string(),
        }
    }

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)> {
        let mut fields = vec![("PID", number(self.pid))];
        fields.extend(
            Self::COLUMNS[1..]
                .iter()
                .copied()
                .zip(self.cells(ctx).into_iter().skip(1)),
        );
        fields
    }
}
