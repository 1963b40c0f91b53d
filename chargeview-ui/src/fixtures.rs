//! Fake charger for renderer tests

use core::cell::Cell;

use chargeview_core::blink::Blink;
use chargeview_core::config::{ChargerSettings, CELL_COUNT};
use chargeview_core::timing::TimeTracker;
use chargeview_core::traits::{
    AnalogInputs, Balancer, Channel, Chemistry, Clock, PowerStage, ProgramInfo, ProgramType,
    Transient, TransientSource, VoltageLimit,
};
use chargeview_display::Screen;

use crate::dispatcher::draw;
use crate::readings::Readings;
use crate::screens::{Frame, ScreenId};

#[derive(Default)]
pub struct FakeStage {
    pub on: bool,
    pub active: bool,
}

impl PowerStage for FakeStage {
    fn is_on(&self) -> bool {
        self.on
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl FakeStage {
    pub fn running() -> Self {
        Self {
            on: true,
            active: true,
        }
    }
}

/// Every collaborator in one place; channels read 0 until set
pub struct FakeCharger {
    pub values: Vec<(Channel, i32)>,
    pub disconnected: Vec<Channel>,
    pub balance_ports: u8,
    pub smps: FakeStage,
    pub discharger: FakeStage,
    pub balancing_mask: u8,
    pub min_cell: Option<u8>,
    pub balancer_working: bool,
    pub balancer_stable: bool,
    pub balancer_converged: bool,
    pub cell_voltages: [i32; CELL_COUNT],
    pub output_transient: Transient,
    pub cell_transients: [Transient; CELL_COUNT],
    pub charge_limit: i32,
    pub discharge_limit: i32,
    pub capacity_limit: i32,
    pub charge_current: i32,
    pub capacity: i32,
    pub chemistry: Chemistry,
    pub program_type: ProgramType,
    pub battery_label: &'static str,
    pub voltage_label: &'static str,
    pub stop_reason: &'static str,
    pub settings: ChargerSettings,
}

impl FakeCharger {
    /// Idle charger with a 3S LiPo selected
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            disconnected: Vec::new(),
            balance_ports: 3,
            smps: FakeStage::default(),
            discharger: FakeStage::default(),
            balancing_mask: 0,
            min_cell: None,
            balancer_working: false,
            balancer_stable: true,
            balancer_converged: false,
            cell_voltages: [0; CELL_COUNT],
            output_transient: Transient::default(),
            cell_transients: [Transient::default(); CELL_COUNT],
            charge_limit: 12_600,
            discharge_limit: 9_000,
            capacity_limit: 2_200,
            charge_current: 2_000,
            capacity: 2_200,
            chemistry: Chemistry::Lipo,
            program_type: ProgramType::ChargeBalance,
            battery_label: "LiPo",
            voltage_label: "3S 11.1V",
            stop_reason: "",
            settings: ChargerSettings::default(),
        }
    }

    pub fn set(&mut self, channel: Channel, value: i32) {
        self.values.retain(|(c, _)| *c != channel);
        self.values.push((channel, value));
    }

    pub fn disconnect(&mut self, channel: Channel) {
        self.disconnected.push(channel);
    }

    pub fn readings(&self) -> Readings<'_> {
        Readings {
            sensors: self,
            smps: &self.smps,
            discharger: &self.discharger,
            balancer: self,
            transients: self,
            program: self,
            settings: &self.settings,
        }
    }
}

impl AnalogInputs for FakeCharger {
    fn real_value(&self, channel: Channel) -> i32 {
        self.values
            .iter()
            .find(|(c, _)| *c == channel)
            .map_or(0, |(_, v)| *v)
    }

    fn is_connected(&self, channel: Channel) -> bool {
        !self.disconnected.contains(&channel)
    }

    fn calibrate(&self, _channel: Channel, raw: i32) -> i32 {
        raw
    }

    fn connected_balance_ports(&self) -> u8 {
        self.balance_ports
    }
}

impl Balancer for FakeCharger {
    fn balancing_mask(&self) -> u8 {
        self.balancing_mask
    }

    fn min_cell(&self) -> Option<u8> {
        self.min_cell
    }

    fn is_working(&self) -> bool {
        self.balancer_working
    }

    fn is_stable(&self) -> bool {
        self.balancer_stable
    }

    fn is_converged(&self) -> bool {
        self.balancer_converged
    }

    fn presumed_voltage(&self, cell: u8) -> i32 {
        self.cell_voltages[usize::from(cell)]
    }
}

impl TransientSource for FakeCharger {
    fn output(&self) -> Transient {
        self.output_transient
    }

    fn cell(&self, cell: u8) -> Transient {
        self.cell_transients[usize::from(cell)]
    }
}

impl ProgramInfo for FakeCharger {
    fn voltage_limit(&self, limit: VoltageLimit) -> i32 {
        match limit {
            VoltageLimit::Charge => self.charge_limit,
            VoltageLimit::Discharge => self.discharge_limit,
        }
    }

    fn capacity_limit(&self) -> i32 {
        self.capacity_limit
    }

    fn charge_current(&self) -> i32 {
        self.charge_current
    }

    fn capacity(&self) -> i32 {
        self.capacity
    }

    fn chemistry(&self) -> Chemistry {
        self.chemistry
    }

    fn program_type(&self) -> ProgramType {
        self.program_type
    }

    fn current_channel(&self) -> Channel {
        Channel::Ismps
    }

    fn battery_label(&self) -> &str {
        self.battery_label
    }

    fn voltage_label(&self) -> &str {
        self.voltage_label
    }

    fn stop_reason(&self) -> &str {
        self.stop_reason
    }
}

pub struct FakeClock(pub Cell<u32>);

impl FakeClock {
    pub fn at(now_ms: u32) -> Self {
        Self(Cell::new(now_ms))
    }

    pub fn set(&self, now_ms: u32) {
        self.0.set(now_ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// Session started at t=0
pub fn session() -> TimeTracker {
    let mut timing = TimeTracker::new();
    timing.power_on(0);
    timing
}

/// Blink state after `ticks` refreshes
pub fn blink_at(ticks: u16) -> Blink {
    let mut blink = Blink::new();
    for _ in 0..ticks {
        blink.tick();
    }
    blink
}

/// Draw one screen onto a blank buffer
pub fn render(
    screen: ScreenId,
    charger: &FakeCharger,
    timing: &TimeTracker,
    blink: Blink,
    now_ms: u32,
) -> Screen {
    let readings = charger.readings();
    let frame = Frame {
        readings: &readings,
        timing,
        blink,
        now_ms,
    };
    let mut out = Screen::new();
    draw(screen, &frame, &mut out);
    out
}

/// Draw with an idle blink at t=0 of a fresh session
pub fn render_now(screen: ScreenId, charger: &FakeCharger) -> Screen {
    render(screen, charger, &session(), Blink::new(), 0)
}

/// Row as text, glyphs outside ASCII shown as `~`
pub fn text(screen: &Screen, row: usize) -> String {
    screen
        .line(row)
        .map(|line| {
            line.iter()
                .map(|&b| if b.is_ascii() { b as char } else { '~' })
                .collect()
        })
        .unwrap_or_default()
}
