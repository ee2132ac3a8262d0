//! # podwatch-adapter-virtual
//!
//! Virtual/demo telemetry adapter that simulates a single charge point for
//! testing and demonstration purposes.
//!
//! ## Behaviour
//!
//! The simulated pod runs one scripted charge session, advancing one step per
//! fetch:
//!
//! | Phase | Steps | Status |
//! |-------|-------|--------|
//! | Plug-in | 1 | `pending` |
//! | Charging | 4 | `charging`, energy and cost accumulate |
//! | Complete | rest | `available`, totals rolled up |
//!
//! The script is deterministic, so tests can assert exact figures.
//!
//! ## Dependency rule
//!
//! Depends on `podwatch-app` (port traits) and `podwatch-domain` only.

use std::future::Future;
use std::sync::Mutex;

use podwatch_app::ports::TelemetrySource;
use podwatch_domain::error::PodwatchError;
use podwatch_domain::id::AccountId;
use podwatch_domain::snapshot::TelemetrySnapshot;
use podwatch_domain::status::ChargeStatus;
use podwatch_domain::time::now;

/// Steps spent in the `charging` phase.
const CHARGING_STEPS: u32 = 4;
/// Simulated wall-clock seconds per charging step.
const STEP_SECONDS: u64 = 900;
/// Energy delivered per charging step, kWh.
const STEP_KWH: f64 = 1.8;
/// Cost per charging step, minor currency units.
const STEP_COST: i32 = 45;

/// A simulated charge point running a scripted session.
pub struct VirtualPod {
    pod_id: i64,
    unit_id: String,
    model: String,
    account_id: AccountId,
    state: Mutex<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    step: u32,
    total_charge_seconds: u64,
    total_energy_kwh: f64,
    current_energy_kwh: f64,
    current_cost: i32,
    total_cost: i32,
    last_charge_cost: i32,
}

impl Default for VirtualPod {
    fn default() -> Self {
        Self::new(10_001, "PSL-000001", "S7-UC-03-ACA")
    }
}

impl VirtualPod {
    /// Create a simulated pod with the given identity.
    #[must_use]
    pub fn new(pod_id: i64, unit_id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            pod_id,
            unit_id: unit_id.into(),
            model: model.into(),
            account_id: AccountId::new(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// The simulated pod's numeric id.
    #[must_use]
    pub fn pod_id(&self) -> i64 {
        self.pod_id
    }

    /// The simulated pod's unit name.
    #[must_use]
    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    /// The account the simulated pod bills against.
    #[must_use]
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    fn advance(&self) -> Result<TelemetrySnapshot, PodwatchError> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let status = match state.step {
            0 => ChargeStatus::Pending,
            step if step <= CHARGING_STEPS => {
                state.current_energy_kwh += STEP_KWH;
                state.current_cost += STEP_COST;
                ChargeStatus::Charging
            }
            _ => {
                if state.current_energy_kwh > 0.0 {
                    // Roll the finished session into the lifetime totals.
                    state.total_charge_seconds += STEP_SECONDS * u64::from(CHARGING_STEPS);
                    state.total_energy_kwh += state.current_energy_kwh;
                    state.current_energy_kwh = 0.0;
                    state.last_charge_cost = state.current_cost;
                    state.total_cost += state.current_cost;
                    state.current_cost = 0;
                }
                ChargeStatus::Available
            }
        };

        let (signal_strength, connection_quality) = match status {
            ChargeStatus::Pending => (-75, 2),
            ChargeStatus::Charging => (-58, 4),
            _ => (-62, 3),
        };

        state.step += 1;

        TelemetrySnapshot::builder()
            .pod_id(self.pod_id)
            .unit_id(self.unit_id.clone())
            .account_id(self.account_id)
            .model(self.model.clone())
            .status(status)
            .suggested_area("Outside")
            .total_charge_seconds(state.total_charge_seconds)
            .total_energy_kwh(state.total_energy_kwh)
            .current_energy_kwh(state.current_energy_kwh)
            .total_cost(state.total_cost)
            .last_charge_cost(state.last_charge_cost)
            .signal_strength(signal_strength)
            .connection_quality(connection_quality)
            .account_balance(173)
            .last_message_at(now())
            .build()
    }
}

impl TelemetrySource for VirtualPod {
    fn name(&self) -> &'static str {
        "virtual"
    }

    fn fetch(&self) -> impl Future<Output = Result<TelemetrySnapshot, PodwatchError>> + Send {
        let result = self.advance();
        async move { result }
    }
}
