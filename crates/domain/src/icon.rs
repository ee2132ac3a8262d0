//! Icon and artwork resolution — fixed `mdi:` identifiers plus the
//! threshold rules that pick between them.

use crate::INTEGRATION_ID;
use crate::model::{PlugType, PodModel};
use crate::status::ChargeStatus;

pub const PLUG_TYPE1: &str = "mdi:ev-plug-type1";
pub const PLUG_TYPE2: &str = "mdi:ev-plug-type2";
pub const TIMER: &str = "mdi:timer";
pub const ENERGY_ACTIVE: &str = "mdi:lightning-bolt";
pub const ENERGY_IDLE: &str = "mdi:lightning-bolt-outline";
pub const VEHICLE_ACTIVE: &str = "mdi:car-electric";
pub const VEHICLE_IDLE: &str = "mdi:car";
pub const CASH_TOTAL: &str = "mdi:cash-multiple";
pub const CASH: &str = "mdi:cash";
pub const ACCOUNT_CASH: &str = "mdi:account-cash";
pub const OVERRIDE_END: &str = "mdi:battery-clock";
pub const CHARGE_MODE: &str = "mdi:car-clock";
pub const LAST_MESSAGE: &str = "mdi:message-text-clock";

/// Icon and artwork for the primary status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPresentation {
    /// Plug icon matching the model's connector standard.
    pub icon: &'static str,
    /// Static artwork path for the pod, e.g. `"/api/podwatch/static/uc-03.png"`.
    pub image_path: String,
}

/// Resolve the primary status icon and artwork path for a pod.
///
/// The plug icon follows the model's connector standard; the artwork follows
/// the model family. The status itself does not change the primary icon, but
/// is part of the resolver contract so callers pass one coherent snapshot.
#[must_use]
pub fn resolve_status_icon(_status: ChargeStatus, model: &PodModel) -> StatusPresentation {
    let icon = match model.plug_type() {
        PlugType::Type1 => PLUG_TYPE1,
        PlugType::Type2 => PLUG_TYPE2,
    };
    StatusPresentation {
        icon,
        image_path: image_path(model),
    }
}

/// Static artwork path for a model.
#[must_use]
pub fn image_path(model: &PodModel) -> String {
    format!("/api/{INTEGRATION_ID}/static/{}.png", model.image_slug())
}

/// Energy sensor icon: filled bolt while a charge is active.
#[must_use]
pub fn energy_icon(status: ChargeStatus) -> &'static str {
    if status.is_active() {
        ENERGY_ACTIVE
    } else {
        ENERGY_IDLE
    }
}

/// Vehicle sensor icon: the electric-car variant while a charge is active.
#[must_use]
pub fn vehicle_icon(status: ChargeStatus) -> &'static str {
    if status.is_active() {
        VEHICLE_ACTIVE
    } else {
        VEHICLE_IDLE
    }
}

/// Signal icon by connection-quality threshold. Qualities 0 and 1 collapse
/// to a single bar; the scale caps at four bars.
#[must_use]
pub fn signal_icon(quality: u8) -> &'static str {
    match quality {
        0 | 1 => "mdi:wifi-strength-1",
        2 => "mdi:wifi-strength-2",
        3 => "mdi:wifi-strength-3",
        _ => "mdi:wifi-strength-4",
    }
}
