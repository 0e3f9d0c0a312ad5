use crate::config::BatteryDisplayMode;

/// Identifier for "no battery icon".
pub const BATTERY_HIDE: &str = "batteryHide";

/// Icon identifier substituted into the template.
///
/// Levels are fractional because chargers report tenths of a percent.
pub fn battery_icon(mode: BatteryDisplayMode, level: f32) -> &'static str {
    match mode {
        BatteryDisplayMode::Hidden => BATTERY_HIDE,
        BatteryDisplayMode::Always => match level {
            l if l >= 80.0 => "battery80",
            l if l >= 60.0 => "battery60",
            l if l >= 40.0 => "battery40",
            l if l >= 20.0 => "battery20",
            _ => "battery0",
        },
        BatteryDisplayMode::WhenLow => {
            if level < 20.0 {
                "battery0"
            } else {
                BATTERY_HIDE
            }
        }
    }
}
