use chrono::{NaiveTime, Timelike};

use super::Markup;

/// Short human-readable time label.
///
/// 24-hour mode gives `H:MM` with an unpadded hour. 12-hour mode gives the
/// hour with an "a"/"p" suffix; minutes only appear when non-zero and go
/// through [`Markup::minute`] so the template layer can set them smaller.
pub fn short_time(time: NaiveTime, is_24_hour: bool, markup: &dyn Markup) -> String {
    let (hour, minute) = (time.hour(), time.minute());
    if is_24_hour {
        return format!("{}:{:02}", hour, minute);
    }

    let minute_span = if minute > 0 {
        markup.minute(&format!("{:02}", minute))
    } else {
        String::new()
    };
    let (display_hour, suffix) = match hour {
        0 => (12, "a"),
        12 => (12, "p"),
        h if h > 12 => (h - 12, "p"),
        h => (h, "a"),
    };
    format!("{display_hour}{minute_span}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PlainMarkup;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn twenty_four_hour_mode_pads_minutes_only() {
        assert_eq!(short_time(time(9, 5), true, &PlainMarkup), "9:05");
        assert_eq!(short_time(time(0, 0), true, &PlainMarkup), "0:00");
        assert_eq!(short_time(time(23, 59), true, &PlainMarkup), "23:59");
    }

    #[test]
    fn midnight_is_twelve_a() {
        assert_eq!(short_time(time(0, 0), false, &PlainMarkup), "12a");
    }

    #[test]
    fn noon_is_twelve_p() {
        assert_eq!(short_time(time(12, 0), false, &PlainMarkup), "12p");
    }

    #[test]
    fn afternoon_hours_wrap() {
        assert_eq!(short_time(time(13, 30), false, &PlainMarkup), "1⟨30⟩p");
        assert_eq!(short_time(time(23, 0), false, &PlainMarkup), "11p");
    }

    #[test]
    fn minutes_sit_between_hour_and_suffix() {
        assert_eq!(short_time(time(13, 5), false, &PlainMarkup), "1⟨05⟩p");
        assert_eq!(short_time(time(12, 30), false, &PlainMarkup), "12⟨30⟩p");
        assert_eq!(short_time(time(9, 5), false, &PlainMarkup), "9⟨05⟩a");
    }
}
