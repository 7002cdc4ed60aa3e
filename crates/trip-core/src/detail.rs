//! Helpers for the item list and the expanded item view.

/// First two sentences of a description, as shown in the day list.
pub fn preview_description(description: &str) -> String {
    let sentences: Vec<&str> = description.split(". ").collect();
    let mut preview = sentences
        .iter()
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(". ");
    if sentences.len() >= 2 && !preview.ends_with('.') {
        preview.push('.');
    }
    preview
}

/// When-to-go advice for a slot tag.
pub fn slot_recommendation(slot: &str) -> String {
    match slot {
        "Activity 🌳" => "It is recommended to do this activity during the afternoon 🌳".to_string(),
        "Cafe ☕" => {
            "It is recommended to go to this cafe during the afternoon or evening ☕".to_string()
        }
        other => format!("It is recommended to go to this place during {}.", other),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    pub time: String,
    pub condition: String,
    /// One decimal place, e.g. "21.3"
    pub temp: String,
}

impl HourlyForecast {
    pub fn glyph(&self) -> &'static str {
        condition_glyph(&self.condition)
    }
}

/// Parse a per-item forecast string such as
/// `"9:00 Clear (19.2°C), 12:00 Clouds (22.8°C), 15:00 Rain (20.1°C)"`.
///
/// Entries that do not match `H:MM Condition (temp` are skipped, and so are
/// 9 o'clock entries.
pub fn parse_hourly_forecast(weather: &str) -> Vec<HourlyForecast> {
    weather
        .split(", ")
        .filter_map(parse_hourly_entry)
        .filter(|f| !f.time.starts_with("9:"))
        .collect()
}

fn parse_hourly_entry(entry: &str) -> Option<HourlyForecast> {
    let (time, rest) = entry.trim().split_once(' ')?;
    let (hour, minute) = time.split_once(':')?;
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !is_digits(hour) || !is_digits(minute) {
        return None;
    }

    let (condition, rest) = rest.split_once(' ')?;
    if condition.is_empty() || !condition.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let number: String = rest
        .strip_prefix('(')?
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let temp: f64 = number.parse().ok()?;

    Some(HourlyForecast {
        time: time.to_string(),
        condition: condition.to_string(),
        temp: format!("{:.1}", temp),
    })
}

pub fn condition_glyph(condition: &str) -> &'static str {
    if condition.is_empty() {
        return "❓";
    }
    let condition = condition.to_lowercase();
    if condition.contains("rain") {
        "🌧"
    } else if condition.contains("clear") {
        "☀"
    } else if condition.contains("clouds") {
        "☁"
    } else if condition.contains("snow") {
        "❄"
    } else if condition.contains("windy") {
        "💨"
    } else {
        "🌫"
    }
}
