//! Weather and local-time lookups for feeder locations.
//!
//! Both are single-city stubs with no real integration behind them: only
//! "new york" (case-insensitive) is supported. The time lookup does compute
//! real wall-clock time for that one timezone.

use chrono::Utc;
use chrono_tz::America::New_York;

use crate::types::ToolResult;

fn is_new_york(city: &str) -> bool {
    city.eq_ignore_ascii_case("new york")
}

/// Current weather report for a city.
pub fn get_weather(city: &str) -> ToolResult {
    if !is_new_york(city) {
        return ToolResult::error(format!(
            "Weather information for '{city}' is not available."
        ));
    }
    ToolResult::success(
        "The weather in New York is sunny with a temperature of 25 degrees \
         Celsius (41 degrees Fahrenheit).",
    )
}

/// Current local time in a city.
pub fn get_current_time(city: &str) -> ToolResult {
    if !is_new_york(city) {
        return ToolResult::error(format!(
            "Sorry, I don't have timezone information for {city}."
        ));
    }
    let now = Utc::now().with_timezone(&New_York);
    ToolResult::success(format!(
        "The current time in {city} is {}",
        now.format("%Y-%m-%d %H:%M:%S %Z%z")
    ))
}
