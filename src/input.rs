//! Flag and prompt parsing shared by the commands.
//!
//! Every temporal field accepts two spellings: the schedule file's native
//! one (YYYYMMDD dates, decimal hours) and a friendlier one (dashed dates,
//! clock times, humantime spans).

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;
use timeblock_core::TaskDate;

/// Parse a date given as YYYYMMDD digits, YYYY-MM-DD, or natural language
/// ("tomorrow", "next friday", "march 20").
pub fn parse_date(input: &str) -> Result<TaskDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(TaskDate::from_naive(date));
    }

    if let Ok(digits) = trimmed.parse::<u32>() {
        let date = TaskDate::new(digits);
        if !date.is_well_formed() {
            anyhow::bail!("Could not parse date: \"{input}\" (expected YYYYMMDD)");
        }
        return Ok(date);
    }

    let dt = fuzzydate::parse(&trimmed.to_lowercase())
        .map_err(|_| anyhow!("Could not parse date: \"{input}\""))?;
    Ok(TaskDate::from_naive(dt.date()))
}

/// Parse a clock value given as decimal hours ("9.5") or as "9:30".
pub fn parse_clock(input: &str) -> Result<f32> {
    let trimmed = input.trim();

    if let Some((hours, minutes)) = trimmed.split_once(':') {
        let hours: u32 = hours
            .parse()
            .map_err(|_| anyhow!("Could not parse time: \"{input}\""))?;
        let minutes: u32 = minutes
            .parse()
            .map_err(|_| anyhow!("Could not parse time: \"{input}\""))?;
        if hours >= 24 || minutes >= 60 {
            anyhow::bail!("Could not parse time: \"{input}\"");
        }
        return Ok(hours as f32 + minutes as f32 / 60.0);
    }

    trimmed
        .parse()
        .map_err(|_| anyhow!("Could not parse time: \"{input}\""))
}

/// Parse a duration given as decimal hours ("1.5") or a humantime span
/// ("1h 30m", "45m").
pub fn parse_duration_hours(input: &str) -> Result<f32> {
    let trimmed = input.trim();

    if let Ok(hours) = trimmed.parse::<f32>() {
        return Ok(hours);
    }

    let span = humantime::parse_duration(trimmed)
        .with_context(|| format!("Could not parse duration: \"{input}\""))?;
    Ok(span.as_secs_f32() / 3600.0)
}

/// Parse a cadence: "daily"/"weekly" or the raw day step. Unknown numbers
/// pass through so the schedule can reject them with its own message.
pub fn parse_cadence(input: &str) -> Result<u32> {
    match input.trim().to_lowercase().as_str() {
        "daily" | "day" => Ok(1),
        "weekly" | "week" => Ok(7),
        other => other
            .parse()
            .map_err(|_| anyhow!("Could not parse cadence: \"{input}\" (expected daily or weekly)")),
    }
}

/// Use the flag value if present, otherwise prompt (retrying on errors).
pub fn flag_or_prompt<T, F>(flag: Option<String>, prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    match flag {
        Some(value) => parse(&value),
        None => prompt_with_retry(prompt, parse),
    }
}

/// Prompt the user with retry on parse errors.
pub fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt with a prefilled default shown to the user.
pub fn prompt_with_default<T, F>(prompt: &str, default: String, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.clone())
            .interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_native_digits() {
        assert_eq!(parse_date("20240108").unwrap(), TaskDate::new(20240108));
        assert_eq!(parse_date(" 20240108 ").unwrap(), TaskDate::new(20240108));
    }

    #[test]
    fn date_dashed() {
        assert_eq!(parse_date("2024-01-08").unwrap(), TaskDate::new(20240108));
    }

    #[test]
    fn date_natural_language() {
        assert!(parse_date("tomorrow").unwrap().is_well_formed());
        let date = parse_date("march 20").unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn date_rejects_garbage() {
        assert!(parse_date("not a date at all xyz").is_err());
        assert!(parse_date("20241301").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn clock_decimal() {
        assert_eq!(parse_clock("9.5").unwrap(), 9.5);
        assert_eq!(parse_clock("17").unwrap(), 17.0);
    }

    #[test]
    fn clock_colon() {
        assert_eq!(parse_clock("9:30").unwrap(), 9.5);
        assert_eq!(parse_clock("23:45").unwrap(), 23.75);
    }

    #[test]
    fn clock_rejects_out_of_range_colon_form() {
        assert!(parse_clock("24:00").is_err());
        assert!(parse_clock("9:61").is_err());
        assert!(parse_clock("past nine").is_err());
    }

    #[test]
    fn duration_decimal_hours() {
        assert_eq!(parse_duration_hours("1.5").unwrap(), 1.5);
        assert_eq!(parse_duration_hours("2").unwrap(), 2.0);
    }

    #[test]
    fn duration_humantime_span() {
        assert_eq!(parse_duration_hours("1h 30m").unwrap(), 1.5);
        assert_eq!(parse_duration_hours("45m").unwrap(), 0.75);
    }

    #[test]
    fn cadence_words_and_numbers() {
        assert_eq!(parse_cadence("daily").unwrap(), 1);
        assert_eq!(parse_cadence("Weekly").unwrap(), 7);
        assert_eq!(parse_cadence("7").unwrap(), 7);
        // Unsupported steps parse here and fail schedule validation later.
        assert_eq!(parse_cadence("3").unwrap(), 3);
        assert!(parse_cadence("fortnightly").is_err());
    }
}
