//! Setting value validation.

use super::{KEY_MAX_HEIGHT, KEY_MAX_WIDTH, KEY_THRESHOLD};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        KEY_MAX_WIDTH | KEY_MAX_HEIGHT => validate_int_range(value, 1, 65535)?,
        KEY_THRESHOLD => validate_int_range(value, 0, 255)?,
        _ => return Err(format!("unknown setting '{key}'")),
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.trim().parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
