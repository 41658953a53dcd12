use anyhow::{Result, bail};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        // Parse date part
        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Check for time part (RFC3339)
        let (hour, minute, second) = if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    /// ISO 8601 date part, used as the canonical form in the posts index
    pub fn to_ymd_string(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-03-05").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 3, 5));
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = DateTimeUtc::parse("2024-03-05T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 3, 5, 14, 30, 45));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DateTimeUtc::parse("").is_none());
        assert!(DateTimeUtc::parse("not-a-date").is_none());
        assert!(DateTimeUtc::parse("2024-3-5").is_none());
        assert!(DateTimeUtc::parse("2024/03/05").is_none());
        assert!(DateTimeUtc::parse("2024-03-05T14:30:45").is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_date() {
        assert!(DateTimeUtc::parse("2024-13-05").is_none());
        assert!(DateTimeUtc::parse("2024-00-05").is_none());
        assert!(DateTimeUtc::parse("2024-02-30").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
    }

    #[test]
    fn test_validate_leap_year() {
        // Leap year - Feb 29 is valid
        assert!(DateTimeUtc::from_ymd(2024, 2, 29).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(2000, 2, 29).validate().is_ok()); // divisible by 400

        // Non-leap year - Feb 29 is invalid
        assert!(DateTimeUtc::from_ymd(2023, 2, 29).validate().is_err());
        assert!(DateTimeUtc::from_ymd(1900, 2, 29).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_validate_time_bounds() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
        assert!(
            DateTimeUtc::new(2024, 12, 31, 23, 59, 59)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_to_ymd_string() {
        assert_eq!(
            DateTimeUtc::from_ymd(2024, 3, 5).to_ymd_string(),
            "2024-03-05"
        );
        assert_eq!(
            DateTimeUtc::new(2024, 3, 5, 14, 30, 45).to_ymd_string(),
            "2024-03-05"
        );
    }
}
