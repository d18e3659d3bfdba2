//! Human-facing payslip references.

use chrono::{DateTime, Utc};
use rand::Rng;

/// `PS-<yyyymmddHHMMSS>-<4 random digits>`.
pub fn generate(now: DateTime<Utc>) -> String {
    let suffix: u16 = rand::rng().random_range(1000..10000);
    format!("PS-{}-{suffix}", now.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_reference_shape() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 17, 5, 9).unwrap();
        let reference = generate(now);
        assert!(reference.starts_with("PS-20250131170509-"));

        let suffix = reference.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.parse::<u16>().unwrap() >= 1000);
    }
}
