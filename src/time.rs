use chrono::{DateTime, FixedOffset};

/// Parse an EONET timestamp.
///
/// The accepted shape is `yyyy-MM-dd'T'HH:mm:ss` immediately followed by a zone: `Z`, `±HH:MM`,
/// `±HHMM`, `GMT`, or `GMT±HH:MM`. Fractional seconds, missing zones, and anything else are
/// rejected. No locale is consulted.
pub fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    if !s.is_char_boundary(19) || s.len() < 20 {
        return None;
    }
    let (local, zone) = s.split_at(19);

    let zone = match zone {
        "Z" | "GMT" => "+00:00",
        _ => match zone.strip_prefix("GMT") {
            Some(rest) if rest.starts_with(|c: char| c == '+' || c == '-') => rest,
            Some(_) => return None,
            None => zone,
        },
    };
    let offset = if zone.len() == 5 && zone.is_ascii() {
        format!("{}:{}", &zone[..3], &zone[3..])
    } else {
        zone.to_string()
    };

    DateTime::parse_from_str(&format!("{}{}", local, offset), "%Y-%m-%dT%H:%M:%S%:z").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn zone_designators() {
        let expected = utc(2021, 6, 1, 12, 0, 0);
        for s in [
            "2021-06-01T12:00:00Z",
            "2021-06-01T12:00:00+00:00",
            "2021-06-01T12:00:00+0000",
            "2021-06-01T12:00:00GMT",
            "2021-06-01T14:00:00GMT+02:00",
            "2021-06-01T07:00:00-05:00",
            "2021-06-01T07:00:00-0500",
        ] {
            assert_eq!(parse_date(s).map(|d| d.with_timezone(&Utc)), Some(expected), "{}", s);
        }
    }

    #[test]
    fn offset_is_preserved() {
        let date = parse_date("2021-06-01T07:00:00-05:00").unwrap();
        assert_eq!(date.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn other_shapes_are_rejected() {
        for s in [
            "",
            "2021-06-01",
            "2021-06-01T12:00:00",
            "2021-06-01 12:00:00Z",
            "2021-06-01T12:00:00.123Z",
            "2021-13-01T12:00:00Z",
            "01/06/2021 12:00:00 +0000",
            "2021-06-01T12:00:00+5",
            "2021-06-01T12:00:00 UTC",
            "2021-06-01T12:00:00GMTZ",
            "2021-06-01T12:00:00GMT00:00",
            "2021-06-01T12:00:00GMTGMT",
            "2021-06-01T12:00:00ZZ",
            "2021-06-01T12:00:0éZ",
        ] {
            assert_eq!(parse_date(s), None, "{:?}", s);
        }
    }
}
