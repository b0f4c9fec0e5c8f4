use crate::error::ShiftError;
use crate::srt::{TimeRange, Timestamp, RANGE_SEPARATOR};

use nom::bytes::complete::{tag, take_while_m_n};
use nom::combinator::{all_consuming, map_res};
use nom::IResult;

/// Parse one `HH:MM:SS,mmm --> HH:MM:SS,mmm` line. Anything other than
/// exactly two timestamps around the separator is rejected with the
/// offending line.
pub fn parse_time_range(line: &str) -> Result<TimeRange, ShiftError> {
    let parts: Vec<&str> = line.split(RANGE_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(ShiftError::TimeRange(line.to_string()));
    }

    let show_at =
        parse_timestamp(parts[0].trim()).ok_or_else(|| ShiftError::TimeRange(line.to_string()))?;
    let hide_at =
        parse_timestamp(parts[1].trim()).ok_or_else(|| ShiftError::TimeRange(line.to_string()))?;

    Ok(TimeRange { show_at, hide_at })
}

fn parse_timestamp(input: &str) -> Option<Timestamp> {
    all_consuming(timestamp)(input).ok().map(|(_, ts)| ts)
}

fn timestamp(input: &str) -> IResult<&str, Timestamp> {
    // The timestamp is fixed-width; ragged field widths are format errors.
    let field = |width| {
        map_res(
            take_while_m_n(width, width, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse::<i64>(),
        )
    };

    let (input, hours) = field(2)(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minutes) = field(2)(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, seconds) = field(2)(input)?;
    let (input, _) = tag(",")(input)?;
    let (input, millis) = field(3)(input)?;

    Ok((input, Timestamp::from_parts(hours, minutes, seconds, millis)))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_parse_ts {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                let ts = parse_timestamp(input).unwrap();

                assert_eq!(ts.millis(), expected);
            }
        )*
        }
    }

    test_parse_ts! {
        test_parse_ts_0: ("00:00:00,000", 0),
        test_parse_ts_1: ("00:00:01,200", 1200),
        test_parse_ts_2: ("00:00:01,002", 1002),
        test_parse_ts_3: ("01:01:01,200", 3_661_200),
        test_parse_ts_4: ("23:59:59,999", 86_399_999),
    }

    macro_rules! test_reject_ts {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                assert!(parse_timestamp($value).is_none());
            }
        )*
        }
    }

    test_reject_ts! {
        reject_short_hours: ("1:01:01,200"),
        reject_short_millis: ("00:00:01,2"),
        reject_missing_millis: ("00:00:01,"),
        reject_dot_separator: ("00:00:01.200"),
        reject_trailing_garbage: ("00:00:01,200x"),
        reject_empty: (""),
    }

    #[test]
    fn parses_a_time_range_line() {
        let range = parse_time_range("00:00:01,000 --> 00:00:03,500").unwrap();

        assert_eq!(range.show_at.millis(), 1000);
        assert_eq!(range.hide_at.millis(), 3500);
    }

    #[test]
    fn tolerates_padding_around_the_timestamps() {
        let range = parse_time_range("00:00:01,000 -->  00:00:03,500 ").unwrap();

        assert_eq!(range.show_at.millis(), 1000);
        assert_eq!(range.hide_at.millis(), 3500);
    }

    #[test]
    fn rejects_a_line_without_the_separator() {
        let err = parse_time_range("00:00:01,000 -> 00:00:03,500").unwrap_err();

        assert!(matches!(err, ShiftError::TimeRange(_)));
        assert!(err.to_string().contains("00:00:01,000 -> 00:00:03,500"));
    }

    #[test]
    fn rejects_a_line_with_three_timestamps() {
        let line = "00:00:01,000 --> 00:00:02,000 --> 00:00:03,000";

        assert!(matches!(
            parse_time_range(line).unwrap_err(),
            ShiftError::TimeRange(_)
        ));
    }

    #[test]
    fn rejects_a_malformed_endpoint() {
        let err = parse_time_range("00:00:01,000 --> 0:00:03,500").unwrap_err();

        assert!(matches!(err, ShiftError::TimeRange(_)));
    }
}
