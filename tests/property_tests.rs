use proptest::prelude::*;
use toolbelt::collections::Ary;
use toolbelt::num::{WrapMode, int_wrap, limit, num_wrap, offset_wrap};
use toolbelt::quote::{Quoter, Segment, is_escaped};

fn wrap_mode() -> impl Strategy<Value = WrapMode> {
    prop::sample::select(WrapMode::ALL.to_vec())
}

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE | prop::num::f64::NEGATIVE | prop::num::f64::NORMAL | prop::num::f64::ZERO
}

proptest! {
    #[test]
    fn test_limit_stays_in_range(value in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (low, high) = (a.min(b), a.max(b));
        let limited = limit(value, a, b);
        prop_assert!(low <= limited && limited <= high);
        if low <= value && value <= high {
            prop_assert_eq!(limited, value);
        }
    }

    #[test]
    fn test_int_wrap_is_periodic(
        value in -1_000_000_i64..1_000_000,
        lower in -1_000_i64..1_000,
        width in 0_i64..1_000,
        k in -1_000_i64..1_000,
    ) {
        let upper = lower + width;
        let wrapped = int_wrap(value, lower, upper);
        prop_assert!(lower <= wrapped && wrapped <= upper);
        prop_assert_eq!(wrapped, int_wrap(value + k * (width + 1), lower, upper));
    }

    #[test]
    fn test_num_wrap_stays_in_range(
        value in finite(),
        a in finite(),
        b in finite(),
        use_lower in any::<bool>(),
    ) {
        let (low, high) = (a.min(b), a.max(b));
        let wrapped = num_wrap(value, a, b, use_lower);
        prop_assert!(
            wrapped.is_ok_and(|w| low <= w && w <= high),
            "{value} in [{low}, {high}] wrapped to {wrapped:?}"
        );
    }

    #[test]
    fn test_offset_wrap_yields_valid_index(
        length in 1_i64..10_000,
        offset in any::<i64>(),
        mode in wrap_mode(),
    ) {
        match offset_wrap(length, offset, mode) {
            Ok(index) => prop_assert!((index as i64) < length),
            Err(error) => {
                // Only the strict mode may reject an offset, and only when out of bounds.
                prop_assert_eq!(mode, WrapMode::None);
                prop_assert!(error.is_out_of_bounds());
                prop_assert!(offset < -length || offset >= length);
            },
        }
    }

    #[test]
    fn test_ary_get_matches_offset_wrap(
        items in prop::collection::vec(any::<u8>(), 1..32),
        offset in -100_i64..100,
        mode in wrap_mode(),
    ) {
        let ary = Ary::from(items.clone()).into_mode(mode);
        let expected = offset_wrap(items.len() as i64, offset, mode).ok().map(|index| &items[index]);
        prop_assert_eq!(ary.get(offset), expected);
    }

    #[test]
    fn test_is_escaped_parity(prefix in "[a-z ]{0,8}", run in 0_usize..12) {
        let text = format!("{prefix}{}'", "\\".repeat(run));
        let position = text.len() - 1;
        prop_assert_eq!(is_escaped(&text, position, Some("\\")), run % 2 == 1);
    }

    #[test]
    fn test_parse_round_trip(text in r#"[a-z '"\\]{0,64}"#) {
        let quoter = Quoter::default();
        let segments: Vec<Segment> = quoter.parse(&text).collect();

        prop_assert_eq!(segments.iter().map(Segment::raw).collect::<String>(), text.clone());
        prop_assert!(segments.iter().all(|segment| !segment.raw().is_empty()));
        prop_assert!(
            segments.windows(2).all(|pair| pair[0].is_quoted() || pair[1].is_quoted()),
            "Unquoted runs should never be adjacent."
        );
        prop_assert!(segments.iter().rev().skip(1).all(|segment| !segment.is_unterminated()));
    }

    #[test]
    fn test_quote_unquote_round_trip(text in r#"\PC{0,32}"#) {
        let quoter = Quoter::default();
        let quoted = quoter.quote(&text);
        let body = quoter.unquote(&quoted);
        prop_assert!(body.is_some());
        prop_assert_eq!(quoter.unescape(body.unwrap_or_default()), text);
    }
}
