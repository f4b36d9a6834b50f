//! Value synthesis: one random value per generator kind.
//!
//! [`Synthesizer`] is the seam the dispatcher calls into. Every method has a
//! default implementation built on `rand` and the bundled word lists, so a
//! custom synthesizer only overrides what it wants to change.

use chrono::{DateTime, Duration, TimeZone, Utc};
use docmock::types::FieldType;
use docmock::value::MockValue;
use rand::Rng;

use crate::dict::*;
use crate::heuristics::NameCategory;

/// Largest integer a double represents exactly (2^53 - 1). Upper edge of the
/// default numeric range.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Upper edge of the default date range (9999-12-31T23:59:59.999Z) in epoch
/// milliseconds.
pub const MAX_DATE_MILLIS: i64 = 253_402_300_799_999;

const DEFAULT_BUFFER_LEN: usize = 16;

/// Generator registered for a primitive type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// A dictionary word.
    Word,
    /// An integer in the default range.
    Integer,
    /// A date within the last day.
    RecentDate,
    Boolean,
    /// 24 hex digits.
    HexId,
    /// Alphanumeric bytes.
    Bytes,
}

/// Look up the generator registered for a type tag.
///
/// `Mixed`, `Other` and the structural tags have none; the dispatcher handles
/// them itself.
pub fn generator_for(field_type: &FieldType) -> Option<Generator> {
    match field_type {
        FieldType::String => Some(Generator::Word),
        FieldType::Number | FieldType::Decimal128 | FieldType::BigInt => Some(Generator::Integer),
        FieldType::Date => Some(Generator::RecentDate),
        FieldType::Boolean => Some(Generator::Boolean),
        FieldType::ObjectId => Some(Generator::HexId),
        FieldType::Buffer => Some(Generator::Bytes),
        FieldType::Mixed
        | FieldType::Other { .. }
        | FieldType::Embedded { .. }
        | FieldType::Array { .. } => None,
    }
}

/// Produces random primitive values for the dispatcher.
///
/// Methods are generic over the RNG so that seeded and thread-local
/// generators share one implementation.
pub trait Synthesizer {
    /// A number in `[min, max]`. Integers are preferred; a float is returned
    /// only when no integer fits the window.
    fn bounded_number<R: Rng + ?Sized>(&self, rng: &mut R, min: f64, max: f64) -> MockValue {
        let lo = min.ceil().max(-MAX_SAFE_INTEGER);
        let hi = max.floor().min(MAX_SAFE_INTEGER);
        if lo <= hi {
            return MockValue::Int(rng.gen_range(lo as i64..=hi as i64));
        }
        if min < max {
            MockValue::Double(rng.gen_range(min..=max))
        } else {
            MockValue::Double(min)
        }
    }

    /// Printable ASCII text with a character count in `[min_len, max_len]`.
    fn bounded_text<R: Rng + ?Sized>(&self, rng: &mut R, min_len: usize, max_len: usize) -> String {
        let len = if min_len >= max_len {
            min_len
        } else {
            rng.gen_range(min_len..=max_len)
        };
        (0..len)
            .map(|_| rng.gen_range(b' '..=b'~') as char)
            .collect()
    }

    /// A date between two epoch-millisecond instants, both inclusive.
    fn date_between<R: Rng + ?Sized>(&self, rng: &mut R, min_ms: i64, max_ms: i64) -> Option<DateTime<Utc>> {
        let ms = if min_ms >= max_ms {
            min_ms
        } else {
            rng.gen_range(min_ms..=max_ms)
        };
        Utc.timestamp_millis_opt(ms).single()
    }

    /// Text for a field whose name matched a heuristic.
    fn category<R: Rng + ?Sized>(&self, rng: &mut R, category: NameCategory) -> String {
        match category {
            NameCategory::Email => email(rng),
            NameCategory::FirstName => pick(rng, FIRST_NAMES).to_string(),
            NameCategory::LastName => pick(rng, LAST_NAMES).to_string(),
            NameCategory::FullName => {
                format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
            }
            NameCategory::Phone => phone(rng),
            NameCategory::Street => street(rng),
            NameCategory::City => pick(rng, CITIES).to_string(),
            NameCategory::State => pick(rng, STATES).to_string(),
            NameCategory::Country => pick(rng, COUNTRIES).to_string(),
            NameCategory::FullAddress => format!(
                "{}, {}, {} {}",
                street(rng),
                pick(rng, CITIES),
                pick(rng, STATES),
                zip(rng)
            ),
            NameCategory::PostalCode => zip(rng),
            NameCategory::Description => sentence(rng, 8, 20),
            NameCategory::Url => url(rng),
            NameCategory::Identifier => uuid(rng),
        }
    }

    /// Value from the generator registered for `field_type`, or `None` when
    /// the tag has no generator. `now` anchors recent dates.
    fn for_type<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        field_type: &FieldType,
        now: DateTime<Utc>,
    ) -> Option<MockValue> {
        let value = match generator_for(field_type)? {
            Generator::Word => MockValue::String(pick(rng, WORDS).to_string()),
            Generator::Integer => self.bounded_number(rng, 0.0, MAX_SAFE_INTEGER),
            Generator::RecentDate => MockValue::Date(self.recent_date(rng, now)),
            Generator::Boolean => MockValue::Bool(rng.gen_bool(0.5)),
            Generator::HexId => MockValue::ObjectId(hex(rng, 24)),
            Generator::Bytes => MockValue::Binary(
                (0..DEFAULT_BUFFER_LEN)
                    .map(|_| *pick(rng, ALPHANUMERIC))
                    .collect(),
            ),
        };
        Some(value)
    }

    /// A date within the day before `now`.
    fn recent_date<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
        let back = rng.gen_range(0..=Duration::days(1).num_milliseconds());
        now - Duration::milliseconds(back)
    }

    /// Short generic text used by [`FallbackPolicy::Sample`](crate::FallbackPolicy::Sample).
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        sentence(rng, 2, 5)
    }
}

/// `rand` + bundled word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSynthesizer;

impl Synthesizer for DefaultSynthesizer {}

// ─────────────────────────── helpers ───────────────────────────────────────

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn hex<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| *pick(rng, HEX) as char).collect()
}

fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();
    let domain = pick(rng, EMAIL_DOMAINS);
    match rng.gen_range(0..3) {
        0 => format!("{first}.{last}@{domain}"),
        1 => format!("{first}{last}{}@{domain}", rng.gen_range(1..100)),
        _ => format!("{first}_{last}@{domain}"),
    }
}

fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area: u16 = rng.gen_range(200..1000);
    let prefix: u16 = rng.gen_range(200..1000);
    let line: u16 = rng.gen_range(1000..10000);
    format!("+1 ({area}) {prefix}-{line}")
}

fn street<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: u16 = rng.gen_range(1..10000);
    format!(
        "{number} {} {}",
        pick(rng, STREET_NAMES),
        pick(rng, STREET_SUFFIXES)
    )
}

fn zip<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.gen_range(501..100_000u32))
}

fn url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let host = pick(rng, WORDS);
    let tld = pick(rng, TLDS);
    let path = pick(rng, WORDS);
    format!("https://www.{host}.{tld}/{path}")
}

fn uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let variant = *pick(rng, &b"89ab"[..]) as char;
    format!(
        "{}-{}-4{}-{variant}{}-{}",
        hex(rng, 8),
        hex(rng, 4),
        hex(rng, 3),
        hex(rng, 3),
        hex(rng, 12)
    )
}

fn sentence<R: Rng + ?Sized>(rng: &mut R, min_words: usize, max_words: usize) -> String {
    let count = rng.gen_range(min_words..=max_words);
    let mut text = (0..count)
        .map(|_| *pick(rng, LOREM_WORDS))
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(first) = text.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn bounded_number_prefers_integers() {
        let mut rng = rng();
        for _ in 0..200 {
            match DefaultSynthesizer.bounded_number(&mut rng, 18.0, 200.0) {
                MockValue::Int(v) => assert!((18..=200).contains(&v), "{v}"),
                other => panic!("expected an integer, got {other:?}"),
            }
        }
    }

    #[test]
    fn bounded_number_falls_back_to_float() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = DefaultSynthesizer.bounded_number(&mut rng, 0.25, 0.75);
            match v {
                MockValue::Double(d) => assert!((0.25..=0.75).contains(&d), "{d}"),
                other => panic!("expected a double, got {other:?}"),
            }
        }
        assert_eq!(
            DefaultSynthesizer.bounded_number(&mut rng, 0.5, 0.5),
            MockValue::Double(0.5)
        );
    }

    #[test]
    fn bounded_number_single_point() {
        let mut rng = rng();
        assert_eq!(DefaultSynthesizer.bounded_number(&mut rng, 0.0, 0.0), MockValue::Int(0));
        assert_eq!(DefaultSynthesizer.bounded_number(&mut rng, -3.0, -3.0), MockValue::Int(-3));
    }

    #[test]
    fn bounded_text_is_printable_ascii_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let s = DefaultSynthesizer.bounded_text(&mut rng, 5, 25);
            let len = s.chars().count();
            assert!((5..=25).contains(&len), "len {len}: {s:?}");
            assert!(s.bytes().all(|b| (b' '..=b'~').contains(&b)));
        }
        assert_eq!(DefaultSynthesizer.bounded_text(&mut rng, 0, 0), "");
    }

    #[test]
    fn registered_generators() {
        let mut rng = rng();
        let synth = DefaultSynthesizer;
        assert!(matches!(synth.for_type(&mut rng, &FieldType::String, Utc::now()), Some(MockValue::String(_))));
        assert!(matches!(synth.for_type(&mut rng, &FieldType::BigInt, Utc::now()), Some(MockValue::Int(v)) if v >= 0));
        assert!(matches!(synth.for_type(&mut rng, &FieldType::Boolean, Utc::now()), Some(MockValue::Bool(_))));
        assert!(matches!(synth.for_type(&mut rng, &FieldType::Buffer, Utc::now()), Some(MockValue::Binary(b)) if b.len() == DEFAULT_BUFFER_LEN));
        match synth.for_type(&mut rng, &FieldType::ObjectId, Utc::now()) {
            Some(MockValue::ObjectId(id)) => {
                assert_eq!(id.len(), 24);
                assert!(id.bytes().all(|b| b.is_ascii_hexdigit()));
            }
            other => panic!("expected an object id, got {other:?}"),
        }
        assert_eq!(synth.for_type(&mut rng, &FieldType::Mixed, Utc::now()), None);
        assert_eq!(
            synth.for_type(&mut rng, &FieldType::Other { name: "Point".into() }, Utc::now()),
            None
        );
    }

    #[test]
    fn recent_date_is_within_a_day() {
        let mut rng = rng();
        let now = Utc::now();
        for _ in 0..50 {
            let d = DefaultSynthesizer.recent_date(&mut rng, now);
            assert!(d <= now);
            assert!(now - d <= Duration::days(1));
        }
    }

    #[test]
    fn date_between_respects_bounds() {
        let mut rng = rng();
        for _ in 0..50 {
            let d = DefaultSynthesizer.date_between(&mut rng, 1_000, 2_000).unwrap();
            assert!((1_000..=2_000).contains(&d.timestamp_millis()));
        }
        assert!(DefaultSynthesizer.date_between(&mut rng, 0, MAX_DATE_MILLIS).is_some());
    }

    #[test]
    fn categories_look_plausible() {
        let mut rng = rng();
        let synth = DefaultSynthesizer;
        for _ in 0..20 {
            assert!(synth.category(&mut rng, NameCategory::Email).contains('@'));
            assert!(synth.category(&mut rng, NameCategory::Url).starts_with("https://"));
            assert_eq!(synth.category(&mut rng, NameCategory::PostalCode).len(), 5);
            assert_eq!(synth.category(&mut rng, NameCategory::Identifier).len(), 36);
            assert!(synth.category(&mut rng, NameCategory::FullName).contains(' '));
        }
    }

    #[test]
    fn sample_is_short_sentence() {
        let mut rng = rng();
        let s = DefaultSynthesizer.sample(&mut rng);
        assert!(s.ends_with('.'));
        assert!(s.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    }
}
