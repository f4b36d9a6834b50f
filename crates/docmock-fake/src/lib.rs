//! # docmock-fake
//!
//! Generate mock documents that satisfy a [`docmock`] schema.
//!
//! Every declared field gets a value that would pass the schema's own
//! validators: enum fields pick a candidate, bounded numbers and strings stay
//! within their bounds, embedded documents and arrays are filled in
//! recursively, and dotted field names are rebuilt into nested documents.
//!
//! ## Quick start
//!
//! ```rust
//! use docmock::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("email", docmock::string().required())
//!     .field("age", docmock::number().min(18).max(99))
//!     .field("role", docmock::string().enumeration(["admin", "user"]))
//!     .field("address.city", docmock::string());
//!
//! let doc = docmock_fake::generate_mock(&schema).unwrap();
//! assert!(doc.get("email").and_then(MockValue::as_str).unwrap().contains('@'));
//! assert!(doc.get_path("address.city").is_some());
//! assert!(schema.is_valid(&doc));
//! ```
//!
//! ## Options
//!
//! ```rust
//! use docmock::prelude::*;
//! use docmock_fake::MockOptions;
//!
//! let schema = Schema::builder()
//!     .field("name", docmock::string().required())
//!     .field("nickname", docmock::string());
//!
//! let opts = MockOptions::default().required_only(true).seed(42);
//! let a = docmock_fake::generate_mock_with(&schema, &opts).unwrap();
//! let b = docmock_fake::generate_mock_with(&schema, &opts).unwrap();
//! assert_eq!(a, b);
//! assert!(a.get("nickname").is_none());
//! ```

mod assemble;
mod constraints;
mod dict;
mod dispatch;
pub mod error;
pub mod heuristics;
mod options;
pub mod synth;

use chrono::{DateTime, Utc};
use docmock::input::SchemaInput;
use docmock::schema::Schema;
use docmock::value::MockValue;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use assemble::{join_path, Assembler};

pub use constraints::ConstraintSet;
pub use docmock;
pub use error::MockError;
pub use options::{FallbackPolicy, MockOptions, DEFAULT_MAX_DEPTH};
pub use synth::{DefaultSynthesizer, Synthesizer};

// ───────────────────────── public convenience API ──────────────────────────

/// Generate one mock document with default options.
///
/// Fails with [`MockError::InvalidSchema`] when `input` is not a schema.
pub fn generate_mock<I: SchemaInput + ?Sized>(input: &I) -> Result<MockValue, MockError> {
    MockGen::new().generate(input)
}

/// Generate one mock document with explicit options. A seed in `options`
/// makes the output reproducible.
pub fn generate_mock_with<I: SchemaInput + ?Sized>(
    input: &I,
    options: &MockOptions,
) -> Result<MockValue, MockError> {
    match options.seed {
        Some(seed) => MockGen::with_rng(StdRng::seed_from_u64(seed))
            .with_options(options.clone())
            .generate(input),
        None => MockGen::new().with_options(options.clone()).generate(input),
    }
}

/// Generate with a specific seed for reproducible output.
pub fn generate_mock_seeded<I: SchemaInput + ?Sized>(
    input: &I,
    seed: u64,
) -> Result<MockValue, MockError> {
    generate_mock_with(input, &MockOptions::default().seed(seed))
}

/// Generate `count` documents from the same schema with default options.
pub fn generate_many<I: SchemaInput + ?Sized>(
    input: &I,
    count: usize,
) -> Result<Vec<MockValue>, MockError> {
    generate_many_with(input, count, &MockOptions::default())
}

/// Generate `count` documents with explicit options. With a seed, the whole
/// batch is reproducible: one RNG is seeded and drawn from in turn.
pub fn generate_many_with<I: SchemaInput + ?Sized>(
    input: &I,
    count: usize,
    options: &MockOptions,
) -> Result<Vec<MockValue>, MockError> {
    let schema = input.to_schema()?;
    match options.seed {
        Some(seed) => MockGen::with_rng(StdRng::seed_from_u64(seed))
            .with_options(options.clone())
            .generate_batch(&schema, count),
        None => MockGen::new()
            .with_options(options.clone())
            .generate_batch(&schema, count),
    }
}

/// Generate one document rendered as pretty-printed JSON.
pub fn generate_json<I: SchemaInput + ?Sized>(input: &I) -> Result<String, MockError> {
    let doc = generate_mock(input)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Generate one document and validate it against the same schema.
///
/// A document that fails its own schema is reported as
/// [`MockError::Validation`] instead of being returned.
pub fn generate_validated<I: SchemaInput + ?Sized>(input: &I) -> Result<MockValue, MockError> {
    let schema = input.to_schema()?;
    let doc = MockGen::new().generate(schema.as_ref())?;
    schema.validate(&doc).map_err(MockError::Validation)?;
    Ok(doc)
}

// ──────────────────────── MockGen (configurable) ───────────────────────────

/// Stateful mock-document generator backed by any [`rand::Rng`] and any
/// [`Synthesizer`].
///
/// # Example
/// ```
/// use docmock::prelude::*;
/// use docmock_fake::{MockGen, MockOptions};
/// use rand::SeedableRng;
///
/// let schema = Schema::builder().field("count", docmock::number().min(1).max(3));
/// let mut gen = MockGen::with_rng(rand::rngs::StdRng::seed_from_u64(1))
///     .with_options(MockOptions::default().max_depth(4));
/// let doc = gen.generate(&schema).unwrap();
/// let count = doc.get("count").and_then(MockValue::as_i64).unwrap();
/// assert!((1..=3).contains(&count));
/// ```
pub struct MockGen<R: Rng, S: Synthesizer = DefaultSynthesizer> {
    rng: R,
    synth: S,
    options: MockOptions,
    /// Current sub-schema nesting level; the root schema is level 0.
    depth: usize,
    /// Anchor for default dates, fixed for the whole document.
    now: DateTime<Utc>,
}

impl MockGen<ThreadRng> {
    /// Create a generator using [`rand::thread_rng()`].
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for MockGen<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockGen<R> {
    /// Create a generator from any [`Rng`] implementation (e.g. a seeded `StdRng`).
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            synth: DefaultSynthesizer,
            options: MockOptions::default(),
            depth: 0,
            now: Utc::now(),
        }
    }
}

impl<R: Rng, S: Synthesizer> MockGen<R, S> {
    /// Replace the options. The `seed` option is ignored here: the RNG is
    /// whatever the generator was built with.
    pub fn with_options(mut self, options: MockOptions) -> Self {
        self.options = options;
        self
    }

    /// Swap the value synthesizer.
    pub fn with_synthesizer<T: Synthesizer>(self, synth: T) -> MockGen<R, T> {
        MockGen {
            rng: self.rng,
            synth,
            options: self.options,
            depth: 0,
            now: self.now,
        }
    }

    pub fn options(&self) -> &MockOptions {
        &self.options
    }

    /// Generate one mock document conforming to `input`.
    ///
    /// The root input is checked first; nested sub-schemas are trusted.
    pub fn generate<I: SchemaInput + ?Sized>(&mut self, input: &I) -> Result<MockValue, MockError> {
        let schema = input.to_schema()?;
        debug!(
            fields = schema.len(),
            required_only = self.options.required_only,
            "generating mock document"
        );
        self.depth = 0;
        self.now = self.options.reference_time.unwrap_or_else(Utc::now);
        let doc = self.generate_schema(&schema, "")?;
        debug!(
            keys = doc.as_document().map_or(0, |d| d.len()),
            "mock document generated"
        );
        Ok(doc)
    }

    fn generate_batch(mut self, schema: &Schema, count: usize) -> Result<Vec<MockValue>, MockError> {
        (0..count).map(|_| self.generate(schema)).collect()
    }

    /// Walk one schema level. `prefix` is the path of the field holding this
    /// schema (empty at the root).
    pub(crate) fn generate_schema(
        &mut self,
        schema: &Schema,
        prefix: &str,
    ) -> Result<MockValue, MockError> {
        if self.depth > self.options.max_depth {
            return Err(MockError::DepthExceeded {
                path: prefix.to_string(),
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = self.generate_fields(schema, prefix);
        self.depth -= 1;
        result
    }

    fn generate_fields(&mut self, schema: &Schema, prefix: &str) -> Result<MockValue, MockError> {
        let mut doc = Assembler::new(prefix);
        for (name, descriptor) in schema.paths() {
            let path = join_path(prefix, name);
            if self.options.required_only && !descriptor.required {
                trace!(path = %path, "skipping optional field");
                continue;
            }
            let value = self.field_value(&path, descriptor)?;
            trace!(path = %path, kind = value.type_name(), "generated field");
            doc.insert(name, value)?;
        }
        Ok(doc.finish())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MockData trait: typed API
// ═══════════════════════════════════════════════════════════════════════════

/// Types that describe their own schema and can be built from a mock
/// document.
///
/// Implement [`MockData::mock_schema`] by hand, or use [`impl_mock!`]:
///
/// ```rust
/// use docmock::prelude::*;
/// use docmock_fake::MockData;
///
/// #[derive(serde::Deserialize)]
/// struct Hobby {
///     name: String,
///     years: i64,
/// }
///
/// docmock_fake::impl_mock!(Hobby => Schema::builder()
///     .field("name", docmock::string().required())
///     .field("years", docmock::number().min(1).max(40).required()));
///
/// let hobby = Hobby::mock().unwrap();
/// assert!((1..=40).contains(&hobby.years));
/// assert!(!hobby.name.is_empty());
/// ```
pub trait MockData: DeserializeOwned {
    /// Schema describing `Self`.
    fn mock_schema() -> Schema;

    /// Generate one instance.
    fn mock() -> Result<Self, MockError> {
        from_mock(generate_mock(&Self::mock_schema())?)
    }

    /// Generate `count` instances.
    fn mock_many(count: usize) -> Result<Vec<Self>, MockError> {
        generate_many(&Self::mock_schema(), count)?
            .into_iter()
            .map(from_mock)
            .collect()
    }

    /// Generate a reproducible instance from a seed.
    fn mock_seeded(seed: u64) -> Result<Self, MockError> {
        from_mock(generate_mock_seeded(&Self::mock_schema(), seed)?)
    }
}

fn from_mock<T: DeserializeOwned>(doc: MockValue) -> Result<T, MockError> {
    Ok(serde_json::from_value(doc.to_json())?)
}

/// Implement [`MockData`] for a type from a schema expression.
///
/// ```rust,ignore
/// docmock_fake::impl_mock!(User => user_schema());
///
/// let user = User::mock()?;
/// let users = User::mock_many(10)?;
/// ```
#[macro_export]
macro_rules! impl_mock {
    ($ty:ty => $schema:expr) => {
        impl $crate::MockData for $ty {
            fn mock_schema() -> $crate::docmock::schema::Schema {
                $schema
            }
        }
    };
}

// ──────────────────── prelude ────────────────────────────────────────────

pub mod prelude {
    pub use crate::{
        generate_json, generate_many, generate_many_with, generate_mock, generate_mock_seeded,
        generate_mock_with, generate_validated, impl_mock, FallbackPolicy, MockData, MockError, MockGen, MockOptions,
    };
}
