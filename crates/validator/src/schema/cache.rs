//! Process-wide schema cache and the [`Model`] trait
//!
//! Each record type builds its schema at most once per process. The first
//! caller of [`SchemaCache::get`] runs [`Model::schema`]; concurrent callers
//! block on the same cell and every later caller gets the cached schema.

use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;
use std::sync::{LazyLock, OnceLock};

use dashmap::DashMap;

use super::Schema;
use crate::foundation::ValidationOutcome;

// ============================================================================
// MODEL
// ============================================================================

/// A record type that declares its own validation schema.
///
/// Implement [`schema`](Self::schema); the remaining methods validate
/// through the cached instance.
///
/// # Examples
///
/// ```rust
/// use strata_validator::prelude::*;
///
/// struct Payment {
///     amount: i64,
///     currency: String,
/// }
///
/// impl Model for Payment {
///     fn schema() -> Schema<Self> {
///         Schema::new()
///             .field("amount", |p: &Payment| &p.amount, RulePack::new().min(1))
///             .field(
///                 "currency",
///                 |p: &Payment| &p.currency,
///                 builder(|f, v| validate(f, v).required().in_set(["EUR", "USD"])),
///             )
///     }
/// }
///
/// let payment = Payment { amount: 0, currency: "GBP".into() };
/// assert_eq!(payment.validate().errors().fields(), ["amount", "currency"]);
/// ```
pub trait Model: Sized + 'static {
    /// Builds the schema for this type.
    ///
    /// Called at most once per process through [`SchemaCache`].
    fn schema() -> Schema<Self>;

    /// The process-wide schema instance.
    fn cached_schema() -> &'static Schema<Self> {
        SchemaCache::<Self>::get()
    }

    /// Validates `self` against the cached schema.
    fn validate(&self) -> ValidationOutcome {
        Self::cached_schema().validate(self)
    }

    /// Returns true if `self` passes every check.
    fn is_valid(&self) -> bool {
        self.validate().ok()
    }

    /// Validates `record` against the cached schema.
    fn validate_record(record: &Self) -> ValidationOutcome {
        record.validate()
    }
}

// ============================================================================
// SCHEMA CACHE
// ============================================================================

type Entry = &'static (dyn Any + Send + Sync);

/// One leaked `OnceLock<Schema<R>>` per record type, keyed by `TypeId`.
static REGISTRY: LazyLock<DashMap<TypeId, Entry>> = LazyLock::new(DashMap::new);

/// Access to the process-wide schema of a [`Model`].
///
/// The cache lives until the process exits. Schemas are never rebuilt.
pub struct SchemaCache<R>(PhantomData<fn() -> R>);

impl<R: Model> SchemaCache<R> {
    /// Returns the schema of `R`, building it on first use.
    pub fn get() -> &'static Schema<R> {
        Self::cell().get_or_init(|| {
            let schema = R::schema();
            tracing::debug!(
                record = type_name::<R>(),
                checks = schema.len(),
                "schema constructed"
            );
            schema
        })
    }

    /// Returns true once the schema of `R` has been built.
    pub fn is_initialized() -> bool {
        Self::cell().get().is_some()
    }

    /// Validates `record` against the cached schema.
    pub fn validate(record: &R) -> ValidationOutcome {
        Self::get().validate(record)
    }

    /// Returns true if `record` passes every check.
    pub fn is_valid(record: &R) -> bool {
        Self::validate(record).ok()
    }

    /// The cell for `R`. The registry guard is released before the cell is
    /// initialized, so schema construction never runs under the map lock.
    fn cell() -> &'static OnceLock<Schema<R>> {
        let entry: Entry = *REGISTRY.entry(TypeId::of::<R>()).or_insert_with(|| {
            let cell: &'static OnceLock<Schema<R>> = Box::leak(Box::new(OnceLock::new()));
            cell
        });
        match entry.downcast_ref::<OnceLock<Schema<R>>>() {
            Some(cell) => cell,
            None => unreachable!("schema registry entry for {} has a foreign type", type_name::<R>()),
        }
    }
}
