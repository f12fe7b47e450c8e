//! Chemical identifier lookup.
//!
//! The diffusivity-by-identifier path needs a molecular formula, a SMILES
//! string and a molar mass. Where they come from (a bundled table, a
//! PubChem client, a file) is up to the [`ChemicalRepository`] the caller
//! injects. Missing fields are reported as `None`; the computation fails only
//! when it needs one of them.

use crate::diffusivity::{AtomCounts, diffusivity};
use crate::error::{FluidError, FluidResult};
use crate::formula::{parse_formula, ring_count};
use crate::gas::CarrierGas;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::trace;

/// What a repository knows about one identifier (CAS number, name, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChemicalRecord {
    pub id: String,
    pub name: Option<String>,
    pub formula: Option<String>,
    pub smiles: Option<String>,
    /// Molar mass [g/mol]
    pub molar_mass: Option<f64>,
}

impl ChemicalRecord {
    /// Record with every field missing.
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn is_missing(&self) -> bool {
        self.formula.is_none() && self.smiles.is_none() && self.molar_mass.is_none()
    }
}

/// Source of chemical records.
///
/// Implementations must be thread-safe; a failed lookup returns a record
/// whose fields are `None` rather than an error.
pub trait ChemicalRepository: Send + Sync {
    fn lookup(&self, id: &str) -> ChemicalRecord;
}

/// Fixed in-memory table keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: HashMap<String, ChemicalRecord>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ChemicalRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn with(mut self, record: ChemicalRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ChemicalRepository for InMemoryRepository {
    fn lookup(&self, id: &str) -> ChemicalRecord {
        self.records
            .get(id)
            .cloned()
            .unwrap_or_else(|| ChemicalRecord::missing(id))
    }
}

/// Read-through cache in front of a slower repository.
#[derive(Debug, Default)]
pub struct CachedRepository<R> {
    inner: R,
    cache: RwLock<HashMap<String, ChemicalRecord>>,
}

impl<R: ChemicalRepository> CachedRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached identifiers.
    pub fn cached(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }
}

impl<R: ChemicalRepository> ChemicalRepository for CachedRepository<R> {
    fn lookup(&self, id: &str) -> ChemicalRecord {
        if let Ok(cache) = self.cache.read() {
            if let Some(record) = cache.get(id) {
                return record.clone();
            }
        }

        trace!(id, "chemical cache miss");
        let record = self.inner.lookup(id);
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(id.to_string(), record.clone());
        }
        record
    }
}

/// Atom counts (ring count from SMILES) and molar mass of a record.
pub fn structure_of(record: &ChemicalRecord) -> FluidResult<(AtomCounts, f64)> {
    let missing = |field| FluidError::MissingData {
        id: record.id.clone(),
        field,
    };
    let formula = record.formula.as_deref().ok_or_else(|| missing("formula"))?;
    let smiles = record.smiles.as_deref().ok_or_else(|| missing("SMILES"))?;
    let molar_mass = record.molar_mass.ok_or_else(|| missing("molar mass"))?;

    let atoms = AtomCounts::from_elements(&parse_formula(formula)?, ring_count(smiles))?;
    Ok((atoms, molar_mass))
}

/// Diffusivity constant Cag of the chemical `id` in `gas`.
pub fn diffusivity_by_id(
    repo: &dyn ChemicalRepository,
    id: &str,
    gas: CarrierGas,
) -> FluidResult<f64> {
    let record = repo.lookup(id);
    let (atoms, molar_mass) = structure_of(&record)?;
    diffusivity(molar_mass, &atoms, gas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn toluene() -> ChemicalRecord {
        ChemicalRecord {
            id: "108-88-3".into(),
            name: Some("toluene".into()),
            formula: Some("C7H8".into()),
            smiles: Some("CC1=CC=CC=C1".into()),
            molar_mass: Some(92.14),
        }
    }

    #[test]
    fn lookup_by_id_matches_counts() {
        let repo = InMemoryRepository::new().with(toluene());
        let by_id = diffusivity_by_id(&repo, "108-88-3", CarrierGas::He).unwrap();
        let direct = diffusivity(92.14, &AtomCounts::chon(7, 8, 0, 0, 1), CarrierGas::He).unwrap();
        assert_eq!(by_id, direct);
    }

    #[test]
    fn unknown_id_yields_missing_record() {
        let repo = InMemoryRepository::new();
        let record = repo.lookup("0-00-0");
        assert!(record.is_missing());
        let err = diffusivity_by_id(&repo, "0-00-0", CarrierGas::He).unwrap_err();
        assert!(matches!(err, FluidError::MissingData { field: "formula", .. }));
    }

    #[test]
    fn missing_smiles_fails_explicitly() {
        let mut record = toluene();
        record.smiles = None;
        let repo = InMemoryRepository::new().with(record);
        let err = diffusivity_by_id(&repo, "108-88-3", CarrierGas::He).unwrap_err();
        assert!(matches!(err, FluidError::MissingData { field: "SMILES", .. }));
    }

    struct CountingRepository {
        inner: InMemoryRepository,
        calls: AtomicUsize,
    }

    impl ChemicalRepository for CountingRepository {
        fn lookup(&self, id: &str) -> ChemicalRecord {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.lookup(id)
        }
    }

    #[test]
    fn cache_reads_through_once() {
        let cached = CachedRepository::new(CountingRepository {
            inner: InMemoryRepository::new().with(toluene()),
            calls: AtomicUsize::new(0),
        });

        let first = cached.lookup("108-88-3");
        let second = cached.lookup("108-88-3");
        assert_eq!(first, second);
        assert_eq!(cached.inner.calls.load(Ordering::Relaxed), 1);
        assert_eq!(cached.cached(), 1);
    }
}
