//! Fast keyed collections built on an FNV-hashed `IndexMap`, used for every
//! service cache in the fabric (§4.1): insertion order is preserved, which
//! makes catalog-driven iteration (e.g. `RiskService::get_bucketed_risk`)
//! deterministic, and FNV is cheaper than SipHash for the short string and
//! enum keys this pipeline hashes.

/// Fast `IndexMap` using the FNV hasher for small keys like CUSIPs and trade ids.
pub type FnvIndexMap<K, V> = indexmap::IndexMap<K, V, fnv::FnvBuildHasher>;

/// Fast `IndexSet` using the FNV hasher, for the same reason as [`FnvIndexMap`].
pub type FnvIndexSet<T> = indexmap::IndexSet<T, fnv::FnvBuildHasher>;
