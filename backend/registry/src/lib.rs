//! `scanpost-registry` — the in-process address store.

pub mod store;

pub use store::AddressStore;
