//! step-fold: a guarded, stack-safe step-function driver with keyed-entry
//! container conversions.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: generalize bounded loops and left folds into one reusable,
//!   safety-guarded step loop, with the container plumbing around it kept
//!   as plain pure functions.
//! - Layers:
//!   - Driver<S, R>: the step loop. Each step derives a new state from the
//!     previous state/result, checks a stop predicate before transforming,
//!     then derives the replacement result. A stall guard aborts runs
//!     whose state fails to advance.
//!   - EntryMap<K, V, S>: insertion-ordered keyed mapping; a hash index
//!     over ordered storage, so lookups are O(1) average and enumeration
//!     order is deterministic.
//!   - entries: free-function conversions between sequences and mappings
//!     plus a uniform map/reduce view, with `IntoIterator` as the shared
//!     entries view.
//!   - EntryOps: opt-in method adapter; import-scoped, delegates entirely
//!     to the free functions.
//!
//! Constraints
//! - Single-threaded, synchronous, no I/O; a run exclusively owns its
//!   state and result, and nothing is shared across runs.
//! - The driver is an explicit loop: step count is never bounded by
//!   call-stack depth, and no native-recursion fallback exists.
//! - A fully-defaulted driver terminates immediately with an absent
//!   result; no configuration can make the crate loop by default.
//! - The core raises no errors of its own. Panics from caller-supplied
//!   closures cross the crate unmodified; container-shape violations are
//!   compile-time type errors.
//!
//! Stall semantics
//! - The guard compares successive states with `PartialEq` and fires only
//!   when the freshly produced state equals the previous one. The stalled
//!   step's transform has already run by then; its output is discarded and
//!   the previous result is returned. `Driver::run_where` swaps in an
//!   explicit equality strategy when `PartialEq` is the wrong notion of
//!   advancement for a state type.
//!
//! Notes and non-goals
//! - No blanket method injection on foreign container types; the adapter
//!   trait must be imported to take effect.
//! - No cancellation or timeout mechanism; early termination is encoded in
//!   the stop predicate.
//! - EntryMap never removes entries; overwrites keep the key's original
//!   insertion position.

pub mod driver;
pub mod entry_map;

mod entries;
mod ext;

// Public surface
pub use driver::{run, Driver, Halt};
pub use entries::{
    entries, map_entries, mapping_to_sequence, mapping_to_sequence_with, reduce_entries,
    sequence_to_mapping, sequence_to_mapping_with,
};
pub use entry_map::EntryMap;
pub use ext::EntryOps;
