//! Tokenizer and cyclic substitution engine.
//!
//! Everything that decides what the output text looks like lives here. The
//! engine has no I/O of its own; callers hand it two strings and get one back.
//!
//! ## How the parts work together
//!
//! ```text
//! placeholder text ── Corpus::from_text ──► Corpus (non-empty, ordered)
//!                     (corpus.rs)              │
//!                                              │ Corpus::cursor
//!                                              v
//! input ── segments() ──► Skip / Token ──► Substituter::run (substitute.rs)
//!          (tokenizer.rs)                    - Skip: copy verbatim
//!                                            - Token: Cursor::next_token (cursor.rs)
//!                                                     apply_case (case.rs)
//!                                              │
//!                                              v
//!                                          RunResult (text + metrics.rs)
//! ```
//!
//! The pass is strictly sequential: the cursor is advanced once per token in
//! document order, so the output is a pure function of the input, the corpus
//! and the starting position (always 0).
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: the word pattern and the lazy `tokens` / `segments`
//!   iterators.
//! - `corpus.rs`: one-time extraction of the replacement tokens.
//! - `cursor.rs`: the infinite, wrapping draw over a corpus.
//! - `case.rs`: capitalization classes and how they are re-applied.
//! - `substitute.rs`: the single pass tying the above together.
//! - `metrics.rs`: counts and timing for a pass.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events (`debug` per run, `trace` per token,
//! `warn` per soft failure). The binary installs a subscriber when `RUST_LOG`
//! is set, e.g. `RUST_LOG=nurdsem=trace`.

#[path = "engine/case.rs"]
mod case;
#[path = "engine/corpus.rs"]
mod corpus;
#[path = "engine/cursor.rs"]
mod cursor;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/substitute.rs"]
mod substitute;
#[path = "engine/tokenizer.rs"]
mod tokenizer;


pub use case::{CaseClass, apply_case};
pub use corpus::Corpus;
pub use cursor::Cursor;
pub use metrics::{RunMetrics, RunResult};
pub use substitute::{Substituter, Substitution};
pub use tokenizer::{Segments, Tokens, segments, tokens};
