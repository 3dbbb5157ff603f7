//! The conversion pipeline.
//!
//! A [`ConversionSession`] owns the user's selection and the results of the
//! most recent run. Runs are sequential: each file is loaded, flattened and
//! encoded before the next one is read, so at most one decoded bitmap is
//! alive at a time.
//!
//! # State machine
//!
//! `Idle -> Running -> Completed`, or `Running -> Halted` when a file fails
//! under [`FailurePolicy::Abort`](crate::options::FailurePolicy). Converting
//! an empty selection emits a notice and leaves the state untouched.

mod item;
mod observer;
mod session;

pub use item::{ConvertedItem, SourceFile, SOURCE_MIME};
pub use observer::{ConversionObserver, Notice, Preview, RecordingObserver};
pub use session::{ConversionSession, PipelineError, PipelineState, RunReport, SkippedFile};
