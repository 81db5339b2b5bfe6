//! Crossfade envelopes for blending an ordered sequence of images across a
//! fixed number of output frames.
//!
//! Each image gets a per-frame weight curve ([`Envelope`]) that rises from 0 to 1
//! while the previous image falls, then falls while the next image rises. A
//! compositor uses the weights as mix factors; this crate only produces the numbers.
//!
//! # Layout of an envelope
//!
//! The timeline of `number_of_frames` frames is cut into portions of
//! `floor((number_of_frames - 1) / (number_of_images - 1))` frames:
//!
//! - image 1 falls 1 -> 0 over the first portion,
//! - image `k` in the middle rises over portion `k - 1` and falls over portion `k`,
//! - the last image rises over portion `number_of_images - 1`.
//!
//! Frames outside an image's portions are 0.0. Because the portion length
//! truncates, the last frames of the timeline are left at 0.0 for every image
//! under [`TailMode::Truncate`] (the default). [`TailMode::AnchorEnd`] moves the
//! last image's rise onto the final frame instead.
//!
//! # Host helpers
//!
//! [`ActivationMask`] and [`at`] turn an image count into a fixed-length mask and
//! query it. [`NodeKind`] and [`invoke`] describe and dispatch the three routines
//! the way a node-graph host registers them.
//!
//! All routines are pure and may be called from any thread.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod envelope;
mod foundation;
mod mask;
mod nodes;

pub use envelope::generator::{
    DEFAULT_TAIL_MODE, Envelope, EnvelopeOptions, EnvelopeRequest, ImageRole, MIN_PORTION_LENGTH,
    TailMode, generate, generate_with, portion_length,
};
pub use envelope::plan::CrossfadePlan;
pub use envelope::ramp::{Ramp, ramp};
pub use foundation::core::{FrameIndex, FrameRange};
pub use foundation::error::{CrossfadeError, CrossfadeResult};
pub use mask::activation::{ActivationMask, DEFAULT_MASK_CAPACITY, at, mask};
pub use nodes::registry::{
    IndexArg, NODE_CATEGORY, NodeInvocation, NodeKind, NodeOutput, invoke, invoke_json,
};
