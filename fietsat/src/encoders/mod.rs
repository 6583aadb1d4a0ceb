//! Cardinality encoders turn "at most / at least / exactly `k` of these literals" into clauses.
//!
//! The formulation only talks to the [`CardinalityEncoder`] trait; which encoder is used is
//! decided by a [`CardinalityEncoding`] option.
mod cardinality_encoder;
mod pairwise_encoder;
mod sequential_counter_encoder;

pub use cardinality_encoder::*;
pub use pairwise_encoder::PairwiseEncoder;
pub use sequential_counter_encoder::SequentialCounterEncoder;
