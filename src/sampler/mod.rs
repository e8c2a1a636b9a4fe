//! MCMC sampling.
//!
//! The sampler is deliberately model-specific: it drives the hierarchical
//! consumption model's log posterior with an adaptive random-walk
//! Metropolis–Hastings kernel and multiple seeded chains. See
//! [`metropolis::sample`].

mod metropolis;
mod trace;

pub use metropolis::sample;
pub use trace::Trace;
