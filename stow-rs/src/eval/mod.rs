mod encoding;
mod evaluator;
mod fitness;
mod metrics;

#[doc(inline)]
pub use encoding::Encoding;
#[doc(inline)]
pub use evaluator::Evaluator;
#[doc(inline)]
pub use metrics::Metrics;
