pub mod cancellation;
pub mod clock;
pub mod random;

pub use cancellation::{Cancellable, CancellationToken, NeverCancelled};
pub use clock::{IClock, Tick};
pub use random::IRandomSource;
