//! In-memory test doubles for the pipeline ports and observer.

pub mod mock_loader;
pub mod mock_observer;
pub mod mock_writer;

#[allow(unused_imports)]
pub use mock_loader::MockAdvisorLoader;
#[allow(unused_imports)]
pub use mock_observer::{ObservedEvent, RecordingObserver};
#[allow(unused_imports)]
pub use mock_writer::MockAdvisorWriter;
