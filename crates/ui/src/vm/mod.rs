mod summary_vm;

pub use summary_vm::{SectionSummaryRow, SummaryVm};
