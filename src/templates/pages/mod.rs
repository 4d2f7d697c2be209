pub mod list;
pub mod summary;
pub mod wizard;

pub use list::{list_page, ListVm};
pub use summary::{summary_page, SummaryVm};
pub use wizard::{wizard_page, WizardVm};
