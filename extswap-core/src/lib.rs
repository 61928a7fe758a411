#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod engine;
pub mod extension;
pub mod operations;
pub mod output;
pub mod preview;
pub mod rules;
pub mod selector;

pub use config::Config;
pub use engine::{rename_files, RenameEntry, RenameError, RenameReport};
pub use extension::{
    reverse_extension, ExtensionError, ExtensionToken, SelectionSet, DEFAULT_CHOICES,
};
pub use operations::{edit_operation, EditRequest};
pub use output::{EditResult, OutputFormat, OutputFormatter};
pub use preview::{
    render_banner, render_done, render_file_list, render_report_table, should_use_color,
};
pub use rules::{Direction, RenameRule, RuleTable};
pub use selector::{select_files, ExtensionMatcher};
