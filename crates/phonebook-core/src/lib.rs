pub mod book;
pub mod directory;
pub mod domain;
pub mod dto;
pub mod error;
pub mod import;
pub mod report;
pub mod rules;
pub mod table;

pub use book::PhoneBook;
pub use directory::{contact_key, Directory, DEFAULT_KEY_SEPARATOR};
pub use domain::*;
pub use dto::*;
pub use error::{CoreError, ImportError};
pub use import::{
    import_lines, split_lines, FileSource, InlineSource, TextSource, DEFAULT_FIELD_SEPARATOR,
};
pub use report::{MemorySink, ReportSink, WriterSink};
pub use rules::*;
pub use table::{render_table, TableLabels};
