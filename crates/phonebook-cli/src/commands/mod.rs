use anyhow::Result;
use phonebook_core::{PhoneBook, WriterSink};
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod import;

pub type Book = PhoneBook<WriterSink<Box<dyn Write>>>;

pub struct Context<'a> {
    pub book: &'a mut Book,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
