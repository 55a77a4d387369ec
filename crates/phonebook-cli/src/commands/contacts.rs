use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use phonebook_core::Contact;
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Case-sensitive substring; empty matches every contact
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub query: String,
}

#[derive(Debug, Args)]
pub struct TableArgs {}

#[derive(Debug, Args)]
pub struct ShowArgs {}

pub fn add(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let outcome = ctx.book.add(&args.name, &args.phone, &args.email);
    if ctx.json {
        print_json(&outcome)?;
    }

    if !outcome.is_success() {
        return Err(invalid_input(format!(
            "{} for {}",
            outcome.description, outcome.data.name
        )));
    }

    if !ctx.json {
        println!("added {} <{}>", outcome.data.name, outcome.data.email);
    }
    Ok(())
}

pub fn find(ctx: &mut Context<'_>, args: FindArgs) -> Result<()> {
    let found = ctx.book.find(&args.query);
    if ctx.json {
        return print_json(&found);
    }

    // The book only reports matches for a non-empty query.
    if args.query.is_empty() {
        print_contacts(&found);
    } else if found.is_empty() {
        println!("no contacts found");
    }
    Ok(())
}

pub fn remove(ctx: &mut Context<'_>, args: RemoveArgs) -> Result<()> {
    let outcome = ctx.book.remove(&args.query);
    if ctx.json {
        print_json(&outcome)?;
    }
    Ok(())
}

pub fn table(ctx: &mut Context<'_>, _args: TableArgs) -> Result<()> {
    if ctx.json {
        return print_json(&ctx.book.table_lines());
    }
    ctx.book.show_table();
    Ok(())
}

pub fn show(ctx: &mut Context<'_>, _args: ShowArgs) -> Result<()> {
    let book = ctx.book.show_book();
    if ctx.json {
        return print_json(book);
    }
    print_contacts(book);
    Ok(())
}

fn print_contacts(contacts: &BTreeMap<String, Contact>) {
    if contacts.is_empty() {
        println!("no contacts");
        return;
    }
    for contact in contacts.values() {
        println!("{}", contact.summary_line());
    }
}
