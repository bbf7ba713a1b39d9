//! # quarterlog CLI
//!
//! One invocation is one cycle: load the store, apply the requested
//! action, write the store back sorted and reindexed.

use std::process;

use clap::Parser as ClapParser;
use tracing::info;

use quarterlog::cli::{Action, Args};
use quarterlog::core::filter::{filter_by_day, filter_by_week};
use quarterlog::core::ops::{add, checked_index, edit_message_at, remove_at, retime_at};
use quarterlog::display::{render_table, render_week};
use quarterlog::store::Store;
use quarterlog::{Item, QuarterlogError, logging};

fn main() {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), QuarterlogError> {
    let action = args.action()?;
    let store = Store::new(args.store_config());
    info!(path = %store.path().display(), ?action, "running");

    let items = store.load()?;

    let items = match action {
        Action::Add { message } => {
            let items = add(items, Item::new(message));
            println!("Item was added.");
            items
        }
        Action::Today => {
            println!("\n");
            println!("{}", render_table(&filter_by_day(&items, None)));
            println!();
            items
        }
        Action::Day { day } => {
            println!("\n");
            println!("{}", render_table(&filter_by_day(&items, Some(day))));
            println!();
            items
        }
        Action::Week { date } => {
            println!();
            println!("{}", render_week(&filter_by_week(&items, date)));
            items
        }
        Action::Remove { index } => {
            let index = checked_index(index, items.len())?;
            let items = remove_at(&items, index)?;
            println!("Item was removed from log");
            items
        }
        Action::Edit { index, message } => {
            let index = checked_index(index, items.len())?;
            let items = edit_message_at(&items, index, message)?;
            println!("Item message updated");
            items
        }
        Action::Retime { index, start_time } => {
            let index = checked_index(index, items.len())?;
            println!("\nItem to be updated:\n");
            println!("{}", render_table(&items[index..=index]));
            let items = retime_at(&items, index, start_time)?;
            println!("\nItem updated");
            items
        }
        Action::All => {
            println!("{}", render_table(&items));
            println!();
            items
        }
    };

    store.save(&items)
}
