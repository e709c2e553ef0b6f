use crate::libs::formatter::{DATE_FORMAT, TIME_FORMAT};
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table, in the order given by the caller.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "DUE DATE", "DUE TIME", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![
                task.name,
                task.due_date.format(DATE_FORMAT),
                task.due_time.format(TIME_FORMAT),
                task.priority
            ]);
        }
        table.printstd();

        Ok(())
    }
}
