use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd {
        if !*print {
            info("Nothing to do: use --print to show the internal log.");
            return Ok(());
        }

        let pool = open_db(&cfg.database)?;
        let rows = load_log(&pool.conn, *limit)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("DATE", 25),
            Column::new("OPERATION", 20),
            Column::new("TARGET", 40),
            Column::new("MESSAGE", 0),
        ]);
        for r in rows {
            table.add_row(vec![
                r.id.to_string(),
                r.date,
                r.operation,
                r.target,
                r.message,
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
