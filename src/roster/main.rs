use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdResult, Rejection, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::EmployeeFields;
use roster::store::fs::FileStorage;
use roster::validation::{Field, ValidationReport};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands, FieldArgs};
use cli::print::{print_checked, print_employee, print_messages, print_table};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<FileStorage>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::logging::init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Check { field, values }) => handle_check(&ctx, field.into(), values),
        Some(Commands::ResetSession { yes }) => handle_reset_session(&mut ctx, yes),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let config = RosterConfig::load(&data_dir)?;
    let session = cli
        .session
        .clone()
        .unwrap_or_else(|| config.default_session.clone());

    tracing::debug!(data_dir = %data_dir.display(), %session, "opening session");
    let storage = FileStorage::for_session(&data_dir, &session)?;
    Ok(AppContext {
        api: RosterApi::new(storage),
    })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine data dir".to_string()))
}

fn handle_add(ctx: &mut AppContext, args: FieldArgs) -> Result<()> {
    let fields = overlay(EmployeeFields::default(), args);
    let result = ctx.api.submit(&fields)?;
    finish(result)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    print_table(&result.listed_employees);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.show(id);
    if let Some(rejection) = result.rejection {
        return Err(into_error(rejection));
    }
    for employee in &result.listed_employees {
        print_employee(employee);
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u64, args: FieldArgs) -> Result<()> {
    let requested = ctx.api.edit_request(id);
    if let Some(rejection) = requested.rejection {
        return Err(into_error(rejection));
    }

    let fields = overlay(ctx.api.candidate().clone(), args);
    let result = ctx.api.submit(&fields)?;
    finish(result)
}

fn handle_delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<()> {
    let shown = ctx.api.show(id);
    if let Some(rejection) = shown.rejection {
        return Err(into_error(rejection));
    }

    if !yes {
        let name = shown
            .listed_employees
            .first()
            .map(|e| e.name.as_str())
            .unwrap_or_default();
        if !confirm(&format!("Delete employee \"{}\"?", name))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete(id)?;
    finish(result)
}

fn handle_check(ctx: &AppContext, field: Field, values: Vec<String>) -> Result<()> {
    let mut fields = EmployeeFields::default();
    let joined = values.join(" ");
    match field {
        Field::Name => fields.name = joined,
        Field::Email => fields.email = joined,
        Field::Address => fields.address = joined,
        Field::Phone => fields.phone = joined,
        Field::Gender => fields.gender = joined,
        Field::Hobbies => fields.hobbies = values,
        Field::Designation => fields.designation = joined,
    }

    let result = ctx.api.check_field(field, &fields);
    print_checked(&result.checked);
    let report = ValidationReport {
        results: result.checked,
    };
    if report.is_valid() {
        Ok(())
    } else {
        Err(RosterError::Validation(report))
    }
}

fn handle_reset_session(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Remove every employee in this session?")? {
        println!("Cancelled.");
        return Ok(());
    }
    let result = ctx.api.clear_session()?;
    print_messages(&result.messages);
    Ok(())
}

/// Applies the flags that were given on top of `base`.
fn overlay(mut base: EmployeeFields, args: FieldArgs) -> EmployeeFields {
    if let Some(v) = args.name {
        base.name = v;
    }
    if let Some(v) = args.email {
        base.email = v;
    }
    if let Some(v) = args.address {
        base.address = v;
    }
    if let Some(v) = args.phone {
        base.phone = v;
    }
    if let Some(v) = args.gender {
        base.gender = v;
    }
    if !args.hobbies.is_empty() {
        base.hobbies = args.hobbies;
    }
    if let Some(v) = args.designation {
        base.designation = v;
    }
    base
}

fn finish(result: CmdResult) -> Result<()> {
    match result.rejection {
        Some(rejection) => Err(into_error(rejection)),
        None => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn into_error(rejection: Rejection) -> RosterError {
    match rejection {
        Rejection::Invalid(report) => RosterError::Validation(report),
        Rejection::NotFound(id) => RosterError::NotFound(id),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
