//! Interactive librarian console
//!
//! Maps menu selections to registry operations and renders results.
//! All parsing and prompting lives here; the registry never sees raw
//! operator input.

use crate::output::{self, print_error, print_info, print_success, print_warning, OutputFormat};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use opac_registry::MembershipRegistry;
use opac_types::{Member, MemberId, MemberUpdate};
use serde::Serialize;
use tabled::Tabled;

const MENU: &[&str] = &[
    "Register member",
    "List members",
    "Update member",
    "Remove member",
    "Total fees collected",
    "Average fee per member",
    "Exit",
];

/// Run the console loop over a caller-owned registry
pub fn run(format: OutputFormat) -> Result<()> {
    let mut registry = MembershipRegistry::new();

    loop {
        let choice = Select::new()
            .with_prompt("Librarian console")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => register_member(&mut registry)?,
            1 => list_members(&registry, format),
            2 => update_member(&mut registry)?,
            3 => remove_member(&mut registry)?,
            4 => print_info(&format!(
                "Total membership fees collected: ${}",
                registry.total_fee()
            )),
            5 => print_info(&format!(
                "Average membership fee per member: ${:.2}",
                registry.average_fee()
            )),
            _ => {
                print_info("Exiting");
                break;
            }
        }
    }

    Ok(())
}

/// Table row for member display
#[derive(Debug, Serialize, Tabled)]
struct MemberRow {
    id: String,
    name: String,
    email: String,
    age: u32,
    tier: String,
    fee: String,
}

impl From<&Member> for MemberRow {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            email: m.email.clone(),
            age: m.age,
            tier: m.tier().to_string(),
            fee: format!("${}", m.fee()),
        }
    }
}

fn register_member(registry: &mut MembershipRegistry) -> Result<()> {
    let id: String = Input::new()
        .with_prompt("Member ID (blank to generate)")
        .allow_empty(true)
        .interact_text()?;
    let id = if id.trim().is_empty() {
        MemberId::generate()
    } else {
        MemberId::new(id.trim())
    };

    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let age: u32 = Input::new().with_prompt("Age").interact_text()?;

    match registry.register(Member::new(id.clone(), name, email, age)) {
        Ok(()) => print_success(&format!("Registered member: {}", id)),
        Err(e) => print_error(&e.to_string()),
    }

    Ok(())
}

fn list_members(registry: &MembershipRegistry, format: OutputFormat) {
    let mut members = registry.roster();
    members.sort_by(|a, b| a.id.0.cmp(&b.id.0));

    let rows: Vec<MemberRow> = members.into_iter().map(MemberRow::from).collect();
    output::print_output(rows, format);
}

fn update_member(registry: &mut MembershipRegistry) -> Result<()> {
    let id: String = Input::new().with_prompt("Member ID").interact_text()?;
    let id = MemberId::new(id.trim());

    match registry.get(&id) {
        Some(current) => print_info(&format!(
            "Updating {} ({}, age {})",
            current.name, current.email, current.age
        )),
        None => {
            print_error(&format!("Member not found: {}", id));
            return Ok(());
        }
    }

    // Blank keeps the stored value; a literal '-' clears it to empty.
    let name: String = Input::new()
        .with_prompt("New name (blank keeps, '-' clears)")
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::new()
        .with_prompt("New email (blank keeps, '-' clears)")
        .allow_empty(true)
        .interact_text()?;
    let age_input: String = Input::new()
        .with_prompt("New age (blank keeps)")
        .allow_empty(true)
        .interact_text()?;

    let mut update = MemberUpdate::new();
    match name.trim() {
        "" => {}
        "-" => update = update.with_name(""),
        other => update = update.with_name(other),
    }
    match email.trim() {
        "" => {}
        "-" => update = update.with_email(""),
        other => update = update.with_email(other),
    }
    if !age_input.trim().is_empty() {
        match age_input.trim().parse::<u32>() {
            Ok(age) => update = update.with_age(age),
            Err(_) => {
                print_warning("Invalid age; member left unchanged");
                return Ok(());
            }
        }
    }

    if update.is_empty() {
        print_info("Nothing to update");
        return Ok(());
    }

    match registry.update(&id, update) {
        Ok(()) => print_success(&format!("Updated member: {}", id)),
        Err(e) => print_error(&e.to_string()),
    }

    Ok(())
}

fn remove_member(registry: &mut MembershipRegistry) -> Result<()> {
    let id: String = Input::new().with_prompt("Member ID").interact_text()?;
    let id = MemberId::new(id.trim());

    let confirm = Confirm::new()
        .with_prompt(format!("Remove member {}?", id))
        .default(false)
        .interact()
        .unwrap_or(false);

    if !confirm {
        print_error("Aborted");
        return Ok(());
    }

    match registry.remove(&id) {
        Ok(member) => print_success(&format!("Removed member: {} ({})", member.name, member.id)),
        Err(e) => print_error(&e.to_string()),
    }

    Ok(())
}
