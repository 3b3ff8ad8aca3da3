use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::Employee;
use roster::validation::ValidationResult;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMNS: [(&str, usize); 8] = [
    ("ID", 4),
    ("Name", 18),
    ("Email", 24),
    ("Address", 22),
    ("Phone", 15),
    ("Gender", 6),
    ("Hobbies", 20),
    ("Designation", 16),
];

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_table(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(title, width)| pad_to_width(title, *width))
        .collect();
    println!("{}", header.join(" ").bold());

    for employee in employees {
        let cells = row_cells(employee);
        let line: Vec<String> = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| pad_to_width(&truncate_to_width(cell, *width), *width))
            .collect();
        println!("{}", line.join(" "));
    }
}

pub fn print_employee(employee: &Employee) {
    let cells = row_cells(employee);
    for ((title, _), value) in COLUMNS.iter().zip(cells.iter()) {
        println!("{:>12}  {}", title.dimmed(), value);
    }
}

pub fn print_checked(results: &[ValidationResult]) {
    for result in results {
        if result.valid {
            println!("{}: {}", result.field, "ok".green());
        } else {
            println!("{}: {}", result.field, result.message.red());
        }
    }
}

fn row_cells(employee: &Employee) -> [String; 8] {
    [
        employee.id.to_string(),
        employee.name.clone(),
        employee.email.clone(),
        employee.address.clone(),
        employee.phone.clone(),
        employee.gender.to_string(),
        employee.hobbies.join(", "),
        employee.designation.clone(),
    ]
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Eng", 3), "Eng");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let out = truncate_to_width("Senior Engineer", 8);
        assert_eq!(out, "Senior …");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn pads_to_column_width() {
        assert_eq!(pad_to_width("ID", 4), "ID  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
