//! Line-driven intake form.
//!
//! Reads one command per line, edits a [`SymptomForm`] while collecting and shows the result
//! while displaying. `new` resets both the workflow and the form.

use std::io::{BufRead, Write};

use diag_core::{DiagnosisService, DiagnosisWorkflow, Phase, SymptomForm, COMMON_SYMPTOMS};

use crate::render;

const HELP: &str = "\
Commands:
  add <symptom>      add a symptom (also: + <symptom>)
  remove <symptom>   remove a symptom (also: - <symptom>)
  pick <n>           add common symptom number n (see `symptoms`)
  symptoms           list common symptoms
  age <years>        set age (1-120)
  gender <g>         set gender (male, female, other)
  history <text>     set medical history (optional)
  show               show the form
  submit             get a diagnosis
  new                start a new diagnosis
  help               show this help
  quit               exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Pick(String),
    Symptoms,
    Age(String),
    Gender(String),
    History(String),
    Show,
    Submit,
    New,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim().to_string()),
        None => (line, String::new()),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "add" | "+" => Command::Add(rest),
        "remove" | "rm" | "-" => Command::Remove(rest),
        "pick" => Command::Pick(rest),
        "symptoms" => Command::Symptoms,
        "age" => Command::Age(rest),
        "gender" => Command::Gender(rest),
        "history" => Command::History(rest),
        "show" => Command::Show,
        "submit" => Command::Submit,
        "new" | "reset" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    }
}

/// Run the form loop until `quit` or end of input.
pub async fn run<S, R, W>(
    workflow: &mut DiagnosisWorkflow<S>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DiagnosisService,
    R: BufRead,
    W: Write,
{
    let mut form = SymptomForm::new();
    writeln!(out, "Describe your symptoms. Type `help` for commands.")?;

    for line in input.lines() {
        let command = parse_command(&line?);

        if workflow.phase() == Phase::Displaying
            && !matches!(
                command,
                Command::New | Command::Show | Command::Help | Command::Quit | Command::Empty
            )
        {
            writeln!(out, "Type `new` to start a new diagnosis.")?;
            continue;
        }

        match command {
            Command::Empty => {}
            Command::Add(text) => {
                if form.add_symptom(&text) {
                    writeln!(out, "Added: {}", text.trim())?;
                } else {
                    writeln!(out, "Not added (empty or already listed).")?;
                }
            }
            Command::Remove(text) => {
                if form.remove_symptom(&text) {
                    writeln!(out, "Removed: {}", text.trim())?;
                } else {
                    writeln!(out, "No such symptom: {}", text.trim())?;
                }
            }
            Command::Pick(number) => match pick(&number) {
                Some(symptom) => {
                    if form.add_symptom(symptom) {
                        writeln!(out, "Added: {symptom}")?;
                    } else {
                        writeln!(out, "Already listed: {symptom}")?;
                    }
                }
                None => writeln!(out, "Pick a number from 1 to {}.", COMMON_SYMPTOMS.len())?,
            },
            Command::Symptoms => write!(out, "{}", render::render_common_symptoms())?,
            Command::Age(value) => match value.parse::<u32>() {
                Ok(years) => match form.set_age(years) {
                    Ok(()) => writeln!(out, "Age set to {years}.")?,
                    Err(e) => writeln!(out, "{e}")?,
                },
                Err(_) => writeln!(out, "Age must be a whole number.")?,
            },
            Command::Gender(value) => match form.set_gender(&value) {
                Ok(()) => writeln!(out, "Gender set.")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::History(text) => {
                form.set_medical_history(text);
                writeln!(out, "Medical history set.")?;
            }
            Command::Show => match workflow.result() {
                Some(result) => write!(out, "{}", render::render_result(result))?,
                None => write!(out, "{}", render::render_form(&form, workflow.is_loading()))?,
            },
            Command::Submit => {
                if !form.can_submit(workflow.is_loading()) {
                    match form.to_request() {
                        Err(e) => writeln!(out, "Cannot submit yet: {e}")?,
                        Ok(_) => writeln!(out, "A diagnosis is already running.")?,
                    }
                    continue;
                }
                writeln!(out, "Analyzing symptoms...")?;
                out.flush()?;
                let result = workflow.submit_form(&form).await?;
                write!(out, "{}", render::render_result(result))?;
            }
            Command::New => {
                workflow.reset();
                form.clear();
                writeln!(out, "Form cleared.")?;
            }
            Command::Help => write!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(word) => {
                writeln!(out, "Unknown command '{word}'. Type `help` for commands.")?
            }
        }
    }

    Ok(())
}

fn pick(number: &str) -> Option<&'static str> {
    let index = number.trim().parse::<usize>().ok()?;
    COMMON_SYMPTOMS.get(index.checked_sub(1)?).copied()
}
