//! The interactive wizard loop.
//!
//! Line-oriented event loop over the workshop container: read a command,
//! apply it through the typed workshop operations, re-render the current
//! step. The loop never dies on an advisory failure — the error lands in the
//! session state and is shown in the advisory pane while entry, navigation,
//! and export keep working.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;

use anyhow::Result;
use charter_core::{
    display::{GoalOutline, SummaryTable, SwotGrid},
    export::{self, PrintDocument, SpreadsheetOptions},
    params::{AddObjective, AddTask, ListField, NarrativeField},
    views, Arrival, Objective, Plan, StepId, SwotCategory, Task, Workshop,
};
use log::info;

use crate::renderer::TerminalRenderer;

const WELCOME: &str = "\
# Charter — Work-Plan Workshop

Managing psychology. Designing the future. A guided strategy space that
turns vision into a measurable annual work plan.
";

const HELP: &str = "\
## Commands

- **show** — re-render the current step
- **next** / **back** — move through the workshop
- **goto N** — revisit a completed step by number
- **set TEXT** — set the narrative field on this step
- **add ...** — add an entry (goals: `add TEXT`; SWOT: `add s|w|o|t TEXT`;
  objectives: `add GOAL# TEXT`)
- **task OBJ# DESC | OWNER | TIMELINE** — add a task under an objective
- **rm ...** — remove an entry by number (SWOT: `rm s|w|o|t N`)
- **ai** — ask the advisory service about this step
- **report** — retry the final narrative report
- **ok** / **reflect** — dismiss or re-open the reflection prompt
- **export** — write the spreadsheet workbook
- **doc** — write the printable document
- **print** — render the printable document to the terminal
- **quit** — leave the workshop
";

pub struct Wizard {
    workshop: Workshop,
    renderer: TerminalRenderer,
    output_dir: PathBuf,
    spreadsheet: SpreadsheetOptions,
}

impl Wizard {
    pub fn new(
        workshop: Workshop,
        renderer: TerminalRenderer,
        output_dir: PathBuf,
        right_to_left: bool,
    ) -> Self {
        Self {
            workshop,
            renderer,
            output_dir,
            spreadsheet: SpreadsheetOptions { right_to_left },
        }
    }

    /// Runs the wizard until the user quits or stdin closes.
    pub async fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        self.renderer.render(WELCOME);
        print!("Press Enter to begin the workshop (or type quit): ");
        io::stdout().flush()?;
        let Some(first) = lines.next() else {
            return Ok(());
        };
        if is_quit(first?.trim()) {
            return Ok(());
        }

        self.workshop.begin_session();
        info!("session started");
        self.render_step();

        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if is_quit(line) {
                break;
            }
            self.handle_command(line).await;
        }

        println!("Goodbye.");
        Ok(())
    }

    async fn handle_command(&mut self, line: &str) {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "help" => self.renderer.render(HELP),
            "show" => self.render_step(),
            "next" => {
                let arrival = self.workshop.advance();
                self.after_navigation(arrival).await;
            }
            "back" => {
                let arrival = self.workshop.retreat();
                self.after_navigation(arrival).await;
            }
            "goto" => self.goto(rest).await,
            "ok" | "done" => {
                self.workshop.dismiss_interstitial();
                self.render_step();
            }
            "reflect" => {
                self.workshop.reopen_interstitial();
                self.render_step();
            }
            "set" => self.set_narrative(rest),
            "add" => self.add_entry(rest),
            "task" => self.add_task_entry(rest),
            "rm" => self.remove_entry(rest),
            "ai" => self.fetch_advisory().await,
            "report" => self.fetch_report().await,
            "export" => self.export_workbook(),
            "doc" => self.write_document(),
            "print" => self.print_document(),
            _ => println!("Unknown command '{command}'. Type help for the command list."),
        }
    }

    async fn goto(&mut self, rest: &str) {
        let Some(position) = parse_position(rest) else {
            println!("Usage: goto N (step number)");
            return;
        };
        match self.workshop.jump_to(position - 1) {
            Ok(arrival) => self.after_navigation(arrival).await,
            Err(err) => println!("{err}"),
        }
    }

    async fn after_navigation(&mut self, arrival: Arrival) {
        if arrival.wants_final_report {
            println!("Building the master narrative from everything you entered...");
            self.request_report().await;
        }
        self.render_step();
    }

    fn set_narrative(&mut self, text: &str) {
        let field = match self.workshop.current_step().id {
            StepId::Context => NarrativeField::SelfContext,
            StepId::Vision => NarrativeField::Vision,
            StepId::Constraints => NarrativeField::Constraints,
            _ => {
                println!("This step has no narrative field. Use add/task here.");
                return;
            }
        };
        if text.is_empty() {
            println!("Usage: set TEXT");
            return;
        }
        self.workshop.set_narrative(field, text);
        self.render_step();
    }

    fn add_entry(&mut self, rest: &str) {
        match self.workshop.current_step().id {
            StepId::Goals => {
                if rest.is_empty() {
                    println!("Usage: add TEXT");
                    return;
                }
                self.workshop.append_list_entry(ListField::Goals, rest);
            }
            StepId::Swot => {
                let Some((category, text)) = rest.split_once(char::is_whitespace) else {
                    println!("Usage: add s|w|o|t TEXT");
                    return;
                };
                let Ok(category) = category.parse::<SwotCategory>() else {
                    println!("Unknown SWOT category '{category}'. Use s, w, o, or t.");
                    return;
                };
                self.workshop
                    .append_list_entry(ListField::Swot(category), text.trim());
            }
            StepId::Objectives => {
                let Some((position, text)) = rest.split_once(char::is_whitespace) else {
                    println!("Usage: add GOAL# TEXT");
                    return;
                };
                let Some(position) = parse_position(position) else {
                    println!("Usage: add GOAL# TEXT");
                    return;
                };
                let Some(goal) = self.workshop.plan().goals.get(position - 1) else {
                    println!("No goal number {position}.");
                    return;
                };
                let params = AddObjective {
                    goal_id: goal.id,
                    text: text.trim().to_string(),
                };
                self.workshop.add_objective(&params);
            }
            _ => {
                println!("Nothing to add on this step.");
                return;
            }
        }
        self.render_step();
    }

    fn add_task_entry(&mut self, rest: &str) {
        if self.workshop.current_step().id != StepId::Tasks {
            println!("Tasks are entered on the execution-plan step.");
            return;
        }
        let Some((position, fields)) = rest.split_once(char::is_whitespace) else {
            println!("Usage: task OBJ# DESC | OWNER | TIMELINE");
            return;
        };
        let Some(position) = parse_position(position) else {
            println!("Usage: task OBJ# DESC | OWNER | TIMELINE");
            return;
        };
        let Some(objective_id) =
            objectives_in_display_order(self.workshop.plan())
                .get(position - 1)
                .map(|objective| objective.id)
        else {
            println!("No objective number {position}.");
            return;
        };

        let mut parts = fields.splitn(3, '|').map(str::trim);
        let description = parts.next().unwrap_or("").to_string();
        if description.is_empty() {
            println!("A task needs at least a description.");
            return;
        }
        let params = AddTask {
            objective_id,
            description,
            responsibility: parts.next().unwrap_or("").to_string(),
            timeline: parts.next().unwrap_or("").to_string(),
        };
        self.workshop.add_task(&params);
        self.render_step();
    }

    fn remove_entry(&mut self, rest: &str) {
        match self.workshop.current_step().id {
            StepId::Goals => {
                let Some(position) = parse_position(rest) else {
                    println!("Usage: rm N");
                    return;
                };
                self.workshop
                    .remove_list_entry(ListField::Goals, position - 1);
            }
            StepId::Swot => {
                let Some((category, position)) = rest.split_once(char::is_whitespace) else {
                    println!("Usage: rm s|w|o|t N");
                    return;
                };
                let (Ok(category), Some(position)) =
                    (category.parse::<SwotCategory>(), parse_position(position.trim()))
                else {
                    println!("Usage: rm s|w|o|t N");
                    return;
                };
                self.workshop
                    .remove_list_entry(ListField::Swot(category), position - 1);
            }
            StepId::Objectives => {
                let Some(position) = parse_position(rest) else {
                    println!("Usage: rm N");
                    return;
                };
                let Some(id) = objectives_in_display_order(self.workshop.plan())
                    .get(position - 1)
                    .map(|objective| objective.id)
                else {
                    println!("No objective number {position}.");
                    return;
                };
                self.workshop.remove_objective(id);
            }
            StepId::Tasks => {
                let Some(position) = parse_position(rest) else {
                    println!("Usage: rm N");
                    return;
                };
                let Some(id) = tasks_in_display_order(self.workshop.plan())
                    .get(position - 1)
                    .map(|task| task.id)
                else {
                    println!("No task number {position}.");
                    return;
                };
                self.workshop.remove_task(id);
            }
            _ => {
                println!("Nothing to remove on this step.");
                return;
            }
        }
        self.render_step();
    }

    async fn fetch_advisory(&mut self) {
        println!("Asking the strategy advisor...");
        match self.workshop.request_step_advisory().await {
            Ok(()) => self.render_advisory_pane(),
            Err(err) => println!("{err}"),
        }
    }

    async fn fetch_report(&mut self) {
        if self.workshop.session().final_report().is_some() {
            println!("The narrative report is already available (see the summary step).");
            return;
        }
        println!("Requesting the final narrative report...");
        self.request_report().await;
    }

    async fn request_report(&mut self) {
        match self.workshop.request_final_report().await {
            Ok(()) => {
                if let Some(error) = self.workshop.session().last_error() {
                    println!("{}", error.message);
                    println!("Type report to retry once the problem is fixed.");
                } else {
                    println!("Narrative report ready.");
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    fn export_workbook(&self) {
        match export::write_workbook(self.workshop.plan(), &self.output_dir, self.spreadsheet) {
            Ok(path) => println!("Workbook written to {}", path.display()),
            Err(err) => println!("{err}"),
        }
    }

    fn write_document(&self) {
        let path = self.output_dir.join(export::DOCUMENT_FILENAME);
        let document = PrintDocument::new(
            self.workshop.plan(),
            self.workshop.session().final_report(),
        );
        match document.write_to(&path) {
            Ok(()) => println!("Document written to {}", path.display()),
            Err(err) => println!("{err}"),
        }
    }

    fn print_document(&self) {
        let document = PrintDocument::new(
            self.workshop.plan(),
            self.workshop.session().final_report(),
        );
        self.renderer.render(&document.to_string());
    }

    fn render_advisory_pane(&self) {
        if let Some(error) = self.workshop.session().last_error() {
            println!("{}", error.message);
            return;
        }
        if let Some(advisory) = self.workshop.session().step_advisory() {
            let mut pane = String::from("### Strategy advisory\n\n");
            let _ = writeln!(pane, "{advisory}");
            self.renderer.render(&pane);
        }
    }

    fn render_step(&self) {
        let session = self.workshop.session();
        let step = self.workshop.current_step();
        let position = session.current_step() + 1;
        let total = self.workshop.registry().len();
        let done = if views::step_completion(self.workshop.plan(), step) {
            " ✓"
        } else {
            ""
        };

        let mut screen = String::new();
        let _ = writeln!(
            screen,
            "# {position:02}. {}  — step {position} of {total}{done}",
            step.title
        );
        let _ = writeln!(screen);

        if session.is_interstitial_open() {
            if let Some(reflection) = &step.reflection {
                let _ = write!(screen, "{reflection}");
                let _ = writeln!(screen, "Type ok when you are done thinking.");
                let _ = writeln!(screen);
            }
        }

        self.render_step_body(&mut screen, step.id);

        if step.id != StepId::Summary {
            if let Some(guidance) = &step.guidance {
                let _ = writeln!(screen);
                let _ = write!(screen, "{guidance}");
            }
        }

        self.renderer.render(&screen);
        self.render_advisory_pane();
    }

    fn render_step_body(&self, screen: &mut String, id: StepId) {
        let plan = self.workshop.plan();
        match id {
            StepId::Context => {
                write_narrative(screen, &plan.self_context, "No background entered yet.");
            }
            StepId::Swot => {
                let _ = write!(screen, "{}", SwotGrid(&plan.swot));
            }
            StepId::Vision => {
                write_narrative(screen, &plan.vision, "No vision phrased yet.");
            }
            StepId::Goals => {
                if plan.goals.is_empty() {
                    let _ = writeln!(screen, "No goals defined yet.");
                } else {
                    for (position, goal) in plan.goals.iter().enumerate() {
                        let _ = writeln!(screen, "{}. {}", position + 1, goal.text);
                    }
                }
            }
            StepId::Objectives => {
                let _ = write!(screen, "{}", GoalOutline(plan));
            }
            StepId::Tasks => {
                let objectives = objectives_in_display_order(plan);
                if objectives.is_empty() {
                    let _ = writeln!(
                        screen,
                        "No objectives yet — go back and derive objectives from your goals first."
                    );
                }
                let mut task_number = 0;
                for (position, objective) in objectives.iter().enumerate() {
                    let _ = writeln!(screen, "### {}. {}", position + 1, objective.text);
                    for task in views::tasks_for_objective(plan, objective.id) {
                        task_number += 1;
                        let _ = writeln!(screen, "{task_number}. {task}");
                    }
                    let _ = writeln!(screen);
                }
            }
            StepId::Constraints => {
                write_narrative(screen, &plan.constraints, "No constraints listed yet.");
            }
            StepId::Transition => {
                let _ = writeln!(screen, "Take a moment before the next stage.");
            }
            StepId::Summary => {
                let _ = writeln!(screen, "## Service Vision");
                let _ = writeln!(screen);
                write_narrative(screen, &plan.vision, "No vision phrased yet.");
                let _ = writeln!(screen);
                let _ = writeln!(screen, "## Goals, Objectives and Tasks");
                let _ = writeln!(screen);
                let _ = write!(screen, "{}", SummaryTable::from_plan(plan));
                let _ = writeln!(screen);
                let _ = writeln!(screen, "## Constraints and Risks");
                let _ = writeln!(screen);
                write_narrative(screen, &plan.constraints, "No constraints listed yet.");
                let _ = writeln!(screen);
                match self.workshop.session().final_report() {
                    Some(report) => {
                        let _ = writeln!(screen, "## Narrative Report");
                        let _ = writeln!(screen);
                        let _ = writeln!(screen, "{report}");
                    }
                    None => {
                        let _ = writeln!(
                            screen,
                            "No narrative report yet. Type report to request one."
                        );
                    }
                }
            }
        }
    }
}

fn write_narrative(screen: &mut String, text: &str, placeholder: &str) {
    if text.is_empty() {
        let _ = writeln!(screen, "{placeholder}");
    } else {
        let _ = writeln!(screen, "{text}");
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q")
}

fn parse_position(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().filter(|position| *position > 0)
}

/// Objectives flattened in display order: goals in insertion order, each
/// goal's objectives in insertion order. Orphans are excluded, matching what
/// the screens show.
fn objectives_in_display_order(plan: &Plan) -> Vec<&Objective> {
    plan.goals
        .iter()
        .flat_map(|goal| views::objectives_for_goal(plan, goal.id))
        .collect()
}

/// Tasks flattened in the same display order as the task screen numbers them.
fn tasks_in_display_order(plan: &Plan) -> Vec<&Task> {
    objectives_in_display_order(plan)
        .into_iter()
        .flat_map(|objective| views::tasks_for_objective(plan, objective.id))
        .collect()
}
