//! Interactive menu session.
//!
//! # Responsibility
//! - Read raw lines from the user and forward them to the repository.
//! - Own every user-facing message; the core only returns outcomes.
//!
//! # Invariants
//! - Input lines are trimmed, never normalized; the repository does that.
//! - Blank project names and task titles are rejected here, before the core.
//! - End of input ends the session the same way as choosing Exit.

use log::debug;
use std::io::{self, BufRead, Write};
use taskmanager_core::{Project, ProjectRepository, Task};

const INVALID_CHOICE: &str = "Invalid choice, please try again.";
const PROJECT_NOT_FOUND: &str = "Project not found.";
const TASK_NOT_FOUND: &str = "Task not found.";
const BLANK_PROJECT_NAME: &str = "Error: project name must not be blank.";
const BLANK_TASK_TITLE: &str = "Error: task title must not be blank.";

/// Main menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateProject,
    AddTask,
    ListProjects,
    ListTasks,
    CompleteTask,
    RemoveProject,
    RemoveTask,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::CreateProject),
            2 => Some(Self::AddTask),
            3 => Some(Self::ListProjects),
            4 => Some(Self::ListTasks),
            5 => Some(Self::CompleteTask),
            6 => Some(Self::RemoveProject),
            7 => Some(Self::RemoveTask),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a borrowed repository.
pub struct MenuSession<'repo, R, W> {
    repo: &'repo mut ProjectRepository,
    input: R,
    output: W,
}

impl<'repo, R: BufRead, W: Write> MenuSession<'repo, R, W> {
    pub fn new(repo: &'repo mut ProjectRepository, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
        }
    }

    /// Runs the menu loop until Exit or end of input.
    ///
    /// Persisting the repository is left to the caller.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "{INVALID_CHOICE}")?;
                continue;
            };

            debug!("event=menu_choice module=cli choice={choice:?}");
            if let Flow::Exit = self.handle(choice)? {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::CreateProject => self.create_project(),
            MenuChoice::AddTask => self.add_task(),
            MenuChoice::ListProjects => self.list_projects(),
            MenuChoice::ListTasks => self.list_tasks(),
            MenuChoice::CompleteTask => self.complete_task(),
            MenuChoice::RemoveProject => self.remove_project(),
            MenuChoice::RemoveTask => self.remove_task(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting the application...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "TaskManager - Main Menu")?;
        writeln!(self.output, "1. Create Project")?;
        writeln!(self.output, "2. Add Task to Project")?;
        writeln!(self.output, "3. List Projects")?;
        writeln!(self.output, "4. List Tasks by Project")?;
        writeln!(self.output, "5. Mark Task as Completed")?;
        writeln!(self.output, "6. Remove Project")?;
        writeln!(self.output, "7. Remove Task from Project")?;
        writeln!(self.output, "8. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    fn create_project(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter project name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            writeln!(self.output, "{BLANK_PROJECT_NAME}")?;
            return Ok(Flow::Continue);
        }

        match self.repo.add_project(Project::new(name.as_str())) {
            Ok(()) => writeln!(self.output, "Project '{name}' created.")?,
            Err(_) => writeln!(
                self.output,
                "Error: A project with the name '{name}' already exists. Please choose a different name."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn add_task(&mut self) -> io::Result<Flow> {
        let Some(project_name) = self.prompt("Enter project name: ")? else {
            return Ok(Flow::Exit);
        };
        if self.repo.find_project_by_name(&project_name).is_none() {
            writeln!(self.output, "{PROJECT_NOT_FOUND}")?;
            return Ok(Flow::Continue);
        }
        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(Flow::Exit);
        };
        if title.is_empty() {
            writeln!(self.output, "{BLANK_TASK_TITLE}")?;
            return Ok(Flow::Continue);
        }
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(Flow::Exit);
        };

        let task = match Task::new(title, description) {
            Ok(task) => task,
            Err(err) => {
                writeln!(self.output, "Error: {err}.")?;
                return Ok(Flow::Continue);
            }
        };
        if let Some(project) = self.repo.find_project_by_name_mut(&project_name) {
            project.add_task(task);
            writeln!(self.output, "Task added to project '{}'.", project.name())?;
        }
        Ok(Flow::Continue)
    }

    fn list_projects(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Projects:")?;
        for project in self.repo.projects() {
            writeln!(self.output, "{project}")?;
        }
        Ok(Flow::Continue)
    }

    fn list_tasks(&mut self) -> io::Result<Flow> {
        let Some(project_name) = self.prompt("Enter project name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(project) = self.repo.find_project_by_name(&project_name) else {
            writeln!(self.output, "{PROJECT_NOT_FOUND}")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Tasks in project '{}':", project.name())?;
        for task in project.tasks() {
            writeln!(self.output, "{task}")?;
        }
        Ok(Flow::Continue)
    }

    fn complete_task(&mut self) -> io::Result<Flow> {
        let Some(project_name) = self.prompt("Enter project name: ")? else {
            return Ok(Flow::Exit);
        };
        if self.repo.find_project_by_name(&project_name).is_none() {
            writeln!(self.output, "{PROJECT_NOT_FOUND}")?;
            return Ok(Flow::Continue);
        }
        let Some(title) = self.prompt("Enter task title to mark as completed: ")? else {
            return Ok(Flow::Exit);
        };

        if self.repo.mark_task_completed(&project_name, &title) {
            writeln!(self.output, "Task '{title}' marked as completed.")?;
        } else {
            writeln!(self.output, "{TASK_NOT_FOUND}")?;
        }
        Ok(Flow::Continue)
    }

    fn remove_project(&mut self) -> io::Result<Flow> {
        let Some(project_name) = self.prompt("Enter project name: ")? else {
            return Ok(Flow::Exit);
        };

        if self.repo.remove_project(&project_name) {
            writeln!(self.output, "Project '{project_name}' removed.")?;
        } else {
            writeln!(self.output, "{PROJECT_NOT_FOUND}")?;
        }
        Ok(Flow::Continue)
    }

    fn remove_task(&mut self) -> io::Result<Flow> {
        let Some(project_name) = self.prompt("Enter project name: ")? else {
            return Ok(Flow::Exit);
        };
        if self.repo.find_project_by_name(&project_name).is_none() {
            writeln!(self.output, "{PROJECT_NOT_FOUND}")?;
            return Ok(Flow::Continue);
        }
        let Some(title) = self.prompt("Enter task title to remove: ")? else {
            return Ok(Flow::Exit);
        };

        if self.repo.remove_task_from_project(&project_name, &title) {
            writeln!(
                self.output,
                "Task '{title}' removed from project '{project_name}'."
            )?;
        } else {
            writeln!(self.output, "{TASK_NOT_FOUND}")?;
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, MenuSession};
    use std::io::Cursor;
    use taskmanager_core::{Project, ProjectRepository, Task};

    fn run_session(repo: &mut ProjectRepository, script: &str) -> String {
        let mut output = Vec::new();
        MenuSession::new(repo, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_accepts_menu_numbers_only() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::CreateProject));
        assert_eq!(MenuChoice::parse("8"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("one"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn create_project_then_duplicate_is_rejected() {
        let mut repo = ProjectRepository::new();

        let output = run_session(&mut repo, "1\nCafé\n1\ncafe\n8\n");

        assert!(output.contains("Project 'Café' created."));
        assert!(output.contains("A project with the name 'cafe' already exists"));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.projects()[0].name(), "Café");
    }

    #[test]
    fn project_names_are_stored_as_typed() {
        let mut repo = ProjectRepository::new();

        run_session(&mut repo, "1\n  Reunión Semanal  \n8\n");

        assert_eq!(repo.projects()[0].name(), "Reunión Semanal");
    }

    #[test]
    fn add_list_complete_and_remove_tasks() {
        let mut repo = ProjectRepository::new();
        let script = "1\nWork\n\
                      2\nwork\nWrite docs\nstorage section\n\
                      2\nWORK\nReview\nPR #12\n\
                      5\nwörk\nwrite DOCS\n\
                      4\nwork\n\
                      7\nWork\nreview\n\
                      3\n8\n";

        let output = run_session(&mut repo, script);

        assert!(output.contains("Task added to project 'Work'."));
        assert!(output.contains("Task 'write DOCS' marked as completed."));
        assert!(output.contains("Tasks in project 'Work':"));
        assert!(output.contains("[COMPLETED] Write docs - storage section"));
        assert!(output.contains("[PENDING] Review - PR #12"));
        assert!(output.contains("Task 'review' removed from project 'Work'."));
        assert!(output.contains("Work - 1 tasks"));

        let project = repo.find_project_by_name("work").unwrap();
        assert_eq!(project.tasks().len(), 1);
        assert!(project.tasks()[0].is_completed());
    }

    #[test]
    fn missing_project_and_task_are_reported() {
        let mut repo = ProjectRepository::new();
        let mut work = Project::new("Work");
        work.add_task(Task::new("Review", "").unwrap());
        repo.add_project(work).unwrap();

        let output = run_session(&mut repo, "2\nHome\n5\nWork\nDeploy\n6\nHome\n7\nWork\nDeploy\n8\n");

        assert_eq!(output.matches("Project not found.").count(), 2);
        assert_eq!(output.matches("Task not found.").count(), 2);
        assert_eq!(repo.find_project_by_name("work").unwrap().tasks().len(), 1);
    }

    #[test]
    fn remove_project_reports_outcome() {
        let mut repo = ProjectRepository::new();
        repo.add_project(Project::new("Home")).unwrap();

        let output = run_session(&mut repo, "6\nHOME\n8\n");

        assert!(output.contains("Project 'HOME' removed."));
        assert!(repo.is_empty());
    }

    #[test]
    fn blank_names_and_titles_are_rejected() {
        let mut repo = ProjectRepository::new();

        let output = run_session(&mut repo, "1\n   \n1\nWork\n2\nWork\n  \n8\n");

        assert!(output.contains("Error: project name must not be blank."));
        assert!(output.contains("Error: task title must not be blank."));
        assert_eq!(repo.len(), 1);
        assert!(repo.projects()[0].tasks().is_empty());
    }

    #[test]
    fn invalid_choices_keep_the_loop_running() {
        let mut repo = ProjectRepository::new();

        let output = run_session(&mut repo, "abc\n42\n8\n");

        assert_eq!(output.matches("Invalid choice, please try again.").count(), 2);
        assert!(output.contains("Exiting the application..."));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut repo = ProjectRepository::new();

        run_session(&mut repo, "1\nWork\n");
        assert_eq!(repo.len(), 1);

        run_session(&mut repo, "2\nWork\nHalf typed");
        assert!(repo.projects()[0].tasks().is_empty());
    }
}
