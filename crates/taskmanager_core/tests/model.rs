use taskmanager_core::{ModelValidationError, Project, Task};

#[test]
fn task_new_starts_pending() {
    let task = Task::new("Write docs", "draft the storage section").unwrap();

    assert_eq!(task.title(), "Write docs");
    assert_eq!(task.description(), "draft the storage section");
    assert!(!task.is_completed());
    assert_eq!(task.title_key().as_str(), "write docs");
}

#[test]
fn task_new_rejects_empty_title() {
    assert_eq!(
        Task::new("", "no title").unwrap_err(),
        ModelValidationError::EmptyTaskTitle
    );
}

#[test]
fn task_new_accepts_whitespace_title() {
    let task = Task::new(" ", "spacer").unwrap();
    assert_eq!(task.title(), " ");
}

#[test]
fn task_completion_flag_toggles_in_place() {
    let mut task = Task::new("Review", "").unwrap();

    task.mark_completed();
    assert!(task.is_completed());

    task.set_completed(false);
    assert!(!task.is_completed());
}

#[test]
fn task_display_shows_status_title_and_description() {
    let mut task = Task::new("Review", "PR #12").unwrap();
    assert_eq!(task.to_string(), "[PENDING] Review - PR #12");

    task.mark_completed();
    assert_eq!(task.to_string(), "[COMPLETED] Review - PR #12");
}

#[test]
fn project_new_accepts_any_display_name() {
    for name in ["", "   ", "Work"] {
        let project = Project::new(name);
        assert_eq!(project.name(), name);
        assert!(project.tasks().is_empty());
    }
}

#[test]
fn project_display_shows_name_and_task_count() {
    let mut project = Project::new("Work");
    assert_eq!(project.to_string(), "Work - 0 tasks");

    project.add_task(Task::new("Review", "").unwrap());
    project.add_task(Task::new("Deploy", "").unwrap());
    assert_eq!(project.to_string(), "Work - 2 tasks");
}

#[test]
fn pending_and_completed_views_keep_relative_order() {
    let mut project = Project::new("Home");
    for title in ["a", "b", "c", "d"] {
        project.add_task(Task::new(title, "").unwrap());
    }
    project.find_task_mut("b").unwrap().mark_completed();
    project.find_task_mut("d").unwrap().mark_completed();

    let pending: Vec<&str> = project.pending_tasks().into_iter().map(Task::title).collect();
    let completed: Vec<&str> = project
        .completed_tasks()
        .into_iter()
        .map(Task::title)
        .collect();
    assert_eq!(pending, ["a", "c"]);
    assert_eq!(completed, ["b", "d"]);
    assert_eq!(project.tasks().len(), 4);
}

#[test]
fn duplicate_titles_resolve_to_earliest_task() {
    let mut project = Project::new("Work");
    project.add_task(Task::new("Review", "first").unwrap());
    project.add_task(Task::new("review", "second").unwrap());

    assert_eq!(project.find_task("RÉVIEW").unwrap().description(), "first");

    let removed = project.remove_task("review").unwrap();
    assert_eq!(removed.description(), "first");
    assert_eq!(project.tasks().len(), 1);
    assert_eq!(project.tasks()[0].description(), "second");
}

#[test]
fn remove_task_returns_none_when_absent() {
    let mut project = Project::new("Work");
    project.add_task(Task::new("Review", "").unwrap());

    assert!(project.remove_task("Deploy").is_none());
    assert_eq!(project.tasks().len(), 1);
}
